//! About page content.

use crate::content::clock::now_timestamp;
use crate::content::ContentResult;
use crate::model::about::{AboutUsContent, AboutUsPatch};
use crate::model::envelope::EnvelopeError;
use crate::model::seed::default_about_us;
use crate::storage::KeyValueStorage;
use log::{info, warn};

const ABOUT_US_KEY: &str = "about_us_content";

pub struct AboutService<S> {
    storage: S,
}

impl<S: KeyValueStorage> AboutService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored content, or the default page when nothing usable is stored.
    pub fn about(&self) -> AboutUsContent {
        match self.storage.get_value(ABOUT_US_KEY) {
            Ok(Some(text)) => match serde_json::from_str(&text) {
                Ok(about) => return about,
                Err(err) => warn!(
                    "event=about_read module=service status=fallback error_code=parse_failed error={err}"
                ),
            },
            Ok(None) => {}
            Err(err) => warn!(
                "event=about_read module=service status=fallback error_code=storage_read_failed error={err}"
            ),
        }
        default_about_us(&now_timestamp())
    }

    /// Merges `patch` into the current content and stamps `updatedAt`.
    pub fn update_about(&self, patch: AboutUsPatch) -> ContentResult<AboutUsContent> {
        let mut about = self.about();
        patch.apply_to(&mut about, &now_timestamp());
        let text = serde_json::to_string(&about).map_err(EnvelopeError::from)?;
        self.storage.set_value(ABOUT_US_KEY, &text)?;
        info!("event=about_update module=service status=ok");
        Ok(about)
    }
}
