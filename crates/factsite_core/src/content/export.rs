//! Export of the effective collection as baseline-ready envelope text.
//!
//! The exported text is what an admin promotes into the deployment's static
//! document. Apart from `lastUpdated` it is a pure function of the effective
//! collection.

use crate::content::clock::now_timestamp;
use crate::content::item::ContentItem;
use crate::content::resolver::HybridResolver;
use crate::content::ContentResult;
use crate::model::blog_post::BlogPost;
use crate::model::category::Category;
use crate::model::envelope::{decode_envelope, encode_envelope, Envelope, EnvelopeError};
use crate::model::fact::Fact;
use crate::model::kind::ContentKind;
use crate::storage::KeyValueStorage;
use log::info;

impl<S: KeyValueStorage> HybridResolver<'_, S> {
    /// Renders `effective::<T>()` in a fresh envelope.
    pub fn export<T: ContentItem>(&self) -> ContentResult<String> {
        let envelope = Envelope::new(now_timestamp(), self.effective::<T>());
        let text = encode_envelope(&envelope, T::KIND.collection_field())?;
        info!(
            "event=content_export module=content status=ok kind={} items={} bytes={}",
            T::KIND,
            envelope.items.len(),
            text.len()
        );
        Ok(text)
    }

    /// `export` dispatched on a runtime kind.
    pub fn export_kind(&self, kind: ContentKind) -> ContentResult<String> {
        match kind {
            ContentKind::Facts => self.export::<Fact>(),
            ContentKind::BlogPosts => self.export::<BlogPost>(),
            ContentKind::Categories => self.export::<Category>(),
        }
    }
}

/// Parses exported (or baseline) text back into an envelope of `T`.
pub fn import_envelope<T: ContentItem>(text: &str) -> Result<Envelope<T>, EnvelopeError> {
    decode_envelope(text, T::KIND.collection_field())
}
