//! About page content.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutUsContent {
    pub title: String,
    /// HTML body.
    pub content: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutUsPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl AboutUsPatch {
    pub fn apply_to(self, about: &mut AboutUsContent, updated_at: &str) {
        if let Some(title) = self.title {
            about.title = title;
        }
        if let Some(content) = self.content {
            about.content = content;
        }
        about.updated_at = updated_at.to_string();
    }
}
