//! Fact categories.

use crate::model::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Hex color, e.g. `#3B82F6`.
    pub color: String,
    /// Opaque style hint passed through to the UI.
    pub gradient: String,
}

impl Category {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub gradient: Option<String>,
}

impl CategoryPatch {
    pub fn apply_to(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(description) = self.description {
            category.description = description;
        }
        if let Some(color) = self.color {
            category.color = color;
        }
        if let Some(gradient) = self.gradient {
            category.gradient = gradient;
        }
    }
}
