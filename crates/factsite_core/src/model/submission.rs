//! Visitor-submitted facts awaiting moderation.

use crate::model::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// One queued submission. `approved` stays `false` while queued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedFact {
    pub id: String,
    pub text: String,
    pub category: String,
    pub submitted_by: String,
    pub approved: bool,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Visitor form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactSubmission {
    pub text: String,
    pub category: String,
    pub submitted_by: String,
    pub source: Option<String>,
}

impl FactSubmission {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("text", &self.text)?;
        require_text("category", &self.category)?;
        require_text("submittedBy", &self.submitted_by)
    }

    pub fn into_submitted(self, id: String, created_at: &str) -> SubmittedFact {
        SubmittedFact {
            id,
            text: self.text,
            category: self.category,
            submitted_by: self.submitted_by,
            approved: false,
            created_at: created_at.to_string(),
            source: self.source,
        }
    }
}
