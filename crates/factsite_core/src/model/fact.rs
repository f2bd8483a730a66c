//! Fact records.

use crate::model::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// One short fact shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    pub id: String,
    pub text: String,
    /// Display name of the category, e.g. `Science`.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_true: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Fact {
    /// Builds a fact with an empty id; the mutation API assigns the real one.
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self::with_id(String::new(), text, category)
    }

    pub fn with_id(
        id: impl Into<String>,
        text: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category: category.into(),
            is_true: None,
            approved: None,
            submitted_by: None,
            created_at: None,
            source: None,
            verified: None,
            tags: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("text", &self.text)?;
        require_text("category", &self.category)
    }

    /// Case-insensitive category comparison used by the category filter.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.trim().eq_ignore_ascii_case(category.trim())
    }
}

/// Caller-supplied fields for a new fact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactDraft {
    pub text: String,
    pub category: String,
    pub is_true: Option<bool>,
    pub submitted_by: Option<String>,
    pub source: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl FactDraft {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    /// Admin-created facts are approved and verified on creation.
    pub fn into_fact(self, created_at: &str) -> Fact {
        Fact {
            is_true: self.is_true,
            approved: Some(true),
            submitted_by: self.submitted_by,
            created_at: Some(created_at.to_string()),
            source: self.source,
            verified: Some(true),
            tags: self.tags,
            ..Fact::new(self.text, self.category)
        }
    }
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactPatch {
    pub text: Option<String>,
    pub category: Option<String>,
    pub is_true: Option<bool>,
    pub approved: Option<bool>,
    pub submitted_by: Option<String>,
    pub created_at: Option<String>,
    pub source: Option<String>,
    pub verified: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl FactPatch {
    pub fn apply_to(self, fact: &mut Fact) {
        if let Some(text) = self.text {
            fact.text = text;
        }
        if let Some(category) = self.category {
            fact.category = category;
        }
        if self.is_true.is_some() {
            fact.is_true = self.is_true;
        }
        if self.approved.is_some() {
            fact.approved = self.approved;
        }
        if self.submitted_by.is_some() {
            fact.submitted_by = self.submitted_by;
        }
        if self.created_at.is_some() {
            fact.created_at = self.created_at;
        }
        if self.source.is_some() {
            fact.source = self.source;
        }
        if self.verified.is_some() {
            fact.verified = self.verified;
        }
        if self.tags.is_some() {
            fact.tags = self.tags;
        }
    }
}
