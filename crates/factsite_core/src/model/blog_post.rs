//! Blog post records and slug rules.
//!
//! # Invariants
//! - `slug` is non-empty and URL-safe (`[a-z0-9_-]`).
//! - Slug uniqueness across a collection is checked by the mutation API,
//!   not here.

use crate::model::validation::{require_text, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SLUG_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_\s-]").expect("valid slug strip regex"));
static SLUG_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static SLUG_DASH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid dash regex"));

/// A long-form post with HTML content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Rich text (HTML) body.
    pub content: String,
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub published: bool,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl BlogPost {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        if !is_url_safe_slug(&self.slug) {
            return Err(ValidationError::InvalidSlug(self.slug.clone()));
        }
        Ok(())
    }
}

/// Caller-supplied fields for a new post.
///
/// A missing or blank `slug` is derived from the title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPostDraft {
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub published: bool,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
}

impl BlogPostDraft {
    pub fn into_post(self, created_at: &str) -> BlogPost {
        let slug = match self.slug {
            Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
            _ => create_slug(&self.title),
        };
        BlogPost {
            id: String::new(),
            title: self.title,
            slug,
            content: self.content,
            excerpt: self.excerpt,
            cover_image: self.cover_image,
            published: self.published,
            created_at: created_at.to_string(),
            updated_at: None,
            tags: self.tags,
            author: self.author,
        }
    }
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
}

impl BlogPostPatch {
    /// Applies provided fields and stamps `updated_at`.
    pub fn apply_to(self, post: &mut BlogPost, updated_at: &str) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(slug) = self.slug {
            post.slug = slug.trim().to_string();
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(excerpt) = self.excerpt {
            post.excerpt = excerpt;
        }
        if self.cover_image.is_some() {
            post.cover_image = self.cover_image;
        }
        if let Some(published) = self.published {
            post.published = published;
        }
        if self.tags.is_some() {
            post.tags = self.tags;
        }
        if self.author.is_some() {
            post.author = self.author;
        }
        post.updated_at = Some(updated_at.to_string());
    }
}

/// Derives a URL-friendly slug from a title.
///
/// Lowercases, drops characters other than letters, digits, `_`, `-` and
/// whitespace, turns whitespace runs into `-`, collapses repeated `-` and
/// trims `-` from both ends.
pub fn create_slug(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let stripped = SLUG_STRIP_RE.replace_all(&lowered, "");
    let dashed = SLUG_SPACE_RE.replace_all(&stripped, "-");
    let collapsed = SLUG_DASH_RE.replace_all(&dashed, "-");
    collapsed.trim_matches('-').to_string()
}

/// Returns whether `slug` is non-empty and only uses `[a-z0-9_-]`.
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
