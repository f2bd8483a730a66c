//! Entity kinds served through the hybrid resolver.

use std::fmt::{Display, Formatter};

/// One independently resolved collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentKind {
    Facts,
    BlogPosts,
    /// Baseline-only in the site UI; no admin editor writes it today.
    Categories,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [Self::Facts, Self::BlogPosts, Self::Categories];

    /// Stable short name used by CLI/FFI callers and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Facts => "facts",
            Self::BlogPosts => "blog",
            Self::Categories => "categories",
        }
    }

    /// Parses a short name, accepting a few spellings for blog posts.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "facts" | "fact" => Some(Self::Facts),
            "blog" | "posts" | "blog-posts" | "blog_posts" => Some(Self::BlogPosts),
            "categories" | "category" => Some(Self::Categories),
            _ => None,
        }
    }

    /// Fixed path of the baseline document for this kind.
    pub fn document_path(self) -> &'static str {
        match self {
            Self::Facts => "/data/facts.json",
            Self::BlogPosts => "/data/blog-posts.json",
            Self::Categories => "/data/categories.json",
        }
    }

    /// Key of the override snapshot in the key/value area.
    pub fn override_key(self) -> &'static str {
        match self {
            Self::Facts => "temp_facts_data",
            Self::BlogPosts => "temp_blog_posts_data",
            Self::Categories => "temp_categories_data",
        }
    }

    /// Name of the item array inside the envelope object.
    pub fn collection_field(self) -> &'static str {
        match self {
            Self::Facts => "facts",
            Self::BlogPosts => "posts",
            Self::Categories => "categories",
        }
    }
}

impl Display for ContentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ContentKind;

    #[test]
    fn parse_accepts_short_names_and_aliases() {
        assert_eq!(ContentKind::parse(" Facts "), Some(ContentKind::Facts));
        assert_eq!(ContentKind::parse("blog-posts"), Some(ContentKind::BlogPosts));
        assert_eq!(ContentKind::parse("nope"), None);
    }

    #[test]
    fn kinds_use_distinct_keys_and_paths() {
        for kind in ContentKind::ALL {
            assert_eq!(ContentKind::parse(kind.as_str()), Some(kind));
            let others = ContentKind::ALL.iter().filter(|other| **other != kind);
            for other in others {
                assert_ne!(kind.override_key(), other.override_key());
                assert_ne!(kind.document_path(), other.document_path());
            }
        }
    }
}
