//! Blog post accessors.

use crate::content::clock::now_timestamp;
use crate::content::{ContentResult, HybridResolver};
use crate::model::blog_post::{BlogPost, BlogPostDraft, BlogPostPatch};
use crate::storage::KeyValueStorage;
use chrono::DateTime;
use std::cmp::Reverse;

pub struct BlogService<'a, S> {
    resolver: HybridResolver<'a, S>,
}

impl<'a, S: KeyValueStorage> BlogService<'a, S> {
    pub fn new(resolver: HybridResolver<'a, S>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &HybridResolver<'a, S> {
        &self.resolver
    }

    /// All effective posts, drafts included, in collection order.
    pub fn list_posts(&self) -> Vec<BlogPost> {
        self.resolver.effective()
    }

    pub fn get_post(&self, id: &str) -> Option<BlogPost> {
        self.resolver.find(id)
    }

    /// Looks up a post by slug regardless of its `published` flag.
    pub fn post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.list_posts().into_iter().find(|post| post.slug == slug)
    }

    /// Published posts, newest `createdAt` first.
    ///
    /// Posts with an unparsable timestamp sort last, keeping their relative
    /// order.
    pub fn published_posts(&self) -> Vec<BlogPost> {
        let mut posts = self
            .list_posts()
            .into_iter()
            .filter(|post| post.published)
            .collect::<Vec<_>>();
        posts.sort_by_key(|post| Reverse(created_at_millis(post)));
        posts
    }

    /// Creates a post; fails with `SlugConflict` when the slug is taken.
    pub fn create_post(&self, draft: BlogPostDraft) -> ContentResult<BlogPost> {
        self.resolver.create(draft.into_post(&now_timestamp()))
    }

    /// Updates a post and stamps `updatedAt`.
    pub fn update_post(&self, id: &str, patch: BlogPostPatch) -> ContentResult<BlogPost> {
        self.resolver.update::<BlogPost>(id, patch)
    }

    pub fn delete_post(&self, id: &str) -> ContentResult<bool> {
        self.resolver.delete::<BlogPost>(id)
    }
}

fn created_at_millis(post: &BlogPost) -> Option<i64> {
    DateTime::parse_from_rfc3339(post.created_at.trim())
        .ok()
        .map(|created_at| created_at.timestamp_millis())
}
