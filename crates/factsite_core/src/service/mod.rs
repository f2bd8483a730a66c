//! Use-case services consumed by UI and admin collaborators.
//!
//! # Responsibility
//! - Expose per-kind read accessors (list, get, slug lookup, category
//!   filter, random order) over the effective collections.
//! - Expose admin writes (create/update/delete, export, reset) and the
//!   moderation queue.
//!
//! # Invariants
//! - Services never touch storage keys owned by the resolver directly.
//! - Read accessors never fail; writes return `ContentResult`.

pub mod about_service;
pub mod admin_service;
pub mod blog_service;
pub mod fact_service;
pub mod submission_service;
