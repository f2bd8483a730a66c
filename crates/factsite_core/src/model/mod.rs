//! Content data model.
//!
//! # Responsibility
//! - Define the records served to the site (facts, blog posts, categories,
//!   submissions, about page) and their JSON wire shape.
//! - Define the versioned envelope shared by baseline documents, override
//!   snapshots and exports.
//!
//! # Invariants
//! - Item ids are unique within the collection they live in.
//! - Field names on the wire are camelCase; absent optionals are omitted.

pub mod about;
pub mod blog_post;
pub mod category;
pub mod envelope;
pub mod fact;
pub mod kind;
pub mod seed;
pub mod submission;
pub mod validation;
