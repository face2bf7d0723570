//! Content layer: read-only catalogs of projects, articles, testimonials and FAQ.
//!
//! Provides:
//! - Record types and the [`Slugged`] lookup key
//! - A [`Repository`] abstraction with an in-memory implementation
//! - The [`ContentStore`] consumed by pages and the assistant
//! - Listing helpers for search, tag filters and pagination

mod browse;
pub mod catalog;
mod error;
mod repository;
mod store;
mod types;

pub use browse::*;
pub use catalog::Catalog;
pub use error::ContentError;
pub use repository::*;
pub use store::*;
pub use types::*;
