//! Repository abstraction over content collections.

use std::collections::HashSet;

use super::{ContentError, Slugged};

/// Read-only access to one collection of records.
///
/// The store only depends on this trait, so a persistent backend can replace
/// [`StaticRepository`] without touching consumers.
pub trait Repository<T>: Send + Sync {
    /// All records in their stored order.
    fn list(&self) -> Vec<T>;

    /// The record with the given slug, if any.
    fn get_by_slug(&self, slug: &str) -> Option<T>;

    /// Number of records in the collection.
    fn len(&self) -> usize {
        self.list().len()
    }

    /// Whether the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory repository built once from a fixed list.
#[derive(Debug, Clone)]
pub struct StaticRepository<T> {
    items: Vec<T>,
}

impl<T: Slugged> StaticRepository<T> {
    /// Build a repository, rejecting duplicate slugs and ids.
    ///
    /// `kind` names the record type in errors ("article", "project").
    ///
    /// # Errors
    ///
    /// Returns `ContentError::DuplicateSlug` if two items share a slug and
    /// `ContentError::DuplicateId` if two items share an id.
    pub fn new(kind: &'static str, items: Vec<T>) -> Result<Self, ContentError> {
        let mut slugs = HashSet::new();
        let mut ids = HashSet::new();
        for item in &items {
            if !slugs.insert(item.slug()) {
                return Err(ContentError::DuplicateSlug {
                    kind,
                    slug: item.slug().to_string(),
                });
            }
            if !ids.insert(item.id()) {
                return Err(ContentError::DuplicateId {
                    kind,
                    id: item.id().to_string(),
                });
            }
        }
        Ok(Self { items })
    }

    /// An empty repository.
    #[must_use]
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Repository<T> for StaticRepository<T>
where
    T: Slugged + Clone + Send + Sync,
{
    fn list(&self) -> Vec<T> {
        self.items.clone()
    }

    fn get_by_slug(&self, slug: &str) -> Option<T> {
        self.items.iter().find(|item| item.slug() == slug).cloned()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
