//! Content store error types.

use std::path::PathBuf;

/// Errors from content lookups and catalog construction.
#[derive(thiserror::Error, Debug)]
pub enum ContentError {
    /// No record of this kind has the slug. Callers render a not-found page.
    #[error("No {kind} found with slug '{slug}'")]
    NotFound { kind: &'static str, slug: String },

    /// Two records of the same kind share a slug.
    #[error("Duplicate {kind} slug '{slug}'")]
    DuplicateSlug { kind: &'static str, slug: String },

    /// Two records of the same kind share an id.
    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    /// Failed to read a catalog file.
    #[error("Failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a catalog file.
    #[error("Failed to parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ContentError {
    /// Whether this is the ordinary not-found outcome of a lookup.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = ContentError::NotFound {
            kind: "article",
            slug: "nonexistent".to_string(),
        };
        assert_eq!(error.to_string(), "No article found with slug 'nonexistent'");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_duplicate_id_display() {
        let error = ContentError::DuplicateId {
            kind: "article",
            id: "1".to_string(),
        };
        assert_eq!(error.to_string(), "Duplicate article id '1'");
        assert!(!error.is_not_found());
    }
}
