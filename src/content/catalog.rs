//! Catalog loading: the built-in site content or a TOML catalog file.

use std::path::Path;

use serde::Deserialize;

use super::{Article, ContentError, Faq, Project, Testimonial};

/// The site's own content, in catalog file format.
const BUILTIN_CATALOG: &str = include_str!("builtin.toml");

/// Every collection the content store is built from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub articles: Vec<Article>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<Faq>,
}

impl Catalog {
    /// Load a catalog from a TOML file with `[[projects]]`, `[[articles]]`,
    /// `[[testimonials]]` and `[[faqs]]` tables.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Read` if the file cannot be read and
    /// `ContentError::Parse` if it is not a valid catalog (this includes
    /// article dates that are not `YYYY-MM-DD`).
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let catalog = Self::parse(path, &content)?;
        tracing::info!(
            path = %path.display(),
            projects = catalog.projects.len(),
            articles = catalog.articles.len(),
            "Loaded catalog file"
        );
        Ok(catalog)
    }

    /// Parse catalog TOML; `origin` only labels errors.
    fn parse(origin: &Path, content: &str) -> Result<Self, ContentError> {
        toml::from_str(content).map_err(|e| ContentError::Parse {
            path: origin.to_path_buf(),
            source: e,
        })
    }
}

/// The site's own content, bundled into the binary.
///
/// # Errors
///
/// Returns `ContentError::Parse` if the bundled catalog is malformed.
pub fn builtin() -> Result<Catalog, ContentError> {
    Catalog::parse(Path::new("builtin.toml"), BUILTIN_CATALOG)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::content::ContentStore;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = builtin().unwrap();
        assert_eq!(catalog.projects.len(), 2);
        assert_eq!(catalog.articles.len(), 15);
        assert_eq!(catalog.testimonials.len(), 3);
        assert_eq!(catalog.faqs.len(), 8);

        // Slugs must be unique for the store to accept it
        let store = ContentStore::from_catalog(catalog).unwrap();
        assert_eq!(store.list_articles()[0].slug, "sql-vs-nosql-database-choices");
    }

    #[test]
    fn test_builtin_articles_carry_full_bodies() {
        let catalog = builtin().unwrap();
        let hooks = catalog
            .articles
            .iter()
            .find(|a| a.slug == "mastering-react-hooks")
            .unwrap();

        assert!(hooks.content.starts_with("<p>In the world of modern React"));
        assert!(hooks.content.contains("<h4 class=\"mt-6 mb-2 text-xl font-semibold\">The Cleanup Function</h4>"));
        assert!(hooks.content.contains("fetch(`https://api.example.com/users/${userId}`)"));
        assert_eq!(hooks.author_image_url, "https://i.ibb.co/Q3hs96cf/1685621767959.jpg");
        assert!(catalog.articles.iter().all(|a| a.content.matches("<h3").count() >= 2));
    }

    #[test]
    fn test_builtin_project_details() {
        let catalog = builtin().unwrap();
        let payroll = &catalog.projects[1];

        assert_eq!(
            payroll.long_description.as_deref(),
            Some("RJS Payroll System is a modern, full-stack web application designed to streamline Human Resources and payroll processes for small to medium-sized businesses. Built with a powerful and scalable tech stack, this platform provides a centralized hub for managing employee data, attendance, leave, financials, and payroll, all accessible through a clean, role-based user interface.")
        );
        assert_eq!(payroll.gallery.len(), 9);
        assert_eq!(payroll.responsibilities.len(), 7);
        assert_eq!(payroll.role.as_deref(), Some("Full-Stack Developer"));
    }

    #[test]
    fn test_load_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[projects]]
id = "p1"
slug = "tool"
title = "Tool"
description = "A tool"
image_url = "https://example.com/tool.png"
skills = ["Rust"]

[[articles]]
id = "a1"
slug = "post"
title = "Post"
excerpt = "Excerpt"
content = "<p>Body</p>"
author = "Me"
date = "2024-07-15"
tags = ["Rust"]

[[testimonials]]
id = "t1"
quote = "Great"
author = "Someone"
"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.projects.len(), 1);
        assert_eq!(catalog.articles[0].slug, "post");
        assert!(catalog.testimonials[0].title.is_none());
        assert!(catalog.faqs.is_empty());
    }

    #[test]
    fn test_load_catalog_rejects_bad_date() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[articles]]
id = "a1"
slug = "post"
title = "Post"
excerpt = "Excerpt"
content = ""
author = "Me"
date = "not a date"
"#
        )
        .unwrap();

        assert!(matches!(
            Catalog::load(file.path()),
            Err(ContentError::Parse { .. })
        ));
    }

    #[test]
    fn test_catalog_with_repeated_article_id_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for (id, slug, date) in [
            ("1", "newest", "2024-08-01"),
            ("1", "middle", "2024-07-01"),
            ("2", "oldest", "2024-06-01"),
        ] {
            writeln!(
                file,
                "[[articles]]\nid = \"{id}\"\nslug = \"{slug}\"\ntitle = \"T\"\nexcerpt = \"E\"\ncontent = \"\"\nauthor = \"Me\"\ndate = \"{date}\"\n"
            )
            .unwrap();
        }

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.articles.len(), 3);

        let result = ContentStore::from_catalog(catalog);
        assert!(matches!(
            result,
            Err(ContentError::DuplicateId { kind: "article", ref id }) if id == "1"
        ));
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let result = Catalog::load(Path::new("/nonexistent/catalog.toml"));
        assert!(matches!(result, Err(ContentError::Read { .. })));
    }
}
