//! Read-only content store over injected repositories.

use std::sync::Arc;

use serde::Serialize;

use super::{
    Article, Catalog, ContentError, Faq, Project, Repository, StaticRepository, Testimonial,
};

/// Chronological neighbours of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdjacentArticles {
    /// The next older article, absent for the oldest one.
    pub previous: Option<Article>,
    /// The next newer article, absent for the newest one.
    pub next: Option<Article>,
}

/// Read-only access to the site's projects, articles, testimonials and FAQ.
///
/// Lookups never fail except with `ContentError::NotFound`, which callers
/// treat as an ordinary outcome.
#[derive(Clone)]
pub struct ContentStore {
    articles: Arc<dyn Repository<Article>>,
    projects: Arc<dyn Repository<Project>>,
    testimonials: Arc<[Testimonial]>,
    faqs: Arc<[Faq]>,
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("articles", &self.articles.len())
            .field("projects", &self.projects.len())
            .field("testimonials", &self.testimonials.len())
            .field("faqs", &self.faqs.len())
            .finish()
    }
}

impl ContentStore {
    /// Create a store over the given repositories.
    #[must_use]
    pub fn new(
        articles: Arc<dyn Repository<Article>>,
        projects: Arc<dyn Repository<Project>>,
        testimonials: Vec<Testimonial>,
        faqs: Vec<Faq>,
    ) -> Self {
        Self {
            articles,
            projects,
            testimonials: testimonials.into(),
            faqs: faqs.into(),
        }
    }

    /// Create a store backed by in-memory repositories built from a catalog.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::DuplicateSlug` or `ContentError::DuplicateId` if
    /// the catalog repeats a slug or an id within one collection.
    pub fn from_catalog(catalog: Catalog) -> Result<Self, ContentError> {
        let articles = StaticRepository::new("article", catalog.articles)?;
        let projects = StaticRepository::new("project", catalog.projects)?;

        tracing::debug!(
            articles = articles.len(),
            projects = projects.len(),
            testimonials = catalog.testimonials.len(),
            faqs = catalog.faqs.len(),
            "Content store initialised"
        );

        Ok(Self::new(
            Arc::new(articles),
            Arc::new(projects),
            catalog.testimonials,
            catalog.faqs,
        ))
    }

    /// A store with no content at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(
            Arc::new(StaticRepository::<Article>::empty()),
            Arc::new(StaticRepository::<Project>::empty()),
            Vec::new(),
            Vec::new(),
        )
    }

    /// All articles, newest first. Articles sharing a date keep their stored order.
    #[must_use]
    pub fn list_articles(&self) -> Vec<Article> {
        let mut articles = self.articles.list();
        // sort_by is stable, so equal dates keep input order
        articles.sort_by(|a, b| b.date.cmp(&a.date));
        articles
    }

    /// Look up an article by slug.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if no article has this slug.
    pub fn get_article_by_slug(&self, slug: &str) -> Result<Article, ContentError> {
        self.articles
            .get_by_slug(slug)
            .ok_or_else(|| ContentError::NotFound {
                kind: "article",
                slug: slug.to_string(),
            })
    }

    /// Chronological neighbours of the article with the given id.
    ///
    /// An unknown id has no neighbours.
    #[must_use]
    pub fn get_adjacent_articles(&self, id: &str) -> AdjacentArticles {
        let mut sorted = self.list_articles();
        let Some(index) = sorted.iter().position(|a| a.id == id) else {
            tracing::debug!(id, "Adjacency requested for unknown article");
            return AdjacentArticles::default();
        };

        let previous = (index + 1 < sorted.len()).then(|| sorted.swap_remove(index + 1));
        let next = index.checked_sub(1).map(|i| sorted.swap_remove(i));

        AdjacentArticles { previous, next }
    }

    /// All projects in catalog order.
    #[must_use]
    pub fn list_projects(&self) -> Vec<Project> {
        self.projects.list()
    }

    /// Look up a project by slug.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if no project has this slug.
    pub fn get_project_by_slug(&self, slug: &str) -> Result<Project, ContentError> {
        self.projects
            .get_by_slug(slug)
            .ok_or_else(|| ContentError::NotFound {
                kind: "project",
                slug: slug.to_string(),
            })
    }

    /// All testimonials in catalog order.
    #[must_use]
    pub fn list_testimonials(&self) -> Vec<Testimonial> {
        self.testimonials.to_vec()
    }

    /// All FAQ entries in catalog order.
    #[must_use]
    pub fn list_faqs(&self) -> Vec<Faq> {
        self.faqs.to_vec()
    }
}
