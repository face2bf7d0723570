//! Flattening of site content into plain-text context for the assistant.

use crate::content::{Article, ContentStore, Project, Testimonial};

use super::Profile;

/// Render one project as a fixed-format block.
#[must_use]
pub fn project_block(project: &Project) -> String {
    format!(
        "Project: {}\nDescription: {}\nCategory: {}\nSkills: {}",
        project.title,
        project.description,
        project.category.as_deref().unwrap_or_default(),
        project.skills.join(", ")
    )
}

/// Render one article as a fixed-format block.
#[must_use]
pub fn article_block(article: &Article) -> String {
    format!(
        "Article: {}\nExcerpt: {}\nTags: {}\nDate: {}",
        article.title,
        article.excerpt,
        article.tags.join(", "),
        article.date.format("%Y-%m-%d")
    )
}

/// Render one testimonial as a single line.
#[must_use]
pub fn testimonial_line(testimonial: &Testimonial) -> String {
    match &testimonial.title {
        Some(title) => format!(
            "Testimonial from {} ({title}): \"{}\"",
            testimonial.author, testimonial.quote
        ),
        None => format!(
            "Testimonial from {}: \"{}\"",
            testimonial.author, testimonial.quote
        ),
    }
}

/// Project blocks separated by blank lines.
#[must_use]
pub fn projects_section(projects: &[Project]) -> String {
    projects
        .iter()
        .map(project_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Article blocks separated by blank lines.
#[must_use]
pub fn articles_section(articles: &[Article]) -> String {
    articles
        .iter()
        .map(article_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One testimonial per line.
#[must_use]
pub fn testimonials_section(testimonials: &[Testimonial]) -> String {
    testimonials
        .iter()
        .map(testimonial_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assembled context, one field per section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteContext {
    pub projects: String,
    pub articles: String,
    pub testimonials: String,
    pub skills: String,
    pub about: String,
    pub contact: String,
}

impl SiteContext {
    /// Concatenate all sections in fixed order, separated by blank lines.
    ///
    /// Empty sections stay in place as empty strings.
    #[must_use]
    pub fn render(&self) -> String {
        [
            self.projects.as_str(),
            self.articles.as_str(),
            self.testimonials.as_str(),
            self.skills.as_str(),
            self.about.as_str(),
            self.contact.as_str(),
        ]
        .join("\n\n")
    }
}

/// Builds [`SiteContext`] from the content store and the owner profile.
#[derive(Debug, Clone, Copy)]
pub struct ContextAssembler<'a> {
    store: &'a ContentStore,
    profile: &'a Profile,
}

impl<'a> ContextAssembler<'a> {
    #[must_use]
    pub fn new(store: &'a ContentStore, profile: &'a Profile) -> Self {
        Self { store, profile }
    }

    /// Build every section. Never fails; output depends only on the inputs.
    #[must_use]
    pub fn assemble(&self) -> SiteContext {
        SiteContext {
            projects: projects_section(&self.store.list_projects()),
            articles: articles_section(&self.store.list_articles()),
            testimonials: testimonials_section(&self.store.list_testimonials()),
            skills: self.profile.skills.clone(),
            about: self.profile.about.clone(),
            contact: self.profile.contact.clone(),
        }
    }

    /// Build and render the context as a single document.
    #[must_use]
    pub fn render(&self) -> String {
        self.assemble().render()
    }
}
