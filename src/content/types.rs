//! Content record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A record addressable by a URL-safe slug.
pub trait Slugged {
    /// Stable identifier of the record.
    fn id(&self) -> &str;

    /// Unique, URL-safe slug.
    fn slug(&self) -> &str;
}

/// One screenshot in a project gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    pub caption: String,
    #[serde(default)]
    pub image_hint: String,
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// Short description shown on cards.
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub image_hint: String,
    /// Ordered screenshots with captions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<GalleryImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsibilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_statement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

impl Slugged for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

/// A blog article.
///
/// The publication date is parsed when the record is built, so an article
/// with an unparsable date cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Full body as HTML.
    pub content: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub image_hint: String,
    pub author: String,
    #[serde(default)]
    pub author_image_url: String,
    /// Publication date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Article {
    /// Whether the article carries the given tag (exact match).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Slugged for Article {
    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

/// A quote from a colleague or client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub quote: String,
    pub author: String,
    /// Role of the author relative to the site owner ("Client", "Colleague").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_hint: Option<String>,
}

/// A frequently asked question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
    /// Space separated search keywords.
    #[serde(default)]
    pub keywords: String,
}
