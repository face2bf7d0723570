//! Listing helpers for the blog, project showcase and FAQ views.
//!
//! Everything here is a pure function over store output.

use serde::{Deserialize, Serialize};

use super::{Article, Faq, Project};

/// Articles shown per blog page.
pub const ARTICLES_PER_PAGE: usize = 6;

/// Articles shown in "featured" and "top reads" strips.
pub const HIGHLIGHT_COUNT: usize = 3;

/// Pseudo tag/category that disables filtering.
pub const ALL_FILTER: &str = "All";

/// Filter and page selection for the blog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleQuery {
    /// Case-insensitive text matched against title and excerpt.
    pub search: Option<String>,
    /// Exact tag to keep. `"All"` disables tag filtering.
    pub tag: Option<String>,
    /// 1-based page number.
    pub page: Option<usize>,
}

/// One page of filtered articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    /// Page actually returned, after clamping.
    pub page: usize,
    pub total_pages: usize,
    /// Number of articles matching the filters across all pages.
    pub total: usize,
    /// Page links to render, see [`pagination_items`].
    pub pagination: Vec<PageItem>,
}

/// A pagination control entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "page")]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

fn matches_search(article: &Article, needle: &str) -> bool {
    article.title.to_lowercase().contains(needle) || article.excerpt.to_lowercase().contains(needle)
}

fn is_active_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != ALL_FILTER)
}

/// Filter `articles` (already in display order) and cut out one page.
///
/// Out-of-range pages clamp to the first or last page.
#[must_use]
pub fn browse_articles(articles: &[Article], query: &ArticleQuery) -> ArticlePage {
    let needle = query
        .search
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();
    let tag = is_active_filter(query.tag.as_deref());

    let filtered: Vec<&Article> = articles
        .iter()
        .filter(|a| needle.is_empty() || matches_search(a, &needle))
        .filter(|a| tag.map_or(true, |t| a.has_tag(t)))
        .collect();

    let total = filtered.len();
    let total_pages = total.div_ceil(ARTICLES_PER_PAGE);
    let page = query.page.unwrap_or(1).clamp(1, total_pages.max(1));
    let start = (page - 1) * ARTICLES_PER_PAGE;

    ArticlePage {
        articles: filtered
            .into_iter()
            .skip(start)
            .take(ARTICLES_PER_PAGE)
            .cloned()
            .collect(),
        page,
        total_pages,
        total,
        pagination: pagination_items(page, total_pages),
    }
}

/// `"All"` followed by every distinct tag in first-seen order.
#[must_use]
pub fn all_tags(articles: &[Article]) -> Vec<String> {
    let mut tags = vec![ALL_FILTER.to_string()];
    for tag in articles.iter().flat_map(|a| &a.tags) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Page links around `current`, collapsing long runs into ellipses.
///
/// Up to seven pages are listed in full. Beyond that the first and last pages
/// are always shown together with the neighbours of `current`.
#[must_use]
pub fn pagination_items(current: usize, total: usize) -> Vec<PageItem> {
    if total <= 1 {
        return Vec::new();
    }
    if total <= 7 {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];
    if current > 3 {
        items.push(PageItem::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total - 1);
    items.extend((start..=end).map(PageItem::Page));

    if current.saturating_add(2) < total {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

/// `"All"` followed by every distinct project category.
#[must_use]
pub fn project_categories(projects: &[Project]) -> Vec<String> {
    let mut categories = vec![ALL_FILTER.to_string()];
    for category in projects.iter().filter_map(|p| p.category.as_ref()) {
        if !categories.contains(category) {
            categories.push(category.clone());
        }
    }
    categories
}

/// Projects in the given category; all of them for `"All"` or no category.
#[must_use]
pub fn filter_projects(projects: &[Project], category: Option<&str>) -> Vec<Project> {
    match is_active_filter(category) {
        Some(category) => projects
            .iter()
            .filter(|p| p.category.as_deref() == Some(category))
            .cloned()
            .collect(),
        None => projects.to_vec(),
    }
}

/// The first few articles other than the one being read.
#[must_use]
pub fn top_reads(articles: &[Article], current_id: &str) -> Vec<Article> {
    articles
        .iter()
        .filter(|a| a.id != current_id)
        .take(HIGHLIGHT_COUNT)
        .cloned()
        .collect()
}

/// The newest articles for the home page.
#[must_use]
pub fn featured_articles(articles: &[Article]) -> Vec<Article> {
    articles.iter().take(HIGHLIGHT_COUNT).cloned().collect()
}

/// FAQ entries whose question, answer or keywords contain `term`.
#[must_use]
pub fn search_faqs(faqs: &[Faq], term: &str) -> Vec<Faq> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return faqs.to_vec();
    }
    faqs.iter()
        .filter(|f| {
            f.question.to_lowercase().contains(&term)
                || f.answer.to_lowercase().contains(&term)
                || f.keywords.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn article(id: usize, title: &str, tags: &[&str]) -> Article {
        Article {
            id: id.to_string(),
            slug: format!("post-{id}"),
            title: title.to_string(),
            excerpt: format!("Excerpt for {title}"),
            content: String::new(),
            image_url: String::new(),
            image_hint: String::new(),
            author: "Author".to_string(),
            author_image_url: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    fn many(n: usize) -> Vec<Article> {
        (1..=n).map(|i| article(i, &format!("Post {i}"), &["Rust"])).collect()
    }

    #[test]
    fn test_browse_first_page() {
        let page = browse_articles(&many(15), &ArticleQuery::default());
        assert_eq!(page.page, 1);
        assert_eq!(page.total, 15);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.articles.len(), ARTICLES_PER_PAGE);
        assert_eq!(page.articles[0].id, "1");
    }

    #[test]
    fn test_browse_last_partial_page() {
        let query = ArticleQuery {
            page: Some(3),
            ..ArticleQuery::default()
        };
        let page = browse_articles(&many(15), &query);
        assert_eq!(page.articles.len(), 3);
        assert_eq!(page.articles[0].id, "13");
    }

    #[test]
    fn test_browse_clamps_page() {
        let query = ArticleQuery {
            page: Some(99),
            ..ArticleQuery::default()
        };
        assert_eq!(browse_articles(&many(8), &query).page, 2);

        let query = ArticleQuery {
            page: Some(0),
            ..ArticleQuery::default()
        };
        assert_eq!(browse_articles(&many(8), &query).page, 1);
    }

    #[test]
    fn test_browse_empty() {
        let page = browse_articles(&[], &ArticleQuery::default());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.articles.is_empty());
        assert!(page.pagination.is_empty());
    }

    #[test]
    fn test_browse_search_is_case_insensitive() {
        let articles = vec![
            article(1, "Docker Basics", &["DevOps"]),
            article(2, "CSS Grid", &["CSS"]),
        ];
        let query = ArticleQuery {
            search: Some("docker".to_string()),
            ..ArticleQuery::default()
        };
        let page = browse_articles(&articles, &query);
        assert_eq!(page.total, 1);
        assert_eq!(page.articles[0].title, "Docker Basics");
    }

    #[test]
    fn test_browse_tag_filter() {
        let articles = vec![
            article(1, "A", &["React", "CSS"]),
            article(2, "B", &["CSS"]),
            article(3, "C", &["Docker"]),
        ];
        let query = ArticleQuery {
            tag: Some("CSS".to_string()),
            ..ArticleQuery::default()
        };
        assert_eq!(browse_articles(&articles, &query).total, 2);

        let query = ArticleQuery {
            tag: Some(ALL_FILTER.to_string()),
            ..ArticleQuery::default()
        };
        assert_eq!(browse_articles(&articles, &query).total, 3);
    }

    #[test]
    fn test_all_tags_first_seen_order() {
        let articles = vec![
            article(1, "A", &["React", "CSS"]),
            article(2, "B", &["CSS", "Docker"]),
        ];
        assert_eq!(all_tags(&articles), vec!["All", "React", "CSS", "Docker"]);
    }

    #[test]
    fn test_pagination_short() {
        assert!(pagination_items(1, 1).is_empty());
        assert_eq!(
            pagination_items(2, 3),
            vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
        );
    }

    #[test]
    fn test_pagination_collapses() {
        use PageItem::{Ellipsis, Page};

        assert_eq!(
            pagination_items(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            pagination_items(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            pagination_items(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn test_pagination_at_usize_max() {
        use PageItem::{Ellipsis, Page};

        assert_eq!(
            pagination_items(usize::MAX, usize::MAX),
            vec![Page(1), Ellipsis, Page(usize::MAX - 1), Page(usize::MAX)]
        );
        assert_eq!(
            pagination_items(usize::MAX - 1, usize::MAX),
            vec![
                Page(1),
                Ellipsis,
                Page(usize::MAX - 2),
                Page(usize::MAX - 1),
                Page(usize::MAX)
            ]
        );
    }

    #[test]
    fn test_top_reads_excludes_current() {
        let reads = top_reads(&many(5), "1");
        let ids: Vec<_> = reads.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "4"]);
        assert_eq!(featured_articles(&many(5)).len(), HIGHLIGHT_COUNT);
    }

    #[test]
    fn test_project_filters() {
        let make = |id: &str, category: Option<&str>| Project {
            id: id.to_string(),
            slug: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            long_description: None,
            image_url: String::new(),
            image_hint: String::new(),
            gallery: Vec::new(),
            project_url: None,
            repo_url: None,
            skills: Vec::new(),
            achievements: Vec::new(),
            category: category.map(String::from),
            role: None,
            responsibilities: Vec::new(),
            problem_statement: None,
            solution: None,
        };
        let projects = vec![
            make("a", Some("Automation")),
            make("b", Some("Web Application")),
            make("c", None),
        ];

        assert_eq!(
            project_categories(&projects),
            vec!["All", "Automation", "Web Application"]
        );
        assert_eq!(filter_projects(&projects, Some("Automation")).len(), 1);
        assert_eq!(filter_projects(&projects, Some("All")).len(), 3);
        assert_eq!(filter_projects(&projects, None).len(), 3);
    }

    #[test]
    fn test_search_faqs() {
        let faqs = vec![
            Faq {
                question: "Are you available?".to_string(),
                answer: "Yes".to_string(),
                keywords: "freelance".to_string(),
            },
            Faq {
                question: "Design philosophy?".to_string(),
                answer: "User-centered".to_string(),
                keywords: "ui ux".to_string(),
            },
        ];

        assert_eq!(search_faqs(&faqs, "").len(), 2);
        assert_eq!(search_faqs(&faqs, "FREELANCE").len(), 1);
        assert_eq!(search_faqs(&faqs, "user-centered")[0].question, "Design philosophy?");
        assert!(search_faqs(&faqs, "kubernetes").is_empty());
    }
}
