//! Colored CLI display utilities for site content.
//!
//! This module provides functions for printing colored, formatted listings
//! of articles, projects and assistant replies to the terminal.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::content::{ArticlePage, PageItem, Project};

/// Maximum length for truncated display strings.
const DEFAULT_MAX_LEN: usize = 80;

/// Truncate a string to a maximum number of characters, adding ellipsis if
/// truncated.
#[must_use]
pub fn truncate(s: &str, max_len: usize, raw_mode: bool) -> String {
    if raw_mode || s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return "...".to_string();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{kept}...")
}

/// Render pagination controls as `1 … 4 [5] 6 … 9`.
#[must_use]
pub fn format_pagination(items: &[PageItem], current: usize) -> String {
    items
        .iter()
        .map(|item| match item {
            PageItem::Page(n) if *n == current => format!("[{n}]"),
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print one page of articles.
pub fn print_article_page(page: &ArticlePage, raw_mode: bool) {
    if page.articles.is_empty() {
        println!("{}", "No articles match.".dimmed());
        let _ = io::stdout().flush();
        return;
    }

    for article in &page.articles {
        println!(
            "{} {} {}",
            article.date.to_string().dimmed(),
            article.title.bold(),
            format!("/{}", article.slug).cyan()
        );
        println!(
            "           {}",
            truncate(&article.excerpt, DEFAULT_MAX_LEN, raw_mode).dimmed()
        );
        if !article.tags.is_empty() {
            println!("           {}", article.tags.join(", ").yellow());
        }
    }
    println!(
        "{} {} of {} ({} total)  {}",
        "[PAGE]".blue().bold(),
        page.page,
        page.total_pages,
        page.total,
        format_pagination(&page.pagination, page.page)
    );
    let _ = io::stdout().flush();
}

/// Print a list of projects.
pub fn print_projects(projects: &[Project], raw_mode: bool) {
    if projects.is_empty() {
        println!("{}", "No projects match.".dimmed());
        let _ = io::stdout().flush();
        return;
    }

    for project in projects {
        println!(
            "{} {} {}",
            format!("[{}]", project.category.as_deref().unwrap_or("Uncategorized"))
                .magenta()
                .bold(),
            project.title.bold(),
            format!("/{}", project.slug).cyan()
        );
        println!(
            "    {}",
            truncate(&project.description, DEFAULT_MAX_LEN, raw_mode).dimmed()
        );
        if !project.skills.is_empty() {
            println!("    {}", project.skills.join(", ").yellow());
        }
    }
    let _ = io::stdout().flush();
}

/// Print an assistant reply.
pub fn print_reply(assistant_name: &str, text: &str) {
    println!("{} {}", format!("[{assistant_name}]").green().bold(), text);
    let _ = io::stdout().flush();
}

/// Print server start information.
pub fn print_server_start(address: &str, assistant: Option<&str>) {
    println!(
        "{} listening on {}",
        "[SERVER]".blue().bold(),
        format!("http://{address}").cyan()
    );
    match assistant {
        Some(model) => println!("{} {} - {}", "[AI]".magenta().bold(), model.cyan(), "ready".green()),
        None => println!(
            "{} {}",
            "[AI]".magenta().bold(),
            "unavailable (no API key)".yellow()
        ),
    }
    let _ = io::stdout().flush();
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}
