//! HTTP API for the portfolio site.

mod api;
mod error;
mod handlers;
mod server;

pub use api::{
    ArticleDetail, AssistantIntro, ChatRequest, ChatResponse, ContactResponse, ErrorResponse,
    FaqQuery, ProjectQuery,
};
pub use error::{ApiError, ServerError};
pub use handlers::{
    get_article, get_assistant_intro, get_project, list_articles, list_categories, list_faqs,
    list_projects, list_tags, list_testimonials, post_chat, post_contact, AppState,
};
pub use server::FolioServer;
