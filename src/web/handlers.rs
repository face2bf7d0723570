//! HTTP handlers for the site API.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;

use super::api::{
    ArticleDetail, AssistantIntro, ChatRequest, ChatResponse, ContactResponse, FaqQuery,
    ProjectQuery,
};
use super::ApiError;
use crate::assistant::{
    AssistantDispatcher, GenerationError, APOLOGY_MESSAGE, GREETING, SUGGESTED_QUESTIONS,
};
use crate::contact::{ContactForm, ContactIntake};
use crate::content::{
    all_tags, browse_articles, filter_projects, project_categories, search_faqs, top_reads,
    ArticlePage, ArticleQuery, ContentStore, Faq, Project, Testimonial,
};

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only site content.
    pub store: ContentStore,
    /// Assistant, absent when no generation service is configured.
    pub assistant: Option<Arc<AssistantDispatcher>>,
    /// Contact form intake.
    pub contact: ContactIntake,
}

impl AppState {
    /// Create app state without an assistant.
    #[must_use]
    pub fn new(store: ContentStore) -> Self {
        Self {
            store,
            assistant: None,
            contact: ContactIntake::new(),
        }
    }

    /// Create app state with an assistant.
    #[must_use]
    pub fn with_assistant(store: ContentStore, assistant: AssistantDispatcher) -> Self {
        Self {
            assistant: Some(Arc::new(assistant)),
            ..Self::new(store)
        }
    }
}

/// GET /api/articles - One page of articles, optionally filtered.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleQuery>,
) -> Json<ArticlePage> {
    Json(browse_articles(&state.store.list_articles(), &query))
}

/// GET /api/articles/tags - Every tag, preceded by "All".
pub async fn list_tags(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(all_tags(&state.store.list_articles()))
}

/// GET /api/articles/:slug - An article with its neighbours.
pub async fn get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ArticleDetail>, ApiError> {
    let article = state.store.get_article_by_slug(&slug)?;
    let adjacent = state.store.get_adjacent_articles(&article.id);
    let top_reads = top_reads(&state.store.list_articles(), &article.id);

    Ok(Json(ArticleDetail {
        article,
        adjacent,
        top_reads,
    }))
}

/// GET /api/projects - Projects, optionally filtered by category.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> Json<Vec<Project>> {
    Json(filter_projects(
        &state.store.list_projects(),
        query.category.as_deref(),
    ))
}

/// GET /api/projects/categories - Every category, preceded by "All".
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(project_categories(&state.store.list_projects()))
}

/// GET /api/projects/:slug - A single project.
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(state.store.get_project_by_slug(&slug)?))
}

/// GET /api/testimonials - All testimonials.
pub async fn list_testimonials(State(state): State<AppState>) -> Json<Vec<Testimonial>> {
    Json(state.store.list_testimonials())
}

/// GET /api/faq - FAQ entries matching `q`.
pub async fn list_faqs(
    State(state): State<AppState>,
    Query(query): Query<FaqQuery>,
) -> Json<Vec<Faq>> {
    Json(search_faqs(&state.store.list_faqs(), &query.q))
}

/// GET /api/assistant - Greeting and starter questions.
pub async fn get_assistant_intro(State(state): State<AppState>) -> Json<AssistantIntro> {
    Json(AssistantIntro {
        available: state.assistant.is_some(),
        greeting: GREETING.to_string(),
        suggested_questions: SUGGESTED_QUESTIONS.iter().map(|q| (*q).to_string()).collect(),
    })
}

/// POST /api/chat - Ask the assistant.
///
/// A failed generation call becomes the apology message rather than an error
/// status.
pub async fn post_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let assistant = state.assistant.ok_or(ApiError::AssistantUnavailable)?;

    match assistant.respond(&request.history, &request.message).await {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(GenerationError::EmptyMessage) => {
            Err(ApiError::BadRequest("Message must not be empty".to_string()))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Assistant generation failed");
            Ok(Json(ChatResponse {
                response: APOLOGY_MESSAGE.to_string(),
            }))
        }
    }
}

/// POST /api/contact - Submit the contact form.
pub async fn post_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactResponse>, ApiError> {
    let receipt = state.contact.submit(&form)?;
    Ok(Json(ContactResponse::accepted(receipt)))
}
