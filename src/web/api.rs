//! Request and response types for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::assistant::ConversationTurn;
use crate::contact::{ContactReceipt, FieldErrors, ValidationFailure};
use crate::content::{AdjacentArticles, Article};

/// Body of error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Response for GET /api/articles/:slug.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDetail {
    pub article: Article,
    /// Chronological neighbours for previous/next links.
    #[serde(flatten)]
    pub adjacent: AdjacentArticles,
    /// Other articles to read next.
    pub top_reads: Vec<Article>,
}

/// Query parameters for GET /api/projects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectQuery {
    pub category: Option<String>,
}

/// Query parameters for GET /api/faq.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaqQuery {
    #[serde(default)]
    pub q: String,
}

/// Response for GET /api/assistant.
#[derive(Debug, Clone, Serialize)]
pub struct AssistantIntro {
    pub available: bool,
    pub greeting: String,
    pub suggested_questions: Vec<String>,
}

/// Body of POST /api/chat.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
    pub message: String,
}

/// Response for POST /api/chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Response for POST /api/contact.
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<ContactReceipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}

impl ContactResponse {
    /// Response for an accepted submission.
    #[must_use]
    pub fn accepted(receipt: ContactReceipt) -> Self {
        Self {
            success: true,
            message: receipt.message.clone(),
            receipt: Some(receipt),
            field_errors: None,
        }
    }

    /// Response for a submission with invalid fields.
    #[must_use]
    pub fn rejected(failure: ValidationFailure) -> Self {
        Self {
            success: false,
            message: failure.to_string(),
            receipt: None,
            field_errors: Some(failure.field_errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_accepts_legacy_roles() {
        let body = r#"{
            "history": [
                {"role": "model", "content": "Hello!"},
                {"role": "user", "content": "Hi"}
            ],
            "message": "Are you available?"
        }"#;
        let request: ChatRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.history.len(), 2);
        assert_eq!(request.history[1], ConversationTurn::visitor("Hi"));
    }

    #[test]
    fn test_chat_request_history_optional() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": "Hi"}"#).unwrap();
        assert!(request.history.is_empty());
    }

    #[test]
    fn test_rejected_contact_response() {
        let mut field_errors = FieldErrors::new();
        field_errors.insert("email".to_string(), vec!["bad".to_string()]);
        let response = ContactResponse::rejected(ValidationFailure { field_errors });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid input.");
        assert_eq!(json["field_errors"]["email"][0], "bad");
        assert!(json.get("receipt").is_none());
    }
}
