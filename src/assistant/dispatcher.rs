//! One question/answer exchange with the generation service.

use std::sync::Arc;

use crate::content::ContentStore;

use super::{
    format_system_instruction, ContextAssembler, ConversationTurn, GenerationError,
    GenerationRequest, GenerationService, Profile, Role, FALLBACK_RESPONSE,
};

/// History as forwarded to the service.
///
/// A leading assistant turn is the scripted greeting and is dropped. Only the
/// first turn is examined, so a real assistant reply in that position is
/// dropped as well.
#[must_use]
pub fn forwardable_history(history: &[ConversationTurn]) -> &[ConversationTurn] {
    match history.first() {
        Some(turn) if turn.role == Role::Assistant => &history[1..],
        _ => history,
    }
}

/// Answers visitor questions using the site context.
///
/// Stateless between calls: the caller supplies the full history each time.
#[derive(Clone)]
pub struct AssistantDispatcher {
    service: Arc<dyn GenerationService>,
    system_instruction: Arc<str>,
}

impl std::fmt::Debug for AssistantDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantDispatcher")
            .field("system_instruction_len", &self.system_instruction.len())
            .finish_non_exhaustive()
    }
}

impl AssistantDispatcher {
    /// Create a dispatcher with a prebuilt system instruction.
    #[must_use]
    pub fn new(service: Arc<dyn GenerationService>, system_instruction: impl Into<Arc<str>>) -> Self {
        Self {
            service,
            system_instruction: system_instruction.into(),
        }
    }

    /// Create a dispatcher whose system instruction embeds the store's content.
    ///
    /// The context is assembled once here since the store never changes.
    #[must_use]
    pub fn from_store(
        service: Arc<dyn GenerationService>,
        store: &ContentStore,
        profile: &Profile,
    ) -> Self {
        let context = ContextAssembler::new(store, profile).assemble();
        let system_instruction = format_system_instruction(profile, &context);
        tracing::debug!(
            chars = system_instruction.len(),
            "Assistant system instruction assembled"
        );
        Self::new(service, system_instruction)
    }

    /// The system instruction sent with every request.
    #[must_use]
    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// Answer `message` given the prior `history`.
    ///
    /// Returns the service's text verbatim, or [`FALLBACK_RESPONSE`] when it
    /// produced none. Failures are returned to the caller untouched; nothing
    /// is retried.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::EmptyMessage` for a blank message, and any
    /// error raised by the generation service.
    pub async fn respond(
        &self,
        history: &[ConversationTurn],
        message: &str,
    ) -> Result<String, GenerationError> {
        if message.trim().is_empty() {
            return Err(GenerationError::EmptyMessage);
        }

        let forwarded = forwardable_history(history);
        let mut messages = Vec::with_capacity(forwarded.len() + 1);
        messages.extend_from_slice(forwarded);
        messages.push(ConversationTurn::visitor(message));

        tracing::debug!(
            history = history.len(),
            forwarded = forwarded.len(),
            "Dispatching assistant request"
        );

        let request = GenerationRequest {
            system: &self.system_instruction,
            messages: &messages,
        };

        match self.service.generate(&request).await? {
            Some(text) if !text.is_empty() => Ok(text),
            _ => {
                tracing::warn!("Generation service returned no text");
                Ok(FALLBACK_RESPONSE.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Records every request and replies with a fixed outcome.
    struct RecordingService {
        reply: Option<String>,
        fail: bool,
        seen: Mutex<Vec<(String, Vec<ConversationTurn>)>>,
    }

    impl RecordingService {
        fn replying(reply: Option<&str>) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.map(String::from),
                fail: false,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                fail: true,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl GenerationService for RecordingService {
        async fn generate(
            &self,
            request: &GenerationRequest<'_>,
        ) -> Result<Option<String>, GenerationError> {
            self.seen
                .lock()
                .unwrap()
                .push((request.system.to_string(), request.messages.to_vec()));
            if self.fail {
                return Err(GenerationError::Timeout);
            }
            Ok(self.reply.clone())
        }
    }

    #[test]
    fn test_forwardable_history_drops_leading_greeting() {
        let history = vec![
            ConversationTurn::assistant("Hello!"),
            ConversationTurn::visitor("Hi"),
            ConversationTurn::assistant("How can I help?"),
        ];
        let forwarded = forwardable_history(&history);
        assert_eq!(forwarded.len(), 2);
        assert_eq!(forwarded[0], ConversationTurn::visitor("Hi"));
    }

    #[test]
    fn test_forwardable_history_keeps_visitor_first() {
        let history = vec![
            ConversationTurn::visitor("Hi"),
            ConversationTurn::assistant("Hello!"),
        ];
        assert_eq!(forwardable_history(&history), history.as_slice());
        assert!(forwardable_history(&[]).is_empty());
    }

    #[tokio::test]
    async fn test_respond_forwards_filtered_history_and_message() {
        let service = RecordingService::replying(Some("I know Rust."));
        let dispatcher = AssistantDispatcher::new(service.clone(), "SYSTEM");

        let history = vec![
            ConversationTurn::assistant("Hello! I'm the assistant."),
            ConversationTurn::visitor("First question"),
            ConversationTurn::assistant("First answer"),
        ];
        let reply = dispatcher.respond(&history, "Second question").await.unwrap();
        assert_eq!(reply, "I know Rust.");

        let seen = service.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (system, messages) = &seen[0];
        assert_eq!(system, "SYSTEM");
        assert_eq!(
            messages,
            &vec![
                ConversationTurn::visitor("First question"),
                ConversationTurn::assistant("First answer"),
                ConversationTurn::visitor("Second question"),
            ]
        );
    }

    #[tokio::test]
    async fn test_respond_falls_back_when_no_text() {
        let dispatcher = AssistantDispatcher::new(RecordingService::replying(None), "SYSTEM");
        let reply = dispatcher.respond(&[], "Hello?").await.unwrap();
        assert_eq!(reply, "Sorry, I couldn't generate a response.");

        let dispatcher = AssistantDispatcher::new(RecordingService::replying(Some("")), "SYSTEM");
        let reply = dispatcher.respond(&[], "Hello?").await.unwrap();
        assert_eq!(reply, FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn test_respond_returns_whitespace_reply_verbatim() {
        let dispatcher = AssistantDispatcher::new(RecordingService::replying(Some("  \n")), "SYSTEM");
        let reply = dispatcher.respond(&[], "Hello?").await.unwrap();
        assert_eq!(reply, "  \n");
    }

    #[tokio::test]
    async fn test_respond_propagates_failure() {
        let service = RecordingService::failing();
        let dispatcher = AssistantDispatcher::new(service.clone(), "SYSTEM");

        let result = dispatcher.respond(&[], "Hello?").await;
        assert!(matches!(result, Err(GenerationError::Timeout)));
        // Exactly one attempt, no retries
        assert_eq!(service.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_respond_rejects_blank_message() {
        let service = RecordingService::replying(Some("unused"));
        let dispatcher = AssistantDispatcher::new(service.clone(), "SYSTEM");

        let result = dispatcher.respond(&[], "   ").await;
        assert!(matches!(result, Err(GenerationError::EmptyMessage)));
        assert!(service.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_from_store_embeds_context() {
        let store = ContentStore::from_catalog(crate::content::catalog::builtin().unwrap()).unwrap();
        let dispatcher = AssistantDispatcher::from_store(
            RecordingService::replying(None),
            &store,
            &Profile::default(),
        );

        let system = dispatcher.system_instruction();
        assert!(system.contains("Project: Advanced Inventory System using VBA"));
        assert!(system.contains("Testimonial from Renzo Bautista (Client)"));
        assert!(system.contains("**Context on Skills:**"));
    }
}
