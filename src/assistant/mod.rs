//! Site assistant: context assembly, prompt construction and dispatch to a
//! text-generation service.

mod client;
mod context;
mod conversation;
mod dispatcher;
mod profile;
mod prompts;

pub use client::*;
pub use context::*;
pub use conversation::{ConversationTurn, Role};
pub use dispatcher::{forwardable_history, AssistantDispatcher};
pub use profile::Profile;
pub use prompts::{
    format_policy, format_system_instruction, APOLOGY_MESSAGE, FALLBACK_RESPONSE, GREETING,
    SUGGESTED_QUESTIONS,
};
