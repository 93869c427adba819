pub mod overview;
pub mod quick_actions;
pub mod responder;
pub mod templates;

pub use quick_actions::QuickAction;
pub use responder::{respond, respond_with, Category, Reply};

use crate::profile::BusinessProfile;
use chrono::{DateTime, Utc};
use rand::rngs::ThreadRng;
use rand::RngCore;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the conversation log.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub message_id: Uuid,
    pub role: Role,
    pub content: String,
    /// Rule that produced an assistant reply; `None` for user turns and the welcome.
    pub category: Option<Category>,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: Role, content: String, category: Option<Category>) -> Self {
        Self {
            message_id: Uuid::new_v4(),
            role,
            content,
            category,
            sent_at: Utc::now(),
        }
    }
}

/// Conversation facade: owns the profile for the session and an append-only log.
pub struct ChatSession<R: RngCore = ThreadRng> {
    session_id: Uuid,
    profile: BusinessProfile,
    messages: Vec<ChatMessage>,
    rng: R,
}

impl ChatSession<ThreadRng> {
    pub fn new(profile: BusinessProfile) -> Self {
        Self::with_rng(profile, rand::thread_rng())
    }
}

impl<R: RngCore> ChatSession<R> {
    /// Starts a session whose template choices come from `rng`.
    pub fn with_rng(profile: BusinessProfile, rng: R) -> Self {
        let welcome = templates::welcome_message(&profile);
        Self {
            session_id: Uuid::new_v4(),
            profile,
            messages: vec![ChatMessage::new(Role::Assistant, welcome, None)],
            rng,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn profile(&self) -> &BusinessProfile {
        &self.profile
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Records the user's prompt, answers it, and returns the assistant reply.
    pub fn send(&mut self, prompt: &str) -> &ChatMessage {
        self.messages
            .push(ChatMessage::new(Role::User, prompt.to_string(), None));
        let reply = respond_with(prompt, &self.profile, &mut self.rng);
        tracing::debug!(
            session = %self.session_id,
            category = reply.category.label(),
            "Answered chat prompt"
        );
        self.messages.push(ChatMessage::new(
            Role::Assistant,
            reply.text,
            Some(reply.category),
        ));
        &self.messages[self.messages.len() - 1]
    }

    pub fn quick_action(&mut self, action: QuickAction) -> &ChatMessage {
        self.send(action.prompt())
    }
}
