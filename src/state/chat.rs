//! Conversation state for the AI consult page.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::AgentMessage;

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// Wire role understood by the agent endpoints.
    pub fn role(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender: Sender::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender: Sender::Assistant,
            content: content.into(),
        }
    }
}

/// Opening message shown before the user says anything.
pub fn greeting() -> ChatMessage {
    ChatMessage::assistant(
        "Dobrý den. Jsem váš kulinářský asistent. Ptejte se na fakta, techniky nebo suroviny. S čím vám mohu poradit?",
    )
}

/// Map the conversation into the wire shape the consult endpoint expects.
pub fn to_agent_messages(messages: &[ChatMessage]) -> Vec<AgentMessage> {
    messages
        .iter()
        .map(|m| AgentMessage {
            role: m.sender.role().to_owned(),
            content: m.content.clone(),
        })
        .collect()
}
