//! Append-only message transcript.

use serde::{Deserialize, Serialize};

/// Who a message is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The guest typing into the widget.
    User,
    /// The virtual assistant (replies, welcome text and fallbacks).
    Bot,
}

/// A single line in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Display text.
    pub text: String,
    /// Who sent it.
    pub sender: Sender,
}

impl Message {
    /// A guest message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    /// An assistant message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

/// Ordered message history.
///
/// Messages are only ever appended; there is no way to edit or remove one.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message at the end.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Most recent message.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Messages in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Snapshot of all messages.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Message> {
        self.messages.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_keeps_insertion_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.push(Message::bot("Bienvenido"));
        transcript.push(Message::user("Hola"));
        transcript.push(Message::bot("¿En qué puedo ayudarte?"));

        assert_eq!(transcript.len(), 3);
        let senders: Vec<Sender> = transcript.iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::Bot]);
        assert_eq!(transcript.last().unwrap().text, "¿En qué puedo ayudarte?");
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_value(Message::user("hola")).unwrap();
        assert_eq!(json["sender"], "user");
        assert_eq!(json["text"], "hola");
    }
}
