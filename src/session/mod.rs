//! Per-load session identity and the conversation transcript.
//!
//! A widget owns exactly one [`SessionId`] for its whole lifetime and one
//! append-only [`Transcript`] of the messages shown to the guest.
//!
//! # Example
//!
//! ```rust
//! use hotel_concierge_widget::session::{Message, SessionId, Transcript};
//!
//! let id = SessionId::generate();
//! assert!(id.as_str().starts_with("session-"));
//!
//! let mut transcript = Transcript::new();
//! transcript.push(Message::user("¿Tienen piscina?"));
//! assert_eq!(transcript.len(), 1);
//! ```

mod id;
mod transcript;

pub use id::SessionId;
pub use transcript::{Message, Sender, Transcript};
