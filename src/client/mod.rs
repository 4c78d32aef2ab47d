//! Contract with the two external concierge endpoints.
//!
//! The backend is an external collaborator. This module only knows the wire
//! format of `POST /chat` and `GET /hotel-info`:
//!
//! - [`ConciergeApi`]: the seam the widget talks to
//! - [`HttpConciergeClient`]: reqwest implementation
//!
//! # Example
//!
//! ```rust,no_run
//! use hotel_concierge_widget::client::{ChatRequest, ConciergeApi, HttpConciergeClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpConciergeClient::new("http://127.0.0.1:8000")?;
//! let reply = client
//!     .send_chat(&ChatRequest {
//!         message: "¿Tienen piscina?".into(),
//!         session_id: "session-1700000000000-abc1234".into(),
//!     })
//!     .await?;
//! println!("{}", reply.reply);
//! # Ok(())
//! # }
//! ```

mod http;

pub use http::{DEFAULT_CHAT_PATH, DEFAULT_HOTEL_INFO_PATH, HttpConciergeClient};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hotel_info::HotelInfo;

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The guest's message.
    pub message: String,
    /// Per-load correlation key.
    pub session_id: String,
}

/// Successful body of `POST /chat`.
///
/// The backend also returns the conversation history; it is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Assistant text to show.
    pub reply: String,
    /// Intent the backend classified the message as.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

/// The two operations the widget needs from the backend.
///
/// Each call issues exactly one request: no retry, no timeout, no backoff.
#[async_trait]
pub trait ConciergeApi: Send + Sync {
    /// Send one guest message and wait for the reply.
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply>;

    /// Fetch the static hotel metadata.
    async fn fetch_hotel_info(&self) -> Result<HotelInfo>;
}
