//! Hotel Concierge Widget
//!
//! Client side of a hotel virtual assistant: sends guest messages to the
//! concierge backend, keeps the conversation transcript and shows static
//! hotel information fetched once per session.
//!
//! # Architecture
//!
//! - **Widget**: explicit per-session context with a single-flight send guard
//! - **Client**: typed results for `POST /chat` and `GET /hotel-info`
//! - **Info panel**: pure projection into sections, rendering as a separate step
//! - **UI**: terminal front-end standing in for the browser widget
//!
//! # Modules
//!
//! - [`client`]: endpoint contract and HTTP implementation
//! - [`config`]: CLI arguments and layered configuration
//! - [`error`]: endpoint error type
//! - [`hotel_info`]: hotel metadata record and section projection
//! - [`render`]: HTML and text renderers for the info panel
//! - [`session`]: session identifier and transcript
//! - [`ui`]: terminal view and REPL
//! - [`widget`]: the chat widget context

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod client;
pub mod config;
pub mod error;
pub mod hotel_info;
pub mod render;
pub mod session;
pub mod ui;
pub mod widget;

pub use client::{ConciergeApi, HttpConciergeClient};
pub use error::{Error, Result};
pub use widget::{ChatWidget, SendOutcome};
