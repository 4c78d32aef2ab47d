//! The chat widget context.
//!
//! [`ChatWidget`] owns everything that lives for one page load: the session
//! identifier, the single-flight processing flag, the transcript, the pending
//! input and the hotel-info cache with its memoized panel.
//!
//! # Lifecycle
//!
//! 1. [`ChatWidget::new`] generates the session identifier.
//! 2. [`ChatWidget::initialize`] shows the welcome message and fetches hotel
//!    info once.
//! 3. Sends and panel toggles follow. There is no teardown.
//!
//! # State
//!
//! - chat flow: `idle → sending → idle`, the return to idle is unconditional
//! - info panel: `collapsed ↔ expanded`, rendered at most once

mod view;

pub use view::{NoopView, WidgetView};

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::client::{ChatRequest, ConciergeApi};
use crate::config::WidgetSettings;
use crate::hotel_info::HotelInfo;
use crate::render::{HtmlRenderer, SectionRenderer, render_hotel_info};
use crate::session::{Message, SessionId, Transcript};

/// Bot message shown in place of a reply when the chat call fails for any
/// reason.
pub const FALLBACK_MESSAGE: &str =
    "Lo siento, ha ocurrido un error. Por favor, intenta de nuevo o contacta con recepción.";

/// Result of a send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing happened: no message appended, no request issued.
    Ignored(IgnoreReason),
    /// The backend answered; the reply was appended.
    Replied(String),
    /// The call failed; [`FALLBACK_MESSAGE`] was appended.
    Fallback,
}

/// Why a send was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No text to send.
    Empty,
    /// Another send is still in flight.
    Busy,
}

/// Result of [`ChatWidget::load_hotel_info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoLoad {
    /// The record is cached.
    Loaded,
    /// The request failed; the cache stays empty for good.
    Failed,
    /// A load was already issued by this widget.
    AlreadyAttempted,
}

/// Info panel visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Collapsed,
    Expanded,
}

/// Static widget options.
#[derive(Debug, Clone, Default)]
pub struct WidgetOptions {
    /// Bot message appended by [`ChatWidget::initialize`].
    pub welcome_message: Option<String>,
    /// Preset texts for the quick-reply controls.
    pub quick_replies: Vec<String>,
}

impl From<&WidgetSettings> for WidgetOptions {
    fn from(settings: &WidgetSettings) -> Self {
        Self {
            welcome_message: Some(settings.welcome_message.clone())
                .filter(|welcome| !welcome.trim().is_empty()),
            quick_replies: settings.quick_replies.clone(),
        }
    }
}

/// Chat widget state for one page load.
pub struct ChatWidget {
    session_id: SessionId,
    api: Arc<dyn ConciergeApi>,
    view: Arc<dyn WidgetView>,
    renderer: Arc<dyn SectionRenderer>,
    options: WidgetOptions,
    processing: AtomicBool,
    transcript: RwLock<Transcript>,
    input: RwLock<String>,
    info_requested: AtomicBool,
    hotel_info: OnceLock<HotelInfo>,
    panel_expanded: AtomicBool,
    rendered_info: OnceLock<String>,
}

impl fmt::Debug for ChatWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatWidget")
            .field("session_id", &self.session_id)
            .field("processing", &self.is_processing())
            .field("messages", &self.message_count())
            .field("panel", &self.panel_state())
            .finish_non_exhaustive()
    }
}

impl ChatWidget {
    /// Create a widget with a fresh session identifier.
    ///
    /// Uses a [`NoopView`] and the [`HtmlRenderer`] until replaced.
    pub fn new(api: Arc<dyn ConciergeApi>, options: WidgetOptions) -> Self {
        Self {
            session_id: SessionId::generate(),
            api,
            view: Arc::new(NoopView),
            renderer: Arc::new(HtmlRenderer),
            options,
            processing: AtomicBool::new(false),
            transcript: RwLock::new(Transcript::new()),
            input: RwLock::new(String::new()),
            info_requested: AtomicBool::new(false),
            hotel_info: OnceLock::new(),
            panel_expanded: AtomicBool::new(false),
            rendered_info: OnceLock::new(),
        }
    }

    /// Attach the display front-end.
    #[must_use]
    pub fn with_view(mut self, view: Arc<dyn WidgetView>) -> Self {
        self.view = view;
        self
    }

    /// Replace the info-panel renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn SectionRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// On-load step: welcome message, then the one hotel-info fetch.
    pub async fn initialize(&self) -> InfoLoad {
        tracing::info!(
            name: "widget.initialized",
            session_id = %self.session_id,
            "Chat widget initialized"
        );
        if let Some(welcome) = &self.options.welcome_message {
            self.append(Message::bot(welcome.clone()));
        }
        self.load_hotel_info().await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Chat flow
    // ─────────────────────────────────────────────────────────────────────────

    /// Send `text`, or the trimmed input when `text` is absent or empty.
    ///
    /// The user message is appended before the request goes out; exactly one
    /// bot message (reply or [`FALLBACK_MESSAGE`]) follows once it settles.
    pub async fn send_message(&self, text: Option<&str>) -> SendOutcome {
        let message = match text.filter(|text| !text.is_empty()) {
            Some(text) => text.to_string(),
            None => self.input().trim().to_string(),
        };
        if message.is_empty() {
            return SendOutcome::Ignored(IgnoreReason::Empty);
        }

        let Some(mut guard) = ProcessingGuard::acquire(self) else {
            tracing::debug!(session_id = %self.session_id, "Send ignored while busy");
            return SendOutcome::Ignored(IgnoreReason::Busy);
        };

        self.append(Message::user(message.clone()));
        self.clear_input();
        self.view.processing_changed(true);
        guard.show_typing();

        tracing::info!(
            name: "widget.send.started",
            session_id = %self.session_id,
            message_length = message.len(),
            "Sending chat message"
        );

        let request = ChatRequest {
            message,
            session_id: self.session_id.to_string(),
        };

        let outcome = match self.api.send_chat(&request).await {
            Ok(reply) => {
                tracing::info!(
                    name: "widget.send.replied",
                    session_id = %self.session_id,
                    intent = ?reply.intent,
                    reply_length = reply.reply.len(),
                    "Chat reply received"
                );
                guard.hide_typing();
                self.append(Message::bot(reply.reply.clone()));
                SendOutcome::Replied(reply.reply)
            }
            Err(err) => {
                tracing::error!(
                    name: "widget.send.failed",
                    session_id = %self.session_id,
                    kind = err.kind(),
                    error = %err,
                    "Chat request failed"
                );
                guard.hide_typing();
                self.append(Message::bot(FALLBACK_MESSAGE));
                SendOutcome::Fallback
            }
        };

        drop(guard);
        outcome
    }

    /// Quick-reply path: same as [`Self::send_message`] with a preset text.
    pub async fn send_quick(&self, text: &str) -> SendOutcome {
        self.send_message(Some(text)).await
    }

    /// Configured quick-reply texts.
    pub fn quick_replies(&self) -> &[String] {
        &self.options.quick_replies
    }

    /// Replace the pending input text.
    pub fn set_input(&self, text: impl Into<String>) {
        *write_lock(&self.input) = text.into();
    }

    /// Current input text.
    pub fn input(&self) -> String {
        read_lock(&self.input).clone()
    }

    /// Whether a chat request is outstanding.
    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::Acquire)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Hotel info
    // ─────────────────────────────────────────────────────────────────────────

    /// Fetch and cache hotel info. Only the first call issues a request.
    pub async fn load_hotel_info(&self) -> InfoLoad {
        if self.info_requested.swap(true, Ordering::AcqRel) {
            return InfoLoad::AlreadyAttempted;
        }

        match self.api.fetch_hotel_info().await {
            Ok(info) => {
                tracing::info!(
                    name: "widget.hotel_info.loaded",
                    sections = crate::hotel_info::sections(&info).len(),
                    "Hotel info cached"
                );
                let _ = self.hotel_info.set(info);
                InfoLoad::Loaded
            }
            Err(err) => {
                tracing::warn!(
                    name: "widget.hotel_info.failed",
                    kind = err.kind(),
                    error = %err,
                    "Failed to load hotel info"
                );
                InfoLoad::Failed
            }
        }
    }

    /// Cached hotel info, if the load succeeded.
    pub fn hotel_info(&self) -> Option<&HotelInfo> {
        self.hotel_info.get()
    }

    /// Flip the info panel. The first expansion with cached info renders it.
    pub fn toggle_info(&self) -> PanelState {
        let was_expanded = self.panel_expanded.fetch_xor(true, Ordering::AcqRel);
        let state = if was_expanded {
            PanelState::Collapsed
        } else {
            PanelState::Expanded
        };

        if state == PanelState::Expanded {
            if let Some(info) = self.hotel_info.get() {
                self.rendered_info
                    .get_or_init(|| render_hotel_info(info, self.renderer.as_ref()));
            }
        }

        tracing::debug!(state = ?state, rendered = self.rendered_info.get().is_some(), "Info panel toggled");
        self.view.panel_changed(state, self.rendered_info());
        state
    }

    /// Current panel visibility.
    pub fn panel_state(&self) -> PanelState {
        if self.panel_expanded.load(Ordering::Acquire) {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        }
    }

    /// Memoized panel content.
    pub fn rendered_info(&self) -> Option<&str> {
        self.rendered_info.get().map(String::as_str)
    }

    /// Render the cached record without touching the memo.
    pub fn render_hotel_info(&self) -> Option<String> {
        self.hotel_info
            .get()
            .map(|info| render_hotel_info(info, self.renderer.as_ref()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transcript
    // ─────────────────────────────────────────────────────────────────────────

    /// Session identifier for this widget.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Snapshot of the transcript.
    pub fn messages(&self) -> Vec<Message> {
        read_lock(&self.transcript).to_vec()
    }

    /// Number of messages shown so far.
    pub fn message_count(&self) -> usize {
        read_lock(&self.transcript).len()
    }

    /// Most recent message.
    pub fn last_message(&self) -> Option<Message> {
        read_lock(&self.transcript).last().cloned()
    }

    fn append(&self, message: Message) {
        write_lock(&self.transcript).push(message.clone());
        self.view.message_appended(&message);
    }

    fn clear_input(&self) {
        write_lock(&self.input).clear();
        self.view.input_cleared();
    }
}

/// Holds the processing flag for the duration of one send.
///
/// Dropping it releases the flag on every exit path, including when the send
/// future itself is dropped mid-request.
struct ProcessingGuard<'a> {
    widget: &'a ChatWidget,
    typing: bool,
}

impl<'a> ProcessingGuard<'a> {
    fn acquire(widget: &'a ChatWidget) -> Option<Self> {
        widget
            .processing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                widget,
                typing: false,
            })
    }

    fn show_typing(&mut self) {
        self.typing = true;
        self.widget.view.typing_changed(true);
    }

    fn hide_typing(&mut self) {
        if self.typing {
            self.typing = false;
            self.widget.view.typing_changed(false);
        }
    }
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.hide_typing();
        self.widget.processing.store(false, Ordering::Release);
        self.widget.view.processing_changed(false);
    }
}

fn read_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
