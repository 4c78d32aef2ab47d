//! Observer seam between the widget and whatever displays it.

use super::PanelState;
use crate::session::Message;

/// Receives display updates from a [`super::ChatWidget`].
///
/// All methods default to no-ops so a front-end only implements what it
/// shows. Calls arrive in the order the widget performs the steps.
pub trait WidgetView: Send + Sync {
    /// A message was appended to the transcript.
    fn message_appended(&self, _message: &Message) {}

    /// The text input was emptied after a send.
    fn input_cleared(&self) {}

    /// Controls were locked (`true`) or released (`false`).
    ///
    /// `false` is always the last notification of a send and doubles as the
    /// signal to give focus back to the input.
    fn processing_changed(&self, _processing: bool) {}

    /// The "typing" indicator was shown or hidden.
    fn typing_changed(&self, _typing: bool) {}

    /// The info panel was toggled. `content` is the memoized panel, if any.
    fn panel_changed(&self, _state: PanelState, _content: Option<&str>) {}
}

/// View that ignores every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopView;

impl WidgetView for NoopView {}
