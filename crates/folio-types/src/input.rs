//! Platform-agnostic input gestures.
//!
//! The shell maps its native key and mouse events to these variants. The
//! session never sees raw terminal input.

/// A single gesture routed to the terminal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Character typed into the pending input.
    TextInput(char),
    /// Delete the last character of the pending input.
    Backspace,
    /// Submit the pending input (Enter).
    Submit,
    /// Recall the previous (older) history entry.
    HistoryUp,
    /// Recall the next (newer) history entry, or the saved draft.
    HistoryDown,
    /// Complete the pending input against the command keywords.
    TabComplete,
    /// Clear-screen shortcut (not part of the command text).
    ClearScreen,
    /// An actionable span was activated; re-submit its command.
    Activate(String),
    /// User asked to leave the shell.
    Quit,
}
