//! Command interpreter and session state for the portfolio terminal.
//!
//! The interpreter is an enum-based dispatch over a fixed command set. The
//! registry parses a raw input line into a keyword and argument, resolves the
//! keyword to a [`Command`], and runs its handler against the read-only
//! profile. Handlers return rendered [`Line`]s plus a [`SideEffect`] that the
//! owning [`Session`] (or the shell) applies.

pub mod command;
pub mod effects;
pub mod format;
mod fun_commands;
mod interpreter;
pub mod line;
pub mod palette;
mod profile_commands;
pub mod session;

/// A recognised command keyword.
pub use command::Command;
/// Transient visual-effect flags with single-shot expiry.
pub use effects::{EffectTimer, Effects};
/// Output produced by dispatching one input line.
pub use interpreter::CommandOutput;
/// Registry of commands with dispatch and completion.
pub use interpreter::CommandRegistry;
/// User-facing command errors rendered as error lines.
pub use interpreter::{CommandError, ErrorKind};
/// Instruction for the host session or shell.
pub use interpreter::SideEffect;
/// Renderable terminal output.
pub use line::{ColorTag, Line, LineId, LineKind, Markup, ScrollbackEntry, Span, SpecialRender};
/// Named color palettes selectable with `theme`.
pub use palette::Palette;
/// One live interpreter instance.
pub use session::{HistoryCursor, HistoryDirection, Session};
