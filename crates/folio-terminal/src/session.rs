//! Session state: scrollback, pending input, history browsing, and effects.
//!
//! A [`Session`] is created once per shell, seeded with the welcome sequence,
//! and owned exclusively by that shell. All mutation happens inside the
//! input handlers below; the only deferred work is effect expiry, which the
//! owner drives through [`Session::tick`].

use std::time::Instant;

use folio_types::config::TerminalConfig;
use folio_types::input::InputEvent;

use crate::effects::Effects;
use crate::format::input_echo;
use crate::interpreter::{CommandRegistry, SideEffect};
use crate::line::{Line, LineId, ScrollbackEntry};

/// Position while browsing history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryCursor {
    /// At the live edit, not browsing.
    #[default]
    None,
    /// Index into the most-recent-first history.
    At(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Towards older entries.
    Up,
    /// Towards newer entries, then back to the draft.
    Down,
}

/// One live interpreter instance.
pub struct Session {
    registry: CommandRegistry,
    scrollback: Vec<ScrollbackEntry>,
    next_id: u64,
    pending: String,
    /// Most recent first. Duplicates allowed.
    history: Vec<String>,
    cursor: HistoryCursor,
    saved_draft: String,
    effects: Effects,
    disposed: bool,
}

impl Session {
    pub fn new(registry: CommandRegistry, config: &TerminalConfig) -> Self {
        let mut session = Self {
            registry,
            scrollback: Vec::new(),
            next_id: 0,
            pending: String::new(),
            history: Vec::new(),
            cursor: HistoryCursor::None,
            saved_draft: String::new(),
            effects: Effects::from_config(config),
            disposed: false,
        };
        session.reset_scrollback();
        session
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn scrollback(&self) -> &[ScrollbackEntry] {
        &self.scrollback
    }

    pub fn pending_input(&self) -> &str {
        &self.pending
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_cursor(&self) -> HistoryCursor {
        self.cursor
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Route one gesture. Returns the side effect the shell still has to run
    /// (download, palette); effect timers are handled here.
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) -> SideEffect {
        if self.disposed {
            return SideEffect::None;
        }
        match event {
            InputEvent::TextInput(c) => self.pending.push(c),
            InputEvent::Backspace => {
                self.pending.pop();
            },
            InputEvent::Submit => {
                let raw = std::mem::take(&mut self.pending);
                return self.submit(&raw, now);
            },
            InputEvent::HistoryUp => self.navigate_history(HistoryDirection::Up),
            InputEvent::HistoryDown => self.navigate_history(HistoryDirection::Down),
            InputEvent::TabComplete => self.pending = self.tab_complete(&self.pending),
            InputEvent::ClearScreen => self.clear(),
            InputEvent::Activate(command) => return self.activate(&command, now),
            InputEvent::Quit => self.dispose(),
        }
        SideEffect::None
    }

    /// Submit one raw line as if typed and entered.
    pub fn submit(&mut self, raw: &str, now: Instant) -> SideEffect {
        let trimmed = raw.trim();
        let output = self.registry.execute(trimmed);

        if output.effect == SideEffect::ClearScreen {
            self.clear();
        } else {
            self.push(input_echo(trimmed));
            for line in output.lines {
                self.push(line);
            }
        }

        if !trimmed.is_empty() {
            self.history.insert(0, trimmed.to_string());
        }
        self.cursor = HistoryCursor::None;
        self.saved_draft.clear();
        self.pending.clear();

        match output.effect {
            SideEffect::BoostVisualEffect => self.effects.boost(now),
            SideEffect::TriggerGlitchEffect => self.effects.glitch(now),
            _ => {},
        }
        output.effect
    }

    /// A click on an actionable span.
    pub fn activate(&mut self, command: &str, now: Instant) -> SideEffect {
        log::debug!("activate {command:?}");
        self.submit(command, now)
    }

    pub fn navigate_history(&mut self, direction: HistoryDirection) {
        match direction {
            HistoryDirection::Up => {
                let next = match self.cursor {
                    HistoryCursor::None => 0,
                    HistoryCursor::At(i) => i + 1,
                };
                let Some(entry) = self.history.get(next) else {
                    return;
                };
                if self.cursor == HistoryCursor::None {
                    self.saved_draft = self.pending.clone();
                }
                self.pending = entry.clone();
                self.cursor = HistoryCursor::At(next);
            },
            HistoryDirection::Down => match self.cursor {
                HistoryCursor::None => {},
                HistoryCursor::At(0) => {
                    self.cursor = HistoryCursor::None;
                    self.pending = std::mem::take(&mut self.saved_draft);
                },
                HistoryCursor::At(i) => {
                    self.cursor = HistoryCursor::At(i - 1);
                    self.pending = self.history[i - 1].clone();
                },
            },
        }
    }

    /// Complete `partial` when exactly one keyword matches; otherwise return
    /// it unchanged.
    pub fn tab_complete(&self, partial: &str) -> String {
        let normalized = partial.trim().to_lowercase();
        if normalized.is_empty() {
            return partial.to_string();
        }
        match self.registry.completions(&normalized).as_slice() {
            [only] => (*only).to_string(),
            _ => partial.to_string(),
        }
    }

    /// Replace the scrollback with a fresh welcome sequence. History and the
    /// pending input are untouched.
    pub fn clear(&mut self) {
        log::info!("Scrollback cleared");
        self.reset_scrollback();
    }

    /// Expire due effects. Returns true if a flag changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        self.effects.tick(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.effects.next_deadline()
    }

    /// Cancel pending expiries and stop accepting input.
    pub fn dispose(&mut self) {
        self.effects.cancel_all();
        self.disposed = true;
    }

    fn reset_scrollback(&mut self) {
        self.scrollback.clear();
        for line in self.registry.welcome() {
            self.push(line);
        }
    }

    fn push(&mut self, line: Line) {
        let id = LineId(self.next_id);
        self.next_id += 1;
        self.scrollback.push(ScrollbackEntry { id, line });
    }
}
