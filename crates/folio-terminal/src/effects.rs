//! Transient visual-effect flags with single-shot expiry.
//!
//! Time is passed in explicitly; nothing here reads the clock. A trigger while
//! an effect is already active restarts its deadline rather than stacking.

use std::time::{Duration, Instant};

use folio_types::config::TerminalConfig;

/// A cancellable single-shot deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectTimer {
    duration: Duration,
    deadline: Option<Instant>,
}

impl EffectTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            deadline: None,
        }
    }

    /// Start, or restart, the timer at `now`.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.duration);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Expire the timer if its deadline has passed. Returns true exactly once
    /// per expiry.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            },
            _ => false,
        }
    }
}

/// The two ambient effects the interpreter can toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effects {
    matrix_boost: EffectTimer,
    glitch: EffectTimer,
}

impl Effects {
    pub fn new(boost_duration: Duration, glitch_duration: Duration) -> Self {
        Self {
            matrix_boost: EffectTimer::new(boost_duration),
            glitch: EffectTimer::new(glitch_duration),
        }
    }

    pub fn from_config(config: &TerminalConfig) -> Self {
        Self::new(config.matrix_boost_duration(), config.glitch_duration())
    }

    pub fn matrix_boost(&self) -> bool {
        self.matrix_boost.is_active()
    }

    pub fn glitch_active(&self) -> bool {
        self.glitch.is_active()
    }

    pub fn boost(&mut self, now: Instant) {
        log::info!("Matrix boost on");
        self.matrix_boost.trigger(now);
    }

    pub fn glitch(&mut self, now: Instant) {
        log::info!("Glitch effect on");
        self.glitch.trigger(now);
    }

    /// Expire whatever is due. Returns true if any flag changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let boost_done = self.matrix_boost.tick(now);
        let glitch_done = self.glitch.tick(now);
        if boost_done {
            log::debug!("Matrix boost expired");
        }
        if glitch_done {
            log::debug!("Glitch effect expired");
        }
        boost_done || glitch_done
    }

    /// Earliest pending expiry, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.matrix_boost.deadline(), self.glitch.deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    pub fn cancel_all(&mut self) {
        self.matrix_boost.cancel();
        self.glitch.cancel();
    }
}

impl Default for Effects {
    fn default() -> Self {
        Self::new(Duration::from_millis(5000), Duration::from_millis(2000))
    }
}
