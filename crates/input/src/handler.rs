//! Held-key tracking for terminal environments.
//!
//! Terminals only report key events, not key state. A key counts as held from
//! its press until its release event; terminals that never send release events
//! get a timeout instead.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::debug;

use crate::map::map_key_event;
use crate::types::LogicalKey;
use spincube_engine::InputSource;

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state once auto-repeat has started.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

// Before the first auto-repeat the gap is the OS repeat delay (X11 defaults to
// 660 ms), so a fresh press must outlive it or one hold would fire twice.
const DEFAULT_INITIAL_REPEAT_DELAY_MS: u64 = 700;

#[derive(Debug, Clone, Copy)]
struct Hold {
    last_event: Instant,
    repeating: bool,
}

/// Current held state of every logical key.
#[derive(Debug, Clone)]
pub struct KeyboardState {
    holds: [Option<Hold>; LogicalKey::COUNT],
    release_timeout: Duration,
    initial_repeat_delay: Duration,
    saw_release: bool,
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    pub fn new() -> Self {
        Self {
            holds: [None; LogicalKey::COUNT],
            release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
            initial_repeat_delay: Duration::from_millis(DEFAULT_INITIAL_REPEAT_DELAY_MS),
            saw_release: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.release_timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub fn with_initial_repeat_delay_ms(mut self, delay_ms: u64) -> Self {
        self.initial_repeat_delay = Duration::from_millis(delay_ms);
        self
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.release_timeout
    }

    pub fn initial_repeat_delay(&self) -> Duration {
        self.initial_repeat_delay
    }

    /// Whether the terminal has been observed sending release events.
    pub fn reports_releases(&self) -> bool {
        self.saw_release
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        let Some(logical) = map_key_event(key) else {
            return;
        };
        let slot = &mut self.holds[logical.index()];
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                *slot = Some(Hold {
                    last_event: now,
                    repeating: slot.is_some(),
                });
            }
            KeyEventKind::Release => {
                if !self.saw_release {
                    debug!("terminal reports key releases; disabling release timeout");
                    self.saw_release = true;
                }
                *slot = None;
            }
        }
    }

    /// Auto-release keys not refreshed in time.
    ///
    /// A key that has not repeated yet gets the initial repeat delay, after
    /// that the shorter release timeout. Does nothing once the terminal has
    /// proven it sends release events.
    pub fn expire(&mut self, now: Instant) {
        if self.saw_release {
            return;
        }
        for slot in self.holds.iter_mut() {
            if let Some(hold) = *slot {
                let limit = if hold.repeating {
                    self.release_timeout
                } else {
                    self.initial_repeat_delay
                };
                if now.saturating_duration_since(hold.last_event) > limit {
                    *slot = None;
                }
            }
        }
    }

    pub fn is_held(&self, key: LogicalKey) -> bool {
        self.holds[key.index()].is_some()
    }
}

impl InputSource for KeyboardState {
    fn poll(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key_event(key, Instant::now());
            }
        }
        self.expire(Instant::now());
        Ok(())
    }

    fn is_pressed(&self, key: LogicalKey) -> bool {
        self.is_held(key)
    }
}
