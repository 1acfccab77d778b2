//! Keyboard sampling
//!
//! Terminals report key events, not key state. [`KeyTracker`] turns the event
//! stream into "held right now" booleans for [`TickInput`]:
//! * Terminals with keyboard enhancement send `Release`. Once the tracker
//!   knows releases arrive, a key stays held until its `Release`.
//! * Classic terminals only repeat `Press` while a key is down, so a key stays
//!   held while its last press is within the hold window.
//!
//! Edge detection for fire is the simulation's job, not this module's.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::TickInput;

/// Gameplay actions a key can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Action {
    AimLeft,
    AimRight,
    Fire,
}

/// Requests for the host itself rather than the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Quit,
}

fn action_for(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::AimLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::AimRight),
        KeyCode::Char(' ') => Some(Action::Fire),
        _ => None,
    }
}

fn is_quit(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Tracks which actions are currently held
#[derive(Debug, Clone)]
pub struct KeyTracker {
    last_seen: HashMap<Action, Instant>,
    hold_window: Duration,
    /// Set up front by the host or latched by the first `Release` event
    reports_releases: bool,
}

impl KeyTracker {
    pub fn new(hold_window: Duration) -> Self {
        Self {
            last_seen: HashMap::new(),
            hold_window,
            reports_releases: false,
        }
    }

    /// Declare whether the terminal sends key-release events
    pub fn with_release_events(mut self, reports_releases: bool) -> Self {
        self.reports_releases = reports_releases;
        self
    }

    pub fn reports_releases(&self) -> bool {
        self.reports_releases
    }

    /// Feed one key event; returns a command when the host should act on it
    pub fn handle(&mut self, event: &KeyEvent, now: Instant) -> Option<HostCommand> {
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if event.kind == KeyEventKind::Press && is_quit(event) {
                    return Some(HostCommand::Quit);
                }
                if let Some(action) = action_for(event.code) {
                    self.last_seen.insert(action, now);
                }
            }
            KeyEventKind::Release => {
                if !self.reports_releases {
                    log::debug!("Terminal reports key releases");
                    self.reports_releases = true;
                }
                if let Some(action) = action_for(event.code) {
                    self.last_seen.remove(&action);
                }
            }
        }
        None
    }

    fn is_held(&self, action: Action, now: Instant) -> bool {
        match self.last_seen.get(&action) {
            Some(_) if self.reports_releases => true,
            Some(&seen) => now.saturating_duration_since(seen) <= self.hold_window,
            None => false,
        }
    }

    /// Held-key snapshot for this frame
    pub fn sample(&self, now: Instant) -> TickInput {
        TickInput {
            aim_left: self.is_held(Action::AimLeft, now),
            aim_right: self.is_held(Action::AimRight, now),
            fire: self.is_held(Action::Fire, now),
        }
    }
}
