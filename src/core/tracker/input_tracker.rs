//=========================================================================
// Input Tracker
//=========================================================================
//
// Per-frame host state published to scripts as a Node:
//
// ```text
//   { fps = <smoothed frames per second>,
//     keys = { 1 = "W", 2 = "Space", ... } }   -- held keys, press order
// ```
//
// Frame lifecycle: process_events() → tick(dt) → snapshot()
//
//=========================================================================

//=== External Crates =====================================================

use log::{trace, warn};

//=== Internal Imports ====================================================

use super::event::{KeyCode, KeyEvent};
use crate::core::node::{Node, Table};

//=== Constants ===========================================================

/// Weight of the newest frame in the FPS moving average.
pub const FPS_SMOOTHING: f64 = 0.1;

//=== InputTracker ========================================================

/// Tracks held keys and a smoothed frame rate.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    /// Held keys in the order they were pressed.
    keys_down: Vec<KeyCode>,

    /// Smoothed FPS; `None` until the first valid tick.
    fps: Option<f64>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Event Processing -------------------------------------------------

    /// Applies a batch of key transitions in order.
    pub fn process_events(&mut self, events: &[KeyEvent]) {
        for event in events {
            match *event {
                KeyEvent::Down(key) => {
                    self.press(key);
                }
                KeyEvent::Up(key) => {
                    self.release(key);
                }
            }
        }
    }

    /// Marks `key` as held. Returns `true` if it was not held before.
    pub fn press(&mut self, key: KeyCode) -> bool {
        if self.keys_down.contains(&key) {
            return false;
        }
        self.keys_down.push(key);
        true
    }

    /// Marks `key` as released. Returns `true` if it was held.
    pub fn release(&mut self, key: KeyCode) -> bool {
        let before = self.keys_down.len();
        self.keys_down.retain(|held| *held != key);
        self.keys_down.len() != before
    }

    //--- Frame Timing -----------------------------------------------------

    /// Folds one frame duration (seconds) into the FPS average.
    ///
    /// The first valid tick seeds the average. Non-positive or non-finite
    /// durations are ignored.
    pub fn tick(&mut self, dt: f64) {
        if !(dt.is_finite() && dt > 0.0) {
            warn!(target: "tracker", "Ignoring invalid frame time {}", dt);
            return;
        }

        let instant = 1.0 / dt;
        let fps = match self.fps {
            Some(fps) => fps + (instant - fps) * FPS_SMOOTHING,
            None => instant,
        };
        trace!(target: "tracker", "fps {:.2} (frame {:.2})", fps, instant);
        self.fps = Some(fps);
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` while `key` is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Held keys in press order.
    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }

    /// Smoothed frames per second (0 before the first tick).
    pub fn fps(&self) -> f64 {
        self.fps.unwrap_or(0.0)
    }

    /// Builds the `{ fps, keys }` node handed to scripts and hooks.
    pub fn snapshot(&self) -> Node {
        let state = Table::new();
        state.set("fps", self.fps());
        state.set(
            "keys",
            Node::sequence(self.keys_down.iter().map(|key| key.name())),
        );
        state.into()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
