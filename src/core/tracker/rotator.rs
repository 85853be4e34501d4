//=========================================================================
// Rotator
//=========================================================================
//
// Per-frame state update driven by a tracker snapshot: while the trigger
// key name is in `snapshot.keys`, the angle advances by `rate * dt`.
//
//=========================================================================

//=== Internal Imports ====================================================

use super::UpdateHook;
use crate::core::error::Result;
use crate::core::node::{Key, Node};
use crate::inspector::Inspector;

//=== Rotator =============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Rotator {
    trigger: String,
    rate: f64,
    angle: f64,
}

impl Rotator {
    /// Creates a rotator that turns at `rate` units per second while the
    /// key named `trigger` is held.
    pub fn new(trigger: impl Into<String>, rate: f64) -> Self {
        Self {
            trigger: trigger.into(),
            rate,
            angle: 0.0,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }
}

impl UpdateHook for Rotator {
    fn update(&mut self, inspector: &Inspector, snapshot: &Node, dt: f64) -> Result<bool> {
        let keys = snapshot.lookup(&Key::from("keys"));
        if !inspector.contains(&keys, &Node::from(self.trigger.as_str()))? {
            return Ok(false);
        }
        self.angle += self.rate * dt;
        Ok(true)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tracker::{InputTracker, KeyCode};

    #[test]
    fn advances_only_while_trigger_is_held() {
        let inspector = Inspector::new();
        let mut tracker = InputTracker::new();
        let mut rotator = Rotator::new("R", 2.0);

        assert!(!rotator.update(&inspector, &tracker.snapshot(), 0.5).unwrap());
        assert_eq!(rotator.angle(), 0.0);

        tracker.press(KeyCode::KeyR);
        assert!(rotator.update(&inspector, &tracker.snapshot(), 0.5).unwrap());
        assert_eq!(rotator.angle(), 1.0);

        tracker.release(KeyCode::KeyR);
        assert!(!rotator.update(&inspector, &tracker.snapshot(), 0.5).unwrap());
        assert_eq!(rotator.angle(), 1.0);
    }

    #[test]
    fn snapshot_without_keys_is_a_no_op() {
        let inspector = Inspector::new();
        let mut rotator = Rotator::new("Space", 1.0);

        assert!(!rotator.update(&inspector, &Node::composite(), 1.0).unwrap());
        assert!(!rotator.update(&inspector, &Node::Absent, 1.0).unwrap());
        assert_eq!(rotator.trigger(), "Space");
    }
}
