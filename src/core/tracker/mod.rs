//=========================================================================
// Tracker
//
// Host-side per-frame state and the update hooks that consume it.
//
// Frame:
// ```text
//   events ─→ InputTracker ─tick(dt)─→ snapshot Node { fps, keys }
//                                          │
//                      UpdateHook::update(inspector, snapshot, dt)
// ```
//
// Responsibilities:
// - Keep held keys and smoothed FPS (`InputTracker`)
// - Publish them as an inspectable Node
// - Run per-frame hooks (e.g. `Rotator`) against that Node
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod input_tracker;
mod rotator;

//=== External Crates =====================================================

use log::debug;

//=== Internal Imports ====================================================

use crate::core::error::Result;
use crate::core::node::Node;
use crate::inspector::Inspector;

//=== Public API ==========================================================

pub use event::{KeyCode, KeyEvent};
pub use input_tracker::{InputTracker, FPS_SMOOTHING};
pub use rotator::Rotator;

//=== UpdateHook ==========================================================

/// Per-frame state update fed with the tracker snapshot.
pub trait UpdateHook {
    /// Updates hook state for a frame of `dt` seconds.
    ///
    /// Returns `true` if the hook changed its state this frame.
    fn update(&mut self, inspector: &Inspector, snapshot: &Node, dt: f64) -> Result<bool>;
}

//--- run_frame() ---------------------------------------------------------
//
// One host frame:
//  1. Apply key transitions
//  2. Fold dt into the FPS average
//  3. Build the snapshot
//  4. Run every hook in order
//
// The first failing hook aborts the frame; hooks before it keep their
// updates.
//
pub fn run_frame(
    tracker: &mut InputTracker,
    events: &[KeyEvent],
    dt: f64,
    inspector: &Inspector,
    hooks: &mut [&mut dyn UpdateHook],
) -> Result<Node> {
    tracker.process_events(events);
    tracker.tick(dt);
    let snapshot = tracker.snapshot();

    let mut changed = 0;
    for hook in hooks.iter_mut() {
        if hook.update(inspector, &snapshot, dt)? {
            changed += 1;
        }
    }

    debug!(target: "tracker", "Frame done: {} hook(s) changed state", changed);
    Ok(snapshot)
}

//=========================================================================
// Unit Tests
//=========================================================================
