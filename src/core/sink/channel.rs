//=========================================================================
// Channel Sink
//
// Hands dump lines to another thread over a crossbeam channel, e.g. a
// console or logging thread owned by the host.
//
// ```text
//   Host thread                       Consumer thread
//   ┌─────────────────┐              ┌──────────────────┐
//   │ dump() ─→ sink ─┼── String ───→│ rx.recv() → out  │
//   └─────────────────┘              └──────────────────┘
// ```
//
// Nodes themselves never cross the boundary (they are `!Send`); only owned
// line strings do.
//
//=========================================================================

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::warn;

//=== Internal Imports ====================================================

use super::DumpSink;
use crate::core::error::{InspectError, Result};

//=== ChannelSink =========================================================

/// Sends each line as an owned `String`.
///
/// A disconnected receiver fails the write with
/// [`InspectError::SinkClosed`], which aborts the running dump.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: Sender<String>,
}

impl ChannelSink {
    pub fn new(sender: Sender<String>) -> Self {
        Self { sender }
    }
}

impl DumpSink for ChannelSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.sender.send(line.to_owned()).map_err(|_| {
            warn!(target: "inspector", "Channel sink receiver disconnected, dropping output");
            InspectError::SinkClosed
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
