//=========================================================================
// Inspector Errors
//=========================================================================
//
// Single error taxonomy shared by traversal, sinks, serialization and
// configuration loading.
//
// Missing keys are NOT errors: lookups resolve to `Node::Absent`.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::io;
use std::num::TryFromIntError;

//=== InspectError ========================================================

/// Errors raised by inspector operations.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// A table re-entered its own traversal path.
    ///
    /// `path` is the dotted key path of the entry that refers back to an
    /// enclosing table.
    #[error("cycle detected at `{path}`")]
    CycleDetected { path: String },

    /// Nesting went deeper than the configured traversal budget.
    #[error("nesting exceeds the depth budget of {limit}")]
    DepthExceeded { limit: usize },

    /// The underlying writer failed.
    #[error("sink write failed: {0}")]
    Io(#[from] io::Error),

    /// The receiving end of a channel sink is gone.
    #[error("sink receiver disconnected")]
    SinkClosed,

    /// Custom message raised through serde.
    #[error("{0}")]
    Custom(String),

    /// An integer did not fit the terminal integer range.
    #[error("{0}")]
    IntConversion(#[from] TryFromIntError),

    /// A map key that is neither a string nor an integer.
    #[error("invalid table key: {0}")]
    InvalidKey(String),

    /// Configuration text could not be parsed.
    #[error("invalid inspector config: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be rendered.
    #[error("config serialization failed: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

impl serde::ser::Error for InspectError {
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        InspectError::Custom(msg.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, InspectError>;

//=========================================================================
// Unit Tests
//=========================================================================
