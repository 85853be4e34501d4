//=========================================================================
// Key Events
//
// Host-supplied keyboard transitions, already translated from whatever
// windowing layer the host runs. The tracker only needs a stable key
// identity and its script-facing name.
//
// Event Flow:
// ```text
// Host window layer
//         ↓
//    KeyEvent (this module)
//         ↓
//    InputTracker  →  snapshot Node { fps, keys }
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// `name()` gives the string that appears in tracker snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Minus,
    Equals,

    /// Any key the host could not identify.
    Unidentified,
}

impl KeyCode {
    /// Script-facing key name (`"A"`, `"7"`, `"Left"`, `"Space"`, ...).
    pub fn name(self) -> &'static str {
        use KeyCode::*;
        match self {
            Digit0 => "0", Digit1 => "1", Digit2 => "2", Digit3 => "3", Digit4 => "4",
            Digit5 => "5", Digit6 => "6", Digit7 => "7", Digit8 => "8", Digit9 => "9",

            KeyA => "A", KeyB => "B", KeyC => "C", KeyD => "D", KeyE => "E",
            KeyF => "F", KeyG => "G", KeyH => "H", KeyI => "I", KeyJ => "J",
            KeyK => "K", KeyL => "L", KeyM => "M", KeyN => "N", KeyO => "O",
            KeyP => "P", KeyQ => "Q", KeyR => "R", KeyS => "S", KeyT => "T",
            KeyU => "U", KeyV => "V", KeyW => "W", KeyX => "X", KeyY => "Y",
            KeyZ => "Z",

            ArrowDown => "Down",
            ArrowLeft => "Left",
            ArrowRight => "Right",
            ArrowUp => "Up",

            Space => "Space",
            Enter => "Enter",
            Escape => "Escape",
            Tab => "Tab",
            Backspace => "Backspace",
            Delete => "Delete",
            Minus => "Minus",
            Equals => "Equals",

            Unidentified => "Unknown",
        }
    }
}

//=== KeyEvent ============================================================

/// A keyboard transition reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// Key pressed down.
    Down(KeyCode),

    /// Key released.
    Up(KeyCode),
}

impl KeyEvent {
    pub fn key(self) -> KeyCode {
        match self {
            Self::Down(key) | Self::Up(key) => key,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
