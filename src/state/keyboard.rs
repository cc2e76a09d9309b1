//! Keyboard Module - keyboard event types
//!
//! Host-agnostic key events. The carousel only cares about two keys:
//! `ArrowRight` moves forward and `ArrowLeft` moves back. Everything else is
//! ignored by the router.
//!
//! # Example
//!
//! ```ignore
//! use spark_carousel::state::keyboard::{KeyboardEvent, NavKey};
//!
//! let event = KeyboardEvent::new("ArrowRight");
//! assert_eq!(event.nav_key(), Some(NavKey::Next));
//! ```

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowLeft")
    pub key: String,
    pub modifiers: Modifiers,
    pub state: KeyState,
}

/// Carousel navigation keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Prev,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    pub fn with_state(mut self, state: KeyState) -> Self {
        self.state = state;
        self
    }

    /// Key-down: a press or an auto-repeat while held.
    pub fn is_key_down(&self) -> bool {
        matches!(self.state, KeyState::Press | KeyState::Repeat)
    }

    /// Navigation key carried by this event, if it is a key-down.
    /// Modifiers are not considered.
    pub fn nav_key(&self) -> Option<NavKey> {
        if !self.is_key_down() {
            return None;
        }
        match self.key.as_str() {
            "ArrowRight" => Some(NavKey::Next),
            "ArrowLeft" => Some(NavKey::Prev),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
