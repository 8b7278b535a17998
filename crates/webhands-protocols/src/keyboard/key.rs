//! Logical key definitions.

use serde::Serialize;

// ============================================================================
// Named Keys
// ============================================================================

/// Symbolic, non-character keyboard keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NamedKey {
    Backspace,
    Tab,
    Enter,
    Shift,
    Control,
    Alt,
    Meta,
    Pause,
    Escape,
    Space,
    PageUp,
    PageDown,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    Insert,
    Delete,
    Semicolon,
    Equals,
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadMultiply,
    NumpadAdd,
    Separator,
    NumpadSubtract,
    NumpadDecimal,
    NumpadDivide,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

impl NamedKey {
    /// Returns the key properties: (key, code, keyCode).
    #[must_use]
    pub fn properties(self) -> (&'static str, &'static str, u32) {
        match self {
            NamedKey::Backspace => ("Backspace", "Backspace", 8),
            NamedKey::Tab => ("Tab", "Tab", 9),
            NamedKey::Enter => ("Enter", "Enter", 13),
            NamedKey::Shift => ("Shift", "ShiftLeft", 16),
            NamedKey::Control => ("Control", "ControlLeft", 17),
            NamedKey::Alt => ("Alt", "AltLeft", 18),
            NamedKey::Meta => ("Meta", "MetaLeft", 91),
            NamedKey::Pause => ("Pause", "Pause", 19),
            NamedKey::Escape => ("Escape", "Escape", 27),
            NamedKey::Space => (" ", "Space", 32),
            NamedKey::PageUp => ("PageUp", "PageUp", 33),
            NamedKey::PageDown => ("PageDown", "PageDown", 34),
            NamedKey::End => ("End", "End", 35),
            NamedKey::Home => ("Home", "Home", 36),
            NamedKey::Left => ("ArrowLeft", "ArrowLeft", 37),
            NamedKey::Up => ("ArrowUp", "ArrowUp", 38),
            NamedKey::Right => ("ArrowRight", "ArrowRight", 39),
            NamedKey::Down => ("ArrowDown", "ArrowDown", 40),
            NamedKey::Insert => ("Insert", "Insert", 45),
            NamedKey::Delete => ("Delete", "Delete", 46),
            NamedKey::Semicolon => (";", "Semicolon", 186),
            NamedKey::Equals => ("=", "Equal", 187),
            NamedKey::Numpad0 => ("0", "Numpad0", 96),
            NamedKey::Numpad1 => ("1", "Numpad1", 97),
            NamedKey::Numpad2 => ("2", "Numpad2", 98),
            NamedKey::Numpad3 => ("3", "Numpad3", 99),
            NamedKey::Numpad4 => ("4", "Numpad4", 100),
            NamedKey::Numpad5 => ("5", "Numpad5", 101),
            NamedKey::Numpad6 => ("6", "Numpad6", 102),
            NamedKey::Numpad7 => ("7", "Numpad7", 103),
            NamedKey::Numpad8 => ("8", "Numpad8", 104),
            NamedKey::Numpad9 => ("9", "Numpad9", 105),
            NamedKey::NumpadMultiply => ("*", "NumpadMultiply", 106),
            NamedKey::NumpadAdd => ("+", "NumpadAdd", 107),
            NamedKey::Separator => (",", "NumpadComma", 108),
            NamedKey::NumpadSubtract => ("-", "NumpadSubtract", 109),
            NamedKey::NumpadDecimal => (".", "NumpadDecimal", 110),
            NamedKey::NumpadDivide => ("/", "NumpadDivide", 111),
            NamedKey::F1 => ("F1", "F1", 112),
            NamedKey::F2 => ("F2", "F2", 113),
            NamedKey::F3 => ("F3", "F3", 114),
            NamedKey::F4 => ("F4", "F4", 115),
            NamedKey::F5 => ("F5", "F5", 116),
            NamedKey::F6 => ("F6", "F6", 117),
            NamedKey::F7 => ("F7", "F7", 118),
            NamedKey::F8 => ("F8", "F8", 119),
            NamedKey::F9 => ("F9", "F9", 120),
            NamedKey::F10 => ("F10", "F10", 121),
            NamedKey::F11 => ("F11", "F11", 122),
            NamedKey::F12 => ("F12", "F12", 123),
        }
    }

    /// Returns the DOM `key` value.
    #[inline]
    #[must_use]
    pub fn key(self) -> &'static str {
        self.properties().0
    }

    /// Returns the DOM `code` value.
    #[inline]
    #[must_use]
    pub fn code(self) -> &'static str {
        self.properties().1
    }

    /// Returns the legacy keyCode.
    #[inline]
    #[must_use]
    pub fn key_code(self) -> u32 {
        self.properties().2
    }

    /// Text inserted by the key, if it produces any.
    #[must_use]
    pub fn text(self) -> Option<&'static str> {
        match self {
            NamedKey::Enter => Some("\r"),
            NamedKey::Tab => Some("\t"),
            NamedKey::Space
            | NamedKey::Semicolon
            | NamedKey::Equals
            | NamedKey::Numpad0
            | NamedKey::Numpad1
            | NamedKey::Numpad2
            | NamedKey::Numpad3
            | NamedKey::Numpad4
            | NamedKey::Numpad5
            | NamedKey::Numpad6
            | NamedKey::Numpad7
            | NamedKey::Numpad8
            | NamedKey::Numpad9
            | NamedKey::NumpadMultiply
            | NamedKey::NumpadAdd
            | NamedKey::Separator
            | NamedKey::NumpadSubtract
            | NamedKey::NumpadDecimal
            | NamedKey::NumpadDivide => Some(self.key()),
            _ => None,
        }
    }

    /// Bit used for this key in a modifier mask, `None` for non-modifiers.
    ///
    /// Alt=1, Control=2, Meta=4, Shift=8.
    #[must_use]
    pub fn modifier_bit(self) -> Option<u8> {
        match self {
            NamedKey::Alt => Some(1),
            NamedKey::Control => Some(2),
            NamedKey::Meta => Some(4),
            NamedKey::Shift => Some(8),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_modifier(self) -> bool {
        self.modifier_bit().is_some()
    }
}

// ============================================================================
// Logical Keys and Batches
// ============================================================================

/// A key to type: either literal text or a symbolic key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum LogicalKey {
    Char(char),
    Named(NamedKey),
}

impl From<char> for LogicalKey {
    fn from(c: char) -> Self {
        LogicalKey::Char(c)
    }
}

impl From<NamedKey> for LogicalKey {
    fn from(key: NamedKey) -> Self {
        LogicalKey::Named(key)
    }
}

/// Keys typed together under one modifier-persistence setting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct KeyBatch {
    pub keys: Vec<LogicalKey>,
    /// Keep modifier keys pressed after this batch.
    pub persist: bool,
}

impl KeyBatch {
    pub fn new(persist: bool) -> Self {
        Self {
            keys: Vec::new(),
            persist,
        }
    }

    pub fn with_keys(persist: bool, keys: impl IntoIterator<Item = LogicalKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            persist,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
