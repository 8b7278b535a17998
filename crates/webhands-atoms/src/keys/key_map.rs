//! WebDriver key code table.
//!
//! The wire protocol encodes non-printable keys as private-use code points in
//! `U+E000..=U+E03D`.

use std::ops::RangeInclusive;

use webhands_protocols::NamedKey;

/// Code points reserved for WebDriver key codes.
pub const WEBDRIVER_KEY_RANGE: RangeInclusive<char> = '\u{E000}'..='\u{E03D}';

/// What a WebDriver key code stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMapping {
    /// `U+E000`: release every held modifier.
    ReleaseModifiers,
    Key(NamedKey),
}

#[inline]
pub fn is_webdriver_key(c: char) -> bool {
    WEBDRIVER_KEY_RANGE.contains(&c)
}

/// Look up a WebDriver key code. `None` for codes without a mapping.
pub fn lookup_key(code: char) -> Option<KeyMapping> {
    use NamedKey::*;

    let key = match code {
        '\u{E000}' => return Some(KeyMapping::ReleaseModifiers),
        '\u{E003}' => Backspace,
        '\u{E004}' => Tab,
        // Return and Enter both type Enter.
        '\u{E006}' | '\u{E007}' => Enter,
        '\u{E008}' => Shift,
        '\u{E009}' => Control,
        '\u{E00A}' => Alt,
        '\u{E00B}' => Pause,
        '\u{E00C}' => Escape,
        '\u{E00D}' => Space,
        '\u{E00E}' => PageUp,
        '\u{E00F}' => PageDown,
        '\u{E010}' => End,
        '\u{E011}' => Home,
        '\u{E012}' => Left,
        '\u{E013}' => Up,
        '\u{E014}' => Right,
        '\u{E015}' => Down,
        '\u{E016}' => Insert,
        '\u{E017}' => Delete,
        '\u{E018}' => Semicolon,
        '\u{E019}' => Equals,
        '\u{E01A}' => Numpad0,
        '\u{E01B}' => Numpad1,
        '\u{E01C}' => Numpad2,
        '\u{E01D}' => Numpad3,
        '\u{E01E}' => Numpad4,
        '\u{E01F}' => Numpad5,
        '\u{E020}' => Numpad6,
        '\u{E021}' => Numpad7,
        '\u{E022}' => Numpad8,
        '\u{E023}' => Numpad9,
        '\u{E024}' => NumpadMultiply,
        '\u{E025}' => NumpadAdd,
        '\u{E026}' => Separator,
        '\u{E027}' => NumpadSubtract,
        '\u{E028}' => NumpadDecimal,
        '\u{E029}' => NumpadDivide,
        '\u{E031}' => F1,
        '\u{E032}' => F2,
        '\u{E033}' => F3,
        '\u{E034}' => F4,
        '\u{E035}' => F5,
        '\u{E036}' => F6,
        '\u{E037}' => F7,
        '\u{E038}' => F8,
        '\u{E039}' => F9,
        '\u{E03A}' => F10,
        '\u{E03B}' => F11,
        '\u{E03C}' => F12,
        '\u{E03D}' => Meta,
        _ => return None,
    };
    Some(KeyMapping::Key(key))
}
