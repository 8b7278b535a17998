//! Modifier tracking and key event planning.

use webhands_protocols::{LogicalKey, NamedKey};

use crate::cdp::{KeyEventParams, KeyEventType};

/// Modifiers currently held down, in press order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModifierState {
    held: Vec<NamedKey>,
}

impl ModifierState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> &[NamedKey] {
        &self.held
    }

    pub fn is_held(&self, key: NamedKey) -> bool {
        self.held.contains(&key)
    }

    /// `Input.dispatchKeyEvent` modifier bit field.
    pub fn mask(&self) -> u8 {
        self.held
            .iter()
            .filter_map(|key| key.modifier_bit())
            .fold(0, |mask, bit| mask | bit)
    }

    /// Events for one key press, updating the held set.
    ///
    /// A modifier toggles: pressed when up, released when already held.
    pub fn press(&mut self, key: &LogicalKey) -> Vec<KeyEventParams> {
        match *key {
            LogicalKey::Named(named) if named.is_modifier() => vec![self.toggle(named)],
            LogicalKey::Named(named) => {
                let down_type = if named.text().is_some() {
                    KeyEventType::KeyDown
                } else {
                    KeyEventType::RawKeyDown
                };
                vec![
                    self.named_event(named, down_type, named.text()),
                    self.named_event(named, KeyEventType::KeyUp, None),
                ]
            }
            LogicalKey::Char(c) => {
                let c = if self.is_held(NamedKey::Shift) {
                    c.to_uppercase().next().unwrap_or(c)
                } else {
                    c
                };
                vec![
                    self.char_event(c, KeyEventType::KeyDown),
                    self.char_event(c, KeyEventType::KeyUp),
                ]
            }
        }
    }

    /// Release the most recently pressed modifier.
    pub fn release_last(&mut self) -> Option<KeyEventParams> {
        let key = self.held.pop()?;
        Some(self.named_event(key, KeyEventType::KeyUp, None))
    }

    /// Release every held modifier, most recent first.
    pub fn release_all(&mut self) -> Vec<KeyEventParams> {
        let mut events = Vec::with_capacity(self.held.len());
        while let Some(event) = self.release_last() {
            events.push(event);
        }
        events
    }

    fn toggle(&mut self, key: NamedKey) -> KeyEventParams {
        if let Some(pos) = self.held.iter().position(|k| *k == key) {
            self.held.remove(pos);
            self.named_event(key, KeyEventType::KeyUp, None)
        } else {
            self.held.push(key);
            self.named_event(key, KeyEventType::RawKeyDown, None)
        }
    }

    fn named_event(
        &self,
        key: NamedKey,
        event_type: KeyEventType,
        text: Option<&str>,
    ) -> KeyEventParams {
        KeyEventParams {
            event_type,
            modifiers: self.mask(),
            key: key.key().to_string(),
            code: key.code().to_string(),
            text: text.map(str::to_string),
            windows_virtual_key_code: Some(key.key_code()),
        }
    }

    fn char_event(&self, c: char, event_type: KeyEventType) -> KeyEventParams {
        let text = (event_type == KeyEventType::KeyDown).then(|| c.to_string());
        KeyEventParams {
            event_type,
            modifiers: self.mask(),
            key: c.to_string(),
            code: char_code(c),
            text,
            windows_virtual_key_code: char_key_code(c),
        }
    }
}

/// Physical key code for ASCII letters and digits; empty otherwise.
fn char_code(c: char) -> String {
    if c.is_ascii_alphabetic() {
        format!("Key{}", c.to_ascii_uppercase())
    } else if c.is_ascii_digit() {
        format!("Digit{}", c)
    } else {
        String::new()
    }
}

fn char_key_code(c: char) -> Option<u32> {
    c.is_ascii_alphanumeric().then(|| c.to_ascii_uppercase() as u32)
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
