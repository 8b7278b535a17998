//! Key sequence segmentation.

use std::mem;

use tracing::trace;
use webhands_protocols::{KeyBatch, KeyError, LogicalKey, NamedKey};

use super::key_map::{KeyMapping, is_webdriver_key, lookup_key};

/// Splits WebDriver key sequences into executor batches.
pub struct KeySequenceTranslator;

impl KeySequenceTranslator {
    /// Translate `sequences` into batches, in execution order.
    ///
    /// Sequence boundaries carry no meaning; the characters are processed as
    /// one stream. The first batch is always present, even if empty.
    ///
    /// A release code (`U+E000`) closes the current batch. With
    /// `persist_modifiers` set it also emits an empty non-persisting batch so
    /// the executor really releases the modifiers before the next persisted
    /// batch starts. Repeated release codes each produce their own batches.
    pub fn translate<S: AsRef<str>>(
        sequences: &[S],
        persist_modifiers: bool,
    ) -> Result<Vec<KeyBatch>, KeyError> {
        let mut batches = Vec::new();
        let mut current = KeyBatch::new(persist_modifiers);

        for key in sequences.iter().flat_map(|s| s.as_ref().chars()) {
            if !is_webdriver_key(key) {
                current.keys.push(Self::control_alias(key));
                continue;
            }

            match lookup_key(key) {
                Some(KeyMapping::ReleaseModifiers) => {
                    batches.push(mem::replace(&mut current, KeyBatch::new(persist_modifiers)));
                    if persist_modifiers {
                        current.persist = false;
                        batches.push(mem::replace(&mut current, KeyBatch::new(persist_modifiers)));
                    }
                }
                Some(KeyMapping::Key(named)) => current.keys.push(LogicalKey::Named(named)),
                None => return Err(KeyError::UnsupportedKey { code: key as u32 }),
            }
        }
        batches.push(current);

        trace!("Translated key sequences into {} batches", batches.len());
        Ok(batches)
    }

    fn control_alias(key: char) -> LogicalKey {
        match key {
            '\n' => LogicalKey::Named(NamedKey::Enter),
            '\t' => LogicalKey::Named(NamedKey::Tab),
            '\u{8}' => LogicalKey::Named(NamedKey::Backspace),
            c => LogicalKey::Char(c),
        }
    }
}

#[cfg(test)]
#[path = "translator_tests.rs"]
mod tests;
