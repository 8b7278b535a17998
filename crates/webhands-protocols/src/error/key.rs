//! Keyboard translation and dispatch errors.

use thiserror::Error;

/// Failure while translating or dispatching keys.
#[derive(Debug, Error)]
pub enum KeyError {
    /// A code point in the reserved WebDriver range has no key mapping.
    #[error("Unsupported WebDriver key: \\u{code:x}")]
    UnsupportedKey { code: u32 },

    /// The keyboard executor failed to dispatch a batch.
    #[error("Key dispatch failed: {0}")]
    Dispatch(String),
}
