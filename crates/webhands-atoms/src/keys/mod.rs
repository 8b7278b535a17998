//! WebDriver key sequences.

mod key_map;
mod translator;

pub use key_map::{KeyMapping, WEBDRIVER_KEY_RANGE, is_webdriver_key, lookup_key};
pub use translator::KeySequenceTranslator;
