//! # WebHands Atoms
//!
//! Browser-independent helpers that sit between an automation client and a
//! [`DomAdapter`](webhands_protocols::DomAdapter) /
//! [`KeyboardExecutor`](webhands_protocols::KeyboardExecutor) pair.
//!
//! ## Components
//!
//! - [`AttributeResolver`] - reconciles DOM properties and attributes into one
//!   canonical value per attribute name
//! - [`KeySequenceTranslator`] - splits WebDriver key sequences into
//!   [`KeyBatch`](webhands_protocols::KeyBatch)es
//! - [`TypeOrchestrator`] - runs the batches through a keyboard executor
//! - [`ElementAtoms`] - the element-level surface built on the above

mod attribute;
mod element;
mod keys;
mod typing;

#[cfg(test)]
pub(crate) mod testing;

pub use attribute::{AttributeResolver, is_boolean_attribute, property_alias};
pub use element::ElementAtoms;
pub use keys::{KeyMapping, KeySequenceTranslator, WEBDRIVER_KEY_RANGE, is_webdriver_key, lookup_key};
pub use typing::TypeOrchestrator;
