//! # WebHands Protocols
//!
//! Interface definitions shared by the WebHands crates.
//! Contains only types and traits - no browser-specific implementations.
//!
//! ## Core Traits
//!
//! - [`DomAdapter`] - Low-level element reads (attributes, properties, geometry)
//! - [`KeyboardExecutor`] - Dispatches a batch of logical keys to an element

pub mod dom;
pub mod error;
pub mod keyboard;

pub use dom::{Coordinate, DomAdapter, ElementHandle, PropertyValue, Rect};
pub use error::{DomError, KeyError};
pub use keyboard::{KeyBatch, KeyboardExecutor, LogicalKey, NamedKey};
