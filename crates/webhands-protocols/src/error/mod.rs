//! Error types for the WebHands protocol layer.

mod dom;
mod key;

pub use dom::*;
pub use key::*;
