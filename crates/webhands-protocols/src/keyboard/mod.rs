//! Keyboard protocol definitions.
//!
//! Keys are described logically; turning them into platform events is the
//! job of a [`KeyboardExecutor`].

mod key;
mod traits;

pub use key::*;
pub use traits::*;
