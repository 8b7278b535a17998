//! DOM access protocol definitions.

mod traits;
mod types;
mod value;

pub use traits::*;
pub use types::*;
pub use value::*;
