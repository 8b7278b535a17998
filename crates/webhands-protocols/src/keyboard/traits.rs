//! Keyboard executor trait definition.

use async_trait::async_trait;

use super::LogicalKey;
use crate::dom::ElementHandle;
use crate::error::KeyError;

/// Dispatches keyboard events for an ordered list of logical keys.
///
/// Implementations own the physical modifier state: with `persist` set,
/// modifiers pressed during the call stay down for the next call; otherwise
/// they are released before returning.
#[async_trait]
pub trait KeyboardExecutor: Send + Sync {
    async fn execute(
        &self,
        element: &ElementHandle,
        keys: &[LogicalKey],
        persist: bool,
    ) -> Result<(), KeyError>;
}
