//! Keyboard input for CDP page session.

use tracing::trace;

use crate::cdp::error::CdpError;
use crate::cdp::protocol::KeyEventParams;

use super::core::PageSession;

impl PageSession {
    /// Dispatch a single key event to the page.
    pub async fn dispatch_key_event(&self, params: &KeyEventParams) -> Result<(), CdpError> {
        trace!("Key event {:?} {}", params.event_type, params.key);
        self.call(
            "Input.dispatchKeyEvent",
            Some(serde_json::to_value(params)?),
        )
        .await?;
        Ok(())
    }
}
