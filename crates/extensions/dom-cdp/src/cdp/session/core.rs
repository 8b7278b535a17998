//! Core session struct and CDP command dispatch.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::cdp::client::Connection;
use crate::cdp::error::CdpError;

/// Interval between `document.readyState` polls.
const LOAD_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A session attached to a single page/target.
///
/// No protocol domains are enabled; `Runtime.evaluate`,
/// `Runtime.callFunctionOn` and `Input.dispatchKeyEvent` work without them.
pub struct PageSession {
    /// Target ID.
    pub(super) target_id: String,
    /// Session ID for this target.
    pub(super) session_id: String,
    /// Connection shared with the client.
    pub(super) connection: Arc<Connection>,
}

impl PageSession {
    pub(crate) fn new(target_id: String, session_id: String, connection: Arc<Connection>) -> Self {
        Self {
            target_id,
            session_id,
            connection,
        }
    }

    /// Get target ID.
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// Get session ID.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Send a CDP command to this page session.
    pub async fn call(&self, method: &str, params: Option<Value>) -> Result<Value, CdpError> {
        self.connection
            .call(method, params, Some(&self.session_id))
            .await
    }

    /// Poll `document.readyState` until it reports `complete`.
    pub async fn wait_for_load(&self, timeout: Duration) -> Result<(), CdpError> {
        let start = tokio::time::Instant::now();

        loop {
            let state = self.evaluate("document.readyState").await?;
            if state.as_str() == Some("complete") {
                return Ok(());
            }

            if start.elapsed() > timeout {
                return Err(CdpError::Timeout("Page load timeout".to_string()));
            }

            tokio::time::sleep(LOAD_POLL_INTERVAL).await;
        }
    }
}
