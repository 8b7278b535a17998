//! Element lookup for CDP page session.

use serde_json::json;
use webhands_protocols::ElementHandle;

use crate::cdp::error::CdpError;

use super::core::PageSession;

impl PageSession {
    /// Find the first element matching `selector`.
    ///
    /// The returned handle wraps the element's remote object id, which stays
    /// valid until the page navigates or the object is released.
    pub async fn query_selector(&self, selector: &str) -> Result<Option<ElementHandle>, CdpError> {
        let expression = format!("document.querySelector({})", json!(selector));
        let object = self.evaluate_handle(&expression).await?;

        if object.subtype.as_deref() == Some("null") {
            return Ok(None);
        }

        object
            .object_id
            .map(|id| Some(ElementHandle::new(id)))
            .ok_or_else(|| CdpError::InvalidResponse(format!("No object id for {}", selector)))
    }

    /// Focus an element.
    pub async fn focus(&self, element: &ElementHandle) -> Result<(), CdpError> {
        self.call_function_on(element.id(), "function() { this.focus(); }", Vec::new())
            .await?;
        Ok(())
    }
}
