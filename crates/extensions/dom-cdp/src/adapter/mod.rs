//! [`DomAdapter`] backed by script calls on a CDP page session.

mod decode;
mod scripts;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::trace;
use webhands_protocols::{DomAdapter, DomError, ElementHandle, PropertyValue, Rect};

use crate::cdp::{CdpError, PageSession};

/// Reads element state from a live page.
///
/// Element handles must come from the same page session, e.g. from
/// [`PageSession::query_selector`].
pub struct CdpDomAdapter {
    page: Arc<PageSession>,
}

impl CdpDomAdapter {
    pub fn new(page: Arc<PageSession>) -> Self {
        Self { page }
    }

    pub fn page(&self) -> &Arc<PageSession> {
        &self.page
    }

    async fn run(
        &self,
        element: &ElementHandle,
        script: &str,
        args: Vec<Value>,
    ) -> Result<Value, DomError> {
        trace!("callFunctionOn {}", element);
        self.page
            .call_function_on(element.id(), script, args)
            .await
            .map_err(|e| match e {
                CdpError::Protocol { ref message, .. } if message.contains("Could not find object") => {
                    DomError::ElementNotFound(element.id().to_string())
                }
                other => other.into(),
            })
    }
}

#[async_trait]
impl DomAdapter for CdpDomAdapter {
    async fn is_selectable(&self, element: &ElementHandle) -> Result<bool, DomError> {
        decode::boolean(self.run(element, scripts::IS_SELECTABLE, Vec::new()).await?)
    }

    async fn is_selected(&self, element: &ElementHandle) -> Result<bool, DomError> {
        decode::boolean(self.run(element, scripts::IS_SELECTED, Vec::new()).await?)
    }

    async fn get_attribute(
        &self,
        element: &ElementHandle,
        name: &str,
    ) -> Result<Option<String>, DomError> {
        let raw = self
            .run(element, scripts::GET_ATTRIBUTE, vec![json!(name)])
            .await?;
        decode::optional_string(raw)
    }

    async fn get_property(
        &self,
        element: &ElementHandle,
        name: &str,
    ) -> Result<PropertyValue, DomError> {
        let raw = self
            .run(element, scripts::GET_PROPERTY, vec![json!(name)])
            .await?;
        decode::property(raw)
    }

    async fn is_element_of_tag(
        &self,
        element: &ElementHandle,
        tag: &str,
    ) -> Result<bool, DomError> {
        let raw = self
            .run(element, scripts::IS_ELEMENT_OF_TAG, vec![json!(tag)])
            .await?;
        decode::boolean(raw)
    }

    async fn is_shown(&self, element: &ElementHandle) -> Result<bool, DomError> {
        decode::boolean(self.run(element, scripts::IS_SHOWN, Vec::new()).await?)
    }

    async fn get_bounds(&self, element: &ElementHandle) -> Result<Option<Rect>, DomError> {
        decode::optional_rect(self.run(element, scripts::GET_BOUNDS, Vec::new()).await?)
    }

    async fn scroll_into_view(
        &self,
        element: &ElementHandle,
        region: Option<Rect>,
    ) -> Result<(), DomError> {
        self.run(element, scripts::SCROLL_INTO_VIEW, vec![json!(region)])
            .await?;
        Ok(())
    }

    async fn get_client_region(
        &self,
        element: &ElementHandle,
        region: Option<Rect>,
    ) -> Result<Rect, DomError> {
        let raw = self
            .run(element, scripts::GET_CLIENT_REGION, vec![json!(region)])
            .await?;
        decode::rect(raw)
    }

    async fn get_visible_text(
        &self,
        element: &ElementHandle,
        composed: bool,
    ) -> Result<String, DomError> {
        let raw = self
            .run(element, scripts::GET_VISIBLE_TEXT, vec![json!(composed)])
            .await?;
        decode::string(raw)
    }
}
