//! Element-level operations exposed to the automation client.

use std::sync::Arc;

use webhands_protocols::{
    Coordinate, DomAdapter, DomError, ElementHandle, KeyError, KeyboardExecutor, Rect,
};

use crate::attribute::AttributeResolver;
use crate::typing::TypeOrchestrator;

/// Element operations over a DOM adapter and a keyboard executor.
pub struct ElementAtoms<D: ?Sized, K: ?Sized> {
    dom: Arc<D>,
    keyboard: Arc<K>,
}

impl<D, K> Clone for ElementAtoms<D, K>
where
    D: ?Sized,
    K: ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            dom: self.dom.clone(),
            keyboard: self.keyboard.clone(),
        }
    }
}

impl<D, K> ElementAtoms<D, K>
where
    D: DomAdapter + ?Sized,
    K: KeyboardExecutor + ?Sized,
{
    pub fn new(dom: Arc<D>, keyboard: Arc<K>) -> Self {
        Self { dom, keyboard }
    }

    pub fn dom(&self) -> &Arc<D> {
        &self.dom
    }

    /// Canonical value of `name` on `element`; see [`AttributeResolver`].
    pub async fn resolve_attribute(
        &self,
        element: &ElementHandle,
        name: &str,
    ) -> Result<Option<String>, DomError> {
        AttributeResolver::new(self.dom.as_ref())
            .resolve(element, name)
            .await
    }

    /// Type WebDriver key sequences into `element`.
    pub async fn type_keys<S: AsRef<str> + Sync>(
        &self,
        element: &ElementHandle,
        sequences: &[S],
        persist_modifiers: bool,
    ) -> Result<(), KeyError> {
        TypeOrchestrator::new(self.keyboard.as_ref())
            .type_keys(element, sequences, persist_modifiers)
            .await
    }

    /// Page-relative bounding box, `None` if the element is not rendered.
    pub async fn get_location(&self, element: &ElementHandle) -> Result<Option<Rect>, DomError> {
        self.dom.get_bounds(element).await
    }

    /// Scroll the element (or `region` of it) into view and return its
    /// client-relative top-left corner.
    pub async fn get_location_in_view(
        &self,
        element: &ElementHandle,
        region: Option<Rect>,
    ) -> Result<Coordinate, DomError> {
        self.dom.scroll_into_view(element, region).await?;
        let rect = self.dom.get_client_region(element, region).await?;
        Ok(rect.origin())
    }

    pub async fn get_visible_text(
        &self,
        element: &ElementHandle,
        composed: bool,
    ) -> Result<String, DomError> {
        self.dom.get_visible_text(element, composed).await
    }

    /// Only checkboxes, radio buttons and options can be selected.
    pub async fn is_selected(&self, element: &ElementHandle) -> Result<bool, DomError> {
        if !self.dom.is_selectable(element).await? {
            return Ok(false);
        }
        self.dom.is_selected(element).await
    }

    pub async fn is_displayed(&self, element: &ElementHandle) -> Result<bool, DomError> {
        self.dom.is_shown(element).await
    }
}
