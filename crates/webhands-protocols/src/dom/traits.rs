//! DOM adapter trait definition.

use async_trait::async_trait;

use super::{ElementHandle, PropertyValue, Rect};
use crate::error::DomError;

/// Low-level, browser-specific element access.
///
/// Implementations hide how values are read from a live page (script
/// evaluation, protocol calls, an in-memory tree). Callers treat every method
/// as a plain read except [`scroll_into_view`](DomAdapter::scroll_into_view).
#[async_trait]
pub trait DomAdapter: Send + Sync {
    /// Whether the element is a checkbox, radio button or `option`.
    async fn is_selectable(&self, element: &ElementHandle) -> Result<bool, DomError>;

    /// Whether a selectable element is currently checked/selected.
    async fn is_selected(&self, element: &ElementHandle) -> Result<bool, DomError>;

    /// Raw attribute text, `None` when the attribute is not present.
    ///
    /// For `style` the inline style is returned in a normalized form.
    async fn get_attribute(
        &self,
        element: &ElementHandle,
        name: &str,
    ) -> Result<Option<String>, DomError>;

    /// Live property value.
    async fn get_property(
        &self,
        element: &ElementHandle,
        name: &str,
    ) -> Result<PropertyValue, DomError>;

    /// Case-insensitive tag name check.
    async fn is_element_of_tag(&self, element: &ElementHandle, tag: &str)
    -> Result<bool, DomError>;

    async fn is_shown(&self, element: &ElementHandle) -> Result<bool, DomError>;

    /// Bounding box in page coordinates, `None` if the element has no layout box.
    async fn get_bounds(&self, element: &ElementHandle) -> Result<Option<Rect>, DomError>;

    async fn scroll_into_view(
        &self,
        element: &ElementHandle,
        region: Option<Rect>,
    ) -> Result<(), DomError>;

    /// Client-relative rectangle of the element, or of `region` within it.
    async fn get_client_region(
        &self,
        element: &ElementHandle,
        region: Option<Rect>,
    ) -> Result<Rect, DomError>;

    /// Rendered text. `composed` includes text from open shadow roots.
    async fn get_visible_text(
        &self,
        element: &ElementHandle,
        composed: bool,
    ) -> Result<String, DomError>;
}
