//! Attribute and property resolution.
//!
//! Browsers disagree on what "the value of attribute X" means: some report
//! the literal attribute text, some the live property, and boolean attributes
//! carry meaning by presence alone. [`AttributeResolver`] applies one fixed
//! decision order so every browser answers the same way.

mod tables;

use tracing::debug;
use webhands_protocols::{DomAdapter, DomError, ElementHandle, PropertyValue};

pub use tables::{is_boolean_attribute, property_alias};

const TRUE: &str = "true";
const FALSE: &str = "false";

/// Resolves the canonical value of an element attribute.
///
/// Holds no state of its own; every call reads through the adapter.
pub struct AttributeResolver<'a, D: DomAdapter + ?Sized> {
    dom: &'a D,
}

impl<'a, D: DomAdapter + ?Sized> AttributeResolver<'a, D> {
    pub fn new(dom: &'a D) -> Self {
        Self { dom }
    }

    /// Resolve `attribute` on `element`.
    ///
    /// Returns `None` when the attribute does not apply or is false. The
    /// empty string is a real value and is returned as such.
    ///
    /// Adapter failures propagate, except a failed property read in the
    /// general case, which falls back to the raw attribute.
    pub async fn resolve(
        &self,
        element: &ElementHandle,
        attribute: &str,
    ) -> Result<Option<String>, DomError> {
        let name = attribute.to_lowercase();

        if name == "style" {
            return self.dom.get_attribute(element, "style").await;
        }

        if (name == "selected" || name == "checked") && self.dom.is_selectable(element).await? {
            let selected = self.dom.is_selected(element).await?;
            return Ok(selected.then(|| TRUE.to_string()));
        }

        if self.is_url_attribute(element, &name).await? {
            return self.resolve_url(element, &name).await;
        }

        if name == "spellcheck" {
            return self.resolve_spellcheck(element).await.map(Some);
        }

        let property_name = property_alias(&name).unwrap_or(attribute);

        if is_boolean_attribute(&name) {
            let present = self.dom.get_attribute(element, attribute).await?.is_some();
            let set = present || self.dom.get_property(element, property_name).await?.is_truthy();
            return Ok(set.then(|| TRUE.to_string()));
        }

        let property = match self.dom.get_property(element, property_name).await {
            Ok(value) => value,
            Err(e) => {
                debug!("Property read '{}' failed, using attribute: {}", property_name, e);
                PropertyValue::Undefined
            }
        };

        // Absent and structured values both defer to the attribute text.
        if property.is_primitive() {
            Ok(Some(property.to_js_string()))
        } else {
            self.dom.get_attribute(element, attribute).await
        }
    }

    /// `href` on an anchor or `src` on an image.
    async fn is_url_attribute(&self, element: &ElementHandle, name: &str) -> Result<bool, DomError> {
        match name {
            "href" => self.dom.is_element_of_tag(element, "a").await,
            "src" => self.dom.is_element_of_tag(element, "img").await,
            _ => Ok(false),
        }
    }

    /// Non-empty URL attributes resolve to the browser's absolute URL.
    async fn resolve_url(
        &self,
        element: &ElementHandle,
        name: &str,
    ) -> Result<Option<String>, DomError> {
        match self.dom.get_attribute(element, name).await? {
            Some(raw) if !raw.is_empty() => {
                let property = self.dom.get_property(element, name).await?;
                Ok((!property.is_absent()).then(|| property.to_js_string()))
            }
            other => Ok(other),
        }
    }

    async fn resolve_spellcheck(&self, element: &ElementHandle) -> Result<String, DomError> {
        if let Some(raw) = self.dom.get_attribute(element, "spellcheck").await? {
            if raw.eq_ignore_ascii_case(FALSE) {
                return Ok(FALSE.to_string());
            }
            if raw.eq_ignore_ascii_case(TRUE) {
                return Ok(TRUE.to_string());
            }
        }

        let property = self.dom.get_property(element, "spellcheck").await?;
        Ok(property.to_js_string())
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
