//! In-memory collaborators for unit tests.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::Mutex;
use webhands_protocols::{
    DomAdapter, DomError, ElementHandle, KeyError, KeyboardExecutor, LogicalKey, PropertyValue,
    Rect,
};

/// A single fake element.
#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub properties: HashMap<String, PropertyValue>,
    pub failing_properties: HashSet<String>,
    pub selectable: bool,
    pub selected: bool,
    pub shown: bool,
    pub bounds: Option<Rect>,
    pub text: String,
    pub shadow_text: String,
}

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            shown: true,
            ..Default::default()
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn prop(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.to_string(), value.into());
        self
    }

    pub fn failing_prop(mut self, name: &str) -> Self {
        self.failing_properties.insert(name.to_string());
        self
    }

    pub fn checkbox(checked: bool) -> Self {
        Self {
            selectable: true,
            selected: checked,
            ..Self::new("input").attr("type", "checkbox")
        }
    }
}

/// Fake DOM keyed by element id. Records the order of adapter calls.
#[derive(Default)]
pub struct FakeDom {
    elements: HashMap<String, FakeElement>,
    pub calls: Mutex<Vec<String>>,
    pub scrolled: Mutex<Vec<String>>,
}

impl FakeDom {
    pub fn with(id: &str, element: FakeElement) -> (Self, ElementHandle) {
        let mut dom = Self::default();
        dom.elements.insert(id.to_string(), element);
        (dom, ElementHandle::new(id))
    }

    fn element(&self, handle: &ElementHandle, call: String) -> Result<&FakeElement, DomError> {
        self.calls.lock().push(call);
        self.elements
            .get(handle.id())
            .ok_or_else(|| DomError::ElementNotFound(handle.id().to_string()))
    }
}

#[async_trait]
impl DomAdapter for FakeDom {
    async fn is_selectable(&self, element: &ElementHandle) -> Result<bool, DomError> {
        Ok(self.element(element, "is_selectable".into())?.selectable)
    }

    async fn is_selected(&self, element: &ElementHandle) -> Result<bool, DomError> {
        Ok(self.element(element, "is_selected".into())?.selected)
    }

    async fn get_attribute(
        &self,
        element: &ElementHandle,
        name: &str,
    ) -> Result<Option<String>, DomError> {
        let el = self.element(element, format!("get_attribute:{name}"))?;
        Ok(el.attributes.get(&name.to_lowercase()).cloned())
    }

    async fn get_property(
        &self,
        element: &ElementHandle,
        name: &str,
    ) -> Result<PropertyValue, DomError> {
        let el = self.element(element, format!("get_property:{name}"))?;
        if el.failing_properties.contains(name) {
            return Err(DomError::Script(format!("getter for {name} threw")));
        }
        Ok(el
            .properties
            .get(name)
            .cloned()
            .unwrap_or(PropertyValue::Undefined))
    }

    async fn is_element_of_tag(
        &self,
        element: &ElementHandle,
        tag: &str,
    ) -> Result<bool, DomError> {
        Ok(self
            .element(element, format!("is_element_of_tag:{tag}"))?
            .tag
            .eq_ignore_ascii_case(tag))
    }

    async fn is_shown(&self, element: &ElementHandle) -> Result<bool, DomError> {
        Ok(self.element(element, "is_shown".into())?.shown)
    }

    async fn get_bounds(&self, element: &ElementHandle) -> Result<Option<Rect>, DomError> {
        Ok(self.element(element, "get_bounds".into())?.bounds)
    }

    async fn scroll_into_view(
        &self,
        element: &ElementHandle,
        _region: Option<Rect>,
    ) -> Result<(), DomError> {
        self.element(element, "scroll_into_view".into())?;
        self.scrolled.lock().push(element.id().to_string());
        Ok(())
    }

    async fn get_client_region(
        &self,
        element: &ElementHandle,
        region: Option<Rect>,
    ) -> Result<Rect, DomError> {
        let el = self.element(element, "get_client_region".into())?;
        let bounds = el.bounds.unwrap_or_default();
        Ok(match region {
            Some(r) => Rect::new(bounds.left + r.left, bounds.top + r.top, r.width, r.height),
            None => bounds,
        })
    }

    async fn get_visible_text(
        &self,
        element: &ElementHandle,
        composed: bool,
    ) -> Result<String, DomError> {
        let el = self.element(element, "get_visible_text".into())?;
        if composed && !el.shadow_text.is_empty() {
            Ok(format!("{}{}", el.text, el.shadow_text))
        } else {
            Ok(el.text.clone())
        }
    }
}

/// Keyboard executor that records every batch and can fail on a given call.
#[derive(Default)]
pub struct RecordingKeyboard {
    pub batches: Mutex<Vec<(Vec<LogicalKey>, bool)>>,
    pub fail_on_call: Option<usize>,
}

impl RecordingKeyboard {
    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Default::default()
        }
    }
}

#[async_trait]
impl KeyboardExecutor for RecordingKeyboard {
    async fn execute(
        &self,
        _element: &ElementHandle,
        keys: &[LogicalKey],
        persist: bool,
    ) -> Result<(), KeyError> {
        let mut batches = self.batches.lock();
        if self.fail_on_call == Some(batches.len()) {
            return Err(KeyError::Dispatch(format!("call {} rejected", batches.len())));
        }
        batches.push((keys.to_vec(), persist));
        Ok(())
    }
}
