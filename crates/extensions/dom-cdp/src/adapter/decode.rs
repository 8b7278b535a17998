//! Decoding of script results into typed values.

use serde::Deserialize;
use serde_json::{Map, Value};
use webhands_protocols::{DomError, PropertyValue, Rect};

/// Property record produced by the property script.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
enum TaggedProperty {
    Undefined,
    Null,
    Boolean(bool),
    Number(ScriptNumber),
    String(String),
    Array(Vec<Value>),
    Object,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScriptNumber {
    Finite(f64),
    Special(String),
}

impl ScriptNumber {
    fn into_f64(self) -> Result<f64, DomError> {
        match self {
            ScriptNumber::Finite(n) => Ok(n),
            ScriptNumber::Special(s) => match s.as_str() {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                _ => Err(DomError::InvalidResponse(format!("Not a number: {}", s))),
            },
        }
    }
}

fn invalid(what: &str, raw: &Value) -> DomError {
    DomError::InvalidResponse(format!("Expected {}, got {}", what, raw))
}

pub(crate) fn property(raw: Value) -> Result<PropertyValue, DomError> {
    let tagged: TaggedProperty =
        serde_json::from_value(raw.clone()).map_err(|_| invalid("property record", &raw))?;

    Ok(match tagged {
        TaggedProperty::Undefined => PropertyValue::Undefined,
        TaggedProperty::Null => PropertyValue::Null,
        TaggedProperty::Boolean(b) => PropertyValue::Bool(b),
        TaggedProperty::Number(n) => PropertyValue::Number(n.into_f64()?),
        TaggedProperty::String(s) => PropertyValue::String(s),
        TaggedProperty::Array(items) => PropertyValue::Object(Value::Array(items)),
        TaggedProperty::Object => PropertyValue::Object(Value::Object(Map::new())),
    })
}

pub(crate) fn boolean(raw: Value) -> Result<bool, DomError> {
    raw.as_bool().ok_or_else(|| invalid("boolean", &raw))
}

pub(crate) fn string(raw: Value) -> Result<String, DomError> {
    match raw {
        Value::String(s) => Ok(s),
        other => Err(invalid("string", &other)),
    }
}

pub(crate) fn optional_string(raw: Value) -> Result<Option<String>, DomError> {
    match raw {
        Value::Null => Ok(None),
        other => string(other).map(Some),
    }
}

pub(crate) fn rect(raw: Value) -> Result<Rect, DomError> {
    serde_json::from_value(raw.clone()).map_err(|_| invalid("rectangle", &raw))
}

pub(crate) fn optional_rect(raw: Value) -> Result<Option<Rect>, DomError> {
    match raw {
        Value::Null => Ok(None),
        other => rect(other).map(Some),
    }
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
