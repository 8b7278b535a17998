//! Typed result of a DOM property read.

use serde_json::Value;

/// Value of a DOM property, classified by kind.
///
/// Property reads cross a script boundary, so the adapter reports what kind
/// of value it saw instead of handing back an untyped blob.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Any structured value (object, array, function, DOM node).
    Object(Value),
}

impl PropertyValue {
    /// `undefined` or `null`.
    pub fn is_absent(&self) -> bool {
        matches!(self, PropertyValue::Undefined | PropertyValue::Null)
    }

    /// String, number or boolean.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            PropertyValue::Bool(_) | PropertyValue::Number(_) | PropertyValue::String(_)
        )
    }

    /// Script truthiness, spelled out per kind.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropertyValue::Undefined | PropertyValue::Null => false,
            PropertyValue::Bool(b) => *b,
            PropertyValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropertyValue::String(s) => !s.is_empty(),
            PropertyValue::Object(_) => true,
        }
    }

    /// String conversion following script `String(value)` rules.
    pub fn to_js_string(&self) -> String {
        match self {
            PropertyValue::Undefined => "undefined".to_string(),
            PropertyValue::Null => "null".to_string(),
            PropertyValue::Bool(b) => b.to_string(),
            PropertyValue::Number(n) => format_number(*n),
            PropertyValue::String(s) => s.clone(),
            PropertyValue::Object(Value::Array(items)) => items
                .iter()
                .map(|item| match PropertyValue::from(item.clone()) {
                    PropertyValue::Undefined | PropertyValue::Null => String::new(),
                    other => other.to_js_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            PropertyValue::Object(_) => "[object Object]".to_string(),
        }
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => PropertyValue::Null,
            Value::Bool(b) => PropertyValue::Bool(b),
            Value::Number(n) => n
                .as_f64()
                .map(PropertyValue::Number)
                .unwrap_or(PropertyValue::Number(f64::NAN)),
            Value::String(s) => PropertyValue::String(s),
            other => PropertyValue::Object(other),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

/// Script `Number::toString` for radix 10.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        return format!("{sign}Infinity");
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7".
    let sci = format!("{:e}", n.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the digit string.
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let exp_sign = if point - 1 < 0 { "-" } else { "+" };
        let rest = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        format!("{first}{rest}e{exp_sign}{}", (point - 1).abs())
    };

    format!("{sign}{body}")
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
