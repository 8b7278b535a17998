//! Static attribute tables.

/// Attribute names whose DOM property has a different spelling.
const PROPERTY_ALIASES: &[(&str, &str)] = &[("class", "className"), ("readonly", "readOnly")];

/// Attributes resolved by presence rather than by their text.
///
/// Kept sorted so lookups can binary search.
const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "allowfullscreen",
    "allowpaymentrequest",
    "allowusermedia",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "compact",
    "complete",
    "controls",
    "declare",
    "default",
    "defaultchecked",
    "defaultselected",
    "defer",
    "disabled",
    "ended",
    "formnovalidate",
    "hidden",
    "indeterminate",
    "iscontenteditable",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nohref",
    "nomodule",
    "noresize",
    "noshade",
    "novalidate",
    "nowrap",
    "open",
    "paused",
    "playsinline",
    "pubdate",
    "readonly",
    "required",
    "reversed",
    "scoped",
    "seamless",
    "seeking",
    "selected",
    "truespeed",
    "typemustmatch",
    "willvalidate",
];

/// DOM property name for a lower-cased attribute name, if it differs.
pub fn property_alias(name: &str) -> Option<&'static str> {
    PROPERTY_ALIASES
        .iter()
        .find(|(attribute, _)| *attribute == name)
        .map(|(_, property)| *property)
}

/// Whether a lower-cased attribute name is a boolean attribute.
pub fn is_boolean_attribute(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES.binary_search(&name).is_ok()
}
