//! Attribute extraction for the XLSX part readers.
//!
//! Keys are matched on the raw attribute name; values that are not UTF-8 or
//! do not parse are treated as missing.

use quick_xml::events::BytesStart;

use crate::types::ColorSpec;

/// String attribute by key.
pub fn attr_string(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| std::str::from_utf8(&attr.value).ok().map(str::to_string))
}

pub fn attr_u32(e: &BytesStart, key: &[u8]) -> Option<u32> {
    attr_string(e, key).and_then(|s| s.trim().parse().ok())
}

pub fn attr_f64(e: &BytesStart, key: &[u8]) -> Option<f64> {
    attr_string(e, key)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Boolean attribute. `"1"` and `"true"` are true, anything else false.
pub fn attr_bool(e: &BytesStart, key: &[u8]) -> Option<bool> {
    attr_string(e, key).map(|s| matches!(s.as_str(), "1" | "true"))
}

pub fn attr_bool_default(e: &BytesStart, key: &[u8], default: bool) -> bool {
    attr_bool(e, key).unwrap_or(default)
}

/// The ubiquitous `val` attribute.
pub fn attr_val(e: &BytesStart) -> Option<String> {
    attr_string(e, b"val")
}

/// Read `rgb`, `theme`, `tint`, `indexed` and `auto` from a color element.
pub fn parse_color_attrs(e: &BytesStart) -> ColorSpec {
    ColorSpec {
        rgb: attr_string(e, b"rgb"),
        theme: attr_u32(e, b"theme"),
        tint: attr_f64(e, b"tint"),
        indexed: attr_u32(e, b"indexed"),
        auto: attr_bool_default(e, b"auto", false),
    }
}

/// A `<b/>` or `<i/>` toggle: present means on unless `val` says otherwise.
pub fn toggle_val(e: &BytesStart) -> bool {
    attr_val(e).map_or(true, |v| v != "0" && v != "false")
}
