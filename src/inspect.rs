//! Runtime value model and bounded debug rendering.
//!
//! Error templates describe the offending value a caller passed in
//! ("Received type number (42)"). Rust has no dynamic values, so callers hand
//! over a [`Value`] snapshot of whatever they were validating and this module
//! renders it deterministically.
//!
//! # Rendering Rules
//!
//! - `inspect` is total: every `Value` renders, nested structures are cut at
//!   [`MAX_INSPECT_DEPTH`]
//! - `received_clause` produces the "Received ..." clause and truncates
//!   textual previews to [`MAX_RECEIVED_PREVIEW`] characters plus `...`
//! - Truncation counts characters, never splits a UTF-8 sequence

use std::fmt::Write as _;
use zeroize::Zeroize;

/// Maximum preview length in "Received ..." clauses.
pub const MAX_RECEIVED_PREVIEW: usize = 25;

/// Maximum preview length for `ERR_INVALID_ARG_VALUE` style messages.
pub const MAX_ARG_VALUE_PREVIEW: usize = 128;

/// Nesting depth rendered before collapsing to `[Array]` / `[Object]`.
pub const MAX_INSPECT_DEPTH: usize = 2;

/// Ellipsis appended to truncated previews.
const PREVIEW_ELLIPSIS: &str = "...";

/// Marker `inspect` puts before objects without a named constructor.
const NULL_PROTOTYPE_PREFIX: &str = "[Object: null prototype] ";

/// A snapshot of a host runtime value.
///
/// `Object { class: None, .. }` is an object without a named constructor
/// (a null-prototype object).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `undefined`
    Undefined,
    /// `null`
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// An arbitrary-precision integer, bounded here to `i128`.
    BigInt(i128),
    /// A string.
    String(String),
    /// A symbol with an optional description.
    Symbol(Option<String>),
    /// A function, anonymous when `name` is `None` or empty.
    Function {
        /// The function's `name`, if any.
        name: Option<String>,
    },
    /// An array.
    Array(Vec<Value>),
    /// An object with an optional constructor name and own enumerable entries.
    Object {
        /// Constructor name; `None` or empty for a null prototype.
        class: Option<String>,
        /// Own enumerable properties in insertion order.
        entries: Vec<(String, Value)>,
    },
}

impl Value {
    /// A bigint value.
    #[inline]
    pub const fn bigint(value: i128) -> Self {
        Self::BigInt(value)
    }

    /// A named function.
    #[inline]
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function {
            name: Some(name.into()),
        }
    }

    /// An anonymous function.
    #[inline]
    pub const fn anonymous_function() -> Self {
        Self::Function { name: None }
    }

    /// A symbol with a description.
    #[inline]
    pub fn symbol(description: impl Into<String>) -> Self {
        Self::Symbol(Some(description.into()))
    }

    /// A plain object (`class` is `Object`).
    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self::Object {
            class: Some("Object".to_owned()),
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// An instance of a named class with no visible entries.
    #[inline]
    pub fn instance(class: impl Into<String>) -> Self {
        Self::Object {
            class: Some(class.into()),
            entries: Vec::new(),
        }
    }

    /// An object without a named constructor.
    pub fn null_prototype<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self::Object {
            class: None,
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// The host `typeof` string.
    pub const fn type_of(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "object",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::BigInt(_) => "bigint",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Function { .. } => "function",
            Self::Array(_) | Self::Object { .. } => "object",
        }
    }

    /// `null` or `undefined`.
    #[inline]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Borrow the string contents.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric value, if this is a number.
    #[inline]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Borrow the array items.
    #[inline]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Constructor name for objects and arrays.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Array(_) => Some("Array"),
            Self::Object {
                class: Some(class), ..
            } if !class.is_empty() => Some(class),
            _ => None,
        }
    }

    /// Whether this is a number with no fractional part.
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Number(n) if n.is_finite() && n.fract() == 0.0)
    }

    /// Convert to a JSON value the way `JSON.stringify` would see it.
    ///
    /// Returns `None` for values JSON cannot represent at top level
    /// (`undefined`, functions, symbols).
    pub fn to_json(&self) -> Option<serde_json::Value> {
        use serde_json::Value as Json;
        match self {
            Self::Undefined | Self::Function { .. } | Self::Symbol(_) => None,
            Self::Null => Some(Json::Null),
            Self::Bool(b) => Some(Json::Bool(*b)),
            Self::Number(n) => Some(json_number(*n)),
            Self::BigInt(n) => Some(match i64::try_from(*n) {
                Ok(small) => Json::from(small),
                Err(_) => Json::String(n.to_string()),
            }),
            Self::String(s) => Some(Json::String(s.clone())),
            Self::Array(items) => Some(Json::Array(
                items
                    .iter()
                    .map(|item| item.to_json().unwrap_or(Json::Null))
                    .collect(),
            )),
            Self::Object { entries, .. } => Some(Json::Object(
                entries
                    .iter()
                    .filter_map(|(key, value)| value.to_json().map(|json| (key.clone(), json)))
                    .collect(),
            )),
        }
    }
}

fn json_number(n: f64) -> serde_json::Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

impl Zeroize for Value {
    fn zeroize(&mut self) {
        match self {
            Self::String(s) => s.zeroize(),
            Self::Symbol(Some(s)) | Self::Function { name: Some(s) } => s.zeroize(),
            Self::Array(items) => {
                for item in items.iter_mut() {
                    item.zeroize();
                }
                items.clear();
            }
            Self::Object { class, entries } => {
                if let Some(class) = class {
                    class.zeroize();
                }
                for (key, value) in entries.iter_mut() {
                    key.zeroize();
                    value.zeroize();
                }
                entries.clear();
            }
            _ => {}
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

number_from!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32);

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for Value {
    fn from(items: &[&str]) -> Self {
        Self::Array(items.iter().map(|&s| Self::from(s)).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a number the way the host runtime prints it: shortest
/// round-trip digits, plain notation for magnitudes in `[1e-6, 1e21)` and
/// `d.ddde+N` outside it.
///
/// ```rust
/// use node_compat_errors::inspect::format_number;
///
/// assert_eq!(format_number(1e-7), "1e-7");
/// assert_eq!(format_number(1.5e300), "1.5e+300");
/// assert_eq!(format_number(0.000001), "0.000001");
/// assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.5e300".
    let sci = format!("{:e}", n.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return format!("{}", n);
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{}", n);
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        let mut out = digits;
        out.extend(std::iter::repeat_n('0', (point - k) as usize));
        out
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let (lead, rest) = digits.split_at(1);
        let sign = if point - 1 < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, (point - 1).abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, (point - 1).abs())
        }
    };

    if n < 0.0 { format!("-{}", body) } else { body }
}

fn quote_string(out: &mut String, s: &str) {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn inspect_into(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Undefined => out.push_str("undefined"),
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::BigInt(n) => {
            let _ = write!(out, "{}n", n);
        }
        Value::String(s) => quote_string(out, s),
        Value::Symbol(description) => {
            let _ = write!(out, "Symbol({})", description.as_deref().unwrap_or(""));
        }
        Value::Function { name } => match name.as_deref() {
            Some(name) if !name.is_empty() => {
                let _ = write!(out, "[Function: {}]", name);
            }
            _ => out.push_str("[Function (anonymous)]"),
        },
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
            } else if depth > MAX_INSPECT_DEPTH {
                out.push_str("[Array]");
            } else {
                out.push_str("[ ");
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        out.push_str(", ");
                    }
                    inspect_into(out, item, depth + 1);
                }
                out.push_str(" ]");
            }
        }
        Value::Object { class, entries } => {
            let prefix = match class.as_deref() {
                Some("Object") => None,
                Some(name) if !name.is_empty() => Some(name),
                _ => Some(NULL_PROTOTYPE_PREFIX.trim_end()),
            };
            if depth > MAX_INSPECT_DEPTH && !entries.is_empty() {
                match prefix {
                    Some(p) if p.starts_with('[') => out.push_str(p),
                    Some(p) => {
                        let _ = write!(out, "[{}]", p);
                    }
                    None => out.push_str("[Object]"),
                }
                return;
            }
            if let Some(prefix) = prefix {
                out.push_str(prefix);
                out.push(' ');
            }
            if entries.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{ ");
            for (idx, (key, item)) in entries.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                if is_identifier(key) {
                    out.push_str(key);
                } else {
                    quote_string(out, key);
                }
                out.push_str(": ");
                inspect_into(out, item, depth + 1);
            }
            out.push_str(" }");
        }
    }
}

/// Deterministic debug rendering of any value.
///
/// ```rust
/// use node_compat_errors::inspect::{inspect, Value};
///
/// assert_eq!(inspect(&Value::from("abc")), "'abc'");
/// assert_eq!(inspect(&Value::from(vec![1, 2])), "[ 1, 2 ]");
/// assert_eq!(inspect(&Value::function("cb")), "[Function: cb]");
/// ```
pub fn inspect(value: &Value) -> String {
    let mut out = String::new();
    inspect_into(&mut out, value, 0);
    out
}

/// The `%s` rendering: strings raw, primitives plain, everything else inspected.
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => format_number(*n),
        Value::BigInt(n) => format!("{}n", n),
        other => inspect(other),
    }
}

/// Cut `s` to `max` characters and append `...` if it was longer.
pub fn truncate_preview(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_owned(),
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + PREVIEW_ELLIPSIS.len());
            out.push_str(&s[..cut]);
            out.push_str(PREVIEW_ELLIPSIS);
            out
        }
    }
}

/// Describe the value a caller actually received.
///
/// ```rust
/// use node_compat_errors::inspect::{received_clause, Value};
///
/// assert_eq!(received_clause(&Value::Null), "null");
/// assert_eq!(received_clause(&Value::function("run")), "function run");
/// assert_eq!(received_clause(&Value::instance("Date")), "an instance of Date");
/// assert_eq!(received_clause(&Value::from(42)), "type number (42)");
/// ```
pub fn received_clause(value: &Value) -> String {
    match value {
        Value::Null | Value::Undefined => inspect(value),
        Value::Function { name: Some(name) } if !name.is_empty() => format!("function {}", name),
        Value::Array(_) | Value::Object { .. } => match value.class_name() {
            Some(class) => format!("an instance of {}", class),
            None => {
                let rendered = inspect(value);
                match rendered.strip_prefix(NULL_PROTOTYPE_PREFIX) {
                    Some(body) => format!(
                        "{}{}",
                        NULL_PROTOTYPE_PREFIX,
                        truncate_preview(body, MAX_RECEIVED_PREVIEW)
                    ),
                    None => truncate_preview(&rendered, MAX_RECEIVED_PREVIEW),
                }
            }
        },
        other => format!(
            "type {} ({})",
            other.type_of(),
            truncate_preview(&inspect(other), MAX_RECEIVED_PREVIEW)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typeof_matches_host() {
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::Undefined.type_of(), "undefined");
        assert_eq!(Value::bigint(1).type_of(), "bigint");
        assert_eq!(Value::anonymous_function().type_of(), "function");
        assert_eq!(Value::from(vec![1]).type_of(), "object");
    }

    #[test]
    fn numbers_render_like_host() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-0.0), "-0");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(4294967297.0), "4294967297");
    }

    #[test]
    fn numbers_switch_to_exponent_form_like_host() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e300), "1.5e+300");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(-123.456), "-123.456");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(5e-324), "5e-324");
    }

    #[test]
    fn strings_pick_quote() {
        assert_eq!(inspect(&Value::from("it's")), "\"it's\"");
        assert_eq!(inspect(&Value::from("a\nb")), "'a\\nb'");
        assert_eq!(inspect(&Value::from("'\"")), "'\\'\"'");
    }

    #[test]
    fn objects_render_with_class_prefix() {
        assert_eq!(inspect(&Value::object([("a", Value::from(1))])), "{ a: 1 }");
        assert_eq!(inspect(&Value::instance("Foo")), "Foo {}");
        assert_eq!(
            inspect(&Value::null_prototype([("x-y", Value::Null)])),
            "[Object: null prototype] { 'x-y': null }"
        );
    }

    #[test]
    fn deep_nesting_collapses() {
        let deep = Value::from(vec![Value::from(vec![Value::from(vec![Value::from(vec![1])])])]);
        assert_eq!(inspect(&deep), "[ [ [ [Array] ] ] ]");
    }

    #[test]
    fn truncation_is_char_exact() {
        let long = "x".repeat(40);
        let preview = truncate_preview(&long, 25);
        assert_eq!(preview, format!("{}...", "x".repeat(25)));
        assert_eq!(truncate_preview("short", 25), "short");
        assert_eq!(truncate_preview(&"é".repeat(30), 25).chars().count(), 28);
    }

    #[test]
    fn received_long_string_is_truncated() {
        let received = received_clause(&Value::from("a".repeat(30)));
        assert_eq!(received, format!("type string ('{}...)", "a".repeat(24)));
    }

    #[test]
    fn received_anonymous_function_falls_back_to_type() {
        assert_eq!(
            received_clause(&Value::anonymous_function()),
            "type function ([Function (anonymous)])"
        );
    }

    #[test]
    fn received_null_prototype_previews_body() {
        let value = Value::null_prototype([("alpha", Value::from(1)), ("beta", Value::from(2))]);
        assert_eq!(received_clause(&value), "[Object: null prototype] { alpha: 1, beta: 2 }");

        let value = Value::null_prototype([
            ("alpha", Value::from(1)),
            ("beta", Value::from(2)),
            ("gamma", Value::from(3)),
            ("delta", Value::from(4)),
        ]);
        let received = received_clause(&value);
        assert_eq!(received, "[Object: null prototype] { alpha: 1, beta: 2, gamm...");
        assert!(received.ends_with(PREVIEW_ELLIPSIS));

        let empty = Value::null_prototype(Vec::<(String, Value)>::new());
        assert_eq!(received_clause(&empty), "[Object: null prototype] {}");
        let unnamed = Value::Object { class: Some(String::new()), entries: Vec::new() };
        assert_eq!(received_clause(&unnamed), "[Object: null prototype] {}");
    }

    #[test]
    fn json_conversion_follows_stringify() {
        let value = Value::object([
            ("n", Value::from(3)),
            ("skip", Value::Undefined),
            ("list", Value::from(vec![Value::Undefined, Value::from(1.5)])),
        ]);
        assert_eq!(
            value.to_json().unwrap().to_string(),
            r#"{"n":3,"list":[null,1.5]}"#
        );
        assert_eq!(Value::Undefined.to_json(), None);
    }

    #[test]
    fn zeroize_clears_owned_strings() {
        let mut value = Value::object([("secret", Value::from("hunter2"))]);
        value.zeroize();
        assert_eq!(value, Value::Object { class: Some(String::new()), entries: Vec::new() });
    }
}
