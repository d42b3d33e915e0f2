//! Message formatting for error kinds.
//!
//! Static kinds render through [`format_template`]. Kinds whose wording
//! depends on the shape of their arguments have a dedicated function here;
//! the `templates` adapters unpack positional [`Value`] arguments for the
//! kind table.
//!
//! Every function in this module is total: missing or oddly-typed arguments
//! still produce a non-empty message.

use crate::inspect::{
    format_number, inspect, received_clause, to_display_string, truncate_preview, Value,
    MAX_ARG_VALUE_PREVIEW,
};

/// Primitive type names recognised by [`invalid_arg_type`].
pub const KNOWN_TYPES: [&str; 9] = [
    "string", "function", "number", "object", "Function", "Object", "boolean", "bigint", "symbol",
];

/// Values beyond this magnitude are rendered with `_` digit grouping.
const SEPARATOR_THRESHOLD: f64 = 4_294_967_296.0;

// ============================================================================
// printf-style templates
// ============================================================================

/// Host `Number(string)` conversion: blank is `0`, `Infinity` is spelled
/// out, `0x`/`0o`/`0b` prefixes are unsigned integers.
fn string_to_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => 10,
    };
    if radix != 10 {
        let digits = &s[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits
            .chars()
            .try_fold(0.0_f64, |acc, c| {
                c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
            })
            .unwrap_or(f64::NAN);
    }

    // Rust also accepts `inf` and `nan`; the host does not.
    if !s.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn number_like(value: &Value, integer: bool) -> String {
    let n = match value {
        Value::BigInt(n) => return format!("{}n", n),
        Value::Number(n) => *n,
        Value::String(s) => string_to_number(s),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        _ => f64::NAN,
    };
    if integer { format_number(n.trunc()) } else { format_number(n) }
}

fn json_like(value: &Value) -> String {
    value
        .to_json()
        .map_or_else(|| "undefined".to_owned(), |json| json.to_string())
}

/// Substitute `%s %d %i %j %o %O %%` placeholders.
///
/// Placeholders without a matching argument are left in place; surplus
/// arguments are appended separated by spaces. With no arguments at all the
/// template is returned unchanged.
///
/// ```rust
/// use node_compat_errors::{format_template, Value};
///
/// assert_eq!(format_template("Unknown signal: %s", &["SIGFOO".into()]), "Unknown signal: SIGFOO");
/// assert_eq!(format_template("%s and %s", &["a".into()]), "a and %s");
/// assert_eq!(format_template("%d%%", &[Value::from(50)]), "50%");
/// ```
pub fn format_template(template: &str, args: &[Value]) -> String {
    if args.is_empty() {
        return template.to_owned();
    }

    let mut out = String::with_capacity(template.len() + 16 * args.len());
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(&spec) = chars.peek() else {
            out.push('%');
            break;
        };
        if spec == '%' {
            chars.next();
            out.push('%');
            continue;
        }
        if !matches!(spec, 's' | 'd' | 'i' | 'j' | 'o' | 'O') {
            out.push('%');
            continue;
        }
        chars.next();
        match remaining.next() {
            None => {
                out.push('%');
                out.push(spec);
            }
            Some(arg) => match spec {
                's' => out.push_str(&to_display_string(arg)),
                'd' => out.push_str(&number_like(arg, false)),
                'i' => out.push_str(&number_like(arg, true)),
                'j' => out.push_str(&json_like(arg)),
                _ => out.push_str(&inspect(arg)),
            },
        }
    }

    for extra in remaining {
        out.push(' ');
        match extra {
            Value::String(s) => out.push_str(s),
            other => out.push_str(&inspect(other)),
        }
    }
    out
}

// ============================================================================
// Argument validation messages
// ============================================================================

fn is_class_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Join with commas and a final `, or` for three or more items.
fn or_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [one] => (*one).to_owned(),
        [a, b] => format!("{} or {}", a, b),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}

fn subject(name: &str) -> String {
    if name.ends_with(" argument") {
        name.to_owned()
    } else {
        let kind = if name.contains('.') { "property" } else { "argument" };
        format!("\"{}\" {}", name, kind)
    }
}

/// `ERR_INVALID_ARG_TYPE` wording.
///
/// Expected descriptors are split into primitive type names, class names and
/// free-form descriptions. A bare `object` is folded into the class list as a
/// leading `Object` when any class is also expected.
///
/// ```rust
/// use node_compat_errors::{invalid_arg_type, Value};
///
/// assert_eq!(
///     invalid_arg_type("foo", &["string", "number"], &Value::from(42)),
///     "The \"foo\" argument must be of type string or number. Received type number (42)"
/// );
/// assert_eq!(
///     invalid_arg_type("buf", &["object", "Buffer"], &Value::from(42)),
///     "The \"buf\" argument must be an instance of Object or Buffer. Received type number (42)"
/// );
/// ```
pub fn invalid_arg_type<S: AsRef<str>>(name: &str, expected: &[S], actual: &Value) -> String {
    let mut types: Vec<String> = Vec::new();
    let mut instances: Vec<&str> = Vec::new();
    let mut other: Vec<&str> = Vec::new();

    for descriptor in expected {
        let descriptor = descriptor.as_ref();
        if KNOWN_TYPES.contains(&descriptor) {
            let lowered = descriptor.to_lowercase();
            if !types.contains(&lowered) {
                types.push(lowered);
            }
        } else if is_class_name(descriptor) {
            instances.push(descriptor);
        } else {
            other.push(descriptor);
        }
    }

    if !instances.is_empty() {
        if let Some(pos) = types.iter().position(|t| t == "object") {
            types.remove(pos);
            if !instances.contains(&"Object") {
                instances.insert(0, "Object");
            }
        }
    }

    let mut clauses: Vec<String> = Vec::with_capacity(3);
    if !types.is_empty() {
        let types: Vec<&str> = types.iter().map(String::as_str).collect();
        if types.len() > 2 {
            clauses.push(format!("one of type {}", or_list(&types)));
        } else {
            clauses.push(format!("of type {}", or_list(&types)));
        }
    }
    if !instances.is_empty() {
        clauses.push(format!("an instance of {}", or_list(&instances)));
    }
    match other.as_slice() {
        [] => {}
        [single] if single.to_lowercase() != *single => clauses.push(format!("an {}", single)),
        [single] => clauses.push((*single).to_owned()),
        many => clauses.push(format!("one of {}", or_list(many))),
    }

    format!(
        "The {} must be {}. Received {}",
        subject(name),
        clauses.join(" or "),
        received_clause(actual)
    )
}

/// Group digits of an integer string in threes with `_`.
///
/// ```rust
/// use node_compat_errors::add_numerical_separator;
///
/// assert_eq!(add_numerical_separator("1000000"), "1_000_000");
/// assert_eq!(add_numerical_separator("-12345"), "-12_345");
/// assert_eq!(add_numerical_separator("999"), "999");
/// ```
pub fn add_numerical_separator(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let start = usize::from(chars.first() == Some(&'-'));
    let mut end = chars.len();
    let mut groups: Vec<String> = Vec::new();
    while end >= start + 4 {
        groups.push(chars[end - 3..end].iter().collect());
        end -= 3;
    }
    let mut out: String = chars[..end].iter().collect();
    for group in groups.iter().rev() {
        out.push('_');
        out.push_str(group);
    }
    out
}

fn out_of_range_received(input: &Value) -> String {
    match input {
        Value::Number(n) if input.is_integer() && n.abs() > SEPARATOR_THRESHOLD => {
            add_numerical_separator(&format_number(*n))
        }
        Value::BigInt(n) => {
            let digits = n.to_string();
            if n.unsigned_abs() > 1u128 << 32 {
                format!("{}n", add_numerical_separator(&digits))
            } else {
                format!("{}n", digits)
            }
        }
        other => inspect(other),
    }
}

/// `ERR_OUT_OF_RANGE` wording.
///
/// With `replace_default` the `name` is used as the whole lead sentence.
///
/// ```rust
/// use node_compat_errors::{out_of_range, Value};
///
/// assert_eq!(
///     out_of_range("bar", ">= 0 and <= 10", &Value::from(15), false),
///     "The value of \"bar\" is out of range. It must be >= 0 and <= 10. Received 15"
/// );
/// ```
pub fn out_of_range(name: &str, range: &str, input: &Value, replace_default: bool) -> String {
    let lead = if replace_default {
        name.to_owned()
    } else {
        format!("The value of \"{}\" is out of range.", name)
    };
    format!("{} It must be {}. Received {}", lead, range, out_of_range_received(input))
}

/// `ERR_INVALID_ARG_VALUE` wording, with the preview bounded to 128 characters.
pub fn invalid_arg_value(name: &str, value: &Value, reason: Option<&str>) -> String {
    let kind = if name.contains('.') { "property" } else { "argument" };
    format!(
        "The {} '{}' {}. Received {}",
        kind,
        name,
        reason.unwrap_or("is invalid"),
        truncate_preview(&inspect(value), MAX_ARG_VALUE_PREVIEW)
    )
}

fn quoted_alternatives(value: &Value) -> String {
    match value {
        Value::Array(options) => options
            .iter()
            .map(|o| format!("\"{}\"", to_display_string(o)))
            .collect::<Vec<_>>()
            .join(" or "),
        single => format!("\"{}\"", to_display_string(single)),
    }
}

fn missing_args_from(names: &[Value]) -> String {
    let wrapped: Vec<String> = names.iter().map(quoted_alternatives).collect();
    let listed = match wrapped.as_slice() {
        [] => return "The arguments must be specified".to_owned(),
        [one] => format!("{} argument", one),
        [a, b] => format!("{} and {} arguments", a, b),
        [init @ .., last] => format!("{}, and {} arguments", init.join(", "), last),
    };
    format!("The {} must be specified", listed)
}

/// `ERR_MISSING_ARGS` wording.
///
/// ```rust
/// use node_compat_errors::missing_args;
///
/// assert_eq!(missing_args(&["path"]), "The \"path\" argument must be specified");
/// assert_eq!(
///     missing_args(&["a", "b", "c"]),
///     "The \"a\", \"b\", and \"c\" arguments must be specified"
/// );
/// ```
pub fn missing_args<S: AsRef<str>>(names: &[S]) -> String {
    let names: Vec<Value> = names.iter().map(|n| Value::from(n.as_ref())).collect();
    missing_args_from(&names)
}

/// `ERR_SOCKET_BAD_PORT` wording.
pub fn socket_bad_port(name: &str, port: &Value, allow_zero: bool) -> String {
    let operator = if allow_zero { ">=" } else { ">" };
    format!(
        "{} should be {} 0 and < 65536. Received {}.",
        name,
        operator,
        received_clause(port)
    )
}

/// `ERR_INVALID_ADDRESS_FAMILY` wording.
pub fn invalid_address_family(address_type: &str, host: &str, port: &Value) -> String {
    format!(
        "Invalid address family: {} {}:{}",
        address_type,
        host,
        to_display_string(port)
    )
}

/// `ERR_HTTP2_INVALID_SETTING_VALUE` wording.
pub fn http2_invalid_setting_value(name: &str, actual: &Value) -> String {
    format!("Invalid value for setting \"{}\": {}", name, to_display_string(actual))
}

/// `ERR_HTTP2_STREAM_CANCEL` wording.
pub fn http2_stream_cancel(cause_message: Option<&str>) -> String {
    match cause_message {
        Some(m) if !m.is_empty() => {
            format!("The pending stream has been canceled (caused by: {})", m)
        }
        _ => "The pending stream has been canceled".to_owned(),
    }
}

/// `ERR_TLS_CERT_ALTNAME_INVALID` wording.
pub fn tls_cert_altname_invalid(reason: &str) -> String {
    format!("Hostname/IP does not match certificate's altnames: {}", reason)
}

/// `ERR_UNHANDLED_ERROR` wording.
pub fn unhandled_error(err: &Value) -> String {
    match err {
        Value::Undefined => "Unhandled error.".to_owned(),
        other => format!("Unhandled error. ({})", inspect(other)),
    }
}

const INTERNAL_ASSERTION_SUFFIX: &str = "This is caused by either a bug in Node.js or incorrect usage of Node.js internals.\nPlease open an issue with this stack trace at https://github.com/nodejs/node/issues\n";

/// `ERR_INTERNAL_ASSERTION` wording.
pub fn internal_assertion(message: Option<&str>) -> String {
    match message {
        None => INTERNAL_ASSERTION_SUFFIX.to_owned(),
        Some(m) => format!("{}\n{}", m, INTERNAL_ASSERTION_SUFFIX),
    }
}

/// `ERR_BUFFER_OUT_OF_BOUNDS` wording.
pub fn buffer_out_of_bounds(name: Option<&str>) -> String {
    match name {
        Some(n) if !n.is_empty() => format!("\"{}\" is outside of buffer bounds", n),
        _ => "Attempt to access memory outside buffer bounds".to_owned(),
    }
}

/// `ERR_INVALID_CHAR` wording.
pub fn invalid_char(name: &str, field: Option<&str>) -> String {
    match field {
        Some(f) => format!("Invalid character in {} [\"{}\"]", name, f),
        None => format!("Invalid character in {}", name),
    }
}

fn returned_type(value: &Value) -> String {
    match value.class_name() {
        Some(class) => format!("instance of {}", class),
        None => format!("type {}", value.type_of()),
    }
}

/// `ERR_INVALID_RETURN_VALUE` wording.
pub fn invalid_return_value(input: &str, name: &str, value: &Value) -> String {
    format!(
        "Expected {} to be returned from the \"{}\" function but got {}.",
        input,
        name,
        returned_type(value)
    )
}

/// `ERR_INVALID_RETURN_PROPERTY` wording.
pub fn invalid_return_property(input: &str, name: &str, prop: &str, value: &str) -> String {
    format!(
        "Expected a valid {} to be returned for the \"{}\" from the \"{}\" function but got {}.",
        input, prop, name, value
    )
}

/// `ERR_INVALID_RETURN_PROPERTY_VALUE` wording.
pub fn invalid_return_property_value(input: &str, name: &str, prop: &str, value: &Value) -> String {
    format!(
        "Expected {} to be returned for the \"{}\" from the \"{}\" function but got {}.",
        input,
        prop,
        name,
        returned_type(value)
    )
}

/// `ERR_INVALID_URL_SCHEME` wording for one or two accepted schemes.
pub fn invalid_url_scheme<S: AsRef<str>>(expected: &[S]) -> String {
    match expected {
        [a, b, ..] => format!("The URL must be one of scheme {} or {}", a.as_ref(), b.as_ref()),
        [a] => format!("The URL must be of scheme {}", a.as_ref()),
        [] => "The URL must be of scheme undefined".to_owned(),
    }
}

/// `ERR_INVALID_MODULE_SPECIFIER` wording.
pub fn invalid_module_specifier(request: &str, reason: &str, base: Option<&str>) -> String {
    match base {
        Some(b) => format!("Invalid module \"{}\" {} imported from {}", request, reason, b),
        None => format!("Invalid module \"{}\" {}", request, reason),
    }
}

/// `ERR_MODULE_NOT_FOUND` wording; `kind` defaults to `package`.
pub fn module_not_found(path: &str, base: &str, kind: Option<&str>) -> String {
    format!(
        "Cannot find {} '{}' imported from {}",
        kind.unwrap_or("package"),
        path,
        base
    )
}

/// `ERR_INVALID_PACKAGE_CONFIG` wording.
pub fn invalid_package_config(path: &str, base: Option<&str>, message: Option<&str>) -> String {
    let mut out = format!("Invalid package config {}", path);
    if let Some(base) = base {
        out.push_str(" while importing ");
        out.push_str(base);
    }
    if let Some(message) = message {
        out.push_str(". ");
        out.push_str(message);
    }
    out
}

/// `ERR_SRI_PARSE` wording.
pub fn sri_parse(name: &str, unexpected: &str, position: &Value) -> String {
    format!(
        "Subresource Integrity string {} had an unexpected {} at position {}",
        inspect(&Value::from(name)),
        inspect(&Value::from(unexpected)),
        to_display_string(position)
    )
}

/// `ERR_PARSE_ARGS_UNKNOWN_OPTION` wording.
pub fn parse_args_unknown_option(option: &str, allow_positionals: bool) -> String {
    if allow_positionals {
        format!(
            "Unknown option '{}'. To specify a positional argument starting with a '-', place it at the end of the command after '--', as in '-- {}",
            option,
            inspect(&Value::from(option))
        )
    } else {
        format!("Unknown option '{}'", option)
    }
}

/// `ERR_UNSUPPORTED_ESM_URL_SCHEME` wording.
pub fn unsupported_esm_url_scheme<S: AsRef<str>>(protocol: &str, supported: &[S]) -> String {
    let supported: Vec<&str> = supported.iter().map(AsRef::as_ref).collect();
    let listed = match supported.as_slice() {
        [] => String::new(),
        [one] => (*one).to_owned(),
        [a, b] => format!("{} and {}", a, b),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    };
    format!(
        "Only URLs with a scheme in: {} are supported by the default ESM loader. Received protocol '{}'",
        listed, protocol
    )
}

// ============================================================================
// Positional adapters used by the kind table
// ============================================================================

pub(crate) mod templates {
    use super::*;

    static UNDEFINED: Value = Value::Undefined;

    fn arg(args: &[Value], idx: usize) -> &Value {
        args.get(idx).unwrap_or(&UNDEFINED)
    }

    fn text(args: &[Value], idx: usize) -> String {
        to_display_string(arg(args, idx))
    }

    fn opt_text(args: &[Value], idx: usize) -> Option<String> {
        match arg(args, idx) {
            Value::Undefined | Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            other => Some(to_display_string(other)),
        }
    }

    fn truthy(args: &[Value], idx: usize) -> Option<bool> {
        match arg(args, idx) {
            Value::Undefined => None,
            Value::Bool(b) => Some(*b),
            Value::Null => Some(false),
            Value::Number(n) => Some(*n != 0.0 && !n.is_nan()),
            Value::String(s) => Some(!s.is_empty()),
            _ => Some(true),
        }
    }

    fn string_list(value: &Value) -> Vec<String> {
        match value {
            Value::Array(items) => items.iter().map(to_display_string).collect(),
            Value::Undefined => Vec::new(),
            single => vec![to_display_string(single)],
        }
    }

    pub(crate) fn invalid_arg_type(args: &[Value]) -> String {
        super::invalid_arg_type(&text(args, 0), &string_list(arg(args, 1)), arg(args, 2))
    }

    pub(crate) fn invalid_url(_args: &[Value]) -> String {
        "Invalid URL".to_owned()
    }

    pub(crate) fn invalid_arg_value(args: &[Value]) -> String {
        super::invalid_arg_value(&text(args, 0), arg(args, 1), opt_text(args, 2).as_deref())
    }

    pub(crate) fn out_of_range(args: &[Value]) -> String {
        super::out_of_range(
            &text(args, 0),
            &text(args, 1),
            arg(args, 2),
            truthy(args, 3).unwrap_or(false),
        )
    }

    pub(crate) fn missing_args(args: &[Value]) -> String {
        super::missing_args_from(args)
    }

    pub(crate) fn socket_bad_port(args: &[Value]) -> String {
        super::socket_bad_port(&text(args, 0), arg(args, 1), truthy(args, 2).unwrap_or(true))
    }

    pub(crate) fn invalid_address_family(args: &[Value]) -> String {
        super::invalid_address_family(&text(args, 0), &text(args, 1), arg(args, 2))
    }

    pub(crate) fn http2_invalid_setting_value(args: &[Value]) -> String {
        super::http2_invalid_setting_value(&text(args, 0), arg(args, 1))
    }

    pub(crate) fn http2_stream_cancel(args: &[Value]) -> String {
        super::http2_stream_cancel(opt_text(args, 0).as_deref())
    }

    pub(crate) fn tls_cert_altname_invalid(args: &[Value]) -> String {
        super::tls_cert_altname_invalid(&text(args, 0))
    }

    pub(crate) fn unhandled_error(args: &[Value]) -> String {
        super::unhandled_error(arg(args, 0))
    }

    pub(crate) fn internal_assertion(args: &[Value]) -> String {
        super::internal_assertion(opt_text(args, 0).as_deref())
    }

    pub(crate) fn buffer_out_of_bounds(args: &[Value]) -> String {
        super::buffer_out_of_bounds(opt_text(args, 0).as_deref())
    }

    pub(crate) fn invalid_char(args: &[Value]) -> String {
        super::invalid_char(&text(args, 0), opt_text(args, 1).as_deref())
    }

    pub(crate) fn invalid_return_value(args: &[Value]) -> String {
        super::invalid_return_value(&text(args, 0), &text(args, 1), arg(args, 2))
    }

    pub(crate) fn invalid_return_property(args: &[Value]) -> String {
        super::invalid_return_property(&text(args, 0), &text(args, 1), &text(args, 2), &text(args, 3))
    }

    pub(crate) fn invalid_return_property_value(args: &[Value]) -> String {
        super::invalid_return_property_value(
            &text(args, 0),
            &text(args, 1),
            &text(args, 2),
            arg(args, 3),
        )
    }

    pub(crate) fn invalid_url_scheme(args: &[Value]) -> String {
        super::invalid_url_scheme(&string_list(arg(args, 0)))
    }

    pub(crate) fn invalid_module_specifier(args: &[Value]) -> String {
        super::invalid_module_specifier(&text(args, 0), &text(args, 1), opt_text(args, 2).as_deref())
    }

    pub(crate) fn module_not_found(args: &[Value]) -> String {
        super::module_not_found(&text(args, 0), &text(args, 1), opt_text(args, 2).as_deref())
    }

    pub(crate) fn invalid_package_config(args: &[Value]) -> String {
        super::invalid_package_config(
            &text(args, 0),
            opt_text(args, 1).as_deref(),
            opt_text(args, 2).as_deref(),
        )
    }

    pub(crate) fn sri_parse(args: &[Value]) -> String {
        super::sri_parse(&text(args, 0), &text(args, 1), arg(args, 2))
    }

    pub(crate) fn parse_args_unknown_option(args: &[Value]) -> String {
        super::parse_args_unknown_option(&text(args, 0), truthy(args, 1).unwrap_or(false))
    }

    pub(crate) fn unsupported_esm_url_scheme(args: &[Value]) -> String {
        super::unsupported_esm_url_scheme(&text(args, 0), &string_list(arg(args, 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_placeholders() {
        let args = [Value::from("x"), Value::from(1.5), Value::from(2.9)];
        assert_eq!(format_template("%s %d %i", &args), "x 1.5 2");
        assert_eq!(format_template("%j", &[Value::from("q")]), "\"q\"");
        assert_eq!(format_template("%d", &[Value::from("abc")]), "NaN");
        assert_eq!(format_template("%d", &[Value::bigint(7)]), "7n");
    }

    #[test]
    fn numeric_placeholders_follow_host_string_conversion() {
        let d = |s: &str| format_template("%d", &[Value::from(s)]);
        assert_eq!(d(""), "0");
        assert_eq!(d("  "), "0");
        assert_eq!(d(" 42 "), "42");
        assert_eq!(d("inf"), "NaN");
        assert_eq!(d("infinity"), "NaN");
        assert_eq!(d("nan"), "NaN");
        assert_eq!(d("Infinity"), "Infinity");
        assert_eq!(d("-Infinity"), "-Infinity");
        assert_eq!(d("0x1f"), "31");
        assert_eq!(d("0b101"), "5");
        assert_eq!(d("0x"), "NaN");
        assert_eq!(d("1e3"), "1000");
        assert_eq!(d(".5"), "0.5");
        assert_eq!(d("1_000"), "NaN");
    }

    #[test]
    fn template_surplus_and_missing() {
        assert_eq!(format_template("%s", &["a".into(), "b".into(), Value::from(3)]), "a b 3");
        assert_eq!(format_template("%s=%s", &["a".into()]), "a=%s");
        assert_eq!(format_template("100%", &["a".into()]), "100% a");
        assert_eq!(format_template("keep %% as is", &[]), "keep %% as is");
    }

    #[test]
    fn arg_type_single_type() {
        assert_eq!(
            invalid_arg_type("cb", &["function"], &Value::Undefined),
            "The \"cb\" argument must be of type function. Received undefined"
        );
    }

    #[test]
    fn arg_type_three_types_use_oxford_comma() {
        assert_eq!(
            invalid_arg_type("v", &["string", "number", "boolean"], &Value::Null),
            "The \"v\" argument must be one of type string, number, or boolean. Received null"
        );
    }

    #[test]
    fn arg_type_property_subject() {
        let msg = invalid_arg_type("options.mode", &["number"], &Value::from("x"));
        assert!(msg.starts_with("The \"options.mode\" property must be of type number."));
    }

    #[test]
    fn arg_type_verbatim_subject() {
        let msg = invalid_arg_type("first argument", &["string"], &Value::from(1));
        assert!(msg.starts_with("The first argument must be of type string."));
    }

    #[test]
    fn arg_type_mixed_buckets() {
        assert_eq!(
            invalid_arg_type(
                "data",
                &["string", "Buffer", "TypedArray", "DataView"],
                &Value::instance("Date")
            ),
            "The \"data\" argument must be of type string or an instance of Buffer, TypedArray, or DataView. Received an instance of Date"
        );
    }

    #[test]
    fn arg_type_object_fold_never_shows_type_object() {
        let msg = invalid_arg_type("x", &["object", "Buffer"], &Value::from(42));
        assert!(!msg.contains("type object"));
        assert!(msg.contains("an instance of Object or Buffer"));
    }

    #[test]
    fn arg_type_other_descriptors() {
        assert_eq!(
            invalid_arg_type("p", &["a valid path"], &Value::from(1)),
            "The \"p\" argument must be a valid path. Received type number (1)"
        );
        assert_eq!(
            invalid_arg_type("p", &["Iterable<string>"], &Value::from(1)),
            "The \"p\" argument must be an Iterable<string>. Received type number (1)"
        );
        assert_eq!(
            invalid_arg_type("p", &["x-y", "y-z"], &Value::from(1)),
            "The \"p\" argument must be one of x-y or y-z. Received type number (1)"
        );
    }

    #[test]
    fn arg_type_received_function() {
        let msg = invalid_arg_type("x", &["string"], &Value::function("handler"));
        assert!(msg.ends_with("Received function handler"));
    }

    #[test]
    fn out_of_range_separators() {
        assert_eq!(
            out_of_range("n", "an integer", &Value::from(5_000_000_000u64), false),
            "The value of \"n\" is out of range. It must be an integer. Received 5_000_000_000"
        );
        assert_eq!(
            out_of_range("n", "<= 2", &Value::bigint(-5_000_000_000), false),
            "The value of \"n\" is out of range. It must be <= 2. Received -5_000_000_000n"
        );
        assert_eq!(
            out_of_range("n", "<= 2", &Value::bigint(3), false),
            "The value of \"n\" is out of range. It must be <= 2. Received 3n"
        );
    }

    #[test]
    fn out_of_range_replaces_lead() {
        assert_eq!(
            out_of_range("Index out of range.", "positive", &Value::from(-1), true),
            "Index out of range. It must be positive. Received -1"
        );
    }

    #[test]
    fn arg_value_bounds_preview() {
        let long = "z".repeat(200);
        let msg = invalid_arg_value("opt", &Value::from(long), None);
        assert!(msg.starts_with("The argument 'opt' is invalid. Received '"));
        assert!(msg.ends_with("..."));
        assert_eq!(msg.len(), "The argument 'opt' is invalid. Received ".len() + 128 + 3);
    }

    #[test]
    fn missing_args_nested_alternatives() {
        let args = [
            Value::from(vec!["url", "host"]),
            Value::from("port"),
        ];
        assert_eq!(
            templates::missing_args(&args),
            "The \"url\" or \"host\" and \"port\" arguments must be specified"
        );
    }

    #[test]
    fn socket_port_operator() {
        assert_eq!(
            socket_bad_port("Port", &Value::from(70000), true),
            "Port should be >= 0 and < 65536. Received type number (70000)."
        );
        assert!(socket_bad_port("Port", &Value::from(0), false).contains("> 0"));
    }

    #[test]
    fn separator_edges() {
        assert_eq!(add_numerical_separator("1234"), "1_234");
        assert_eq!(add_numerical_separator("-123"), "-123");
        assert_eq!(add_numerical_separator(""), "");
    }

    #[test]
    fn adapters_tolerate_missing_args() {
        for render in [
            templates::invalid_arg_type as fn(&[Value]) -> String,
            templates::out_of_range,
            templates::socket_bad_port,
            templates::sri_parse,
            templates::invalid_return_property_value,
        ] {
            assert!(!render(&[]).is_empty());
        }
    }
}
