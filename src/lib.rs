//! # Node Compat Errors
//!
//! Node-compatible error classification and OS errno translation.
//!
//! ## Design Philosophy
//!
//! 1. **Callers branch on `code`**, never on message text
//! 2. **Family is a tag**, not a type: `TypeError` is [`ErrorFamily::TypeError`]
//! 3. **Kinds are data**: one table of `{code, family, template}` entries
//! 4. **Construction never fails**: message formatting is total
//! 5. **Errno lookups fail loudly**: a missing table entry is a bug, not a
//!    condition to paper over
//!
//! ## Quick Start
//!
//! ```rust
//! use node_compat_errors::{NodeError, Result, Value};
//!
//! fn set_port(port: i64) -> Result<u16> {
//!     u16::try_from(port).map_err(|_| NodeError::socket_bad_port("Port", Value::from(port), true))
//! }
//!
//! let err = set_port(70000).unwrap_err();
//! assert_eq!(err.code(), "ERR_SOCKET_BAD_PORT");
//! assert_eq!(err.name(), "RangeError");
//! assert_eq!(
//!     err.to_string(),
//!     "RangeError [ERR_SOCKET_BAD_PORT]: Port should be >= 0 and < 65536. Received type number (70000)."
//! );
//! ```
//!
//! ## Table-Driven Kinds
//!
//! ```rust
//! use node_compat_errors::{definitions, node_error, NodeError};
//!
//! let err = NodeError::new(&definitions::ERR_UNKNOWN_ENCODING, &["latin9".into()]);
//! assert_eq!(err.message(), "Unknown encoding: latin9");
//!
//! let err = node_error!(definitions::ERR_HTTP_HEADERS_SENT, "set");
//! assert_eq!(err.message(), "Cannot set headers after they are sent to the client");
//! ```
//!
//! ## Errno Translation
//!
//! ```rust
//! use node_compat_errors::{uv_exception, ErrnoTable, Platform, SystemContext};
//!
//! let table = ErrnoTable::for_platform(Platform::Linux);
//! let ctx = SystemContext::builder()
//!     .errno(-2)
//!     .syscall("open")
//!     .path("/etc/missing")
//!     .try_build()
//!     .unwrap();
//! let err = uv_exception(table, &ctx).unwrap();
//! assert_eq!(err.code(), "ENOENT");
//! assert_eq!(err.message(), "ENOENT: no such file or directory, open '/etc/missing'");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use smallvec::SmallVec;
use std::fmt;
use std::result;
use zeroize::Zeroize;

pub mod codes;
pub mod convenience;
pub mod definitions;
pub mod inspect;
pub mod logging;
pub mod messages;
pub mod system;
pub mod uv;

pub use codes::*;
pub use definitions::*;
pub use inspect::Value;
pub use logging::*;
pub use messages::*;
pub use system::*;
pub use uv::*;

/// Type alias for Results using our error type.
pub type Result<T> = result::Result<T, NodeError>;

/// Inline capacity for extra fields; most kinds carry at most three.
type Fields = SmallVec<[(&'static str, Value); 4]>;

/// A Node-compatible error: family, code, message, extra fields and an
/// optional cause.
///
/// # Key Properties
///
/// - `code` and `message` are fixed at construction; there are no setters
/// - Extra fields can be added after construction, never removed
/// - Owned strings (message and field values) are zeroized on drop
/// - `Display` is `"<name> [<code>]: <message>"`
/// - `source()` is the cause, so `?`-based chains keep working
#[must_use = "errors should be handled or logged"]
pub struct NodeError {
    family: ErrorFamily,
    code: &'static str,
    message: String,
    fields: Fields,
    cause: Option<Box<NodeError>>,
}

impl NodeError {
    #[inline]
    fn from_parts(family: ErrorFamily, code: &'static str, message: String) -> Self {
        Self {
            family,
            code,
            message,
            fields: SmallVec::new(),
            cause: None,
        }
    }

    /// Construct any table kind from positional arguments.
    ///
    /// Never fails: missing or surplus arguments still produce a message.
    /// Arguments named in the kind's field slots are also kept as extra
    /// fields; `undefined` or absent arguments are skipped.
    ///
    /// ```rust
    /// use node_compat_errors::{definitions, NodeError, Value};
    ///
    /// let err = NodeError::new(
    ///     &definitions::ERR_INVALID_ADDRESS_FAMILY,
    ///     &["IPv5".into(), "localhost".into(), 80.into()],
    /// );
    /// assert_eq!(err.message(), "Invalid address family: IPv5 localhost:80");
    /// assert_eq!(err.field("host").and_then(Value::as_str), Some("localhost"));
    /// assert_eq!(err.field("port"), Some(&Value::from(80)));
    /// ```
    pub fn new(kind: &'static ErrorKind, args: &[Value]) -> Self {
        let mut err = Self::from_parts(kind.family(), kind.code(), kind.render(args));
        for &(name, pos) in kind.fields() {
            match args.get(pos) {
                None | Some(Value::Undefined) => {}
                Some(value) => err.fields.push((name, value.clone())),
            }
        }
        err
    }

    /// Plain `Error` with a caller-chosen code.
    #[inline]
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self::from_parts(ErrorFamily::Error, code, message.into())
    }

    /// `TypeError` with a caller-chosen code.
    #[inline]
    pub fn type_error(code: &'static str, message: impl Into<String>) -> Self {
        Self::from_parts(ErrorFamily::TypeError, code, message.into())
    }

    /// `RangeError` with a caller-chosen code.
    #[inline]
    pub fn range_error(code: &'static str, message: impl Into<String>) -> Self {
        Self::from_parts(ErrorFamily::RangeError, code, message.into())
    }

    /// `SyntaxError` with a caller-chosen code.
    #[inline]
    pub fn syntax_error(code: &'static str, message: impl Into<String>) -> Self {
        Self::from_parts(ErrorFamily::SyntaxError, code, message.into())
    }

    /// `URIError` with a caller-chosen code.
    #[inline]
    pub fn uri_error(code: &'static str, message: impl Into<String>) -> Self {
        Self::from_parts(ErrorFamily::URIError, code, message.into())
    }

    /// Construct from a kind with an already-rendered message.
    #[inline]
    pub(crate) fn with_message(kind: &'static ErrorKind, message: String) -> Self {
        Self::from_parts(kind.family(), kind.code(), message)
    }

    // ------------------------------------------------------------------------
    // Typed constructors for kinds with structured fields
    // ------------------------------------------------------------------------

    /// `ERR_INVALID_ARG_TYPE`, keeping the offending value as `actual`.
    ///
    /// ```rust
    /// use node_compat_errors::{expected_types, NodeError, Value};
    ///
    /// let err = NodeError::invalid_arg_type("foo", expected_types!["string", "number"], Value::from(42));
    /// assert_eq!(err.message(), "The \"foo\" argument must be of type string or number. Received type number (42)");
    /// assert_eq!(err.field("actual"), Some(&Value::from(42)));
    /// ```
    pub fn invalid_arg_type<S: AsRef<str>>(name: &str, expected: &[S], actual: Value) -> Self {
        let expected: Vec<Value> = expected.iter().map(|s| Value::from(s.as_ref())).collect();
        Self::new(
            &ERR_INVALID_ARG_TYPE,
            &[Value::from(name), Value::Array(expected), actual],
        )
    }

    /// `ERR_INVALID_ARG_VALUE`; `reason` defaults to `"is invalid"`.
    pub fn invalid_arg_value(name: &str, value: Value, reason: Option<&str>) -> Self {
        Self::new(
            &ERR_INVALID_ARG_VALUE,
            &[Value::from(name), value, Value::from(reason)],
        )
    }

    /// `ERR_OUT_OF_RANGE`, keeping `received` and `range`.
    pub fn out_of_range(name: &str, range: &str, received: Value) -> Self {
        Self::new(
            &ERR_OUT_OF_RANGE,
            &[Value::from(name), Value::from(range), received],
        )
    }

    /// `ERR_SOCKET_BAD_PORT`, keeping `port`.
    pub fn socket_bad_port(name: &str, port: Value, allow_zero: bool) -> Self {
        Self::new(
            &ERR_SOCKET_BAD_PORT,
            &[Value::from(name), port, Value::from(allow_zero)],
        )
    }

    /// `ERR_INVALID_URL`, keeping the rejected `input`.
    pub fn invalid_url(input: impl Into<String>) -> Self {
        Self::new(&ERR_INVALID_URL, &[Value::String(input.into())])
    }

    /// `ERR_HTTP2_INVALID_SETTING_VALUE`, keeping `actual` and the bounds
    /// that were supplied.
    pub fn http2_invalid_setting_value(
        name: &str,
        actual: Value,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Self {
        Self::new(
            &ERR_HTTP2_INVALID_SETTING_VALUE,
            &[Value::from(name), actual, Value::from(min), Value::from(max)],
        )
    }

    /// `ERR_INVALID_ADDRESS_FAMILY`, keeping `host` and `port`.
    pub fn invalid_address_family(address_type: &str, host: &str, port: Value) -> Self {
        Self::new(
            &ERR_INVALID_ADDRESS_FAMILY,
            &[Value::from(address_type), Value::from(host), port],
        )
    }

    /// `ERR_TLS_CERT_ALTNAME_INVALID`, keeping `reason`, `host` and, when
    /// given, the peer certificate snapshot as `cert`.
    pub fn tls_cert_altname_invalid(reason: &str, host: &str, cert: Option<Value>) -> Self {
        Self::new(
            &ERR_TLS_CERT_ALTNAME_INVALID,
            &[Value::from(reason), Value::from(host), Value::from(cert)],
        )
    }

    /// `ERR_HTTP2_STREAM_CANCEL`, chaining the error that caused it.
    ///
    /// The cause is an error, not a value, so it is attached with
    /// [`with_cause`](Self::with_cause) rather than a field slot.
    pub fn http2_stream_cancel(cause: Option<NodeError>) -> Self {
        let reason = Value::from(cause.as_ref().map(NodeError::message));
        let err = Self::new(&ERR_HTTP2_STREAM_CANCEL, &[reason]);
        match cause {
            Some(cause) => err.with_cause(cause),
            None => err,
        }
    }

    /// `ERR_MISSING_ARGS` for the given argument names.
    pub fn missing_args<S: AsRef<str>>(names: &[S]) -> Self {
        Self::with_message(&ERR_MISSING_ARGS, messages::missing_args(names))
    }

    /// `ERR_UNKNOWN_SIGNAL`.
    pub fn unknown_signal(signal: &str) -> Self {
        Self::new(&ERR_UNKNOWN_SIGNAL, &[Value::from(signal)])
    }

    /// `ERR_INVALID_URI` (`URIError: URI malformed`).
    pub fn invalid_uri() -> Self {
        Self::new(&ERR_INVALID_URI, &[])
    }

    // ------------------------------------------------------------------------
    // Context builders (add only)
    // ------------------------------------------------------------------------

    /// Attach an extra field. Code and message are untouched.
    ///
    /// A later field with the same key shadows the earlier one in
    /// [`field`](Self::field); both remain in [`fields`](Self::fields).
    #[inline]
    pub fn with_field(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.fields.push((key, value.into()));
        self
    }

    /// Record the error that caused this one.
    #[inline]
    pub fn with_cause(mut self, cause: NodeError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Family name, e.g. `"TypeError"`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.family.name()
    }

    /// Emulated family.
    #[inline]
    pub const fn family(&self) -> ErrorFamily {
        self.family
    }

    /// Stable code.
    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Rendered message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Most recent value recorded under `key`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// All extra fields in insertion order.
    #[inline]
    pub fn fields(&self) -> &[(&'static str, Value)] {
        &self.fields
    }

    /// The direct cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&NodeError> {
        self.cause.as_deref()
    }

    /// The table kind for this code, if it is a table kind.
    #[inline]
    pub fn kind(&self) -> Option<&'static ErrorKind> {
        definitions::find(self.code)
    }

    /// Whether this error was built from `kind`.
    #[inline]
    pub fn is(&self, kind: &ErrorKind) -> bool {
        self.code == kind.code()
    }

    /// Structured log view borrowing from this error.
    ///
    /// The returned `ErrorLog` cannot outlive `self`.
    #[inline]
    pub fn log_entry(&self) -> ErrorLog<'_> {
        ErrorLog::new(self)
    }

    /// Callback-style logging that keeps the log view scoped to `f`.
    #[inline]
    pub fn with_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ErrorLog<'_>) -> R,
    {
        let log = self.log_entry();
        f(&log)
    }
}

impl Drop for NodeError {
    fn drop(&mut self) {
        self.message.zeroize();
        for (_, value) in self.fields.iter_mut() {
            value.zeroize();
        }
        self.fields.clear();
    }
}

impl fmt::Debug for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeError")
            .field("name", &self.family.name())
            .field("code", &self.code)
            .field("message", &self.message)
            .field("fields", &self.fields.as_slice())
            .field("cause", &self.cause)
            .finish()
    }
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.family.name(), self.code, self.message)
    }
}

impl std::error::Error for NodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
