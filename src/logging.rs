//! Structured log view of a [`NodeError`].
//!
//! `ErrorLog` borrows from the error that created it and cannot outlive it.
//! Loggers consume it immediately; the error's owned strings are zeroized
//! when the error drops, not when the log does.
//!
//! Every rendered field is capped at [`MAX_FIELD_OUTPUT_LEN`] bytes so a
//! hostile value (a megabyte path, a huge inspected object) cannot blow up
//! a log line.

use crate::inspect::{to_display_string, Value};
use crate::NodeError;
use std::borrow::Cow;
use std::fmt;

/// Maximum length for any individual field in formatted output.
pub const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated fields.
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Borrowed, structured view of one error and its cause chain.
///
/// ```rust
/// use node_compat_errors::{NodeError, Value};
///
/// let err = NodeError::out_of_range("offset", ">= 0", Value::from(-1));
/// let mut line = String::new();
/// err.log_entry().write_to(&mut line).unwrap();
/// assert!(line.starts_with("[ERR_OUT_OF_RANGE] RangeError message='The value of \"offset\""));
/// assert!(line.contains(" received='-1'"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ErrorLog<'a> {
    name: &'static str,
    code: &'a str,
    message: &'a str,
    fields: &'a [(&'static str, Value)],
    cause: Option<&'a NodeError>,
}

impl<'a> ErrorLog<'a> {
    pub(crate) fn new(err: &'a NodeError) -> Self {
        Self {
            name: err.name(),
            code: err.code(),
            message: err.message(),
            fields: err.fields(),
            cause: err.cause(),
        }
    }

    /// Write `[CODE] Name message='...' key='...' caused_by=[CODE2]`.
    ///
    /// String fields are written in place unless truncated; other values
    /// are rendered to a temporary string first.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "[{}] {} message='{}'",
            self.code,
            self.name,
            truncate_with_indicator(self.message)
        )?;

        for (key, value) in self.fields {
            match value {
                Value::String(s) => write!(f, " {}='{}'", key, truncate_with_indicator(s))?,
                other => write!(
                    f,
                    " {}='{}'",
                    key,
                    truncate_with_indicator(&to_display_string(other))
                )?,
            }
        }

        let mut cause = self.cause;
        while let Some(err) = cause {
            write!(f, " caused_by=[{}]", err.code())?;
            cause = err.cause();
        }

        Ok(())
    }

    /// Family name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Stable code.
    #[inline]
    pub const fn code(&self) -> &str {
        self.code
    }

    /// Untruncated message; truncation is up to the consuming logger.
    #[inline]
    pub const fn message(&self) -> &str {
        self.message
    }

    /// Extra fields in insertion order.
    #[inline]
    pub const fn fields(&self) -> &[(&'static str, Value)] {
        self.fields
    }

    /// Log view of the direct cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<ErrorLog<'a>> {
        self.cause.map(ErrorLog::new)
    }
}

impl fmt::Display for ErrorLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Truncate on a UTF-8 boundary, borrowing when no truncation is needed.
fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let mut idx = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions;

    #[test]
    fn truncate_ascii() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN + 10);
        let truncated = truncate_with_indicator(&s);
        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn exactly_at_limit_is_borrowed() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);
        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated.len(), MAX_FIELD_OUTPUT_LEN);
    }

    #[test]
    fn truncate_multibyte_boundary() {
        let s = "й".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = truncate_with_indicator(&s);
        assert!(std::str::from_utf8(truncated.as_bytes()).is_ok());
        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));

        let s = "🔥".repeat(MAX_FIELD_OUTPUT_LEN);
        assert!(truncate_with_indicator(&s).ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn log_line_includes_fields_and_chain() {
        let root = NodeError::new(&definitions::ERR_STREAM_PREMATURE_CLOSE, &[]);
        let mid = NodeError::http2_stream_cancel(Some(root));
        let err = NodeError::new(&definitions::ERR_OPERATION_FAILED, &["flush".into()])
            .with_field("path", "/tmp/out")
            .with_field("attempt", 3)
            .with_cause(mid);

        let line = err.log_entry().to_string();
        assert_eq!(
            line,
            "[ERR_OPERATION_FAILED] Error message='Operation failed: flush' path='/tmp/out' attempt='3' caused_by=[ERR_HTTP2_STREAM_CANCEL] caused_by=[ERR_STREAM_PREMATURE_CLOSE]"
        );
    }

    #[test]
    fn long_field_is_capped() {
        let err = NodeError::invalid_url("x".repeat(5000));
        let line = err.log_entry().to_string();
        assert!(line.contains(TRUNCATION_INDICATOR));
        assert!(line.len() < 2 * MAX_FIELD_OUTPUT_LEN);
    }

    #[test]
    fn cause_view_walks_chain() {
        let err = NodeError::http2_stream_cancel(Some(NodeError::invalid_uri()));
        err.with_log(|log| {
            let cause = log.cause().unwrap();
            assert_eq!(cause.code(), "ERR_INVALID_URI");
            assert_eq!(cause.name(), "URIError");
            assert!(cause.cause().is_none());
        });
    }
}
