//! Convenience macros for building errors.
//!
//! # Usage
//!
//! ```rust
//! use node_compat_errors::{definitions, expected_types, invalid_arg_type, node_error};
//!
//! let err = node_error!(definitions::ERR_INVALID_HANDLE_TYPE);
//! assert_eq!(err.message(), "This handle type cannot be sent");
//!
//! let err = node_error!(definitions::ERR_INVALID_FD_TYPE, "FILE");
//! assert_eq!(err.message(), "Unsupported fd type: FILE");
//!
//! let err = invalid_arg_type!("chunk", ["string", "Buffer"], 42);
//! assert_eq!(
//!     err.message(),
//!     "The \"chunk\" argument must be of type string or an instance of Buffer. Received type number (42)"
//! );
//!
//! assert_eq!(expected_types!["string", "number"].len(), 2);
//! ```
//!
//! Arguments go through `Value::from`, so anything with a `From` impl
//! (strings, numbers, booleans, `Option`, `Vec`) works directly.

/// Build a [`NodeError`](crate::NodeError) from a table kind and positional
/// arguments.
///
/// The kind is given by path, without `&`.
#[macro_export]
macro_rules! node_error {
    ($kind:path) => {
        $crate::NodeError::new(&$kind, &[])
    };
    ($kind:path, $($arg:expr),+ $(,)?) => {
        $crate::NodeError::new(&$kind, &[$($crate::Value::from($arg)),+])
    };
}

/// A `&[&str]` list of expected type names for `ERR_INVALID_ARG_TYPE`.
#[macro_export]
macro_rules! expected_types {
    ($($ty:literal),* $(,)?) => {
        &[$($ty),*] as &[&str]
    };
}

/// `ERR_INVALID_ARG_TYPE` with an inline expected-type list.
#[macro_export]
macro_rules! invalid_arg_type {
    ($name:expr, [$($ty:literal),+ $(,)?], $actual:expr $(,)?) => {
        $crate::NodeError::invalid_arg_type(
            $name,
            $crate::expected_types![$($ty),+],
            $crate::Value::from($actual),
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::{definitions, ErrorFamily, Value};

    #[test]
    fn node_error_without_args() {
        let err = node_error!(definitions::ERR_STREAM_PREMATURE_CLOSE);
        assert_eq!(err.code(), "ERR_STREAM_PREMATURE_CLOSE");
        assert_eq!(err.message(), "Premature close");
    }

    #[test]
    fn node_error_mixed_args() {
        let err = node_error!(definitions::ERR_UNKNOWN_ENCODING, String::from("utf-7"),);
        assert_eq!(err.message(), "Unknown encoding: utf-7");
        assert!(err.is(&definitions::ERR_UNKNOWN_ENCODING));
    }

    #[test]
    fn expected_types_is_a_slice() {
        let list = expected_types!["string", "Buffer", "Uint8Array"];
        assert_eq!(list, &["string", "Buffer", "Uint8Array"]);
        let empty = expected_types![];
        assert!(empty.is_empty());
    }

    #[test]
    fn invalid_arg_type_macro_matches_constructor() {
        let from_macro = invalid_arg_type!("cb", ["function"], Value::Null);
        let direct = crate::NodeError::invalid_arg_type("cb", &["function"], Value::Null);
        assert_eq!(from_macro.message(), direct.message());
        assert_eq!(from_macro.family(), ErrorFamily::TypeError);
        assert_eq!(
            from_macro.message(),
            "The \"cb\" argument must be of type function. Received null"
        );
    }
}
