//! Error families and kind identity.
//!
//! Every reportable fault is one [`ErrorKind`]: a stable `ERR_*` code, the
//! native family it presents as, and a message template. Kinds are frozen
//! statics declared through [`define_error_kinds!`]; there is no runtime
//! constructor, so the taxonomy cannot drift at runtime.
//!
//! # Families
//!
//! | Family        | `name()`        |
//! |---------------|-----------------|
//! | `Error`       | `"Error"`       |
//! | `TypeError`   | `"TypeError"`   |
//! | `RangeError`  | `"RangeError"`  |
//! | `SyntaxError` | `"SyntaxError"` |
//! | `URIError`    | `"URIError"`    |
//!
//! The family is a plain tag. Code that needs "is this a TypeError" switches
//! on [`ErrorFamily`] instead of relying on type identity.
//!
//! # Example Usage
//!
//! ```rust
//! use node_compat_errors::ErrorFamily;
//!
//! mod local {
//!     use node_compat_errors::text;
//!     node_compat_errors::define_error_kinds! {
//!         TypeError => {
//!             ERR_WIDGET_BROKEN = text("Widget %s is broken"),
//!         }
//!     }
//! }
//!
//! assert_eq!(local::ERR_WIDGET_BROKEN.code(), "ERR_WIDGET_BROKEN");
//! assert_eq!(local::ERR_WIDGET_BROKEN.family(), ErrorFamily::TypeError);
//! assert_eq!(local::ERR_WIDGET_BROKEN.render(&["w1".into()]), "Widget w1 is broken");
//! assert_eq!(local::ALL.len(), 1);
//! ```

use crate::inspect::Value;
use crate::messages::format_template;
use std::fmt;
use std::hash::{Hash, Hasher};

// ============================================================================
// Error Family
// ============================================================================

/// The emulated native error family a kind presents as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorFamily {
    /// Plain `Error`.
    Error,
    /// `TypeError`: a value had the wrong type.
    TypeError,
    /// `RangeError`: a value was outside its allowed range.
    RangeError,
    /// `SyntaxError`: malformed input.
    SyntaxError,
    /// `URIError`: malformed URI component.
    URIError,
}

impl ErrorFamily {
    /// All families in declaration order.
    pub const ALL: [ErrorFamily; 5] = [
        Self::Error,
        Self::TypeError,
        Self::RangeError,
        Self::SyntaxError,
        Self::URIError,
    ];

    /// The native family name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::TypeError => "TypeError",
            Self::RangeError => "RangeError",
            Self::SyntaxError => "SyntaxError",
            Self::URIError => "URIError",
        }
    }
}

impl fmt::Display for ErrorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Message Template
// ============================================================================

/// How a kind turns constructor arguments into its message.
#[derive(Debug, Clone, Copy)]
pub enum MessageTemplate {
    /// printf-style text; see [`format_template`].
    Format(&'static str),
    /// Wording computed from the shape of the arguments.
    Computed(fn(&[Value]) -> String),
}

impl MessageTemplate {
    /// Render with positional arguments. Never fails.
    #[inline]
    pub fn render(&self, args: &[Value]) -> String {
        match self {
            Self::Format(template) => format_template(template, args),
            Self::Computed(render) => render(args),
        }
    }

    /// The static template text, if any.
    #[inline]
    pub const fn as_text(&self) -> Option<&'static str> {
        match self {
            Self::Format(template) => Some(*template),
            Self::Computed(_) => None,
        }
    }
}

/// A printf-style template.
///
/// # Panics
///
/// Panics at compile time (in const contexts) if `template` is empty.
#[inline]
pub const fn text(template: &'static str) -> MessageTemplate {
    assert!(!template.is_empty(), "Message template must not be empty");
    MessageTemplate::Format(template)
}

/// A computed template.
#[inline]
pub const fn computed(render: fn(&[Value]) -> String) -> MessageTemplate {
    MessageTemplate::Computed(render)
}

// ============================================================================
// Error Kind (Frozen Identity)
// ============================================================================

/// Extra field copied from a constructor argument: `(field name, argument position)`.
pub type FieldSlot = (&'static str, usize);

/// One reportable fault category.
///
/// Kinds are identity: not `Copy`, not `Clone`, only ever used by reference
/// to a `static`. Equality and hashing go by `code`.
#[derive(Debug)]
pub struct ErrorKind {
    code: &'static str,
    family: ErrorFamily,
    template: MessageTemplate,
    fields: &'static [FieldSlot],
}

impl ErrorKind {
    /// Declare a kind. Used by [`define_error_kinds!`].
    ///
    /// # Panics
    ///
    /// Panics at compile time (in const contexts) if `code` does not start
    /// with `ERR_` followed by at least one character.
    #[doc(hidden)]
    pub const fn new(
        code: &'static str,
        family: ErrorFamily,
        template: MessageTemplate,
        fields: &'static [FieldSlot],
    ) -> Self {
        let bytes = code.as_bytes();
        assert!(
            bytes.len() > 4
                && bytes[0] == b'E'
                && bytes[1] == b'R'
                && bytes[2] == b'R'
                && bytes[3] == b'_',
            "Error kind codes must start with ERR_"
        );
        Self {
            code,
            family,
            template,
            fields,
        }
    }

    /// Stable machine-matchable code.
    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Emulated family.
    #[inline]
    pub const fn family(&self) -> ErrorFamily {
        self.family
    }

    /// Family name, e.g. `"TypeError"`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.family.name()
    }

    /// The message template.
    #[inline]
    pub const fn template(&self) -> &MessageTemplate {
        &self.template
    }

    /// Arguments that are also kept as extra fields.
    #[inline]
    pub const fn fields(&self) -> &'static [FieldSlot] {
        self.fields
    }

    /// Render this kind's message.
    #[inline]
    pub fn render(&self, args: &[Value]) -> String {
        self.template.render(args)
    }
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for ErrorKind {}

impl Hash for ErrorKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.family.name(), self.code)
    }
}

/// Declare leaf kinds grouped by family.
///
/// Each entry becomes a `pub static NAME: ErrorKind` whose code is the
/// identifier itself. A `pub static ALL: &[&ErrorKind]` registry listing
/// every declared kind is emitted alongside, so one invocation should cover
/// a whole table.
///
/// An entry may end with `=> [field = position, ...]` to keep arguments as
/// extra fields on every error built from it.
#[macro_export]
macro_rules! define_error_kinds {
    ($( $family:ident => {
        $( $name:ident = $template:expr $(=> [ $($field:ident = $pos:literal),* $(,)? ])? ),* $(,)?
    } )*) => {
        $($(
            #[doc = concat!("`", stringify!($name), "` (", stringify!($family), ")")]
            pub static $name: $crate::ErrorKind = $crate::ErrorKind::new(
                stringify!($name),
                $crate::ErrorFamily::$family,
                $template,
                &[$($((stringify!($field), $pos),)*)?],
            );
        )*)*

        /// Every kind declared in this table.
        pub static ALL: &[&$crate::ErrorKind] = &[$($(&$name,)*)*];
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    mod sample {
        use crate::codes::{computed, text};
        use crate::inspect::Value;

        fn count(args: &[Value]) -> String {
            format!("{} args", args.len())
        }

        define_error_kinds! {
            Error => {
                ERR_SAMPLE_PLAIN = text("plain %s"),
            }
            RangeError => {
                ERR_SAMPLE_RANGE = computed(count) => [received = 1, name = 0],
                ERR_SAMPLE_STATIC = text("static"),
            }
        }
    }

    #[test]
    fn macro_uses_identifier_as_code() {
        assert_eq!(sample::ERR_SAMPLE_PLAIN.code(), "ERR_SAMPLE_PLAIN");
        assert_eq!(sample::ERR_SAMPLE_RANGE.family(), ErrorFamily::RangeError);
        assert_eq!(sample::ERR_SAMPLE_RANGE.name(), "RangeError");
    }

    #[test]
    fn registry_lists_every_block() {
        let codes: Vec<_> = sample::ALL.iter().map(|k| k.code()).collect();
        assert_eq!(codes, ["ERR_SAMPLE_PLAIN", "ERR_SAMPLE_RANGE", "ERR_SAMPLE_STATIC"]);
    }

    #[test]
    fn templates_render() {
        assert_eq!(sample::ERR_SAMPLE_PLAIN.render(&["x".into()]), "plain x");
        assert_eq!(sample::ERR_SAMPLE_RANGE.render(&[Value::Null, Value::Null]), "2 args");
        assert_eq!(sample::ERR_SAMPLE_STATIC.template().as_text(), Some("static"));
        assert!(sample::ERR_SAMPLE_RANGE.template().as_text().is_none());
    }

    #[test]
    fn field_slots_follow_declaration() {
        assert_eq!(sample::ERR_SAMPLE_RANGE.fields(), &[("received", 1usize), ("name", 0usize)]);
        assert!(sample::ERR_SAMPLE_PLAIN.fields().is_empty());
    }

    #[test]
    fn kind_display_and_identity() {
        assert_eq!(sample::ERR_SAMPLE_PLAIN.to_string(), "Error [ERR_SAMPLE_PLAIN]");
        assert_eq!(&sample::ERR_SAMPLE_PLAIN, sample::ALL[0]);
        assert_ne!(&sample::ERR_SAMPLE_PLAIN, &sample::ERR_SAMPLE_STATIC);
    }

    #[test]
    fn family_names() {
        let names: Vec<_> = ErrorFamily::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(names, ["Error", "TypeError", "RangeError", "SyntaxError", "URIError"]);
    }
}
