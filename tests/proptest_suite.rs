//! Property-based tests for node_compat_errors
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use node_compat_errors::inspect::{received_clause, truncate_preview, MAX_RECEIVED_PREVIEW};
use node_compat_errors::{
    add_numerical_separator, definitions, format_template, invalid_arg_type, ErrnoTable,
    NodeError, Platform, Value, MAX_FIELD_OUTPUT_LEN,
};
use proptest::prelude::*;

fn any_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        any::<i64>().prop_map(|n| Value::bigint(i128::from(n))),
        "\\PC{0,60}".prop_map(|s| Value::from(s)),
        "[A-Za-z]{0,12}".prop_map(|name| Value::function(name)),
        "[A-Z][a-z]{0,10}".prop_map(|class| Value::instance(class)),
        Just(Value::Symbol(None)),
        "[a-z]{0,8}".prop_map(|desc| Value::symbol(desc)),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner.clone()), 0..4).prop_map(|entries| Value::object(entries)),
            prop::collection::vec(("[a-z]{1,6}", inner.clone()), 0..4)
                .prop_map(|entries| Value::null_prototype(entries)),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4).prop_map(|entries| Value::Object {
                class: Some(String::new()),
                entries,
            }),
        ]
    })
}

// ============================================================================
// PREVIEW TRUNCATION PROPERTIES
// ============================================================================

proptest! {
    /// Short strings pass through, long ones are cut to max chars plus "..."
    #[test]
    fn truncate_preview_bounds(s in "\\PC{0,80}", max in 0usize..40) {
        let out = truncate_preview(&s, max);
        let len = s.chars().count();
        if len <= max {
            prop_assert_eq!(out, s);
        } else {
            prop_assert_eq!(out.chars().count(), max + 3);
            prop_assert!(out.ends_with("..."));
            prop_assert!(s.starts_with(&out[..out.len() - 3]));
        }
    }

    /// Primitive previews in the received clause never exceed the cap
    #[test]
    fn received_string_preview_is_bounded(s in "\\PC{0,200}") {
        let clause = received_clause(&Value::from(s.as_str()));
        prop_assert!(clause.starts_with("type string ("));
        // "type string (" + preview + ")"
        let preview_chars = clause.chars().count() - "type string (".len() - 1;
        prop_assert!(preview_chars <= MAX_RECEIVED_PREVIEW + 3);
    }
}

// ============================================================================
// MESSAGE FORMATTING PROPERTIES
// ============================================================================

proptest! {
    /// No arguments means no substitution at all
    #[test]
    fn format_template_without_args_is_identity(template in "\\PC{0,80}") {
        prop_assert_eq!(format_template(&template, &[]), template);
    }

    /// Surplus arguments are appended after a placeholder-free template
    #[test]
    fn format_template_appends_surplus(
        template in "[^%]{0,40}",
        args in prop::collection::vec("[a-z]{1,8}", 1..4)
    ) {
        let values: Vec<Value> = args.iter().map(Value::from).collect();
        let rendered = format_template(&template, &values);
        prop_assert_eq!(rendered, format!("{} {}", template, args.join(" ")));
    }

    /// Rendering any kind with any arguments is total
    #[test]
    fn every_kind_renders(idx in 0..definitions::ALL.len(), args in prop::collection::vec(any_value(), 0..4)) {
        let kind = definitions::ALL[idx];
        let err = NodeError::new(kind, &args);
        prop_assert_eq!(err.code(), kind.code());
        prop_assert_eq!(err.family(), kind.family());
        let display = err.to_string();
        let prefix = format!("{} [{}]: ", kind.name(), kind.code());
        prop_assert!(display.starts_with(&prefix));
    }

    /// The invalid-type message always has the fixed frame
    #[test]
    fn invalid_arg_type_frame(
        name in "[a-zA-Z.]{1,20}",
        expected in prop::collection::vec(prop_oneof![
            Just("string"), Just("number"), Just("object"), Just("function"),
            Just("Buffer"), Just("Array"), Just("null"), Just("an integer"),
        ], 0..5),
        actual in any_value()
    ) {
        let message = invalid_arg_type(&name, expected.as_slice(), &actual);
        prop_assert!(message.starts_with("The "));
        let received = format!(". Received {}", received_clause(&actual));
        prop_assert!(message.ends_with(&received));
    }
}

// ============================================================================
// NUMERIC SEPARATOR PROPERTIES
// ============================================================================

proptest! {
    /// Separators only regroup digits, never change them
    #[test]
    fn separator_preserves_digits(n in any::<i64>()) {
        let digits = n.to_string();
        let grouped = add_numerical_separator(&digits);
        prop_assert_eq!(grouped.replace('_', ""), digits);

        let unsigned = grouped.trim_start_matches('-');
        let mut groups = unsigned.split('_');
        let head = groups.next().unwrap_or("");
        prop_assert!((1..=3).contains(&head.len()));
        for group in groups {
            prop_assert_eq!(group.len(), 3);
        }
    }

    /// Large integers are grouped in out-of-range messages
    #[test]
    fn out_of_range_groups_large_integers(n in 4_294_967_297i64..1_000_000_000_000_000) {
        let err = NodeError::out_of_range("offset", ">= 0", Value::from(n));
        let expected = format!("Received {}", add_numerical_separator(&n.to_string()));
        prop_assert!(err.message().ends_with(&expected));
    }
}

// ============================================================================
// ERRNO TABLE PROPERTIES
// ============================================================================

proptest! {
    /// Symbol and code lookups are inverse on every platform
    #[test]
    fn errno_symbol_round_trip(idx in 0usize..256) {
        for platform in Platform::ALL {
            let table = ErrnoTable::for_platform(platform);
            let entry = &table.entries()[idx % table.len()];
            prop_assert_eq!(table.code_of(entry.symbol), Some(entry.code));
            prop_assert!(entry.code < 0);
        }
    }

    /// Unknown codes fail loudly instead of producing a placeholder error
    #[test]
    fn unknown_errno_is_an_error(code in -100_000i32..-5_000) {
        for platform in Platform::ALL {
            let table = ErrnoTable::for_platform(platform);
            if table.get(code).is_none() {
                prop_assert!(node_compat_errors::errno_exception(table, code, "read", None).is_err());
            }
        }
    }
}

// ============================================================================
// LOG OUTPUT PROPERTIES
// ============================================================================

proptest! {
    /// Log lines stay valid UTF-8 and bounded whatever the field contents
    #[test]
    fn log_output_is_bounded(s in "\\PC{0,5000}") {
        let err = NodeError::invalid_url(s.clone()).with_field("path", s);
        let line = err.log_entry().to_string();
        prop_assert!(std::str::from_utf8(line.as_bytes()).is_ok());
        prop_assert!(line.len() < 4 * MAX_FIELD_OUTPUT_LEN);
    }
}
