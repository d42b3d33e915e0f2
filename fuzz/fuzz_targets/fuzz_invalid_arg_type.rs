#![no_main]

use libfuzzer_sys::fuzz_target;
use node_compat_errors::{invalid_arg_type, Value};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let mut parts = input.split(',');
    let name = parts.next().unwrap_or("");
    let expected: Vec<&str> = parts.collect();

    for actual in [
        Value::Undefined,
        Value::from(input),
        Value::from(data.len()),
        Value::instance(name),
        Value::function(name),
    ] {
        let message = invalid_arg_type(name, expected.as_slice(), &actual);
        assert!(message.starts_with("The "));
    }
});
