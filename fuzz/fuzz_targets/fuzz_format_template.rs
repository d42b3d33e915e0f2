#![no_main]

use libfuzzer_sys::fuzz_target;
use node_compat_errors::{format_template, Value};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let (template, rest) = input.split_once('\0').unwrap_or((input, ""));
    let args: Vec<Value> = rest
        .split('\0')
        .map(|part| match part.parse::<f64>() {
            Ok(n) => Value::from(n),
            Err(_) => Value::from(part),
        })
        .collect();

    let rendered = format_template(template, &args);
    if args.is_empty() {
        assert_eq!(rendered, template);
    }
});
