use node_compat_errors::{definitions, invalid_arg_type, node_error, NodeError, Result, Value};

fn parse_port(input: &Value) -> Result<u16> {
    let Some(n) = input.as_number() else {
        return Err(invalid_arg_type!("port", ["number", "string"], input));
    };
    if n.fract() != 0.0 || !(0.0..65536.0).contains(&n) {
        return Err(NodeError::socket_bad_port("Port", input.clone(), true));
    }
    Ok(n as u16)
}

fn open_encoding(name: &str) -> Result<&'static str> {
    match name {
        "utf8" | "utf-8" => Ok("utf8"),
        "latin1" | "binary" => Ok("latin1"),
        other => Err(node_error!(definitions::ERR_UNKNOWN_ENCODING, other)),
    }
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    for input in [Value::from(8080), Value::from(70000), Value::from(true)] {
        match parse_port(&input) {
            Ok(port) => println!("port ok: {}", port),
            Err(err) => {
                println!("{}", err);
                println!("   name={} code={}", err.name(), err.code());
            }
        }
    }

    println!();
    if let Err(err) = open_encoding("utf-7") {
        // Callers branch on the code, never on message text.
        if err.is(&definitions::ERR_UNKNOWN_ENCODING) {
            println!("fallback to utf8 after: {}", err.message());
        }
    }

    println!();
    let err = NodeError::out_of_range("offset", ">= 0 && <= 4294967295", Value::from(9_007_199_254_740_991i64));
    println!("{}", err);
    println!("received field: {:?}", err.field("received"));
}
