use node_compat_errors::{
    definitions, errno_exception, node_error, ErrnoTable, NodeError, Platform, Value,
};
use std::error::Error;

fn flush(table: &ErrnoTable) -> Result<(), NodeError> {
    let io = errno_exception(table, -32, "write", None)
        .unwrap_or_else(|table_err| NodeError::error("UNKNOWN", table_err.to_string()));
    let stream = NodeError::http2_stream_cancel(Some(io));
    Err(node_error!(definitions::ERR_OPERATION_FAILED, "flush")
        .with_field("stream_id", 7)
        .with_field("headers", Value::object([("status", Value::from(500))]))
        .with_cause(stream))
}

fn main() {
    println!("--- Structured Logging Example ---\n");

    let table = ErrnoTable::for_platform(Platform::Linux);
    let Err(err) = flush(table) else {
        return;
    };

    // One line per error, fields capped, cause codes appended.
    println!("{}", err.log_entry());

    println!("\nfield by field:");
    err.with_log(|log| {
        println!("   code:    {}", log.code());
        println!("   name:    {}", log.name());
        for (key, value) in log.fields() {
            println!("   {:<8} {:?}", format!("{}:", key), value);
        }
        let mut cause = log.cause();
        while let Some(entry) = cause {
            println!("   caused by {} [{}]", entry.name(), entry.code());
            cause = entry.cause();
        }
    });

    println!("\nsource chain:");
    let mut source = err.source();
    while let Some(inner) = source {
        println!("   {}", inner);
        source = inner.source();
    }
}
