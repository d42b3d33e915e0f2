use node_compat_errors::{
    dns_exception, errname, exception_with_host_port, init_host_table, system_error, uv_exception,
    definitions, ErrnoTable, Platform, SystemContext,
};
use std::env;

fn main() {
    println!("--- Errno Lookup Example ---\n");

    let identifier = match env::args().nth(1) {
        Some(arg) => arg,
        None => match Platform::host() {
            Ok(platform) => platform.as_str().to_owned(),
            Err(err) => {
                eprintln!("{}", err);
                return;
            }
        },
    };
    let table = match init_host_table(&identifier) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };
    println!("host table: {} ({} entries)\n", table.platform(), table.len());

    for symbol in ["ENOENT", "EACCES", "ECONNRESET", "EAI_NONAME"] {
        print!("{:<12}", symbol);
        for platform in Platform::ALL {
            let code = ErrnoTable::for_platform(platform).code_of(symbol);
            print!("  {:>8}={:<6}", platform.as_str(), code.map_or("-".to_owned(), |c| c.to_string()));
        }
        println!();
    }

    println!();
    if let Some(code) = table.code_of("ENOENT") {
        println!("errname({}) = {:?}", code, errname(table, code));
        let ctx = SystemContext::builder()
            .errno(code)
            .syscall("open")
            .path("/etc/app.toml")
            .try_build();
        match ctx {
            Ok(ctx) => {
                match uv_exception(table, &ctx) {
                    Ok(err) => println!("{}", err),
                    Err(err) => eprintln!("{}", err),
                }
                match system_error(table, &definitions::ERR_SYSTEM_ERROR, &ctx) {
                    Ok(err) => println!("{}", err),
                    Err(err) => eprintln!("{}", err),
                }
            }
            Err(err) => eprintln!("{}", err),
        }
    }

    if let Some(code) = table.code_of("ECONNREFUSED") {
        if let Ok(err) = exception_with_host_port(table, code, "connect", "127.0.0.1", Some(5432), None) {
            println!("{}", err);
        }
    }
    if let Some(code) = table.code_of("EAI_NONAME") {
        if let Ok(err) = dns_exception(table, code, "getaddrinfo", Some("db.internal")) {
            println!("{}", err);
        }
    }

    println!("\nunknown: {:?}", table.lookup(-99999));
}
