#![no_main]

use libfuzzer_sys::fuzz_target;
use node_compat_errors::{ErrnoTable, Platform};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let code = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);

    for platform in Platform::ALL {
        let table = ErrnoTable::for_platform(platform);
        match table.get(code) {
            Some(entry) => {
                assert_eq!(table.code_of(entry.symbol), Some(code));
                assert_eq!(table.system_error_name(code), entry.symbol);
            }
            None => assert!(table.lookup(code).is_err()),
        }
    }
});
