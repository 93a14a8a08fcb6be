#![allow(dead_code)]

use named_flags::{FlagSet, Flags};

pub const PERMISSIONS: [&str; 3] = ["READ", "WRITE", "DELETE"];

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn permissions() -> (Flags, FlagSet) {
    init_logger();
    named_flags::use_flags(PERMISSIONS).expect("failed to build permission flags")
}

pub fn numbered_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("FLAG_{}", i)).collect()
}
