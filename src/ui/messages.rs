//! User-facing status messages: colored, icon-prefixed one-liners.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

fn emit<T: fmt::Display>(color: &str, icon: &str, msg: T, to_stderr: bool) {
    let line = format!("{color}{BOLD}{icon} {RESET}{msg}");
    if to_stderr {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit("\x1b[34m", "ℹ️", msg, false);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit("\x1b[32m", "✅", msg, false);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit("\x1b[33m", "⚠️", msg, false);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit("\x1b[31m", "❌", msg, true);
}
