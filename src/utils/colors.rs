/// ANSI color helpers for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// Grey out empty punch slots ("-") in listings, keep real values plain.
pub fn colorize_slot(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}-{RESET}")
    } else {
        value.to_string()
    }
}
