//! Punch-report text parser.
//!
//! Reports are semi-structured plain text with fixed-phrase markers:
//!
//! ```text
//! Período: 15/01/2024
//! Empregado: 100 Jane Doe
//! Localização: Plant 1
//! Marcações
//! 08:00R 12:00 13:00M 17:00
//! ```
//!
//! One single scan, carrying the current employee and location as running
//! context. A line containing "Marcações" promotes the *next* line to a
//! whitespace-separated list of punch times, up to eight per record.

use crate::models::punch::SLOT_COUNT;
use crate::utils::date;
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

/// Transient parser output: one draft per marking line, still carrying
/// textual references (matricula, location label) instead of ids.
#[derive(Debug, Clone)]
pub struct PunchDraft {
    pub matricula: String,
    pub employee_name: String,
    pub location: Option<String>,
    pub date: NaiveDate,
    pub times: [Option<NaiveTime>; SLOT_COUNT],
    /// 1-based report line of the marking line, for per-row error messages.
    pub line: usize,
}

#[derive(Debug)]
pub struct ParsedReport {
    pub date_base: NaiveDate,
    pub drafts: Vec<PunchDraft>,
    /// Marking lines dropped because no `Empregado:` preceded them.
    pub skipped_lines: Vec<usize>,
}

/// Scan the full report text.
///
/// The first `Período: DD/MM/YYYY` occurrence sets the date base for the
/// whole batch; a missing or malformed header silently falls back to
/// `fallback_date` (the caller passes the current date).
pub fn parse_report(text: &str, fallback_date: NaiveDate) -> ParsedReport {
    let period_re = Regex::new(r"Período:\s*(\d{2}/\d{2}/\d{4})").unwrap();
    let employee_re = Regex::new(r"Empregado:\s*(\S+)\s+(.+)").unwrap();
    let location_re = Regex::new(r"Localização:\s*(.+)").unwrap();

    let date_base = period_re
        .captures(text)
        .and_then(|c| date::parse_br_date(&c[1]))
        .unwrap_or(fallback_date);

    let lines: Vec<&str> = text.lines().collect();

    let mut current: Option<(String, String)> = None;
    let mut location: Option<String> = None;
    let mut drafts = Vec::new();
    let mut skipped_lines = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if let Some(caps) = employee_re.captures(line) {
            current = Some((caps[1].to_string(), caps[2].trim().to_string()));
        } else if let Some(caps) = location_re.captures(line) {
            location = Some(caps[1].trim().to_string());
        } else if line.contains("Marcações") && i + 1 < lines.len() {
            // The next line carries the punch times.
            i += 1;
            let marking_line = i + 1; // 1-based

            let times = parse_marking_line(lines[i]);
            if times.iter().any(|t| t.is_some()) {
                match &current {
                    Some((matricula, name)) => drafts.push(PunchDraft {
                        matricula: matricula.clone(),
                        employee_name: name.clone(),
                        location: location.clone(),
                        date: date_base,
                        times,
                        line: marking_line,
                    }),
                    None => skipped_lines.push(marking_line),
                }
            }
        }

        i += 1;
    }

    ParsedReport {
        date_base,
        drafts,
        skipped_lines,
    }
}

/// Split a marking line into up to eight punch times.
///
/// Tokens may carry a single trailing `R` or `M` annotation, which is
/// stripped; tokens beyond the eighth are ignored; tokens that are not
/// `HH:MM` at all are dropped.
fn parse_marking_line(line: &str) -> [Option<NaiveTime>; SLOT_COUNT] {
    let token_re = Regex::new(r"^(\d{1,2}:\d{2})[RM]?$").unwrap();

    let mut times: [Option<NaiveTime>; SLOT_COUNT] = [None; SLOT_COUNT];
    let mut slot = 0;

    for token in line.split_whitespace() {
        if slot >= SLOT_COUNT {
            break;
        }
        if let Some(caps) = token_re.captures(token)
            && let Ok(t) = NaiveTime::parse_from_str(&caps[1], "%H:%M")
        {
            times[slot] = Some(t);
            slot += 1;
        }
    }

    times
}
