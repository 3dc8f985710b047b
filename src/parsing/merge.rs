//! Reconstructs logical entries from physical transcript lines.
//!
//! Chat exports break long messages across several physical lines. Only the
//! first line of a message carries the `d/m/yy` date prefix; every following
//! line without one belongs to the same message.

use std::sync::LazyLock;

use regex::Regex;

static ENTRY_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d{1,2}/\d{1,2}/\d{2,4}").expect("entry start pattern"));

/// Returns `true` if `line` opens a new logical entry.
///
/// ```
/// use chatheart::parsing::is_entry_start;
///
/// assert!(is_entry_start("14/5/24 a las 20:31 - Andrea: hola"));
/// assert!(is_entry_start("   1/1/2024, 09:00 - David: hi"));
/// assert!(!is_entry_start("y luego fuimos al cine"));
/// ```
pub fn is_entry_start(line: &str) -> bool {
    ENTRY_START.is_match(line)
}

/// Joins raw lines into one string per message.
///
/// - A date-prefixed line flushes the current entry and starts a new one.
/// - Any other line is trimmed and appended with a single space, so a blank
///   line inside a message leaves two spaces behind.
/// - Lines before the first date-prefixed line have no entry to join and
///   are dropped.
///
/// # Example
///
/// ```
/// use chatheart::parsing::merge_lines;
///
/// let text = "header junk\n1/1/24 a las 09:00 - Andrea: hi\nthere\n1/1/24 a las 09:05 - David: yo";
/// let entries = merge_lines(text);
/// assert_eq!(entries, vec![
///     "1/1/24 a las 09:00 - Andrea: hi there".to_string(),
///     "1/1/24 a las 09:05 - David: yo".to_string(),
/// ]);
/// ```
pub fn merge_lines(text: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if is_entry_start(line) {
            if let Some(done) = current.take() {
                push_entry(&mut entries, done);
            }
            current = Some(line.trim().to_string());
            continue;
        }

        if let Some(acc) = current.as_mut() {
            acc.push(' ');
            acc.push_str(line.trim());
        }
    }

    if let Some(done) = current {
        push_entry(&mut entries, done);
    }

    entries
}

fn push_entry(entries: &mut Vec<String>, entry: String) {
    let trimmed = entry.trim();
    if !trimmed.is_empty() {
        entries.push(trimmed.to_string());
    }
}
