//! Transcript line grammar and timestamp interpretation.
//!
//! Supported entry shapes:
//! - `14/5/24 a las 20:31 - Andrea: hola`
//! - `14/05/2024, 20:31 - Andrea: hola`
//! - `14/5/24 20:31 - Andrea: hola`

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::Message;

/// Date, a comma or whitespace, optional `a las`, time, ` - `, sender,
/// `: `, body.
///
/// The sender group is lazy so it stops at the first `": "`; colons inside
/// the body (URLs, times) stay in the body.
const ENTRY_PATTERN: &str = r"^\s*(\d{1,2}/\d{1,2}/\d{2,4})(?:,\s*|\s+)(?:a\s+las\s+)?(\d{1,2}:\d{1,2})\s+-\s+(.*?):\s+(.*?)\s*$";

static ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ENTRY_PATTERN).expect("entry grammar pattern"));

/// Parses one logical entry into a [`Message`].
///
/// Returns `None` if the entry doesn't match the grammar (system notices
/// without a sender, truncated lines, foreign formats).
///
/// # Example
///
/// ```
/// use chatheart::parsing::parse_entry;
///
/// let msg = parse_entry("14/5/24 a las 20:31 - Andrea: hola, ¿cómo estás?").unwrap();
/// assert_eq!(msg.date, "14/5/24");
/// assert_eq!(msg.time, "20:31");
/// assert_eq!(msg.sender, "Andrea");
/// assert_eq!(msg.text, "hola, ¿cómo estás?");
///
/// assert!(parse_entry("14/5/24 a las 20:31 - Los mensajes están cifrados").is_none());
/// ```
pub fn parse_entry(entry: &str) -> Option<Message> {
    let caps = ENTRY.captures(entry)?;
    Some(Message::new(
        &caps[1],
        &caps[2],
        caps[3].trim(),
        caps[4].trim(),
    ))
}

/// Interprets `d/m/yy` (or `d/m/yyyy`) and `h:mm` as a naive timestamp.
///
/// Two-digit years are taken as 2000-2099. Returns `None` for malformed or
/// impossible values.
pub fn parse_chat_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let mut parts = date.trim().split('/');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year_str = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let year: i32 = year_str.parse().ok()?;
    let year = if year_str.len() <= 2 { 2000 + year } else { year };

    let (hour, minute) = time.trim().split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a_las_variant() {
        let msg = parse_entry("1/1/24 a las 09:00 - Andrea: hi").unwrap();
        assert_eq!(msg, Message::new("1/1/24", "09:00", "Andrea", "hi"));
    }

    #[test]
    fn test_comma_variant() {
        let msg = parse_entry("15/01/2024, 10:30 - David: hello there").unwrap();
        assert_eq!(msg, Message::new("15/01/2024", "10:30", "David", "hello there"));
    }

    #[test]
    fn test_whitespace_variant() {
        let msg = parse_entry("15/1/24 7:05 - David: ok").unwrap();
        assert_eq!(msg.time, "7:05");
        assert_eq!(msg.text, "ok");
    }

    #[test]
    fn test_date_and_time_need_a_separator() {
        assert!(parse_entry("1/1/2409:00 - A: b").is_none());
        assert!(parse_entry("1/1/24a las 09:00 - A: b").is_none());

        let msg = parse_entry("1/1/24,09:00 - A: b").unwrap();
        assert_eq!(msg, Message::new("1/1/24", "09:00", "A", "b"));
    }

    #[test]
    fn test_leading_and_trailing_whitespace() {
        let msg = parse_entry("   3/4/24 a las 12:00 - Andrea:   spaced out   ").unwrap();
        assert_eq!(msg.date, "3/4/24");
        assert_eq!(msg.text, "spaced out");
    }

    #[test]
    fn test_sender_stops_at_first_colon_space() {
        let msg = parse_entry("1/1/24 a las 09:00 - David: nota: mañana a las 10:00").unwrap();
        assert_eq!(msg.sender, "David");
        assert_eq!(msg.text, "nota: mañana a las 10:00");
    }

    #[test]
    fn test_url_in_body() {
        let msg = parse_entry("1/1/24 a las 09:00 - David: mira https://example.com").unwrap();
        assert_eq!(msg.text, "mira https://example.com");
    }

    #[test]
    fn test_sender_with_spaces_and_unicode() {
        let msg = parse_entry("1/1/24 a las 09:00 - Andrea López 💕: te quiero").unwrap();
        assert_eq!(msg.sender, "Andrea López 💕");
    }

    #[test]
    fn test_non_matching_entries() {
        assert!(parse_entry("").is_none());
        assert!(parse_entry("hola").is_none());
        assert!(parse_entry("1/1/24 a las 09:00 - system notice without sender").is_none());
        assert!(parse_entry("1/1/24 - Andrea: missing time").is_none());
        assert!(parse_entry("[1/15/24, 10:30:45 AM] Alice: bracketed").is_none());
        assert!(parse_entry("1/1/24 a las 09:00 - Andrea:").is_none());
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_chat_timestamp("14/5/24", "20:31").unwrap();
        assert_eq!(ts.to_string(), "2024-05-14 20:31:00");

        let ts = parse_chat_timestamp("01/12/1999", "7:5").unwrap();
        assert_eq!(ts.to_string(), "1999-12-01 07:05:00");
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_chat_timestamp("32/1/24", "10:00").is_none());
        assert!(parse_chat_timestamp("1/13/24", "10:00").is_none());
        assert!(parse_chat_timestamp("1/1", "10:00").is_none());
        assert!(parse_chat_timestamp("1/1/24/5", "10:00").is_none());
        assert!(parse_chat_timestamp("1/1/24", "10").is_none());
        assert!(parse_chat_timestamp("1/1/24", "10:60").is_none());
        assert!(parse_chat_timestamp("a/b/c", "10:00").is_none());
    }
}
