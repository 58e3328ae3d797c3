//! Scalar coercion: delimited strings into lists, mixed date encodings into
//! display strings.
//!
//! Admin forms have written the same logical field in several encodings over
//! time: tags as `"a, b, c"` or `["a", "b", "c"]`, publication dates as a
//! native store timestamp, an ISO string, or whatever the editor typed. These
//! helpers map every encoding onto one canonical form and never fail.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::document::FieldValue;

/// Display pattern for dates (`November 15, 2023`).
pub const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y";

/// Returned by [`format_display_date`] when no date source is available.
pub const DATE_NOT_SET: &str = "Date not set";

/// Number of content characters kept in a derived excerpt.
pub const EXCERPT_CHARS: usize = 150;

/// Separator used when a list field was stored as one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListDelimiter {
    /// Tag-like fields: `"React, Next.js"`.
    Comma,
    /// Multi-line fields (details, responsibilities): one entry per line.
    Newline,
}

impl ListDelimiter {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Newline => '\n',
        }
    }
}

/// Coerce a list-typed field into a sequence of trimmed, non-empty strings.
///
/// Arrays pass through with each string element trimmed and blank or
/// non-string elements dropped. A single string is split on `delimiter`.
/// Anything else, including absence, yields an empty list. Applying the
/// function to its own output returns the same output.
#[must_use]
pub fn coerce_to_list(value: Option<&FieldValue>, delimiter: ListDelimiter) -> Vec<String> {
    match value {
        Some(FieldValue::ArrayValue(items)) => items
            .iter()
            .filter_map(FieldValue::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        Some(FieldValue::StringValue(s)) => split_trimmed(s, delimiter),
        _ => Vec::new(),
    }
}

/// Split a delimited string, trimming pieces and dropping empties.
fn split_trimmed(s: &str, delimiter: ListDelimiter) -> Vec<String> {
    s.split(delimiter.as_char())
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Format a date for display, falling back through every known encoding.
///
/// Priority:
/// 1. a native timestamp in `value`;
/// 2. a non-blank string in `value`, reformatted when it parses and returned
///    verbatim when it does not;
/// 3. the secondary `created_at` timestamp;
/// 4. [`DATE_NOT_SET`].
///
/// Values of any other type count as absent.
#[must_use]
pub fn format_display_date(value: Option<&FieldValue>, created_at: Option<DateTime<Utc>>) -> String {
    match value {
        Some(FieldValue::TimestampValue(ts)) => return display(*ts),
        Some(FieldValue::StringValue(s)) if !s.trim().is_empty() => {
            return parse_date_string(s).map_or_else(
                || {
                    tracing::debug!("Unparseable date string kept verbatim: {s:?}");
                    s.clone()
                },
                display,
            );
        }
        _ => {}
    }
    created_at.map_or_else(|| DATE_NOT_SET.to_string(), display)
}

fn display(ts: DateTime<Utc>) -> String {
    ts.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Read a timestamp that may be stored natively or as a legacy string.
#[must_use]
pub fn parse_timestamp(value: Option<&FieldValue>) -> Option<DateTime<Utc>> {
    match value? {
        FieldValue::TimestampValue(ts) => Some(*ts),
        FieldValue::StringValue(s) => parse_date_string(s),
        _ => None,
    }
}

/// Parse the date encodings editors and older writers have produced.
///
/// Handles RFC 3339, `SQLite`-style `YYYY-MM-DD HH:MM:SS`, ISO without offset,
/// bare ISO dates, long and short English month names, US `MM/DD/YYYY`, and
/// dotted `DD.MM.YYYY`. Zone-less values are taken as UTC.
#[must_use]
pub fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%B %d %Y", "%m/%d/%Y", "%d.%m.%Y"];

    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(naive.and_utc());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Derive a post excerpt from its content.
///
/// Keeps the first `max_chars` characters and appends `...` when the content
/// was longer. Returns `None` for blank content.
#[must_use]
pub fn derive_excerpt(content: &str, max_chars: usize) -> Option<String> {
    if content.trim().is_empty() {
        return None;
    }
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        Some(format!("{head}..."))
    } else {
        Some(head)
    }
}
