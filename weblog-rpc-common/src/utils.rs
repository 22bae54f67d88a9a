use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::collections::HashSet;
use tracing::trace;

/// Layout of `dateTime.iso8601` values as blogging clients send them:
/// `YYYYMMDDTHH:MM:SS`, always read as UTC.
const COMPACT_ISO8601: &[u8] = b"00000000T00:00:00";

/// Parses a compact ISO 8601 timestamp (`20230115T10:00:00`).
///
/// Returns `None` for anything that does not match the layout exactly or
/// that names an impossible date. Callers use this for optional fields only,
/// so there is deliberately no error to report.
pub fn parse_compact_date(text: &str) -> Option<DateTime<Utc>> {
    let bytes = text.as_bytes();
    let matches_layout = bytes.len() == COMPACT_ISO8601.len()
        && bytes
            .iter()
            .zip(COMPACT_ISO8601)
            .all(|(&b, &pattern)| match pattern {
                b'0' => b.is_ascii_digit(),
                other => b == other,
            });
    if !matches_layout {
        trace!("{:?} is not a compact ISO 8601 timestamp", text);
        return None;
    }

    // the layout check guarantees these slices are ASCII digits
    let field = |from: usize, to: usize| text[from..to].parse::<u32>().ok();
    let naive = NaiveDate::from_ymd_opt(field(0, 4)? as i32, field(4, 6)?, field(6, 8)?)?
        .and_hms_opt(field(9, 11)?, field(12, 14)?, field(15, 17)?);
    match naive {
        Some(naive) => Some(Utc.from_utc_datetime(&naive)),
        None => {
            trace!("{:?} is out of range", text);
            None
        }
    }
}

/// Splits a comma separated keyword list into tags.
///
/// Tokens are trimmed, empty ones dropped, and duplicates are detected without
/// regard to case: the first spelling seen wins and keeps its position.
/// Dropping empty tokens is deliberate: `"a,,b"` gives two tags and an empty
/// list gives none, never an empty tag.
pub fn split_tags(keywords: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .map(str::to_owned)
        .collect()
}

/// Decodes base64 media bits, ignoring the line breaks clients insert in long
/// payloads. An empty input is a valid, empty file.
pub fn decode_bits(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    base64::decode(&compact)
}
