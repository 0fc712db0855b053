//! Text and number normalization shared by every field parser.
//!
//! Wiki cells mix thousands separators, non-breaking spaces, unit suffixes
//! and the literal "N/A". The helpers here reduce a raw cell to something
//! `str::parse` accepts, or report which field held the garbage.

use crate::error::{ScrapeError, ScrapeResult};

/// Non-breaking space, the wiki's favourite thousands separator.
pub const NBSP: char = '\u{a0}';

/// True when a trimmed cell is the literal "N/A" (exact match).
///
/// "N/A" always means "not reported", never zero; callers leave the
/// corresponding attribute at its sentinel default.
pub fn is_not_available(text: &str) -> bool {
    text.trim() == "N/A"
}

/// Cut the value at the first occurrence of any of `suffixes`, then strip
/// thousands separators and whitespace. Returns a bare numeric string.
pub fn strip_thousands_and_unit(text: &str, suffixes: &[&str]) -> String {
    let mut s = text.trim();
    for suffix in suffixes {
        if let Some(idx) = s.find(suffix) {
            s = &s[..idx];
        }
    }
    s.chars()
        .filter(|c| *c != ',' && *c != NBSP && !c.is_whitespace())
        .collect()
}

/// Parse an integer cell after unit stripping.
pub fn parse_int(text: &str, suffixes: &[&str], field: &'static str) -> ScrapeResult<i64> {
    let clean = strip_thousands_and_unit(text, suffixes);
    clean
        .parse()
        .map_err(|_| ScrapeError::invalid_number(field, text))
}

/// Parse a float cell after unit stripping.
pub fn parse_float(text: &str, suffixes: &[&str], field: &'static str) -> ScrapeResult<f64> {
    let clean = strip_thousands_and_unit(text, suffixes);
    clean
        .parse()
        .map_err(|_| ScrapeError::invalid_number(field, text))
}

/// Split a compound "A `sep` B" cell into its two numeric halves, in
/// left-to-right order. Which half means what is the call site's contract:
/// guidance ranges re-order to `{positive: max, negative: min}`, improvement
/// sequences (reload, rotation, stock→upgraded) keep source order.
pub fn split_ordered_pair(
    text: &str,
    sep: &str,
    suffixes: &[&str],
    field: &'static str,
) -> ScrapeResult<(f64, f64)> {
    let (left, right) = text
        .split_once(sep)
        .ok_or_else(|| ScrapeError::invalid_number(field, text))?;
    Ok((
        parse_float(left, suffixes, field)?,
        parse_float(right, suffixes, field)?,
    ))
}

/// Decode a roman-numeral rank token I..X into 1..10.
///
/// Anything else is a hard error: a vehicle without a decodable rank is not a
/// valid result.
pub fn roman_rank(token: &str) -> ScrapeResult<u8> {
    match token.trim() {
        "I" => Ok(1),
        "II" => Ok(2),
        "III" => Ok(3),
        "IV" => Ok(4),
        "V" => Ok(5),
        "VI" => Ok(6),
        "VII" => Ok(7),
        "VIII" => Ok(8),
        "IX" => Ok(9),
        "X" => Ok(10),
        other => Err(ScrapeError::InvalidRank(other.to_string())),
    }
}

/// Collapse runs of whitespace (including NBSP) into single spaces and trim.
pub fn normalize_ws(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == NBSP)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
