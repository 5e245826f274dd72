// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 The reconcile-rs Authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Text and date normalization shared by the scoring factors.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Formats tried after RFC 3339 parsing fails, in order.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Normalizes free text for comparison.
///
/// Lowercases, replaces every non-alphanumeric character (whitespace
/// included) with a single space, and trims. Identical normalization is
/// applied to descriptions and vendor names so substring checks line up.
pub fn clean_text(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            cleaned.extend(ch.to_lowercase());
        } else if !cleaned.is_empty() && !cleaned.ends_with(' ') {
            cleaned.push(' ');
        }
    }
    if cleaned.ends_with(' ') {
        cleaned.pop();
    }
    cleaned
}

/// Normalized sequence similarity in `[0, 1]`.
///
/// Computed as `2 * LCS(a, b) / (|a| + |b|)` over characters, where `LCS`
/// is the longest common subsequence length. Identical strings score 1.0;
/// strings sharing no characters in order score 0.0. More shared ordered
/// characters always yield a higher ratio.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Two-row dynamic program keeps memory at O(|b|).
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in &a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
        curr[0] = 0;
    }

    let lcs = prev[b.len()];
    (2.0 * lcs as f64) / ((a.len() + b.len()) as f64)
}

/// Parses a date string in any accepted format.
///
/// Tries RFC 3339 first (ISO-8601 with `Z` or a numeric offset, normalized
/// to UTC), then the fixed fallback list: `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD`, `MM/DD/YYYY`. Returns `None` for
/// anything else; callers degrade the factor score rather than erroring.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn clean_text_lowercases_and_strips_punctuation() {
        assert_eq!(clean_text("Payment to ACME, Inc."), "payment to acme inc");
    }

    #[test]
    fn clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  Office   Supplies\t Co  "), "office supplies co");
    }

    #[test]
    fn clean_text_empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("!!! --- ***"), "");
    }

    #[test]
    fn similarity_identical_strings_is_one() {
        assert_eq!(similarity_ratio("office supplies", "office supplies"), 1.0);
    }

    #[test]
    fn similarity_disjoint_strings_is_zero() {
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn similarity_empty_vs_nonempty_is_zero() {
        assert_eq!(similarity_ratio("", "abc"), 0.0);
    }

    #[test]
    fn similarity_prefers_closer_description() {
        let invoice = "office supplies purchase";
        let close = similarity_ratio(invoice, "payment for office supplies");
        let far = similarity_ratio(invoice, "restaurant bill");
        assert!(close > far, "close={close} far={far}");
    }

    #[test]
    fn parse_date_iso_with_zulu() {
        let dt = parse_date("2024-01-15T10:30:00Z").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 15));
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn parse_date_iso_with_offset_normalizes_to_utc() {
        let dt = parse_date("2024-01-15T10:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn parse_date_fallback_formats() {
        assert!(parse_date("2024-01-15").is_some());
        assert!(parse_date("2024-01-15 08:00:00").is_some());
        assert!(parse_date("2024-01-15T08:00:00").is_some());
        assert!(parse_date("01/15/2024").is_some());
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("not a date").is_none());
        assert!(parse_date("15/33/2024").is_none());
        assert!(parse_date("").is_none());
    }
}
