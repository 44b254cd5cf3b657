use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use regex::Regex;

// what a browser prints for a date it could not parse
pub const INVALID_DATE: &str = "Invalid Date";

pub const ELLIPSIS: &str = "...";

// deliberately loose: one @, no whitespace, and a dot somewhere in the domain
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

// anything format_date knows how to read
#[derive(Clone, Debug, PartialEq)]
pub enum DateInput {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::DateTime(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        DateInput::DateTime(value.naive_local())
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

// "2024-01-15" -> "January 15, 2024"
pub fn format_date(date: impl Into<DateInput>) -> String {
    let date = match date.into() {
        DateInput::Date(d) => Some(d),
        DateInput::DateTime(dt) => Some(dt.date()),
        DateInput::Text(text) => parse_date(&text),
    };

    match date {
        Some(d) => d.format("%B %-d, %Y").to_string(),
        None => String::from(INVALID_DATE),
    }
}

// lengths are counted in characters, not bytes, so a cut never lands inside
// a multi-byte character
pub fn truncate_text(text: &str, max_length: usize) -> String {
    match text.char_indices().nth(max_length) {
        None => text.to_owned(),
        Some((idx, _)) => format!("{}{ELLIPSIS}", &text[..idx]),
    }
}

pub fn capitalize_first_letter(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    #[test]
    fn formats_iso_date() {
        assert_eq!(format_date("2024-01-15"), "January 15, 2024");
        assert_eq!(format_date("2023-12-01"), "December 1, 2023");
    }

    #[test]
    fn formats_typed_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        assert_eq!(format_date(date), "July 4, 2024");

        let dt = Utc.with_ymd_and_hms(2021, 2, 28, 23, 0, 0).unwrap();
        assert_eq!(format_date(dt), "February 28, 2021");

        assert_eq!(format_date("2022-03-09T10:15:00Z"), "March 9, 2022");
        assert_eq!(format_date(String::from("2022-03-09T10:15:00")), "March 9, 2022");
    }

    #[test]
    fn unparseable_date() {
        assert_eq!(format_date("yesterday"), "Invalid Date");
        assert_eq!(format_date("2024-02-30"), "Invalid Date");
        assert_eq!(format_date(""), "Invalid Date");
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_text("Portfolio", 9), "Portfolio");
        assert_eq!(truncate_text("Portfolio", 20), "Portfolio");
        assert_eq!(truncate_text("", 0), "");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_text("Portfolio Website", 9), "Portfolio...");
        assert_eq!(truncate_text("abc", 0), "...");
        assert_eq!(truncate_text("héllo wörld", 4), "héll...");
    }

    #[test]
    fn truncate_length_bound() {
        let samples = [
            "",
            "a",
            "Real‑time Dijkstra visualizer in C++/SFML.",
            "A full-stack e-commerce platform with payment integration.",
            "日本語のテキスト",
        ];

        for text in samples {
            for n in 0..=text.chars().count() + 2 {
                let out = truncate_text(text, n);

                assert!(out.chars().count() <= n + ELLIPSIS.len());
                if text.chars().count() <= n {
                    assert_eq!(out, text);
                }
            }
        }
    }

    #[test]
    fn capitalizes() {
        assert_eq!(capitalize_first_letter("projects"), "Projects");
        assert_eq!(capitalize_first_letter("élan"), "Élan");
        assert_eq!(capitalize_first_letter(""), "");
    }

    #[test]
    fn accepts_simple_addresses() {
        for email in [
            "alice@example.com",
            "jerinmulangan@outlook.com",
            "a.b+tag@mail.example.co.uk",
            "x@y.z",
        ] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "alice.example.com",
            "alice@example",
            "alice@@example.com",
            "al ice@example.com",
            "alice@exa mple.com",
            "@example.com",
            "alice@.",
            "",
        ] {
            assert!(!is_valid_email(email), "{email}");
        }
    }
}
