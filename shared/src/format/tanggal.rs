//! Calendar date renderings for the government register
//!
//! Every function accepts the unset date and returns a fixed dot placeholder
//! instead of failing; documents print the placeholder where a date has not
//! been entered yet.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::format::terbilang;

/// Placeholder printed for unset dates in text positions
pub const EMPTY_TEXT: &str = ".......................";
/// Placeholder printed for unset dates in numeric positions
pub const EMPTY_NUMERIC: &str = "..........";

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Indonesian month name for a date's month
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Long form: `2 Januari 2025`
pub fn long_form(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!("{} {} {}", d.day(), month_name(d), d.year()),
        None => EMPTY_TEXT.to_string(),
    }
}

/// Numeric form: `2-01-2025` (day unpadded, month zero-padded)
pub fn numeric_form(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!("{}-{:02}-{}", d.day(), d.month(), d.year()),
        None => EMPTY_NUMERIC.to_string(),
    }
}

/// Localized weekday name: `Kamis`
pub fn weekday_name(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => match d.weekday() {
            Weekday::Mon => "Senin",
            Weekday::Tue => "Selasa",
            Weekday::Wed => "Rabu",
            Weekday::Thu => "Kamis",
            Weekday::Fri => "Jumat",
            Weekday::Sat => "Sabtu",
            Weekday::Sun => "Minggu",
        }
        .to_string(),
        None => EMPTY_TEXT.to_string(),
    }
}

/// Day-of-month spelled in words: `Dua Puluh Satu`
pub fn day_words(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => terbilang::to_words(u64::from(d.day())),
        None => EMPTY_TEXT.to_string(),
    }
}

/// Year spelled in words, for the years the organization operates in.
///
/// The lookup covers 2025-2027 only; any other year renders as its plain
/// numeral. Callers must not widen this -- printed output has to match the
/// documents already in circulation.
pub fn year_words(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => match d.year() {
            2025 => "Dua Ribu Dua Puluh Lima".to_string(),
            2026 => "Dua Ribu Dua Puluh Enam".to_string(),
            2027 => "Dua Ribu Dua Puluh Tujuh".to_string(),
            y => y.to_string(),
        },
        None => EMPTY_TEXT.to_string(),
    }
}
