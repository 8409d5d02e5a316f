//! Indonesian numeral spelling (terbilang) and digit grouping
//!
//! Legal and payroll documents spell amounts out in words. Zero and
//! non-numeric input yield the empty string, not "Nol": an empty salary
//! field means "no salary entered".

const UNITS: [&str; 12] = [
    "", "Satu", "Dua", "Tiga", "Empat", "Lima", "Enam", "Tujuh", "Delapan", "Sembilan", "Sepuluh",
    "Sebelas",
];

/// Spell a non-negative integer in Indonesian words.
///
/// `to_words(0)` is the empty string. Pure and total; the same `n` always
/// produces the same string.
pub fn to_words(n: u64) -> String {
    let mut parts: Vec<&'static str> = Vec::new();
    push_words(n, &mut parts);
    parts.join(" ")
}

fn push_words(n: u64, parts: &mut Vec<&'static str>) {
    match n {
        0 => {}
        1..=11 => parts.push(UNITS[n as usize]),
        12..=19 => {
            push_words(n - 10, parts);
            parts.push("Belas");
        }
        20..=99 => {
            push_words(n / 10, parts);
            parts.push("Puluh");
            push_words(n % 10, parts);
        }
        100..=199 => {
            parts.push("Seratus");
            push_words(n - 100, parts);
        }
        200..=999 => {
            push_words(n / 100, parts);
            parts.push("Ratus");
            push_words(n % 100, parts);
        }
        1_000..=1_999 => {
            parts.push("Seribu");
            push_words(n - 1_000, parts);
        }
        2_000..=999_999 => {
            push_words(n / 1_000, parts);
            parts.push("Ribu");
            push_words(n % 1_000, parts);
        }
        1_000_000..=999_999_999 => {
            push_words(n / 1_000_000, parts);
            parts.push("Juta");
            push_words(n % 1_000_000, parts);
        }
        _ => {
            push_words(n / 1_000_000_000, parts);
            parts.push("Miliar");
            push_words(n % 1_000_000_000, parts);
        }
    }
}

/// Group a digit string with `.` thousands separators.
///
/// Strips every non-digit character first, so re-applying to its own output
/// is a no-op. Input without digits yields the empty string.
pub fn group_thousands(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Terbilang form of a salary input, with the currency unit suffix.
///
/// Strips non-digits first. Empty, zero, or out-of-range input yields the
/// empty string.
pub fn salary_words(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let value: u64 = match digits.parse() {
        Ok(v) => v,
        Err(_) => return String::new(),
    };
    if value == 0 {
        return String::new();
    }
    format!("{} Rupiah", to_words(value))
}
