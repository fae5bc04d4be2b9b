//! Text folding shared by search and form input parsing.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lower-case and strip diacritics: "Pôrtêirínha" → "porteirinha"
///
/// NFD-decomposes so accents become separate combining marks, then drops them.
/// Idempotent: the output contains no upper-case letters or combining marks.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Keep only ASCII digits ("R$ 1.250,00" → "125000")
pub fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Parse a masked currency field where the typed digits are cents
///
/// Returns `None` for empty or zero input, which the filter treats as "no bound".
pub fn parse_currency_input(s: &str) -> Option<f64> {
    let digits = digits_only(s);
    let cents: u64 = digits.parse().ok()?;
    if cents == 0 {
        return None;
    }
    Some(cents as f64 / 100.0)
}

/// Parse a masked area field as a whole quantity; empty input is 0
pub fn parse_area_input(s: &str) -> f64 {
    digits_only(s).parse::<u64>().map(|n| n as f64).unwrap_or(0.0)
}
