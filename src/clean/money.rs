//! Currency string parsing.

/// Parses a monetary string into a float.
///
/// Strips currency symbols, thousands separators, and whitespace before
/// parsing, so `"$1,234.56"` becomes `1234.56`. Only those characters are
/// removed: any other letter stays in place and makes the parse fail, so
/// strings like `"1 Euro 2"` become null rather than a wrong number.
/// Returns `None` for anything that does not survive as a finite number,
/// including `"nan"` and empty strings.
pub fn parse_money(raw: &str) -> Option<f64> {
    let stripped: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, ',' | '$' | '€' | '£' | '¥'))
        .collect();

    if stripped.is_empty() {
        return None;
    }

    // "nan"/"inf" survive f64 parsing but are not usable monetary values
    stripped.parse::<f64>().ok().filter(|v| v.is_finite())
}
