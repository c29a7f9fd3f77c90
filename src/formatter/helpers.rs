//! Helper functions shared by the converters

/// Escape a string for use inside a single-quoted literal
///
/// Only `'`, NUL, LF and CR are escaped; every other character is copied
/// as-is.
pub fn quote_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\'' => escaped.push_str("\\'"),
            '\0' => escaped.push_str("\\0"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap an escaped string in single quotes
pub fn single_quoted(s: &str) -> String {
    format!("'{}'", quote_escape(s))
}

/// Render a double at single precision
///
/// The value is narrowed to `f32` first, then printed with the shortest
/// digits that round-trip at that precision. Magnitudes in `[1e-3, 1e7)`
/// use plain decimal notation, anything else uses `d.dddE±n`. There is
/// always at least one fractional digit, and output never depends on locale.
pub fn format_single_precision(value: f64) -> String {
    let f = value as f32;

    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f == 0.0 {
        return if f.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    if (1e-3..1e7).contains(&f.abs()) {
        with_fraction(f.to_string())
    } else {
        let sci = format!("{f:e}");
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        format!("{}E{}", with_fraction(mantissa.to_string()), exponent)
    }
}

fn with_fraction(digits: String) -> String {
    if digits.contains('.') {
        digits
    } else {
        digits + ".0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escape() {
        assert_eq!(quote_escape("it's"), "it\\'s");
        assert_eq!(quote_escape("a\nb\rc\0"), "a\\nb\\rc\\0");
        assert_eq!(quote_escape("tab\tstays"), "tab\tstays");
        assert_eq!(quote_escape("back\\slash"), "back\\slash");
    }

    #[test]
    fn test_single_precision_plain() {
        assert_eq!(format_single_precision(1.0), "1.0");
        assert_eq!(format_single_precision(-2.5), "-2.5");
        assert_eq!(format_single_precision(3.14), "3.14");
        assert_eq!(format_single_precision(0.001), "0.001");
        assert_eq!(format_single_precision(1_000_000.0), "1000000.0");
    }

    #[test]
    fn test_single_precision_drops_double_noise() {
        assert_eq!(format_single_precision(0.1 + 0.2), "0.3");
        assert_eq!(format_single_precision(3.140000000908), "3.14");
    }

    #[test]
    fn test_single_precision_scientific() {
        assert_eq!(format_single_precision(1e10), "1.0E10");
        assert_eq!(format_single_precision(1.5e-5), "1.5E-5");
        assert_eq!(format_single_precision(12_345_678.0), "1.2345678E7");
        assert_eq!(format_single_precision(-0.0001), "-1.0E-4");
    }

    #[test]
    fn test_single_precision_special_values() {
        assert_eq!(format_single_precision(0.0), "0.0");
        assert_eq!(format_single_precision(-0.0), "-0.0");
        assert_eq!(format_single_precision(f64::NAN), "NaN");
        assert_eq!(format_single_precision(f64::INFINITY), "Infinity");
        assert_eq!(format_single_precision(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_single_precision(f64::MAX), "Infinity");
    }
}
