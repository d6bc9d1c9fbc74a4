//! Number formatting for tables and bar labels.

use serde::{Deserialize, Serialize};

/// Digit grouping and decimal conventions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Locale {
    pub fn group_separator(&self) -> char {
        match self {
            Locale::EnUs => ',',
            Locale::PtBr => '.',
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::EnUs => '.',
            Locale::PtBr => ',',
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Ok(Locale::EnUs),
            "pt-br" | "pt" => Ok(Locale::PtBr),
            other => Err(format!("unsupported locale '{}'", other)),
        }
    }
}

/// Grouped number with at most three fraction digits, trailing zeros dropped
pub fn grouped(value: f64, locale: Locale) -> String {
    let text = fixed_digits(value, 3);
    let (int_part, frac_part) = split_fraction(&text);
    let frac_part = frac_part.trim_end_matches('0');
    join(value, int_part, frac_part, locale, true)
}

/// Grouped number rounded to an integer
pub fn grouped_integer(value: f64, locale: Locale) -> String {
    let text = fixed_digits(value, 0);
    join(value, &text, "", locale, true)
}

/// Exactly `digits` fraction digits, no grouping
pub fn fixed(value: f64, digits: usize, locale: Locale) -> String {
    let text = fixed_digits(value, digits);
    let (int_part, frac_part) = split_fraction(&text);
    join(value, int_part, frac_part, locale, false)
}

/// Ratio as a percentage with two decimals (`0.0123` -> `1.23%`)
pub fn percent(ratio: f64, locale: Locale) -> String {
    format!("{}%", fixed(ratio * 100.0, 2, locale))
}

/// Thousands with one decimal (`8934.0` -> `8.9k`)
pub fn thousands(value: f64, locale: Locale) -> String {
    format!("{}k", fixed(value / 1000.0, 1, locale))
}

fn fixed_digits(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, value.abs())
}

fn split_fraction(text: &str) -> (&str, &str) {
    match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (text, ""),
    }
}

fn join(value: f64, int_part: &str, frac_part: &str, locale: Locale, group: bool) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let mut out = String::new();
    let is_zero = int_part.chars().chain(frac_part.chars()).all(|c| c == '0');
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }

    if group {
        let len = int_part.len();
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(locale.group_separator());
            }
            out.push(digit);
        }
    } else {
        out.push_str(int_part);
    }

    if !frac_part.is_empty() {
        out.push(locale.decimal_separator());
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(1234567.0, Locale::EnUs), "1,234,567");
        assert_eq!(grouped(8500.25, Locale::EnUs), "8,500.25");
        assert_eq!(grouped(1234.56789, Locale::EnUs), "1,234.568");
        assert_eq!(grouped(999.0, Locale::EnUs), "999");
        assert_eq!(grouped(-45210.5, Locale::EnUs), "-45,210.5");
        assert_eq!(grouped(8500.25, Locale::PtBr), "8.500,25");
    }

    #[test]
    fn test_grouped_integer() {
        assert_eq!(grouped_integer(45210.7, Locale::EnUs), "45,211");
        assert_eq!(grouped_integer(0.4, Locale::EnUs), "0");
        assert_eq!(grouped_integer(-0.4, Locale::EnUs), "0");
    }

    #[test]
    fn test_fixed_and_percent() {
        assert_eq!(fixed(3.14159, 2, Locale::EnUs), "3.14");
        assert_eq!(fixed(12345.678, 2, Locale::EnUs), "12345.68");
        assert_eq!(percent(0.0123, Locale::EnUs), "1.23%");
        assert_eq!(percent(-0.05, Locale::EnUs), "-5.00%");
        assert_eq!(percent(0.0123, Locale::PtBr), "1,23%");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(8934.0, Locale::EnUs), "8.9k");
        assert_eq!(thousands(46200.0, Locale::EnUs), "46.2k");
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::EnUs));
        assert_eq!("pt_BR".parse::<Locale>(), Ok(Locale::PtBr));
        assert!("fr-FR".parse::<Locale>().is_err());
    }
}
