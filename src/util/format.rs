//! Locale-aware number formatting for prices and sizes.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Maximum fraction digits kept when formatting, matching `Intl.NumberFormat` defaults.
const MAX_FRACTION_DIGITS: usize = 3;

/// Separator characters for one locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberLocale {
    pub group: char,
    pub decimal: char,
}

impl NumberLocale {
    /// Colombian Spanish: `1.234.567,5`.
    pub const ES_CO: Self = Self { group: '.', decimal: ',' };
    /// US English: `1,234,567.5`.
    pub const EN_US: Self = Self { group: ',', decimal: '.' };
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::ES_CO
    }
}

/// Format with the default locale. Missing or non-finite input renders as `"0"`.
pub fn format_number(value: Option<f64>) -> String {
    format_number_with(value, NumberLocale::default())
}

/// Format with thousands grouping and up to three fraction digits.
pub fn format_number_with(value: Option<f64>, locale: NumberLocale) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return "0".to_owned();
    };

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale.group));
    if !frac_part.is_empty() {
        out.push(locale.decimal);
        out.push_str(frac_part);
    }
    out
}

fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}
