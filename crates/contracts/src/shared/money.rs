//! Decimal helpers for money and percentage values.
//!
//! Form inputs arrive as free text ("Rp 1,250,000", "1.000,50", "11", "", "abc").
//! Two parsers exist: [`parse_amount`] never fails and treats garbage as zero,
//! [`parse_decimal_strict`] is used by validation to tell garbage apart.

use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;

/// Number of fractional digits kept for money values.
pub const MONEY_SCALE: u32 = 2;

/// Largest money amount a form accepts (10^15).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Largest quantity a quotation line accepts.
pub const MAX_QUANTITY: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Strips the currency prefix and whitespace and rewrites the number with `.`
/// as its only separator, the decimal point.
///
/// With both `.` and `,` present the last one is the decimal separator
/// ("1.000,50", "1,250,000.50"). A separator that repeats is grouping
/// ("1.000.000"). A lone separator is grouping when it splits a one to three
/// digit lead from exactly three digits ("Rp 1.500", "1,250"); otherwise it
/// is the decimal separator ("12.5", "12,5", "0.500").
fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    let without_prefix = trimmed
        .strip_prefix("Rp")
        .or_else(|| trimmed.strip_prefix("rp"))
        .or_else(|| trimmed.strip_prefix("RP"))
        .unwrap_or(trimmed);

    let cleaned: String = without_prefix
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();

    let decimal_separator = match (cleaned.rfind('.'), cleaned.rfind(',')) {
        (Some(dot), Some(comma)) => Some(if dot > comma { '.' } else { ',' }),
        (Some(_), None) => lone_decimal_separator(&cleaned, '.'),
        (None, Some(_)) => lone_decimal_separator(&cleaned, ','),
        (None, None) => None,
    };

    cleaned
        .chars()
        .filter_map(|c| match c {
            '.' | ',' if Some(c) == decimal_separator => Some('.'),
            '.' | ',' => None,
            other => Some(other),
        })
        .collect()
}

/// `Some(separator)` when the only separator kind in `value` marks decimals.
fn lone_decimal_separator(value: &str, separator: char) -> Option<char> {
    if value.matches(separator).count() > 1 {
        return None;
    }
    let (lead, tail) = value.split_once(separator)?;
    let lead = lead.strip_prefix('-').unwrap_or(lead);
    let is_grouping = tail.len() == 3
        && tail.chars().all(|c| c.is_ascii_digit())
        && (1..=3).contains(&lead.len())
        && lead.chars().all(|c| c.is_ascii_digit())
        && !lead.starts_with('0');
    (!is_grouping).then_some(separator)
}

/// Parses a numeric form value, returning `None` for empty or malformed input.
pub fn parse_decimal_strict(input: &str) -> Option<Decimal> {
    let cleaned = normalize(input);
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Lenient parse: empty or malformed input counts as zero.
pub fn parse_amount(input: &str) -> Decimal {
    parse_decimal_strict(input).unwrap_or(Decimal::ZERO)
}

/// Rounds to two fractional digits, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// `base × pct / 100`, rounded to money scale. `None` on overflow.
pub fn percent_of(base: Decimal, pct: Decimal) -> Option<Decimal> {
    base.checked_mul(pct)?
        .checked_div(Decimal::ONE_HUNDRED)
        .map(round_money)
}

/// Plain decimal string with exactly two fractional digits ("1160000.00").
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = round_money(value);
    rounded.rescale(MONEY_SCALE);
    rounded.to_string()
}

/// Display string with `.` grouping and `,` decimals, as read in Indonesia
/// ("1.160.000,00").
pub fn format_rupiah(value: Decimal) -> String {
    let plain = format_amount(value);
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (integer_part, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{}{},{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount_plain_and_grouped() {
        assert_eq!(parse_amount("1000000"), dec!(1000000));
        assert_eq!(parse_amount("Rp 1,250,000"), dec!(1250000));
        assert_eq!(parse_amount("1.000.000"), dec!(1000000));
        assert_eq!(parse_amount(" 12.5 "), dec!(12.5));
    }

    #[test]
    fn test_parse_amount_malformed_is_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount("12abc"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_strict_distinguishes_garbage() {
        assert_eq!(parse_decimal_strict(""), None);
        assert_eq!(parse_decimal_strict("x1"), None);
        assert_eq!(parse_decimal_strict("0"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_percent_of_rounds_half_away_from_zero() {
        assert_eq!(percent_of(dec!(1000000), dec!(11)), Some(dec!(110000)));
        assert_eq!(percent_of(dec!(0.05), dec!(50)), Some(dec!(0.03)));
        assert_eq!(percent_of(dec!(333.33), dec!(33.333)), Some(dec!(111.11)));
    }

    #[test]
    fn test_percent_of_overflow_is_none() {
        assert_eq!(percent_of(Decimal::MAX, dec!(11)), None);
    }

    #[test]
    fn test_parse_amount_indonesian_format() {
        assert_eq!(parse_amount("1.000,50"), dec!(1000.50));
        assert_eq!(parse_amount("Rp 1.500"), dec!(1500));
        assert_eq!(parse_amount("12,5"), dec!(12.5));
        assert_eq!(parse_amount("1,250,000.50"), dec!(1250000.50));
        assert_eq!(parse_amount("0.500"), dec!(0.5));
        assert_eq!(parse_amount("1500.000"), dec!(1500));
        assert_eq!(parse_amount("1160000.00"), dec!(1160000));
    }

    #[test]
    fn test_rupiah_display_parses_back() {
        for value in [dec!(1160000), dec!(999), dec!(-1234.5), dec!(0.05), dec!(1000.5), dec!(12345678.99)] {
            assert_eq!(parse_amount(&format_rupiah(value)), value, "{}", format_rupiah(value));
        }
    }

    #[test]
    fn test_format_amount_has_two_digits() {
        assert_eq!(format_amount(dec!(1160000)), "1160000.00");
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(12.345)), "12.35");
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(dec!(1160000)), "1.160.000,00");
        assert_eq!(format_rupiah(dec!(999)), "999,00");
        assert_eq!(format_rupiah(dec!(-1234.5)), "-1.234,50");
    }
}
