//! Number formatting for table cells.

use contracts::shared::money::format_rupiah;
use rust_decimal::Decimal;

/// Money with currency prefix: `Rp 1.160.000,00`.
pub fn format_money(value: Decimal) -> String {
    format!("Rp {}", format_rupiah(value))
}

/// Like [`format_money`]; a missing amount renders as `-`.
pub fn format_money_or_dash(value: Option<Decimal>) -> String {
    value.map(format_money).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::from(1_160_000)), "Rp 1.160.000,00");
        assert_eq!(format_money(Decimal::ZERO), "Rp 0,00");
    }

    #[test]
    fn test_missing_amount_is_a_dash() {
        assert_eq!(format_money_or_dash(None), "-");
        assert_eq!(format_money_or_dash(Some(Decimal::from(999))), "Rp 999,00");
    }
}
