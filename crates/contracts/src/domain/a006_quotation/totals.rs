//! Quotation total calculator.
//!
//! ```text
//! item.total      = quantity × price
//! sub_total       = Σ item.total
//! ppn             = sub_total × ppn% / 100
//! grand_total     = sub_total + ppn + delivery_fee + other_fee
//! payment_nominal = grand_total × payment% / 100
//! remaining       = grand_total − payment_nominal
//! ```
//!
//! `ppn` and `payment_nominal` are rounded to two decimals, half away from
//! zero. Malformed inputs count as zero. Arithmetic is checked: a result
//! beyond `Decimal`'s range yields `None` instead of a value.

use super::form::QuotationForm;
use crate::shared::money::{format_amount, parse_amount, percent_of, round_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuotationTotals {
    pub sub_total: Decimal,
    pub ppn: Decimal,
    pub grand_total: Decimal,
    pub payment_nominal: Decimal,
    pub remaining_payment: Decimal,
}

/// Totals rendered for display and for the request body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormattedTotals {
    pub sub_total: String,
    pub ppn: String,
    pub grand_total: String,
    pub payment_nominal: String,
    pub remaining_payment: String,
}

/// Typed inputs of the calculation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TotalsInput {
    /// `(quantity, price)` per line.
    pub lines: Vec<(Decimal, Decimal)>,
    pub delivery_fee: Decimal,
    pub other_fee: Decimal,
    pub ppn_percentage: Decimal,
    pub payment_percentage: Decimal,
}

pub fn line_total(quantity: Decimal, price: Decimal) -> Option<Decimal> {
    quantity.checked_mul(price).map(round_money)
}

impl QuotationTotals {
    pub fn compute(input: &TotalsInput) -> Option<Self> {
        let sub_total = input
            .lines
            .iter()
            .try_fold(Decimal::ZERO, |acc, (quantity, price)| {
                acc.checked_add(line_total(*quantity, *price)?)
            })?;
        let ppn = percent_of(sub_total, input.ppn_percentage)?;
        let grand_total = sub_total
            .checked_add(ppn)?
            .checked_add(input.delivery_fee)?
            .checked_add(input.other_fee)?;
        let payment_nominal = percent_of(grand_total, input.payment_percentage)?;

        Some(Self {
            sub_total,
            ppn,
            grand_total,
            payment_nominal,
            remaining_payment: grand_total.checked_sub(payment_nominal)?,
        })
    }

    pub fn formatted(&self) -> FormattedTotals {
        FormattedTotals {
            sub_total: format_amount(self.sub_total),
            ppn: format_amount(self.ppn),
            grand_total: format_amount(self.grand_total),
            payment_nominal: format_amount(self.payment_nominal),
            remaining_payment: format_amount(self.remaining_payment),
        }
    }
}

impl From<&QuotationForm> for TotalsInput {
    fn from(form: &QuotationForm) -> Self {
        Self {
            lines: form
                .items
                .iter()
                .map(|item| (parse_amount(&item.quantity), parse_amount(&item.price)))
                .collect(),
            delivery_fee: parse_amount(&form.delivery_fee),
            other_fee: parse_amount(&form.other_fee),
            ppn_percentage: parse_amount(&form.ppn_percentage),
            payment_percentage: parse_amount(&form.payment_percentage),
        }
    }
}

/// Totals for the current form snapshot, `None` when a value overflows.
pub fn calculate_grand_total(form: &QuotationForm) -> Option<QuotationTotals> {
    QuotationTotals::compute(&TotalsInput::from(form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_quotation::form::QuotationItemForm;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn form_with(items: &[(&str, &str)], delivery: &str, other: &str, ppn: &str, payment: &str) -> QuotationForm {
        let mut form = QuotationForm::new_draft(NaiveDate::from_ymd_opt(2026, 5, 4).unwrap());
        form.items = items
            .iter()
            .map(|(quantity, price)| QuotationItemForm {
                quantity: quantity.to_string(),
                price: price.to_string(),
                ..QuotationItemForm::new()
            })
            .collect();
        form.delivery_fee = delivery.into();
        form.other_fee = other.into();
        form.ppn_percentage = ppn.into();
        form.payment_percentage = payment.into();
        form
    }

    #[test]
    fn test_reference_quotation() {
        let form = form_with(&[("2", "300000"), ("1", "400000")], "50000", "0", "11", "50");
        let totals = calculate_grand_total(&form).unwrap();

        assert_eq!(totals.sub_total, dec!(1000000));
        assert_eq!(totals.ppn, dec!(110000));
        assert_eq!(totals.grand_total, dec!(1160000));
        assert_eq!(totals.payment_nominal, dec!(580000));
        assert_eq!(totals.remaining_payment, dec!(580000));

        let formatted = totals.formatted();
        assert_eq!(formatted.grand_total, "1160000.00");
        assert_eq!(formatted.remaining_payment, "580000.00");
    }

    #[test]
    fn test_empty_quotation_is_zero() {
        let form = form_with(&[], "", "", "11", "50");
        let totals = calculate_grand_total(&form).unwrap();
        assert_eq!(totals, QuotationTotals::default());
        assert_eq!(totals.formatted().grand_total, "0.00");
    }

    #[test]
    fn test_malformed_numbers_count_as_zero() {
        let form = form_with(&[("abc", "1000"), ("1", "Rp 1.000.000")], "x", "", "", "?");
        let totals = calculate_grand_total(&form).unwrap();
        assert_eq!(totals.sub_total, dec!(1000000));
        assert_eq!(totals.ppn, Decimal::ZERO);
        assert_eq!(totals.grand_total, dec!(1000000));
        assert_eq!(totals.payment_nominal, Decimal::ZERO);
        assert_eq!(totals.remaining_payment, dec!(1000000));
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        let input = TotalsInput {
            lines: vec![(dec!(1), dec!(0.05))],
            ppn_percentage: dec!(11),
            payment_percentage: dec!(50),
            ..TotalsInput::default()
        };
        let totals = QuotationTotals::compute(&input).unwrap();
        // 0.05 × 11% = 0.0055
        assert_eq!(totals.ppn, dec!(0.01));
        // 0.06 × 50% = 0.03
        assert_eq!(totals.payment_nominal, dec!(0.03));
        assert_eq!(totals.remaining_payment, dec!(0.03));
    }

    #[test]
    fn test_fractional_quantity() {
        assert_eq!(line_total(dec!(2.5), dec!(1999.99)), Some(dec!(4999.98)));
    }

    #[test]
    fn test_huge_quantity_yields_no_totals() {
        let form = form_with(&[("9999999999999999999999999999", "10")], "", "", "11", "50");
        assert_eq!(calculate_grand_total(&form), None);

        let summed = form_with(
            &[("1", "79228162514264337593543950335"), ("1", "1")],
            "",
            "",
            "0",
            "0",
        );
        assert_eq!(calculate_grand_total(&summed), None);
    }
}
