//! Lead deal-value calculation and currency display.

mod calculator;
mod currency;
mod format;
pub mod router;

pub use calculator::{
    compute_deal_value, DealInputs, DealValue, FeeBasis, FeeBasisKind, FIXED_CHARGE_DIVISOR,
};
pub use currency::{symbol_for_code, Currency};
pub use format::{format_currency_abbreviated, format_deal_value};
pub use router::deal_router;

use serde::Serialize;

/// Everything a lead form shows for the current inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealQuote {
    pub currency: Currency,
    pub fee_basis: FeeBasisKind,
    pub fee_basis_label: &'static str,
    pub deal_value: DealValue,
    pub display: String,
    pub abbreviated: String,
}

impl DealQuote {
    pub fn from_inputs(inputs: &DealInputs) -> Self {
        let deal_value = compute_deal_value(inputs);
        let kind = inputs.fee_basis.kind();

        Self {
            currency: inputs.currency,
            fee_basis: kind,
            fee_basis_label: kind.label(),
            deal_value,
            display: format_deal_value(deal_value, inputs.currency),
            abbreviated: format_currency_abbreviated(deal_value.raw_amount(), inputs.currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn quote_combines_value_and_both_renderings() {
        let inputs = DealInputs::new(50, dec!(12), FeeBasis::Percent { rate: dec!(8.33) });
        let quote = DealQuote::from_inputs(&inputs);

        assert_eq!(quote.deal_value.lakhs(), dec!(49.98));
        assert_eq!(quote.display, "₹ 49.98 L");
        assert_eq!(quote.abbreviated, "₹49.98 L");
        assert_eq!(quote.fee_basis, FeeBasisKind::Percent);
    }

    #[test]
    fn empty_quote_keeps_display_blank() {
        let quote = DealQuote::from_inputs(&DealInputs::default());
        assert!(quote.deal_value.is_zero());
        assert_eq!(quote.display, "");
        assert_eq!(quote.abbreviated, "₹0.00");
    }
}
