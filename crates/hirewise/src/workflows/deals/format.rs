use super::calculator::DealValue;
use super::currency::Currency;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const LAKH: Decimal = dec!(100000);
const CRORE: Decimal = dec!(10000000);

/// Lead-form rendering of a deal value, e.g. `₹ 49.98 L`.
///
/// Zero renders as an empty string so an untouched form stays blank.
pub fn format_deal_value(value: DealValue, currency: Currency) -> String {
    if value.is_zero() {
        return String::new();
    }

    format!("{} {} L", currency.symbol(), two_places(value.lakhs()))
}

/// Table rendering of a raw amount, abbreviated to crores or lakhs once it is
/// large enough. Smaller amounts keep thousands separators.
pub fn format_currency_abbreviated(amount: Decimal, currency: Currency) -> String {
    let symbol = currency.symbol();

    if amount >= CRORE {
        format!("{symbol}{} Cr", two_places(amount / CRORE))
    } else if amount >= LAKH {
        format!("{symbol}{} L", two_places(amount / LAKH))
    } else {
        let grouped = group_thousands(&two_places(amount.abs()));
        if amount.is_sign_negative() && !amount.is_zero() {
            format!("-{symbol}{grouped}")
        } else {
            format!("{symbol}{grouped}")
        }
    }
}

fn two_places(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

fn group_thousands(plain: &str) -> String {
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain, ""));
    let digits = whole.as_bytes();
    let mut grouped = String::with_capacity(plain.len() + digits.len() / 3);

    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(char::from(*digit));
    }

    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_value_blank_when_zero() {
        assert_eq!(format_deal_value(DealValue::ZERO, Currency::Inr), "");
    }

    #[test]
    fn deal_value_uses_symbol_and_lakh_suffix() {
        assert_eq!(
            format_deal_value(DealValue(dec!(49.98)), Currency::Inr),
            "₹ 49.98 L"
        );
        assert_eq!(format_deal_value(DealValue(dec!(5)), Currency::Usd), "$ 5.00 L");
        assert_eq!(
            format_deal_value(DealValue(dec!(0.125)), Currency::Gbp),
            "£ 0.13 L"
        );
    }

    #[test]
    fn abbreviated_switches_to_crores() {
        assert_eq!(
            format_currency_abbreviated(dec!(25000000), Currency::Inr),
            "₹2.50 Cr"
        );
        assert_eq!(
            format_currency_abbreviated(dec!(10000000), Currency::Inr),
            "₹1.00 Cr"
        );
    }

    #[test]
    fn abbreviated_switches_to_lakhs() {
        assert_eq!(
            format_currency_abbreviated(dec!(100000), Currency::Inr),
            "₹1.00 L"
        );
        assert_eq!(
            format_currency_abbreviated(dec!(9999999), Currency::Eur),
            "€100.00 L"
        );
    }

    #[test]
    fn abbreviated_small_amounts_keep_separators() {
        assert_eq!(
            format_currency_abbreviated(dec!(99999.5), Currency::Inr),
            "₹99,999.50"
        );
        assert_eq!(format_currency_abbreviated(dec!(950), Currency::Usd), "$950.00");
        assert_eq!(format_currency_abbreviated(Decimal::ZERO, Currency::Usd), "$0.00");
        assert_eq!(
            format_currency_abbreviated(dec!(-1250.256), Currency::Usd),
            "-$1,250.26"
        );
    }

    #[test]
    fn formatters_disagree_on_small_values() {
        let value = DealValue(dec!(0.5));
        assert_eq!(format_deal_value(value, Currency::Inr), "₹ 0.50 L");
        assert_eq!(
            format_currency_abbreviated(value.raw_amount(), Currency::Inr),
            "₹50,000.00"
        );
    }

    #[test]
    fn grouping_handles_short_and_long_runs() {
        assert_eq!(group_thousands("12.00"), "12.00");
        assert_eq!(group_thousands("1234.00"), "1,234.00");
        assert_eq!(group_thousands("123456"), "123,456");
    }
}
