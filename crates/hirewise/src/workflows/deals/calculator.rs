use super::currency::Currency;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Converts a fixed per-hire charge quoted in raw currency units into lakhs.
pub const FIXED_CHARGE_DIVISOR: Decimal = dec!(100000);

const PERCENT_DIVISOR: Decimal = dec!(100);

/// Selects whether the agency fee is a share of salary or a flat charge per hire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum FeeBasis {
    /// Percentage of each hire's annual salary.
    Percent { rate: Decimal },
    /// Flat charge per hire in raw currency units (not lakhs).
    Fixed { amount_per_hire: Decimal },
}

impl FeeBasis {
    pub const fn kind(&self) -> FeeBasisKind {
        match self {
            Self::Percent { .. } => FeeBasisKind::Percent,
            Self::Fixed { .. } => FeeBasisKind::Fixed,
        }
    }

    /// Zero-valued basis of the requested kind.
    pub const fn empty(kind: FeeBasisKind) -> Self {
        match kind {
            FeeBasisKind::Percent => Self::Percent {
                rate: Decimal::ZERO,
            },
            FeeBasisKind::Fixed => Self::Fixed {
                amount_per_hire: Decimal::ZERO,
            },
        }
    }
}

impl Default for FeeBasis {
    fn default() -> Self {
        Self::empty(FeeBasisKind::Percent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeBasisKind {
    Percent,
    Fixed,
}

impl FeeBasisKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Percent => "Percentage of salary",
            Self::Fixed => "Fixed charge per hire",
        }
    }
}

/// Editable lead-form state that drives the deal value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealInputs {
    pub hiring_volume: u32,
    /// Average annual salary in lakhs.
    pub average_salary_lpa: Decimal,
    pub fee_basis: FeeBasis,
    pub currency: Currency,
}

impl DealInputs {
    pub fn new(hiring_volume: u32, average_salary_lpa: Decimal, fee_basis: FeeBasis) -> Self {
        Self {
            hiring_volume,
            average_salary_lpa: non_negative(average_salary_lpa),
            fee_basis,
            currency: Currency::default(),
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn set_hiring_volume(&mut self, hiring_volume: u32) {
        self.hiring_volume = hiring_volume;
    }

    pub fn set_average_salary_lpa(&mut self, salary: Decimal) {
        self.average_salary_lpa = non_negative(salary);
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    /// Activates the requested basis. Switching kinds discards the previous
    /// basis value; re-selecting the active kind keeps it.
    pub fn switch_fee_basis(&mut self, kind: FeeBasisKind) {
        if self.fee_basis.kind() != kind {
            self.fee_basis = FeeBasis::empty(kind);
        }
    }

    /// Updates the percentage rate. Returns `false` when the fixed basis is active.
    pub fn set_fee_rate(&mut self, rate: Decimal) -> bool {
        match &mut self.fee_basis {
            FeeBasis::Percent { rate: current } => {
                *current = non_negative(rate);
                true
            }
            FeeBasis::Fixed { .. } => false,
        }
    }

    /// Updates the per-hire charge. Returns `false` when the percent basis is active.
    pub fn set_fixed_charge(&mut self, amount_per_hire: Decimal) -> bool {
        match &mut self.fee_basis {
            FeeBasis::Fixed {
                amount_per_hire: current,
            } => {
                *current = non_negative(amount_per_hire);
                true
            }
            FeeBasis::Percent { .. } => false,
        }
    }

    pub fn deal_value(&self) -> DealValue {
        compute_deal_value(self)
    }
}

/// Deal value in lakhs of the deal currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DealValue(pub Decimal);

impl DealValue {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn lakhs(self) -> Decimal {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Value expressed in raw currency units, saturating on overflow.
    pub fn raw_amount(self) -> Decimal {
        self.0
            .checked_mul(FIXED_CHARGE_DIVISOR)
            .unwrap_or(Decimal::MAX)
    }
}

impl From<Decimal> for DealValue {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for DealValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derives the deal value from lead inputs.
///
/// Any zero (or negative) factor yields zero. Products that overflow the
/// decimal range saturate at [`Decimal::MAX`].
pub fn compute_deal_value(inputs: &DealInputs) -> DealValue {
    if inputs.hiring_volume == 0 {
        return DealValue::ZERO;
    }
    let volume = Decimal::from(inputs.hiring_volume);

    let value = match inputs.fee_basis {
        FeeBasis::Fixed { amount_per_hire } => {
            if !is_positive(amount_per_hire) {
                return DealValue::ZERO;
            }
            amount_per_hire
                .checked_mul(volume)
                .map(|total| total / FIXED_CHARGE_DIVISOR)
        }
        FeeBasis::Percent { rate } => {
            if !is_positive(rate) || !is_positive(inputs.average_salary_lpa) {
                return DealValue::ZERO;
            }
            rate.checked_mul(volume)
                .and_then(|partial| partial.checked_mul(inputs.average_salary_lpa))
                .map(|total| total / PERCENT_DIVISOR)
        }
    };

    DealValue(value.unwrap_or(Decimal::MAX).normalize())
}

fn is_positive(value: Decimal) -> bool {
    value > Decimal::ZERO
}

fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
