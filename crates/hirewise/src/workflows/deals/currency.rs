use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency label attached to a deal. No conversion rates are carried; all
/// arithmetic happens in a single currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
    Usd,
    Eur,
    Gbp,
    Aed,
    Sgd,
    Jpy,
    Cad,
    Aud,
    Chf,
    Cny,
}

impl Currency {
    pub const fn all() -> [Self; 11] {
        [
            Self::Inr,
            Self::Usd,
            Self::Eur,
            Self::Gbp,
            Self::Aed,
            Self::Sgd,
            Self::Jpy,
            Self::Cad,
            Self::Aud,
            Self::Chf,
            Self::Cny,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Aed => "AED",
            Self::Sgd => "SGD",
            Self::Jpy => "JPY",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Chf => "CHF",
            Self::Cny => "CNY",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Aed => "د.إ",
            Self::Sgd => "S$",
            Self::Jpy => "¥",
            Self::Cad => "C$",
            Self::Aud => "A$",
            Self::Chf => "CHF",
            Self::Cny => "¥",
        }
    }

    /// Looks up a currency by its ISO code, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::all()
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
    }

    /// Like [`Currency::from_code`] but unknown codes resolve to the rupee.
    pub fn resolve(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Display symbol for a raw currency code; unrecognised codes get the rupee symbol.
pub fn symbol_for_code(code: &str) -> &'static str {
    Currency::resolve(code).symbol()
}
