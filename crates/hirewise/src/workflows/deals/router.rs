use axum::{extract::State, routing::post, Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use super::calculator::{DealInputs, FeeBasis};
use super::currency::Currency;
use super::DealQuote;
use crate::config::DealConfig;

/// Payload accepted by the quote endpoint. The currency is a free-form code so
/// unknown values degrade to the configured default instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DealQuoteRequest {
    pub hiring_volume: u32,
    pub average_salary_lpa: Decimal,
    pub fee_basis: FeeBasis,
    pub currency: Option<String>,
}

impl DealQuoteRequest {
    pub fn into_inputs(self, defaults: &DealConfig) -> DealInputs {
        let currency = self
            .currency
            .as_deref()
            .and_then(Currency::from_code)
            .unwrap_or(defaults.default_currency);

        DealInputs::new(self.hiring_volume, self.average_salary_lpa, self.fee_basis)
            .with_currency(currency)
    }
}

/// Router exposing the deal quote calculation.
pub fn deal_router(defaults: DealConfig) -> Router {
    Router::new()
        .route("/api/v1/deals/quote", post(quote_handler))
        .with_state(defaults)
}

pub(crate) async fn quote_handler(
    State(defaults): State<DealConfig>,
    Json(request): Json<DealQuoteRequest>,
) -> Json<DealQuote> {
    let inputs = request.into_inputs(&defaults);
    let quote = DealQuote::from_inputs(&inputs);
    debug!(
        currency = %quote.currency,
        basis = quote.fee_basis.label(),
        value = %quote.deal_value,
        "computed deal quote"
    );
    Json(quote)
}
