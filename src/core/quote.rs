use crate::core::rates::{compute_rates, resolve_zone};
use crate::core::{Courier, RateRequest, RateResponse, ReferenceDataSource};
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation;

/// Request-scoped quote orchestration: validates the request, materializes
/// the reference tables through the data source, then runs the pure zone
/// and rate functions.
pub struct QuoteEngine<R: ReferenceDataSource> {
    source: R,
}

impl<R: ReferenceDataSource> QuoteEngine<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub async fn quote(&self, request: &RateRequest) -> Result<RateResponse> {
        let (weight, pickup, delivery) = validation::validate_rate_request(request)?;

        let zones = self.source.postal_zones().await?;
        let zone = resolve_zone(pickup, delivery, &zones);
        tracing::debug!("resolved zone {} for {} -> {}", zone, pickup, delivery);

        let couriers = self.source.couriers().await?;
        let multipliers = self.source.zone_multipliers().await?;
        let rates = compute_rates(zone, weight, &couriers, &multipliers)?;
        tracing::info!("computed {} quotes for zone {}", rates.len(), zone);

        Ok(RateResponse {
            zone_type: zone,
            rates,
        })
    }

    pub async fn couriers(&self) -> Result<Vec<Courier>> {
        self.source.couriers().await
    }

    pub async fn courier(&self, id: u32) -> Result<Courier> {
        let couriers = self.source.couriers().await?;
        couriers
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(QuoteError::CourierNotFound { id })
    }
}
