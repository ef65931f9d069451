use crate::core::{Courier, PostalZoneMap, Quote, ZoneMultiplier, ZoneType};
use crate::utils::error::{QuoteError, Result};

/// Resolve the shipping zone for an ordered postal-code pair.
///
/// Exact lookup only; pairs absent from the mapping resolve to
/// `ZoneType::National`. Total over its input domain: no format
/// validation, no error conditions.
pub fn resolve_zone(pickup: &str, delivery: &str, zones: &PostalZoneMap) -> ZoneType {
    zones.get(pickup, delivery).unwrap_or(ZoneType::National)
}

/// Compute per-courier price quotes for a zone and package weight.
///
/// For each courier, the multiplier entry matching `(zone, courier.id)`
/// is looked up; couriers without one are excluded from the result
/// (inner-join semantics). The total per included courier is
///
/// `total = base_price + (price_per_kg * weight_kg * price_multiplier)`
///
/// with no rounding; display formatting is a caller concern. The result
/// preserves the input courier order. An empty courier list yields an
/// empty result. Weight must be finite and strictly positive, otherwise
/// `InvalidWeight`.
pub fn compute_rates(
    zone: ZoneType,
    weight_kg: f64,
    couriers: &[Courier],
    multipliers: &[ZoneMultiplier],
) -> Result<Vec<Quote>> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(QuoteError::InvalidWeight { value: weight_kg });
    }

    let mut quotes = Vec::with_capacity(couriers.len());
    for courier in couriers {
        let Some(entry) = multipliers
            .iter()
            .find(|m| m.zone_type == zone && m.courier_id == courier.id)
        else {
            tracing::debug!(
                "courier {} has no {} multiplier, excluded from quotes",
                courier.id,
                zone
            );
            continue;
        };

        let total = courier.base_price + (courier.price_per_kg * weight_kg * entry.price_multiplier);
        quotes.push(Quote {
            courier_id: courier.id.to_string(),
            name: courier.name.clone(),
            logo: courier.logo_url.clone(),
            base_price: courier.base_price,
            price_per_kg: courier.price_per_kg,
            estimated_delivery: courier.estimated_delivery.clone(),
            rating: courier.rating,
            total,
        });
    }

    Ok(quotes)
}
