use crate::domain::model::{NewOrder, OrderDraft, RateRequest};
use crate::utils::error::{QuoteError, Result};

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| QuoteError::MissingField {
        field: field_name.to_string(),
    })
}

/// Boundary validation for a rate request: `weight`, `pickupPostalCode`
/// and `deliveryPostalCode` must be present. Presence failures are
/// `MissingField`; the weight's numeric range is checked later by the
/// rate core, which owns `InvalidWeight`.
pub fn validate_rate_request(request: &RateRequest) -> Result<(f64, &str, &str)> {
    let weight = *validate_required_field("weight", &request.weight)?;
    let pickup = validate_required_field("pickupPostalCode", &request.pickup_postal_code)?;
    let delivery = validate_required_field("deliveryPostalCode", &request.delivery_postal_code)?;
    Ok((weight, pickup.as_str(), delivery.as_str()))
}

/// Boundary validation for an order draft. `user_id` is the only
/// optional field.
pub fn validate_order_draft(draft: &OrderDraft) -> Result<NewOrder> {
    let package_details = validate_required_field("package_details", &draft.package_details)?;
    let pickup_address = validate_required_field("pickup_address", &draft.pickup_address)?;
    let delivery_address = validate_required_field("delivery_address", &draft.delivery_address)?;
    let courier_id = *validate_required_field("courier_id", &draft.courier_id)?;
    let total_price = *validate_required_field("total_price", &draft.total_price)?;

    Ok(NewOrder {
        user_id: draft.user_id,
        package_details: package_details.clone(),
        pickup_address: pickup_address.clone(),
        delivery_address: delivery_address.clone(),
        courier_id,
        total_price,
    })
}
