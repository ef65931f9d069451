use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Distance/pricing tier between two postal codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    Local,
    Regional,
    National,
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ZoneType::Local => "local",
            ZoneType::Regional => "regional",
            ZoneType::National => "national",
        };
        f.write_str(s)
    }
}

/// Immutable courier reference data for the duration of a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Courier {
    pub id: u32,
    pub name: String,
    pub logo_url: String,
    pub base_price: f64,
    pub price_per_kg: f64,
    pub estimated_delivery: String,
    /// Advisory display value, 0.0 to 5.0.
    pub rating: f64,
}

/// Zone- and courier-specific scalar applied to the per-kilogram rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneMultiplier {
    pub zone_type: ZoneType,
    pub courier_id: u32,
    pub price_multiplier: f64,
}

/// Exact-match mapping from an ordered postal-code pair to a zone type.
/// At most one zone per ordered pair; absent pairs are not an error,
/// callers default them to `national`.
#[derive(Debug, Clone, Default)]
pub struct PostalZoneMap {
    entries: HashMap<(String, String), ZoneType>,
}

impl PostalZoneMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>, zone: ZoneType) {
        self.entries.insert((from.into(), to.into()), zone);
    }

    pub fn get(&self, from: &str, to: &str) -> Option<ZoneType> {
        self.entries
            .get(&(from.to_string(), to.to_string()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String, ZoneType)> for PostalZoneMap {
    fn from_iter<I: IntoIterator<Item = (String, String, ZoneType)>>(iter: I) -> Self {
        let mut map = PostalZoneMap::new();
        for (from, to, zone) in iter {
            map.insert(from, to, zone);
        }
        map
    }
}

/// Package dimensions in centimeters. Accepted in rate requests but not
/// used by the rate formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Logical rate request. Required fields arrive as `Option` so the
/// boundary can reject missing ones with a validation error before the
/// rate core runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRequest {
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    pub pickup_postal_code: Option<String>,
    pub delivery_postal_code: Option<String>,
}

/// One computed courier price estimate. Constructed fresh per request,
/// never cached, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub courier_id: String,
    pub name: String,
    pub logo: String,
    pub base_price: f64,
    pub price_per_kg: f64,
    pub estimated_delivery: String,
    pub rating: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateResponse {
    pub zone_type: ZoneType,
    pub rates: Vec<Quote>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InTransit,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn parse(value: &str) -> Option<OrderStatus> {
        match value {
            "pending" => Some(OrderStatus::Pending),
            "in_transit" => Some(OrderStatus::InTransit),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InTransit => "in_transit",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// A recorded order. Package and address details are opaque structured
/// blobs; this crate stores and returns them without interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub user_id: Option<u64>,
    pub package_details: serde_json::Value,
    pub pickup_address: serde_json::Value,
    pub delivery_address: serde_json::Value,
    pub courier_id: u32,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Incoming order payload; required fields arrive as `Option` for the
/// same boundary-validation reason as `RateRequest`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDraft {
    pub user_id: Option<u64>,
    pub package_details: Option<serde_json::Value>,
    pub pickup_address: Option<serde_json::Value>,
    pub delivery_address: Option<serde_json::Value>,
    pub courier_id: Option<u32>,
    pub total_price: Option<f64>,
}

/// A validated order draft, ready for the store to assign an id.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Option<u64>,
    pub package_details: serde_json::Value,
    pub pickup_address: serde_json::Value,
    pub delivery_address: serde_json::Value,
    pub courier_id: u32,
    pub total_price: f64,
}

/// An order joined with its courier's display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub courier_name: String,
    pub courier_logo: String,
}
