use crate::domain::model::{Courier, NewOrder, Order, OrderStatus, PostalZoneMap, ZoneMultiplier};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the static reference tables: couriers, zone multipliers, and
/// the postal-zone mapping. Implementations materialize the data into
/// memory; the rate core never reaches back into a store mid-computation.
#[async_trait]
pub trait ReferenceDataSource: Send + Sync {
    async fn couriers(&self) -> Result<Vec<Courier>>;
    async fn zone_multipliers(&self) -> Result<Vec<ZoneMultiplier>>;
    async fn postal_zones(&self) -> Result<PostalZoneMap>;
}

/// Persistence for recorded orders. The store assigns ids.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(&self, order: NewOrder) -> Result<u64>;
    async fn all(&self) -> Result<Vec<Order>>;
    async fn get(&self, id: u64) -> Result<Option<Order>>;
    /// Returns false when no order has the given id.
    async fn set_status(&self, id: u64, status: OrderStatus) -> Result<bool>;
}
