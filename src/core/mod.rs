pub mod orders;
pub mod quote;
pub mod rates;

pub use crate::domain::model::{
    Courier, Dimensions, NewOrder, Order, OrderDraft, OrderStatus, OrderView, PostalZoneMap,
    Quote, RateRequest, RateResponse, ZoneMultiplier, ZoneType,
};
pub use crate::domain::ports::{OrderStore, ReferenceDataSource};
pub use crate::utils::error::Result;
