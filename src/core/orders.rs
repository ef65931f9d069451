use crate::core::{Courier, OrderDraft, OrderStatus, OrderStore, OrderView, ReferenceDataSource};
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation;

/// Order recording and retrieval over an `OrderStore`, joined against the
/// courier reference data for display fields.
pub struct OrderService<S: OrderStore, R: ReferenceDataSource> {
    store: S,
    reference: R,
}

impl<S: OrderStore, R: ReferenceDataSource> OrderService<S, R> {
    pub fn new(store: S, reference: R) -> Self {
        Self { store, reference }
    }

    /// Validates the draft and records the order with status `pending`.
    /// Returns the assigned id.
    pub async fn create(&self, draft: &OrderDraft) -> Result<u64> {
        let order = validation::validate_order_draft(draft)?;
        let id = self.store.create(order).await?;
        tracing::info!("order {} created", id);
        Ok(id)
    }

    /// All orders, newest first, optionally filtered by user. Orders whose
    /// courier is missing from the reference data are skipped, mirroring
    /// the catalog join.
    pub async fn list(&self, user_id: Option<u64>) -> Result<Vec<OrderView>> {
        let couriers = self.reference.couriers().await?;
        let mut orders = self.store.all().await?;

        if let Some(uid) = user_id {
            orders.retain(|o| o.user_id == Some(uid));
        }
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let views = orders
            .into_iter()
            .filter_map(|order| {
                let courier = find_courier(&couriers, order.courier_id)?;
                Some(OrderView {
                    courier_name: courier.name.clone(),
                    courier_logo: courier.logo_url.clone(),
                    order,
                })
            })
            .collect();
        Ok(views)
    }

    pub async fn get(&self, id: u64) -> Result<OrderView> {
        let order = self
            .store
            .get(id)
            .await?
            .ok_or(QuoteError::OrderNotFound { id })?;

        let couriers = self.reference.couriers().await?;
        let courier = find_courier(&couriers, order.courier_id).ok_or(
            QuoteError::CourierNotFound {
                id: order.courier_id,
            },
        )?;

        Ok(OrderView {
            courier_name: courier.name.clone(),
            courier_logo: courier.logo_url.clone(),
            order,
        })
    }

    /// Parses and applies a status update; unknown status strings are
    /// rejected without touching the store.
    pub async fn update_status(&self, id: u64, status: &str) -> Result<()> {
        let status = OrderStatus::parse(status).ok_or_else(|| QuoteError::InvalidStatus {
            value: status.to_string(),
        })?;

        if !self.store.set_status(id, status).await? {
            return Err(QuoteError::OrderNotFound { id });
        }
        tracing::info!("order {} status set to {}", id, status);
        Ok(())
    }
}

fn find_courier(couriers: &[Courier], id: u32) -> Option<&Courier> {
    couriers.iter().find(|c| c.id == id)
}
