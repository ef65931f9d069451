use anyhow::Result;
use serde_json::json;
use shipquote::core::{OrderDraft, OrderStatus};
use shipquote::{FileReferenceData, JsonOrderStore, OrderService, QuoteError};
use tempfile::TempDir;

fn write_couriers(dir: &TempDir) -> Result<()> {
    let couriers = r#"
[[couriers]]
id = 3
name = "BlueDart"
logo_url = "assets/logos/bluedart.png"
base_price = 100.0
price_per_kg = 30.0
estimated_delivery = "1-2 Days"
rating = 4.7
"#;
    std::fs::write(dir.path().join("couriers.toml"), couriers)?;
    Ok(())
}

fn service(dir: &TempDir) -> OrderService<JsonOrderStore, FileReferenceData> {
    let store = JsonOrderStore::new(dir.path().join("orders.json"));
    OrderService::new(store, FileReferenceData::new(dir.path()))
}

fn draft(user_id: Option<u64>, courier_id: u32) -> OrderDraft {
    OrderDraft {
        user_id,
        package_details: Some(json!({
            "weight": 2.5, "length": 30, "width": 20, "height": 15,
            "category": "Electronics"
        })),
        pickup_address: Some(json!({
            "name": "John Doe", "street": "123 Main St", "city": "Mumbai",
            "postal_code": "400001"
        })),
        delivery_address: Some(json!({
            "name": "Alice Brown", "street": "456 Park Ave", "city": "Delhi",
            "postal_code": "110001"
        })),
        courier_id: Some(courier_id),
        total_price: Some(175.0),
    }
}

#[tokio::test]
async fn create_then_get_round_trips_the_opaque_blobs() -> Result<()> {
    let dir = TempDir::new()?;
    write_couriers(&dir)?;
    let service = service(&dir);

    let id = service.create(&draft(Some(1), 3)).await?;
    let view = service.get(id).await?;

    assert_eq!(view.order.id, id);
    assert_eq!(view.order.status, OrderStatus::Pending);
    assert_eq!(view.order.package_details["category"], "Electronics");
    assert_eq!(view.order.pickup_address["city"], "Mumbai");
    assert_eq!(view.courier_name, "BlueDart");
    assert_eq!(view.courier_logo, "assets/logos/bluedart.png");
    Ok(())
}

#[tokio::test]
async fn create_rejects_drafts_missing_required_fields() -> Result<()> {
    let dir = TempDir::new()?;
    write_couriers(&dir)?;
    let service = service(&dir);

    let incomplete = OrderDraft {
        courier_id: Some(3),
        total_price: Some(175.0),
        ..OrderDraft::default()
    };
    let err = service.create(&incomplete).await.unwrap_err();
    assert!(matches!(err, QuoteError::MissingField { .. }));

    // Nothing was persisted.
    assert!(service.list(None).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn list_filters_by_user_and_orders_newest_first() -> Result<()> {
    let dir = TempDir::new()?;
    write_couriers(&dir)?;
    let service = service(&dir);

    let first = service.create(&draft(Some(1), 3)).await?;
    let _second = service.create(&draft(Some(2), 3)).await?;
    let third = service.create(&draft(Some(1), 3)).await?;

    let all = service.list(None).await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].order.id, third);
    assert_eq!(all[2].order.id, first);

    let user_one = service.list(Some(1)).await?;
    let ids: Vec<u64> = user_one.iter().map(|v| v.order.id).collect();
    assert_eq!(ids, vec![third, first]);

    assert!(service.list(Some(99)).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn status_updates_persist_and_unknown_statuses_are_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    write_couriers(&dir)?;
    let service = service(&dir);

    let id = service.create(&draft(None, 3)).await?;

    service.update_status(id, "in_transit").await?;
    assert_eq!(service.get(id).await?.order.status, OrderStatus::InTransit);

    let err = service.update_status(id, "shipped").await.unwrap_err();
    assert!(matches!(err, QuoteError::InvalidStatus { ref value } if value == "shipped"));
    // The stored status is untouched.
    assert_eq!(service.get(id).await?.order.status, OrderStatus::InTransit);
    Ok(())
}

#[tokio::test]
async fn missing_orders_are_typed_errors() -> Result<()> {
    let dir = TempDir::new()?;
    write_couriers(&dir)?;
    let service = service(&dir);

    let err = service.get(42).await.unwrap_err();
    assert!(matches!(err, QuoteError::OrderNotFound { id: 42 }));

    let err = service.update_status(42, "delivered").await.unwrap_err();
    assert!(matches!(err, QuoteError::OrderNotFound { id: 42 }));
    Ok(())
}

#[tokio::test]
async fn store_survives_reopening_the_file() -> Result<()> {
    let dir = TempDir::new()?;
    write_couriers(&dir)?;

    let id = {
        let service = service(&dir);
        service.create(&draft(Some(7), 3)).await?
    };

    // A fresh store over the same file sees the order.
    let reopened = service(&dir);
    let view = reopened.get(id).await?;
    assert_eq!(view.order.user_id, Some(7));
    Ok(())
}
