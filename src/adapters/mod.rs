use crate::core::{
    Courier, NewOrder, Order, OrderStatus, OrderStore, PostalZoneMap, ReferenceDataSource,
    ZoneMultiplier, ZoneType,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Reference data loaded from flat files in a data directory:
/// `couriers.toml`, `multipliers.toml`, and `zones.csv`.
#[derive(Debug, Clone)]
pub struct FileReferenceData {
    data_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CourierFile {
    couriers: Vec<Courier>,
}

#[derive(Debug, Deserialize)]
struct MultiplierFile {
    multipliers: Vec<ZoneMultiplier>,
}

#[derive(Debug, Deserialize)]
struct ZoneRow {
    from_postal_code: String,
    to_postal_code: String,
    zone_type: ZoneType,
}

impl FileReferenceData {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path(&self, file: &str) -> PathBuf {
        Path::new(&self.data_dir).join(file)
    }
}

#[async_trait]
impl ReferenceDataSource for FileReferenceData {
    async fn couriers(&self) -> Result<Vec<Courier>> {
        let content = fs::read_to_string(self.path("couriers.toml"))?;
        let file: CourierFile = toml::from_str(&content)?;
        tracing::debug!("loaded {} couriers", file.couriers.len());
        Ok(file.couriers)
    }

    async fn zone_multipliers(&self) -> Result<Vec<ZoneMultiplier>> {
        let content = fs::read_to_string(self.path("multipliers.toml"))?;
        let file: MultiplierFile = toml::from_str(&content)?;
        Ok(file.multipliers)
    }

    async fn postal_zones(&self) -> Result<PostalZoneMap> {
        let mut reader = csv::Reader::from_path(self.path("zones.csv"))?;
        let mut zones = PostalZoneMap::new();
        for record in reader.deserialize() {
            let row: ZoneRow = record?;
            zones.insert(row.from_postal_code, row.to_postal_code, row.zone_type);
        }
        tracing::debug!("loaded {} postal zone mappings", zones.len());
        Ok(zones)
    }
}

/// Orders persisted as a JSON array in a single file. Writes are
/// serialized through a mutex; reads load the whole file.
pub struct JsonOrderStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonOrderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<Vec<Order>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, orders: &[Order]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(orders)?)?;
        Ok(())
    }
}

#[async_trait]
impl OrderStore for JsonOrderStore {
    async fn create(&self, order: NewOrder) -> Result<u64> {
        let _guard = self.write_lock.lock().await;
        let mut orders = self.load()?;
        let id = orders.iter().map(|o| o.id).max().unwrap_or(0) + 1;
        orders.push(Order {
            id,
            user_id: order.user_id,
            package_details: order.package_details,
            pickup_address: order.pickup_address,
            delivery_address: order.delivery_address,
            courier_id: order.courier_id,
            total_price: order.total_price,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        });
        self.save(&orders)?;
        Ok(id)
    }

    async fn all(&self) -> Result<Vec<Order>> {
        self.load()
    }

    async fn get(&self, id: u64) -> Result<Option<Order>> {
        Ok(self.load()?.into_iter().find(|o| o.id == id))
    }

    async fn set_status(&self, id: u64, status: OrderStatus) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut orders = self.load()?;
        let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
            return Ok(false);
        };
        order.status = status;
        self.save(&orders)?;
        Ok(true)
    }
}
