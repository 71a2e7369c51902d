use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub base_price: i64,
    pub features: Vec<String>,
}

impl Vehicle {
    pub fn new(id: &str, name: &str, capacity: u32, base_price: i64, features: &[&str]) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            base_price,
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

// Catalog row with the prices the picker shows: per-seat for shared rides,
// 10% off for taking the whole vehicle. Display prices only; checkout
// charges are quoted separately.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VehicleListing {
    pub vehicle: Vehicle,
    pub join_price: i64,
    pub full_price: i64,
}
