//! Statistics Models

use serde::{Deserialize, Serialize};

/// Admin dashboard summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub users: u64,
    /// Menu item count
    pub products: u64,
    /// Payment count
    pub orders: u64,
    pub revenue: f64,
}

/// Sales per menu category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: String,
    pub count: u64,
    pub total: f64,
}
