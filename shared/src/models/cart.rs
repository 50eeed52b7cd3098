//! Cart Model

use serde::{Deserialize, Serialize};

/// Pending order line owned by `email`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub email: String,
    pub menu_item_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub price: f64,
}

/// Add-to-cart payload
///
/// The owning email is supplied by the caller; repeated adds of the same
/// menu item create distinct lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemCreate {
    pub email: String,
    pub menu_item_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub price: f64,
}
