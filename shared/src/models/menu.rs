//! Menu Model

use serde::{Deserialize, Serialize};

/// Menu item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub recipe: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub category: String,
    pub price: f64,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    #[serde(default)]
    pub recipe: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub category: String,
    pub price: f64,
}
