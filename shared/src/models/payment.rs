//! Payment Model

use serde::{Deserialize, Serialize};

/// Completed checkout, immutable once written
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    /// Payer email
    pub email: String,
    /// Charged amount in major currency units
    pub price: f64,
    pub currency: String,
    /// Provider authorization reference
    pub transaction_id: String,
    /// Settled cart item ids
    #[serde(default)]
    pub cart_items: Vec<String>,
    /// Menu item ids behind the settled lines
    #[serde(default)]
    pub menu_items: Vec<String>,
    #[serde(default)]
    pub item_names: Vec<String>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub status: String,
    /// Record creation time (Unix millis)
    pub date: i64,
}

/// Record-payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCreate {
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    #[serde(default)]
    pub cart_items: Vec<String>,
    #[serde(default)]
    pub menu_items: Vec<String>,
    #[serde(default)]
    pub item_names: Vec<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_create_from_client_json() {
        let body: PaymentCreate = serde_json::from_str(
            r#"{
                "email": "ann@example.com",
                "transactionId": "pi_123",
                "price": 25.5,
                "quantity": 2,
                "cartItems": ["c1", "c2"],
                "menuItems": ["m1", "m2"],
                "itemNames": ["Soup", "Salad"],
                "status": "service pending"
            }"#,
        )
        .unwrap();
        assert_eq!(body.cart_items, vec!["c1", "c2"]);
        assert_eq!(body.menu_items.len(), 2);
        assert_eq!(body.quantity, Some(2));
        assert_eq!(body.transaction_id, "pi_123");
    }
}
