//! Payment Repository
//!
//! 支付记录只追加，不修改不删除

use serde::Serialize;
use shared::models::Payment;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};

const TABLE: &str = "payment";

const PAYMENT_FIELDS: &str = "record::id(id) AS id, email, price, currency, transactionId, \
                              cartItems, menuItems, itemNames, quantity, status, date";

/// 存储形态 (不含 id)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PaymentRecord {
    email: String,
    price: f64,
    currency: String,
    transaction_id: String,
    cart_items: Vec<String>,
    menu_items: Vec<String>,
    item_names: Vec<String>,
    quantity: u32,
    status: String,
    date: i64,
}

impl From<Payment> for PaymentRecord {
    fn from(p: Payment) -> Self {
        Self {
            email: p.email,
            price: p.price,
            currency: p.currency,
            transaction_id: p.transaction_id,
            cart_items: p.cart_items,
            menu_items: p.menu_items,
            item_names: p.item_names,
            quantity: p.quantity,
            status: p.status,
            date: p.date,
        }
    }
}

#[derive(Clone)]
pub struct PaymentRepository {
    base: BaseRepository,
}

impl PaymentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a payment record under `payment.id`
    pub async fn create(&self, payment: Payment) -> RepoResult<String> {
        let id = payment.id.clone();
        self.base
            .insert(TABLE, &id, PaymentRecord::from(payment))
            .await?;
        Ok(id)
    }

    /// Find all payments, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Payment>> {
        let payments: Vec<Payment> = self
            .base
            .db()
            .query(format!("SELECT {PAYMENT_FIELDS} FROM payment ORDER BY date DESC"))
            .await?
            .take(0)?;
        Ok(payments)
    }

    /// Charged price of every payment
    pub async fn prices(&self) -> RepoResult<Vec<f64>> {
        let prices: Vec<f64> = self
            .base
            .db()
            .query("SELECT VALUE price FROM payment")
            .await?
            .take(0)?;
        Ok(prices)
    }

    /// Menu item ids of every payment, one list per payment
    pub async fn menu_item_lists(&self) -> RepoResult<Vec<Vec<String>>> {
        let lists: Vec<Vec<String>> = self
            .base
            .db()
            .query("SELECT VALUE menuItems FROM payment")
            .await?
            .take(0)?;
        Ok(lists)
    }

    pub async fn count(&self) -> RepoResult<u64> {
        self.base.count(TABLE).await
    }
}
