//! 结账流程
//!
//! 客户端结账分两次请求：
//! 1. [`authorize`](PaymentOrchestrator::authorize) 向支付网关申请授权，不写库
//! 2. [`record`](PaymentOrchestrator::record) 写入支付记录，再清理已结算的购物车行
//!
//! 第 2 步的两次写入不是原子的。支付记录写入后购物车清理失败时不回滚，
//! 记一条 `consistency` 日志并以 `acknowledged = false` 返回。

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use shared::client::{PaymentIntentResponse, PaymentReceipt};
use shared::models::{DeleteResult, InsertResult, Payment, PaymentCreate};
use shared::util::{new_id, now_millis};
use shared::{AppError, AppResult, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::gateway::PaymentGateway;
use crate::auth::{CurrentUser, ensure_self};
use crate::core::ServerState;
use crate::db::repository::{CartRepository, PaymentRepository, RepoResult};
use crate::utils::money;

/// 结算货币
pub const CURRENCY: &str = "usd";

/// 客户端未给出状态时的默认值
pub const DEFAULT_STATUS: &str = "service pending";

/// 支付金额校验：有限、大于 0、不超过 [`money::MAX_PAYMENT_AMOUNT`]
pub fn validate_amount(price: f64) -> AppResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::with_message(
            ErrorCode::PaymentInvalidAmount,
            format!("price must be a positive amount, got {price}"),
        ));
    }
    if price > money::MAX_PAYMENT_AMOUNT {
        return Err(AppError::with_message(
            ErrorCode::PaymentInvalidAmount,
            format!(
                "price exceeds maximum allowed ({}), got {price}",
                money::MAX_PAYMENT_AMOUNT
            ),
        ));
    }
    Ok(())
}

/// 主币价格转换为最小货币单位 (×100，四舍五入)
pub fn to_minor_units(price: f64) -> AppResult<i64> {
    validate_amount(price)?;

    money::to_decimal(price)
        .and_then(|p| p.checked_mul(Decimal::ONE_HUNDRED))
        .map(|p| p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|p| p.to_i64())
        .filter(|amount| *amount > 0)
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::PaymentInvalidAmount,
                format!("price {price} cannot be charged"),
            )
        })
}

/// 根据购物车清理结果生成 DeleteResult；失败时记录 ConsistencyGap
pub fn settle_cart_cleanup(
    outcome: RepoResult<u64>,
    payment_id: &str,
    cart_ids: &[String],
) -> DeleteResult {
    match outcome {
        Ok(deleted) => DeleteResult::deleted(deleted),
        Err(e) => {
            tracing::error!(
                target: "consistency",
                event = "consistency_gap",
                payment_id = %payment_id,
                cart_items = ?cart_ids,
                error = %e,
                "Payment recorded but settled cart items were not cleared"
            );
            DeleteResult::unacknowledged()
        }
    }
}

/// Payment Orchestrator
#[derive(Clone)]
pub struct PaymentOrchestrator {
    gateway: Arc<dyn PaymentGateway>,
    payments: PaymentRepository,
    carts: CartRepository,
}

impl PaymentOrchestrator {
    pub fn new(gateway: Arc<dyn PaymentGateway>, db: Surreal<Db>) -> Self {
        Self {
            gateway,
            payments: PaymentRepository::new(db.clone()),
            carts: CartRepository::new(db),
        }
    }

    pub fn from_state(state: &ServerState) -> Self {
        Self::new(state.payment_gateway(), state.get_db())
    }

    /// 申请支付授权，返回给浏览器确认用的 client secret
    pub async fn authorize(&self, price: f64) -> AppResult<PaymentIntentResponse> {
        let amount = to_minor_units(price)?;

        let authorization = self.gateway.create_authorization(amount, CURRENCY).await?;
        tracing::info!(amount, currency = CURRENCY, "Payment authorization created");

        Ok(PaymentIntentResponse {
            client_secret: authorization.client_secret,
        })
    }

    /// 记录已完成的支付，并删除被结算的购物车行
    pub async fn record(
        &self,
        payer: &CurrentUser,
        data: PaymentCreate,
    ) -> AppResult<PaymentReceipt> {
        ensure_self(payer, &data.email)?;
        validate_amount(data.price)?;

        let cart_ids = data.cart_items.clone();
        let payment = Payment {
            id: new_id(),
            email: data.email,
            price: data.price,
            currency: CURRENCY.to_string(),
            transaction_id: data.transaction_id,
            quantity: data.quantity.unwrap_or(cart_ids.len() as u32),
            cart_items: data.cart_items,
            menu_items: data.menu_items,
            item_names: data.item_names,
            status: data.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            date: now_millis(),
        };

        let payment_id = self.payments.create(payment).await?;
        tracing::info!(
            payment_id = %payment_id,
            cart_items = cart_ids.len(),
            "Payment recorded"
        );

        let outcome = self.carts.remove_many(&cart_ids).await;
        let delete_result = settle_cart_cleanup(outcome, &payment_id, &cart_ids);

        Ok(PaymentReceipt {
            result: InsertResult::new(payment_id),
            delete_result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepoError;

    #[test]
    fn test_to_minor_units() {
        assert_eq!(to_minor_units(25.50).unwrap(), 2550);
        assert_eq!(to_minor_units(19.99).unwrap(), 1999);
        assert_eq!(to_minor_units(0.1 + 0.2).unwrap(), 30);
        assert_eq!(to_minor_units(10.005).unwrap(), 1001);
        assert_eq!(to_minor_units(0.005).unwrap(), 1);
        assert_eq!(to_minor_units(7.0).unwrap(), 700);
    }

    #[test]
    fn test_to_minor_units_rejects_bad_prices() {
        for price in [0.0, -5.0, f64::NAN, f64::INFINITY, 0.001, 1_000_000.01, 5e28] {
            let err = to_minor_units(price).unwrap_err();
            assert_eq!(err.code, ErrorCode::PaymentInvalidAmount, "price {price}");
        }
    }

    #[test]
    fn test_validate_amount_bounds() {
        assert!(validate_amount(0.01).is_ok());
        assert!(validate_amount(money::MAX_PAYMENT_AMOUNT).is_ok());
        assert!(validate_amount(-12.5).is_err());
        assert!(validate_amount(money::MAX_PAYMENT_AMOUNT + 1.0).is_err());
    }

    #[test]
    fn test_cleanup_success() {
        let ids = vec!["a".to_string(), "b".to_string()];
        let result = settle_cart_cleanup(Ok(2), "p1", &ids);
        assert_eq!(result, DeleteResult::deleted(2));
    }

    #[test]
    fn test_cleanup_failure_is_unacknowledged() {
        let ids = vec!["a".to_string()];
        let result = settle_cart_cleanup(Err(RepoError::Database("io".into())), "p1", &ids);
        assert!(!result.acknowledged);
        assert_eq!(result.deleted_count, 0);
    }
}
