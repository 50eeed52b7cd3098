//! Payment gateway abstraction

use async_trait::async_trait;
use shared::AppError;
use thiserror::Error;

/// Authorization handed back to the browser to confirm the card payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentAuthorization {
    pub client_secret: String,
}

/// 支付提供方错误
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("支付网关请求失败: {0}")]
    Transport(String),

    #[error("支付网关拒绝: {0}")]
    Rejected(String),
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        AppError::payment_provider(err.to_string())
    }
}

/// 外部支付提供方
///
/// `amount` 为最小货币单位 (美分)
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_authorization(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentAuthorization, PaymentError>;
}
