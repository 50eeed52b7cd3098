//! Payment API Handlers

use axum::{Json, extract::State};
use shared::AppResult;
use shared::client::{PaymentIntentRequest, PaymentIntentResponse, PaymentReceipt};
use shared::models::PaymentCreate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::payments::PaymentOrchestrator;

/// POST /create-payment-intent - 申请支付授权
pub async fn create_intent(
    State(state): State<ServerState>,
    _user: CurrentUser,
    Json(req): Json<PaymentIntentRequest>,
) -> AppResult<Json<PaymentIntentResponse>> {
    let response = PaymentOrchestrator::from_state(&state)
        .authorize(req.price)
        .await?;
    Ok(Json(response))
}

/// POST /payments - 记录支付并清理购物车
pub async fn record(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<PaymentCreate>,
) -> AppResult<Json<PaymentReceipt>> {
    let receipt = PaymentOrchestrator::from_state(&state)
        .record(&user, payload)
        .await?;
    Ok(Json(receipt))
}
