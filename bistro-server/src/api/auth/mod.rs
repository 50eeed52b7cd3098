//! Token Routes

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// - /jwt: public, issues a bearer token for the signed-in email
pub fn router() -> Router<ServerState> {
    Router::new().route("/jwt", post(handler::issue_token))
}
