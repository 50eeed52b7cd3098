//! Stripe integration via REST API (no SDK dependency)

use async_trait::async_trait;

use super::gateway::{PaymentAuthorization, PaymentError, PaymentGateway};

/// Stripe PaymentIntents gateway
#[derive(Clone)]
pub struct StripeGateway {
    client: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl StripeGateway {
    pub fn new(secret_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key: secret_key.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    /// Create a Stripe PaymentIntent (card only)
    async fn create_authorization(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentAuthorization, PaymentError> {
        let amount = amount.to_string();
        let resp: serde_json::Value = self
            .client
            .post(format!("{}/v1/payment_intents", self.api_base))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&[
                ("amount", amount.as_str()),
                ("currency", currency),
                ("payment_method_types[]", "card"),
            ])
            .send()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?
            .json()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        match resp["client_secret"].as_str() {
            Some(secret) => Ok(PaymentAuthorization {
                client_secret: secret.to_string(),
            }),
            None => {
                let reason = resp["error"]["message"]
                    .as_str()
                    .map(String::from)
                    .unwrap_or_else(|| format!("Stripe create_payment_intent failed: {resp}"));
                Err(PaymentError::Rejected(reason))
            }
        }
    }
}
