//! Integration test harness
//!
//! Full router + RocksDB in a temp dir + fake payment gateway + counting role lookup

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use bistro_server::api::build_app;
use bistro_server::auth::{JwtConfig, JwtService, RoleLookup};
use bistro_server::core::{Config, ServerState};
use bistro_server::db::DbService;
use bistro_server::db::repository::{RepoResult, UserRepository};
use bistro_server::payments::{PaymentAuthorization, PaymentError, PaymentGateway};
use shared::models::{Role, UserCreate};

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";

/// Records every authorization request; can be switched to fail
#[derive(Default)]
pub struct FakeGateway {
    pub calls: Mutex<Vec<(i64, String)>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_authorization(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentAuthorization, PaymentError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(PaymentError::Transport("connection refused".into()));
        }
        self.calls
            .lock()
            .unwrap()
            .push((amount, currency.to_string()));
        Ok(PaymentAuthorization {
            client_secret: format!("pi_test_secret_{amount}"),
        })
    }
}

/// Counts role reads on top of the real repository
pub struct CountingRoles {
    inner: UserRepository,
    pub reads: AtomicUsize,
}

#[async_trait]
impl RoleLookup for CountingRoles {
    async fn find_role(&self, email: &str) -> RepoResult<Option<Role>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.find_role(email).await
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
    pub gateway: Arc<FakeGateway>,
    pub roles: Arc<CountingRoles>,
    _tmp: tempfile::TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let db = DbService::open(tmp.path(), "test", "test").await.unwrap().db;

        let config = Config::with_jwt(JwtConfig::new(TEST_SECRET));
        let jwt = Arc::new(JwtService::with_config(config.jwt.clone()));
        let gateway = Arc::new(FakeGateway::default());
        let roles = Arc::new(CountingRoles {
            inner: UserRepository::new(db.clone()),
            reads: AtomicUsize::new(0),
        });

        let state = ServerState::new(config, db, jwt, gateway.clone(), roles.clone());
        let router = build_app().with_state(state.clone());

        Self {
            router,
            state,
            gateway,
            roles,
            _tmp: tmp,
        }
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.state.get_db())
    }

    pub fn token(&self, email: &str) -> String {
        self.state.get_jwt_service().generate_token(email).unwrap()
    }

    pub async fn guest(&self, email: &str) -> String {
        self.users()
            .register(UserCreate {
                email: email.to_string(),
                name: None,
                photo: None,
            })
            .await
            .unwrap();
        self.token(email)
    }

    pub async fn admin(&self, email: &str) -> String {
        self.users().ensure_admin(email).await.unwrap();
        self.token(email)
    }

    pub fn role_reads(&self) -> usize {
        self.roles.reads.load(Ordering::SeqCst)
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, token, None).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, token, None).await
    }
}

pub fn assert_error(body: &Value, message: &str) {
    assert_eq!(body["error"], Value::Bool(true), "body: {body}");
    assert_eq!(body["message"], message, "body: {body}");
}
