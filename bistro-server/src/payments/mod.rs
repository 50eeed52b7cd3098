//! 支付模块
//!
//! - [`PaymentGateway`] - 支付提供方接口
//! - [`StripeGateway`] - Stripe REST 实现
//! - [`PaymentOrchestrator`] - 授权与支付记录流程

pub mod gateway;
pub mod orchestrator;
pub mod stripe;

pub use gateway::{PaymentAuthorization, PaymentError, PaymentGateway};
pub use orchestrator::{PaymentOrchestrator, to_minor_units};
pub use stripe::StripeGateway;
