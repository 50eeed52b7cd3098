//! 认证授权模块
//!
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 已认证身份 (提取器)
//! - [`AdminUser`] - 已认证且为 admin (提取器)
//! - [`access`] - 角色检查和本人访问检查

pub mod access;
pub mod extractor;
pub mod jwt;

pub use access::{RoleLookup, authorize, ensure_self};
pub use extractor::AdminUser;
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
