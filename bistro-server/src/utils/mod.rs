//! 工具模块 - 通用工具函数
//!
//! - [`logger`] - 日志初始化
//! - [`money`] - 金额计算 (Decimal)

pub mod logger;
pub mod money;
