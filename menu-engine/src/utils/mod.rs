//! 工具模块 - 通用工具函数
//!
//! - 日志初始化 ([`logger`])
//! - 表单字段校验 ([`validation`])

pub mod logger;
pub mod validation;
