//! 核心模块 - 配置与状态
//!
//! - [`Config`] - 菜单配置
//! - [`MenuState`] - 存储句柄与仓库入口

pub mod config;
pub mod state;

pub use config::Config;
pub use state::MenuState;
