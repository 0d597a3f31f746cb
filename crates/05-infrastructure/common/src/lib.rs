//! # Infrastructure Common
//!
//! 依赖注入容器各 crate 共享的基础设施类型。
//!
//! ## 核心内容
//!
//! - [`DependencyError`] - 依赖解析错误分类
//! - [`ContainerConfig`] - 容器配置，支持文件与环境变量
//! - [`LoggingConfig`] / [`init_logging`] - 日志初始化

pub mod configuration;
pub mod errors;
pub mod logging;

pub use configuration::*;
pub use errors::*;
pub use logging::*;
