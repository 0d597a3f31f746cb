//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义服务生产、类型反射和容器的核心接口。
//!
//! ## 核心接口
//!
//! - [`Producer`] - 服务生产者（字面量 / 工厂 / 类型引用）
//! - [`ClassReflector`] - 自动装配所需的类型反射能力
//! - [`Injectable`] - 可自动装配类型
//! - [`ServiceContainer`] - 容器接口

pub mod container;
pub mod producer;
pub mod reflect;

pub use container::*;
pub use producer::*;
pub use reflect::*;

pub use infrastructure_common::{DependencyError, DependencyResult};
