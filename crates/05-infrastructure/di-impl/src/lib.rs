//! # 依赖注入具体实现
//!
//! 提供服务注册表、类型目录和支持构造函数自动装配的容器。
//!
//! ```
//! use di_abstractions::{Arguments, DependencyResult, Injectable, Parameter, Producer, ServiceContainer};
//! use di_impl::Container;
//! use std::sync::Arc;
//!
//! struct Orm;
//!
//! impl Injectable for Orm {
//!     fn parameters() -> Vec<Parameter> {
//!         Vec::new()
//!     }
//!
//!     fn construct(_args: &mut Arguments) -> DependencyResult<Self> {
//!         Ok(Orm)
//!     }
//! }
//!
//! struct User {
//!     orm: Arc<Orm>,
//! }
//!
//! impl Injectable for User {
//!     fn parameters() -> Vec<Parameter> {
//!         vec![Parameter::of::<Orm>("orm")]
//!     }
//!
//!     fn construct(args: &mut Arguments) -> DependencyResult<Self> {
//!         Ok(User { orm: args.required("orm")? })
//!     }
//! }
//!
//! let container = Container::new();
//! container.catalog().add::<Orm>().add::<User>();
//!
//! let user = container.resolve::<User>().unwrap();
//! let _orm: &Orm = &user.orm;
//!
//! container.singleton("greeting", Producer::factory(|| String::from("hello")));
//! assert!(container.has("greeting"));
//! ```

pub mod catalog;
pub mod container;
pub mod global;
pub mod registry;

pub use catalog::ClassCatalog;
pub use container::Container;
pub use registry::ServiceRegistry;

pub use di_abstractions::ServiceContainer;
