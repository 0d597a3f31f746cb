//! 服务生产者
//!
//! 描述如何为一个服务标识产生值：字面量、零参工厂或类型引用

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// 容器解析出的实例
///
/// 运行时类型即 `Arc` 内部值的具体类型。
pub type Instance = Arc<dyn Any + Send + Sync>;

/// 实例的具体运行时类型
pub fn instance_type_id(instance: &Instance) -> TypeId {
    (**instance).type_id()
}

/// 零参工厂函数类型
pub type FactoryFn = Arc<dyn Fn() -> Instance + Send + Sync>;

/// 服务生产者
#[derive(Clone)]
pub enum Producer {
    /// 字面量，每次解析直接返回同一个值
    Literal(Instance),
    /// 零参工厂，每次解析都会调用
    Factory(FactoryFn),
    /// 类型引用，解析时以空参数列表调用该类型的构造函数
    ClassRef(String),
}

impl Producer {
    /// 以字面量注册
    pub fn value<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self::Literal(Arc::new(value))
    }

    /// 以已有实例注册
    pub fn instance(instance: Instance) -> Self {
        Self::Literal(instance)
    }

    /// 以零参工厂注册
    pub fn factory<T, F>(factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(move || Arc::new(factory()) as Instance))
    }

    /// 以返回共享实例的工厂注册
    pub fn shared_factory<T, F>(factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> Arc<T> + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(move || factory() as Instance))
    }

    /// 以类型引用注册
    pub fn class<T: ?Sized + 'static>() -> Self {
        Self::ClassRef(std::any::type_name::<T>().to_string())
    }

    /// 以类型名称注册
    pub fn class_named(name: impl Into<String>) -> Self {
        Self::ClassRef(name.into())
    }

    /// 生产者种类，用于日志
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Factory(_) => "factory",
            Self::ClassRef(_) => "class",
        }
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(_) => f.write_str("Producer::Literal(<value>)"),
            Self::Factory(_) => f.write_str("Producer::Factory(<function>)"),
            Self::ClassRef(name) => f.debug_tuple("Producer::ClassRef").field(name).finish(),
        }
    }
}
