//! 依赖注入容器抽象接口

use crate::producer::{Instance, Producer};
use infrastructure_common::{DependencyError, DependencyResult};
use std::any::Any;
use std::sync::Arc;

/// 依赖注入容器 trait
///
/// 以字符串标识注册和解析服务。未注册的标识会被当作类型名称自动装配。
pub trait ServiceContainer: Send + Sync {
    /// 注册服务，同一标识重复注册时覆盖
    fn register(&self, id: &str, producer: Producer, singleton: bool);

    /// 注册单例服务
    fn singleton(&self, id: &str, producer: Producer) {
        self.register(id, producer, true);
    }

    /// 是否已注册生产者（不考虑可自动装配的类型）
    fn has(&self, id: &str) -> bool;

    /// 解析服务
    fn get(&self, id: &str) -> DependencyResult<Instance>;

    /// 解析服务并转换为具体类型
    fn get_as<T>(&self, id: &str) -> DependencyResult<Arc<T>>
    where
        T: Any + Send + Sync,
        Self: Sized,
    {
        self.get(id)?
            .downcast::<T>()
            .map_err(|_| DependencyError::TypeMismatch {
                expected: std::any::type_name::<T>().to_string(),
                id: id.to_string(),
            })
    }

    /// 以类型名称为标识解析服务
    fn resolve<T>(&self) -> DependencyResult<Arc<T>>
    where
        T: Any + Send + Sync,
        Self: Sized,
    {
        self.get_as::<T>(std::any::type_name::<T>())
    }
}
