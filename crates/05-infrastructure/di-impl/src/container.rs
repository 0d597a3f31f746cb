//! 依赖注入容器
//!
//! 解析流程：
//!
//! 1. 标识已注册：调用生产者，再对结果应用单例规则；
//! 2. 标识未注册：把标识当作类型名称，反射其构造参数并递归自动装配。
//!
//! 嵌套依赖总是直接自动装配，不会查询注册表。构造参数之间的循环依赖会无限递归，
//! 除非在 [`ContainerConfig::max_resolution_depth`] 中设置了上限。

use crate::catalog::ClassCatalog;
use crate::registry::ServiceRegistry;
use di_abstractions::{
    ClassReflector, DependencyError, DependencyResult, Instance, Parameter, Producer,
    ServiceContainer,
};
use infrastructure_common::ContainerConfig;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// 依赖注入容器
#[derive(Debug)]
pub struct Container<R = ClassCatalog> {
    registry: ServiceRegistry,
    reflector: R,
    config: ContainerConfig,
}

impl Container {
    /// 创建使用默认类型目录的容器
    pub fn new() -> Self {
        Self::with_config(ContainerConfig::default())
    }

    /// 以指定配置创建容器
    pub fn with_config(config: ContainerConfig) -> Self {
        Self::with_reflector(ClassCatalog::new(), config)
    }

    /// 类型目录
    pub fn catalog(&self) -> &ClassCatalog {
        &self.reflector
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ClassReflector> Container<R> {
    /// 以自定义反射器创建容器
    pub fn with_reflector(reflector: R, config: ContainerConfig) -> Self {
        Self {
            registry: ServiceRegistry::new(),
            reflector,
            config,
        }
    }

    /// 反射器
    pub fn reflector(&self) -> &R {
        &self.reflector
    }

    /// 服务注册表
    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// 容器配置
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// 把标识当作类型名称自动装配，忽略注册表
    pub fn build(&self, id: &str) -> DependencyResult<Instance> {
        self.build_at_depth(id, 1)
    }

    fn build_at_depth(&self, id: &str, depth: usize) -> DependencyResult<Instance> {
        if let Some(max_depth) = self.config.max_resolution_depth {
            if depth > max_depth {
                return Err(DependencyError::ResolutionDepthExceeded {
                    type_name: id.to_string(),
                    depth: max_depth,
                });
            }
        }

        let descriptor = self
            .reflector
            .reflect(id)
            .ok_or_else(|| DependencyError::class_not_found(id))?;

        if !descriptor.is_instantiable() {
            return Err(DependencyError::unresolvable_abstraction(id));
        }

        debug!(
            class = id,
            parameters = descriptor.parameters().len(),
            depth,
            "自动装配"
        );

        let mut values = Vec::with_capacity(descriptor.parameters().len());
        for parameter in descriptor.parameters() {
            let value = match parameter.type_name.as_deref() {
                Some(type_name) if self.reflector.class_exists(type_name) => {
                    trace!(class = id, parameter = %parameter.name, dependency = type_name, "解析构造参数");
                    Some(self.build_at_depth(type_name, depth + 1)?)
                }
                _ => {
                    self.report_placeholder(id, parameter);
                    None
                }
            };
            values.push(value);
        }

        descriptor.instantiate(values)
    }

    /// 以空参数列表构造类型引用
    fn construct_bare(&self, class: &str) -> DependencyResult<Instance> {
        let descriptor = self
            .reflector
            .reflect(class)
            .ok_or_else(|| DependencyError::class_not_found(class))?;

        if !descriptor.is_instantiable() {
            return Err(DependencyError::unresolvable_abstraction(class));
        }

        descriptor.instantiate(Vec::new())
    }

    fn produce(&self, producer: &Producer) -> DependencyResult<Instance> {
        match producer {
            Producer::Literal(value) => Ok(Arc::clone(value)),
            Producer::Factory(factory) => Ok(factory()),
            Producer::ClassRef(class) => self.construct_bare(class),
        }
    }

    fn report_placeholder(&self, class: &str, parameter: &Parameter) {
        let dependency = parameter.type_name.as_deref().unwrap_or("<untyped>");
        if self.config.log_placeholders {
            warn!(class, parameter = %parameter.name, dependency, "构造参数无法解析，传入占位符");
        } else {
            debug!(class, parameter = %parameter.name, dependency, "构造参数无法解析，传入占位符");
        }
    }
}

impl<R: ClassReflector> ServiceContainer for Container<R> {
    fn register(&self, id: &str, producer: Producer, singleton: bool) {
        self.registry.register(id, producer, singleton);
    }

    fn has(&self, id: &str) -> bool {
        self.registry.has(id)
    }

    fn get(&self, id: &str) -> DependencyResult<Instance> {
        match self.registry.producer(id) {
            Some(producer) => {
                let produced = self.produce(&producer)?;
                Ok(self.registry.retain(id, produced))
            }
            None => self.build(id),
        }
    }
}
