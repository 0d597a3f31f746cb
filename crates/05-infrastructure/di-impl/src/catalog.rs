//! 类型目录
//!
//! [`ClassReflector`] 的默认实现：注册时为每个可自动装配的类型登记一个描述符。

use dashmap::DashMap;
use di_abstractions::{ClassDescriptor, ClassReflector, Injectable};
use std::sync::Arc;
use tracing::debug;

/// 类型目录
#[derive(Debug, Default)]
pub struct ClassCatalog {
    classes: DashMap<String, Arc<ClassDescriptor>>,
}

impl ClassCatalog {
    /// 创建空目录
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记可自动装配的类型
    pub fn add<T: Injectable>(&self) -> &Self {
        self.add_descriptor(T::descriptor())
    }

    /// 登记描述符，同名时覆盖
    pub fn add_descriptor(&self, descriptor: ClassDescriptor) -> &Self {
        debug!(
            class = descriptor.name(),
            kind = ?descriptor.kind(),
            parameters = descriptor.parameters().len(),
            "登记类型"
        );
        self.classes
            .insert(descriptor.name().to_string(), Arc::new(descriptor));
        self
    }

    /// 声明抽象类型
    pub fn declare_abstract<T: ?Sized + 'static>(&self) -> &Self {
        self.add_descriptor(ClassDescriptor::abstract_type::<T>())
    }

    /// 声明接口，通常 `T` 为 `dyn Trait`
    pub fn declare_interface<T: ?Sized + 'static>(&self) -> &Self {
        self.add_descriptor(ClassDescriptor::interface::<T>())
    }

    /// 是否已登记
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// 已登记类型数量
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// 目录是否为空
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// 已登记的类型名称（排序后）
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.classes.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }
}

impl ClassReflector for ClassCatalog {
    fn reflect(&self, name: &str) -> Option<Arc<ClassDescriptor>> {
        self.classes.get(name).map(|entry| Arc::clone(entry.value()))
    }
}
