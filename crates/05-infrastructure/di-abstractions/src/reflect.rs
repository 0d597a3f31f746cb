//! 类型反射抽象
//!
//! Rust 没有运行时反射，自动装配所需的类型信息由 [`ClassDescriptor`] 显式提供：
//! 类型种类、按声明顺序排列的构造参数，以及按位置调用的构造函数。

use crate::producer::Instance;
use infrastructure_common::{DependencyError, DependencyResult};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 类型种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// 具体类型，可直接实例化
    Concrete,
    /// 抽象类型，存在但不可实例化
    Abstract,
    /// 接口（trait），不可实例化，也不被视为类
    Interface,
}

impl ClassKind {
    /// 是否可实例化
    pub fn is_instantiable(self) -> bool {
        matches!(self, Self::Concrete)
    }

    /// 是否被视为类（接口除外）
    pub fn is_class(self) -> bool {
        !matches!(self, Self::Interface)
    }
}

/// 构造参数描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// 参数名称
    pub name: String,
    /// 声明的类型标识，`None` 表示标量或无法表示的类型
    pub type_name: Option<String>,
}

impl Parameter {
    /// 以类型声明参数
    pub fn of<T: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: Some(std::any::type_name::<T>().to_string()),
        }
    }

    /// 以类型名称声明参数
    pub fn named(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: Some(type_name.into()),
        }
    }

    /// 声明无类型参数
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: None,
        }
    }
}

/// 构造函数类型
pub type ConstructorFn = Arc<dyn Fn(Arguments) -> DependencyResult<Instance> + Send + Sync>;

/// 类型描述符
#[derive(Clone)]
pub struct ClassDescriptor {
    name: String,
    kind: ClassKind,
    parameters: Vec<Parameter>,
    constructor: Option<ConstructorFn>,
}

impl ClassDescriptor {
    /// 为具体类型创建描述符
    pub fn concrete<T, F>(parameters: Vec<Parameter>, construct: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(Arguments) -> DependencyResult<T> + Send + Sync + 'static,
    {
        Self::concrete_named(
            std::any::type_name::<T>(),
            parameters,
            Arc::new(move |args| construct(args).map(|value| Arc::new(value) as Instance)),
        )
    }

    /// 以名称和构造函数创建具体类型描述符
    pub fn concrete_named(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        constructor: ConstructorFn,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Concrete,
            parameters,
            constructor: Some(constructor),
        }
    }

    /// 为抽象类型创建描述符
    pub fn abstract_type<T: ?Sized + 'static>() -> Self {
        Self::abstract_named(std::any::type_name::<T>())
    }

    /// 以名称创建抽象类型描述符
    pub fn abstract_named(name: impl Into<String>) -> Self {
        Self::without_constructor(name.into(), ClassKind::Abstract)
    }

    /// 为接口创建描述符，通常 `T` 为 `dyn Trait`
    pub fn interface<T: ?Sized + 'static>() -> Self {
        Self::interface_named(std::any::type_name::<T>())
    }

    /// 以名称创建接口描述符
    pub fn interface_named(name: impl Into<String>) -> Self {
        Self::without_constructor(name.into(), ClassKind::Interface)
    }

    fn without_constructor(name: String, kind: ClassKind) -> Self {
        Self {
            name,
            kind,
            parameters: Vec::new(),
            constructor: None,
        }
    }

    /// 类型名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 类型种类
    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// 是否可实例化
    pub fn is_instantiable(&self) -> bool {
        self.kind.is_instantiable() && self.constructor.is_some()
    }

    /// 构造参数（声明顺序）
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// 按位置调用构造函数
    ///
    /// 参数个数少于声明时，缺失的位置视为占位符。
    pub fn instantiate(&self, values: Vec<Option<Instance>>) -> DependencyResult<Instance> {
        match (&self.constructor, self.kind.is_instantiable()) {
            (Some(constructor), true) => constructor(Arguments::new(self.name.clone(), values)),
            _ => Err(DependencyError::unresolvable_abstraction(self.name.clone())),
        }
    }
}

impl fmt::Debug for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("parameters", &self.parameters)
            .field("constructor", &self.constructor.as_ref().map(|_| "<function>"))
            .finish()
    }
}

/// 构造函数的位置参数
///
/// `None` 为占位符：参数类型无法解析时传入。
#[derive(Debug)]
pub struct Arguments {
    class: String,
    values: std::vec::IntoIter<Option<Instance>>,
    position: usize,
}

impl Arguments {
    /// 创建参数列表
    pub fn new(class: impl Into<String>, values: Vec<Option<Instance>>) -> Self {
        Self {
            class: class.into(),
            values: values.into_iter(),
            position: 0,
        }
    }

    /// 正在构造的类型名称
    pub fn class(&self) -> &str {
        &self.class
    }

    /// 剩余参数个数
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// 取出下一个原始参数
    pub fn next_raw(&mut self) -> Option<Instance> {
        self.position += 1;
        self.values.next().flatten()
    }

    /// 取出下一个必需参数，占位符或类型不符时失败
    pub fn required<T>(&mut self, name: &str) -> DependencyResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        let position = self.position;
        match self.next_raw() {
            Some(value) => self.downcast(value, name),
            None => Err(DependencyError::creation_failed(
                self.class.clone(),
                format!("参数 #{} `{}` 未能解析，收到占位符", position, name),
            )),
        }
    }

    /// 取出下一个可选参数，占位符得到 `None`
    pub fn optional<T>(&mut self, name: &str) -> DependencyResult<Option<Arc<T>>>
    where
        T: Any + Send + Sync,
    {
        self.next_raw()
            .map(|value| self.downcast(value, name))
            .transpose()
    }

    /// 跳过下一个参数
    pub fn skip(&mut self) {
        let _ = self.next_raw();
    }

    fn downcast<T>(&self, value: Instance, name: &str) -> DependencyResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        value.downcast::<T>().map_err(|_| {
            DependencyError::creation_failed(
                self.class.clone(),
                format!("参数 `{}` 的类型不是 {}", name, std::any::type_name::<T>()),
            )
        })
    }
}

/// 类型反射器
///
/// 自动装配唯一依赖的能力：按名称查找类型描述符。
pub trait ClassReflector: Send + Sync {
    /// 查找类型描述符
    fn reflect(&self, name: &str) -> Option<Arc<ClassDescriptor>>;

    /// 名称是否指向一个已知的类（接口不算）
    fn class_exists(&self, name: &str) -> bool {
        self.reflect(name)
            .is_some_and(|descriptor| descriptor.kind().is_class())
    }
}

impl<R> ClassReflector for Arc<R>
where
    R: ClassReflector + ?Sized,
{
    fn reflect(&self, name: &str) -> Option<Arc<ClassDescriptor>> {
        (**self).reflect(name)
    }

    fn class_exists(&self, name: &str) -> bool {
        (**self).class_exists(name)
    }
}

/// 可自动装配的类型
///
/// 通常由 `#[derive(Injectable)]` 生成。
pub trait Injectable: Any + Send + Sync + Sized {
    /// 构造参数（声明顺序）
    fn parameters() -> Vec<Parameter>;

    /// 以位置参数构造实例
    fn construct(args: &mut Arguments) -> DependencyResult<Self>;

    /// 类型描述符
    fn descriptor() -> ClassDescriptor {
        ClassDescriptor::concrete::<Self, _>(Self::parameters(), |mut args| {
            Self::construct(&mut args)
        })
    }
}
