//! 集成测试共享的夹具类型

use di_abstractions::{Arguments, DependencyResult, Injectable, Parameter};
use di_macros::Injectable;
use std::sync::Arc;

#[derive(Debug, Injectable)]
pub struct SomeService;

#[derive(Debug, Injectable)]
pub struct Orm;

#[derive(Debug, Injectable)]
pub struct User {
    pub orm: Arc<Orm>,
}

#[derive(Debug, Injectable)]
pub struct UserMultiParameter {
    pub orm: Arc<Orm>,
    pub service: Arc<SomeService>,
}

#[derive(Debug, Injectable)]
pub struct CreateUserAccount {
    pub user: Arc<User>,
    pub service: Arc<SomeService>,
}

pub trait Writeable: Send + Sync {
    fn write(&self) -> &'static str;
}

#[derive(Debug, Injectable)]
pub struct Writer;

impl Writeable for Writer {
    fn write(&self) -> &'static str {
        "written"
    }
}

/// 以抽象类型声明的仓储基类
#[derive(Debug)]
pub struct Repository;

/// 依赖接口，接口参数总是得到占位符
pub struct Notifier {
    pub writer: Option<Arc<dyn Writeable>>,
}

impl Injectable for Notifier {
    fn parameters() -> Vec<Parameter> {
        vec![Parameter::of::<dyn Writeable>("writer")]
    }

    fn construct(args: &mut Arguments) -> DependencyResult<Self> {
        let writer = args
            .optional::<Writer>("writer")?
            .map(|writer| writer as Arc<dyn Writeable>);
        Ok(Self { writer })
    }
}

/// 依赖抽象类型，自动装配时失败
#[derive(Debug, Injectable)]
pub struct AccountService {
    pub repository: Arc<Repository>,
}

#[derive(Debug, Injectable)]
pub struct Chicken {
    pub egg: Arc<Egg>,
}

#[derive(Debug, Injectable)]
pub struct Egg {
    pub chicken: Arc<Chicken>,
}
