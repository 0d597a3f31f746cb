//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {source}")]
    FileReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::ParseError {
            source: Box::new(source),
        }
    }
}

/// 依赖注入错误类型
///
/// 解析器本身只会产生 [`ClassNotFound`](Self::ClassNotFound) 与
/// [`UnresolvableAbstraction`](Self::UnresolvableAbstraction)。
/// 其余变体来自构造函数、可选的深度限制或类型化辅助接口。
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("类型不存在或无法反射: {type_name}")]
    ClassNotFound { type_name: String },

    #[error("无法实例化抽象类型: {type_name}")]
    UnresolvableAbstraction { type_name: String },

    #[error("组件创建失败: {type_name}, 原因: {message}")]
    ComponentCreationFailed { type_name: String, message: String },

    #[error("解析深度超过限制 {depth}: {type_name}")]
    ResolutionDepthExceeded { type_name: String, depth: usize },

    #[error("类型不匹配: 期望 {expected}, 服务标识 {id}")]
    TypeMismatch { expected: String, id: String },
}

impl DependencyError {
    /// 创建类型不存在错误
    pub fn class_not_found(type_name: impl Into<String>) -> Self {
        Self::ClassNotFound {
            type_name: type_name.into(),
        }
    }

    /// 创建抽象类型错误
    pub fn unresolvable_abstraction(type_name: impl Into<String>) -> Self {
        Self::UnresolvableAbstraction {
            type_name: type_name.into(),
        }
    }

    /// 创建组件创建失败错误
    pub fn creation_failed(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ComponentCreationFailed {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("依赖注入错误: {source}")]
    DependencyError {
        #[from]
        source: DependencyError,
    },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
