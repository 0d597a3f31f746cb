//! 容器配置
//!
//! 通过 `config` crate 从配置文件和环境变量加载 [`ContainerConfig`]

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, error};

/// 依赖注入容器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 自动装配的最大递归深度，`None` 表示不限制
    pub max_resolution_depth: Option<usize>,
    /// 构造参数无法解析时是否以 warn 级别记录占位符传递
    pub log_placeholders: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            max_resolution_depth: None,
            log_placeholders: true,
        }
    }
}

impl ContainerConfig {
    /// 默认环境变量前缀
    pub const ENV_PREFIX: &'static str = "DI";

    /// 默认配置文件（不含扩展名）
    pub const DEFAULT_FILE: &'static str = "config/container";

    /// 设置最大递归深度
    pub fn with_max_resolution_depth(mut self, depth: usize) -> Self {
        self.max_resolution_depth = Some(depth);
        self
    }

    /// 设置占位符日志级别
    pub fn with_log_placeholders(mut self, enabled: bool) -> Self {
        self.log_placeholders = enabled;
        self
    }

    /// 从默认位置加载配置
    ///
    /// 依次读取 `config/container.{toml,json,yaml}`（可选）与 `DI_*` 环境变量，
    /// 后者覆盖前者。
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(Some(Path::new(Self::DEFAULT_FILE)), Self::ENV_PREFIX)
    }

    /// 从指定文件和环境变量前缀加载配置
    pub fn load_from(file: Option<&Path>, env_prefix: &str) -> ConfigResult<Self> {
        debug!("加载容器配置: file={:?}, env_prefix={}", file, env_prefix);

        let mut builder = config::Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(config::File::from(file).required(false));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                error!("容器配置构建失败: {}", e);
                ConfigError::from(e)
            })?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;

        debug!("容器配置加载完成: {:?}", config);
        Ok(config)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_resolution_depth == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "max_resolution_depth 必须大于 0".to_string(),
            });
        }
        Ok(())
    }
}
