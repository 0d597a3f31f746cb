//! 进程级共享容器
//!
//! 首次访问时惰性创建，之后所有调用者共享同一个实例，进程结束前不会销毁。
//! 优先在应用的组合根显式创建 [`Container`] 并按引用传递，这里只为需要全局入口的场景保留。

use crate::container::Container;
use infrastructure_common::ContainerConfig;
use once_cell::sync::Lazy;
use tracing::{debug, warn};

static GLOBAL_CONTAINER: Lazy<Container> = Lazy::new(|| {
    let config = ContainerConfig::load().unwrap_or_else(|e| {
        warn!("全局容器配置加载失败，使用默认配置: {}", e);
        ContainerConfig::default()
    });
    debug!("创建全局容器: {:?}", config);
    Container::with_config(config)
});

/// 获取全局容器
pub fn instance() -> &'static Container {
    &GLOBAL_CONTAINER
}
