//! 服务注册表
//!
//! 保存 标识 → 生产者 与 标识 → 单例槽 两张表。

use di_abstractions::{instance_type_id, Instance, Producer};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// 服务注册表
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    /// 生产者，同一标识以最后一次注册为准
    services: RwLock<HashMap<String, Producer>>,
    /// 单例槽，`None` 表示尚未解析
    instances: RwLock<HashMap<String, Option<Instance>>>,
}

impl ServiceRegistry {
    /// 创建新的注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册生产者
    ///
    /// `singleton` 为真时创建（或重置）一个空的单例槽。非单例注册不会移除已有的槽。
    pub fn register(&self, id: &str, producer: Producer, singleton: bool) {
        debug!(id, kind = producer.kind(), singleton, "注册服务");

        if singleton {
            self.instances.write().insert(id.to_string(), None);
        }

        self.services.write().insert(id.to_string(), producer);
    }

    /// 是否已注册生产者
    pub fn has(&self, id: &str) -> bool {
        self.services.read().contains_key(id)
    }

    /// 是否存在单例槽
    pub fn is_singleton(&self, id: &str) -> bool {
        self.instances.read().contains_key(id)
    }

    /// 获取生产者副本
    pub fn producer(&self, id: &str) -> Option<Producer> {
        self.services.read().get(id).cloned()
    }

    /// 单例槽中缓存的实例
    pub fn cached(&self, id: &str) -> Option<Instance> {
        self.instances.read().get(id).cloned().flatten()
    }

    /// 对新生产的值应用单例规则
    ///
    /// 没有单例槽时原样返回。槽中已有值且与 `produced` 的具体类型相同时返回缓存值，
    /// 否则把 `produced` 写入槽并返回。
    pub fn retain(&self, id: &str, produced: Instance) -> Instance {
        let mut instances = self.instances.write();
        let Some(slot) = instances.get_mut(id) else {
            return produced;
        };

        if let Some(cached) = slot {
            if instance_type_id(cached) == instance_type_id(&produced) {
                debug!(id, "单例命中");
                return Arc::clone(cached);
            }
            debug!(id, "单例类型变化，刷新缓存");
        }

        *slot = Some(Arc::clone(&produced));
        produced
    }

    /// 已注册的标识（排序后）
    pub fn registered_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.services.read().keys().cloned().collect();
        ids.sort();
        ids
    }
}
