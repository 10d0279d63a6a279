//! 稱量狀態模型

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// 稱量狀態
///
/// 映射：物料名稱 → (訂單ID → 是否已稱量)。
/// 缺少條目等同於 `false`（尚未稱量）。只由使用者的明確切換操作修改。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeighedState {
    entries: HashMap<String, HashMap<Uuid, bool>>,
}

impl WeighedState {
    /// 創建空的稱量狀態
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// 查詢 (物料, 訂單) 是否已稱量；缺少條目視為未稱量
    pub fn is_weighed(&self, material: &str, order_id: Uuid) -> bool {
        self.entries
            .get(material)
            .and_then(|by_order| by_order.get(&order_id))
            .copied()
            .unwrap_or(false)
    }

    /// 設置 (物料, 訂單) 的稱量標記
    pub fn set(&mut self, material: String, order_id: Uuid, weighed: bool) {
        self.entries
            .entry(material)
            .or_default()
            .insert(order_id, weighed);
    }

    /// 切換 (物料, 訂單) 的稱量標記，返回新值
    pub fn toggle(&mut self, material: String, order_id: Uuid) -> bool {
        let flag = !self.is_weighed(&material, order_id);
        self.set(material, order_id, flag);
        flag
    }

    /// 移除某訂單的所有稱量條目（訂單被刪除時調用）
    pub fn clear_order(&mut self, order_id: Uuid) {
        for by_order in self.entries.values_mut() {
            by_order.remove(&order_id);
        }
        self.entries.retain(|_, by_order| !by_order.is_empty());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
