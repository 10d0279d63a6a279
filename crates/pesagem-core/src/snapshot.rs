//! 應用狀態快照

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Order, Result, WeighedState};

/// 應用狀態快照
///
/// 訂單列表與稱量狀態由單一容器持有，持久化是圍繞這個物件的
/// 明確 save/load 邊界，而不是分散的逐欄寫入。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// 當前訂單列表（插入順序即顯示順序）
    pub orders: Vec<Order>,

    /// 稱量狀態
    pub weighed_state: WeighedState,
}

impl Snapshot {
    /// 創建空的快照
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            weighed_state: WeighedState::new(),
        }
    }

    /// 添加訂單
    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// 移除訂單，並清除它的稱量條目
    pub fn remove_order(&mut self, order_id: Uuid) -> Option<Order> {
        let index = self.orders.iter().position(|o| o.id == order_id)?;
        let order = self.orders.remove(index);
        self.weighed_state.clear_order(order_id);
        Some(order)
    }

    /// 序列化為 JSON（save 邊界）
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// 從 JSON 還原（load 邊界）
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
