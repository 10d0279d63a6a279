//! 生產訂單模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 生產訂單
///
/// 每張訂單引用一個配方代碼；配方組成由外部查詢取得（見 pesagem-cache）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// 訂單ID
    pub id: Uuid,

    /// 配方代碼
    pub formula_code: String,

    /// 顯示名稱
    pub name: String,

    /// 外部系統指派的生產訂單號（可能缺省）
    pub production_order_number: Option<String>,

    /// 建立日期
    pub created_date: NaiveDate,
}

impl Order {
    /// 創建新的訂單
    pub fn new(formula_code: String, name: String, created_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            formula_code,
            name,
            production_order_number: None,
            created_date,
        }
    }

    /// 建構器模式：設置生產訂單號
    pub fn with_production_order_number(mut self, number: String) -> Self {
        self.production_order_number = Some(number);
        self
    }
}
