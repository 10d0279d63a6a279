//! 配方模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 配方中的一項物料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaItem {
    /// 物料名稱
    pub material: String,

    /// 需求數量（質量單位，三位小數）
    pub quantity: Decimal,
}

impl FormulaItem {
    pub fn new(material: String, quantity: Decimal) -> Self {
        Self { material, quantity }
    }
}

/// 配方組成
///
/// 唯讀參考資料，按需查詢；本核心不會修改它。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaComposition {
    /// 配方代碼
    pub code: String,

    /// 物料與數量（保持順序）
    pub items: Vec<FormulaItem>,
}

impl FormulaComposition {
    /// 創建新的配方組成
    pub fn new(code: String) -> Self {
        Self {
            code,
            items: Vec::new(),
        }
    }

    /// 建構器模式：添加一項物料
    pub fn with_item(mut self, material: String, quantity: Decimal) -> Self {
        self.items.push(FormulaItem::new(material, quantity));
        self
    }

    /// 列出配方引用的所有物料名稱
    pub fn materials(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.material.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
