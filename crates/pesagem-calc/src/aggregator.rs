//! 賦形劑彙總計算

use pesagem_core::{round_quantity, FormulaComposition, Order, PesagemError, WeighedState};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// 單一訂單對某物料的貢獻
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// 訂單ID
    pub order_id: Uuid,

    /// 配方代碼
    pub formula_code: String,

    /// 需求數量
    pub quantity: Decimal,

    /// 訂單顯示名稱
    pub order_name: String,

    /// 生產訂單號（可能缺省）
    pub production_order_number: Option<String>,

    /// 是否已稱量
    pub weighed: bool,
}

/// 單一物料的彙總結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedMaterial {
    /// 所有貢獻訂單的需求總量（三位小數）
    pub total: Decimal,

    /// 尚未稱量的需求總量（三位小數）
    pub total_outstanding: Decimal,

    /// 各訂單的貢獻明細（按訂單輸入順序）
    pub contributions: Vec<Contribution>,
}

impl AggregatedMaterial {
    fn empty() -> Self {
        Self {
            total: Decimal::ZERO,
            total_outstanding: Decimal::ZERO,
            contributions: Vec::new(),
        }
    }
}

/// 彙總結果：物料名稱 → 彙總
pub type AggregationResult = HashMap<String, AggregatedMaterial>;

/// 賦形劑彙總計算器
///
/// 純同步計算：每次從完整的輸入快照重新計算，不做快取或增量更新。
/// 不修改任何輸入，可從多個呼叫點重複調用。
pub struct ExcipientAggregator;

impl ExcipientAggregator {
    /// 彙總所有訂單的物料需求
    ///
    /// 前置條件：`compositions_by_order` 必須包含每張訂單的配方組成。
    /// 缺少條目是呼叫方錯誤，立即以 `CompositionNotFound` 失敗，
    /// 不會靜默跳過。
    ///
    /// `orders` 的順序決定每個物料 `contributions` 的附加順序
    /// （即顯示順序）。`total` 與 `total_outstanding` 在處理完全部
    /// 訂單後才捨入到三位小數。
    pub fn aggregate(
        orders: &[Order],
        compositions_by_order: &HashMap<Uuid, FormulaComposition>,
        weighed_state: &WeighedState,
    ) -> pesagem_core::Result<AggregationResult> {
        tracing::debug!("開始彙總：訂單 {} 筆", orders.len());

        // 邊界檢查：每張訂單都要有已解析的配方組成
        for order in orders {
            if !compositions_by_order.contains_key(&order.id) {
                return Err(PesagemError::CompositionNotFound(order.id));
            }
        }

        let mut result: AggregationResult = HashMap::new();

        for order in orders {
            let composition = &compositions_by_order[&order.id];

            for item in &composition.items {
                let weighed = weighed_state.is_weighed(&item.material, order.id);

                let entry = result
                    .entry(item.material.clone())
                    .or_insert_with(AggregatedMaterial::empty);

                entry.contributions.push(Contribution {
                    order_id: order.id,
                    formula_code: order.formula_code.clone(),
                    quantity: item.quantity,
                    order_name: order.name.clone(),
                    production_order_number: order.production_order_number.clone(),
                    weighed,
                });

                entry.total += item.quantity;
                if !weighed {
                    entry.total_outstanding += item.quantity;
                }
            }
        }

        // 全部訂單處理完後才捨入
        for aggregated in result.values_mut() {
            aggregated.total = round_quantity(aggregated.total);
            aggregated.total_outstanding = round_quantity(aggregated.total_outstanding);
        }

        tracing::debug!("彙總完成：物料 {} 項", result.len());

        Ok(result)
    }
}
