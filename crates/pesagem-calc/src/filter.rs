//! 彙總結果的衍生檢視

use pesagem_core::round_quantity;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::aggregator::{AggregatedMaterial, AggregationResult};

/// 搬運總量：所有物料尚未稱量數量的總和
///
/// 可作用於完整結果或單訂單過濾後的結果。
pub fn movement_total(result: &AggregationResult) -> Decimal {
    round_quantity(
        result
            .values()
            .map(|aggregated| aggregated.total_outstanding)
            .sum(),
    )
}

/// 單訂單檢視：將彙總結果縮窄為指定訂單的貢獻
///
/// `total` 與 `total_outstanding` 以縮窄後的貢獻清單重新計算
/// （與彙總時相同的求和規則），不沿用未過濾的總量。
/// 過濾後沒有剩餘貢獻的物料直接剔除。
pub fn filter_by_order(result: &AggregationResult, order_id: Uuid) -> AggregationResult {
    let mut narrowed = AggregationResult::new();

    for (material, aggregated) in result {
        let contributions: Vec<_> = aggregated
            .contributions
            .iter()
            .filter(|c| c.order_id == order_id)
            .cloned()
            .collect();

        if contributions.is_empty() {
            continue;
        }

        let mut total = Decimal::ZERO;
        let mut total_outstanding = Decimal::ZERO;
        for contribution in &contributions {
            total += contribution.quantity;
            if !contribution.weighed {
                total_outstanding += contribution.quantity;
            }
        }

        narrowed.insert(
            material.clone(),
            AggregatedMaterial {
                total: round_quantity(total),
                total_outstanding: round_quantity(total_outstanding),
                contributions,
            },
        );
    }

    narrowed
}
