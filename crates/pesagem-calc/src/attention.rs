//! 訂單關注狀態

use chrono::NaiveDate;
use pesagem_core::Order;

/// 預設關注門檻（天）
pub const DEFAULT_ATTENTION_THRESHOLD_DAYS: i64 = 2;

/// 訂單已開立的天數
///
/// 只看日曆日差（today - created_date），不計部分天數。
/// 未來日期的訂單得到負值，視為不需關注。
pub fn order_age_days(order: &Order, today: NaiveDate) -> i64 {
    (today - order.created_date).num_days()
}

/// 訂單是否需要關注：開立天數達到門檻
pub fn needs_attention(order: &Order, today: NaiveDate, threshold_days: i64) -> bool {
    order_age_days(order, today) >= threshold_days
}

/// 過濾出需要關注的訂單（保持輸入順序）
pub fn orders_needing_attention<'a>(
    orders: &'a [Order],
    today: NaiveDate,
    threshold_days: i64,
) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|order| needs_attention(order, today, threshold_days))
        .collect()
}
