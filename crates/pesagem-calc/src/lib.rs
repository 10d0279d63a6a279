//! # Pesagem Calculation Engine
//!
//! 賦形劑彙總計算引擎

pub mod aggregator;
pub mod attention;
pub mod filter;

// Re-export 主要類型
pub use aggregator::{AggregatedMaterial, AggregationResult, Contribution, ExcipientAggregator};
pub use attention::{
    needs_attention, order_age_days, orders_needing_attention, DEFAULT_ATTENTION_THRESHOLD_DAYS,
};
pub use filter::{filter_by_order, movement_total};
