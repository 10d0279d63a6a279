//! # Pesagem
//!
//! 藥品稱量的賦形劑彙總引擎：訂單、配方組成、稱量狀態與彙總計算。

pub use pesagem_cache::{FormulaCache, FormulaSource};
pub use pesagem_calc::{
    filter_by_order, movement_total, needs_attention, order_age_days, orders_needing_attention,
    AggregatedMaterial, AggregationResult, Contribution, ExcipientAggregator,
    DEFAULT_ATTENTION_THRESHOLD_DAYS,
};
pub use pesagem_core::{
    parse_quantity, round_quantity, FormulaComposition, FormulaItem, Order, PesagemError, Result,
    Snapshot, WeighedState,
};
