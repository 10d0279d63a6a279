//! # Pesagem Cache
//!
//! 配方查詢的記憶化快取

pub mod formula_cache;

// Re-export 主要類型
pub use formula_cache::{FormulaCache, FormulaSource};
