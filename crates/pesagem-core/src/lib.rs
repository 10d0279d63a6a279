//! # Pesagem Core
//!
//! 核心資料模型與類型定義

pub mod formula;
pub mod order;
pub mod quantity;
pub mod snapshot;
pub mod weighed;

// Re-export 主要類型
pub use formula::{FormulaComposition, FormulaItem};
pub use order::Order;
pub use quantity::{parse_quantity, round_quantity};
pub use snapshot::Snapshot;
pub use weighed::WeighedState;

/// 稱量引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PesagemError {
    #[error("找不到訂單 {0} 的配方組成")]
    CompositionNotFound(uuid::Uuid),

    #[error("找不到配方: {0}")]
    FormulaNotFound(String),

    #[error("無效的數量: {0}")]
    InvalidQuantity(String),

    #[error("快照序列化錯誤: {0}")]
    SnapshotError(#[from] serde_json::Error),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PesagemError>;
