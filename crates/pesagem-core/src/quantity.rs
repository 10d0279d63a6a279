//! 數量邊界驗證與捨入

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{PesagemError, Result};

/// 質量數量的小數位數（整個應用統一為三位小數顯示）
pub const QUANTITY_SCALE: u32 = 3;

/// 解析外部來源的數量文字
///
/// 外部資料的數量欄位可能以字串形式到達。在進入聚合之前必須在此
/// 邊界轉成嚴格的 `Decimal`：非數值或負值一律拒絕。
pub fn parse_quantity(raw: &str) -> Result<Decimal> {
    let quantity: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| PesagemError::InvalidQuantity(raw.to_string()))?;

    if quantity.is_sign_negative() {
        return Err(PesagemError::InvalidQuantity(raw.to_string()));
    }

    Ok(quantity)
}

/// 捨入到三位小數（四捨五入）
pub fn round_quantity(quantity: Decimal) -> Decimal {
    quantity.round_dp_with_strategy(QUANTITY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
