//! 配方組成快取

use pesagem_core::{FormulaComposition, Order, Result};
use std::collections::HashMap;
use uuid::Uuid;

/// 配方組成的外部來源
///
/// 後端查詢的接縫：給定配方代碼，返回該配方的物料組成。
pub trait FormulaSource {
    fn fetch(&self, code: &str) -> Result<FormulaComposition>;
}

/// 配方快取
///
/// 每個配方代碼只向來源查詢一次，跨訂單與跨重算重複使用；
/// 參考資料變更時以 `invalidate` / `clear` 使條目失效。
pub struct FormulaCache<S: FormulaSource> {
    source: S,
    cache: HashMap<String, FormulaComposition>,
}

impl<S: FormulaSource> FormulaCache<S> {
    /// 創建新的快取
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    /// 取得配方組成；未命中時向來源查詢並寫入快取
    pub fn get(&mut self, code: &str) -> Result<&FormulaComposition> {
        if !self.cache.contains_key(code) {
            tracing::debug!("快取未命中，查詢配方: {}", code);
            let composition = self.source.fetch(code)?;
            self.cache.insert(code.to_string(), composition);
        }
        Ok(&self.cache[code])
    }

    /// 為訂單列表解析配方組成
    ///
    /// 建立彙總的前置條件映射（訂單ID → 配方組成）。
    /// 重複的配方代碼共用同一次查詢。
    pub fn resolve_for_orders(
        &mut self,
        orders: &[Order],
    ) -> Result<HashMap<Uuid, FormulaComposition>> {
        let mut compositions = HashMap::new();
        for order in orders {
            let composition = self.get(&order.formula_code)?.clone();
            compositions.insert(order.id, composition);
        }
        Ok(compositions)
    }

    /// 使單一配方的快取條目失效
    pub fn invalidate(&mut self, code: &str) {
        self.cache.remove(code);
    }

    /// 清空整個快取
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// 當前快取的配方數
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pesagem_core::PesagemError;
    use rust_decimal::Decimal;
    use std::cell::RefCell;

    /// 記錄查詢次數的記憶體來源
    struct CountingSource {
        formulas: HashMap<String, FormulaComposition>,
        fetch_count: RefCell<usize>,
    }

    impl CountingSource {
        fn new(formulas: Vec<FormulaComposition>) -> Self {
            Self {
                formulas: formulas
                    .into_iter()
                    .map(|f| (f.code.clone(), f))
                    .collect(),
                fetch_count: RefCell::new(0),
            }
        }
    }

    impl FormulaSource for CountingSource {
        fn fetch(&self, code: &str) -> Result<FormulaComposition> {
            *self.fetch_count.borrow_mut() += 1;
            self.formulas
                .get(code)
                .cloned()
                .ok_or_else(|| PesagemError::FormulaNotFound(code.to_string()))
        }
    }

    fn formula(code: &str) -> FormulaComposition {
        FormulaComposition::new(code.to_string())
            .with_item("LACTOSE".to_string(), Decimal::new(10_000, 3))
    }

    #[test]
    fn test_fetches_each_code_once() {
        let mut cache = FormulaCache::new(CountingSource::new(vec![formula("F1")]));

        cache.get("F1").unwrap();
        cache.get("F1").unwrap();
        cache.get("F1").unwrap();

        assert_eq!(*cache.source.fetch_count.borrow(), 1);
    }

    #[test]
    fn test_resolve_shares_duplicate_codes() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let orders = vec![
            Order::new("F1".to_string(), "A".to_string(), date),
            Order::new("F1".to_string(), "B".to_string(), date),
            Order::new("F2".to_string(), "C".to_string(), date),
        ];

        let mut cache =
            FormulaCache::new(CountingSource::new(vec![formula("F1"), formula("F2")]));
        let compositions = cache.resolve_for_orders(&orders).unwrap();

        assert_eq!(compositions.len(), 3);
        // 兩個不同代碼，各查詢一次
        assert_eq!(*cache.source.fetch_count.borrow(), 2);
        assert_eq!(compositions[&orders[0].id].code, "F1");
        assert_eq!(compositions[&orders[2].id].code, "F2");
    }

    #[test]
    fn test_invalidate_forces_refetch() {
        let mut cache = FormulaCache::new(CountingSource::new(vec![formula("F1")]));

        cache.get("F1").unwrap();
        cache.invalidate("F1");
        cache.get("F1").unwrap();

        assert_eq!(*cache.source.fetch_count.borrow(), 2);
    }

    #[test]
    fn test_unknown_formula_propagates_error() {
        let mut cache = FormulaCache::new(CountingSource::new(vec![]));
        let err = cache.get("F-MISSING").unwrap_err();
        assert!(matches!(err, PesagemError::FormulaNotFound(code) if code == "F-MISSING"));
    }

    #[test]
    fn test_clear() {
        let mut cache = FormulaCache::new(CountingSource::new(vec![formula("F1")]));
        cache.get("F1").unwrap();
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }
}
