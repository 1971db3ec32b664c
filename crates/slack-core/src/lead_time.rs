//! 提前期參考資料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 提前期參考記錄（製程類型 / 製程 / 產線 → 天數）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadTimeEntry {
    /// 製程類型（首字元決定查詢方式）
    pub process_type: String,

    /// 製程ID
    pub process_id: String,

    /// 產線ID
    pub production_line_id: String,

    /// 提前期（天，可為小數）
    pub lead_time_days: Decimal,
}

impl LeadTimeEntry {
    /// 創建新的提前期記錄
    pub fn new(
        process_type: String,
        process_id: String,
        production_line_id: String,
        lead_time_days: Decimal,
    ) -> Self {
        Self {
            process_type,
            process_id,
            production_line_id,
            lead_time_days,
        }
    }

    /// 從浮點天數創建（無法轉換的值，例如 NaN，視為 0）
    pub fn from_f64(
        process_type: String,
        process_id: String,
        production_line_id: String,
        lead_time_days: f64,
    ) -> Self {
        Self::new(
            process_type,
            process_id,
            production_line_id,
            Decimal::try_from(lead_time_days).unwrap_or_default(),
        )
    }

    /// 完整鍵：製程類型 + 製程 + 產線
    pub fn full_key(&self) -> String {
        full_key(&self.process_type, &self.process_id, &self.production_line_id)
    }

    /// 短鍵：製程類型 + 製程
    pub fn short_key(&self) -> String {
        short_key(&self.process_type, &self.process_id)
    }
}

/// 組合完整鍵（直接串接，不做修剪，與參考表索引一致）
pub fn full_key(process_type: &str, process_id: &str, production_line_id: &str) -> String {
    let mut key =
        String::with_capacity(process_type.len() + process_id.len() + production_line_id.len());
    key.push_str(process_type);
    key.push_str(process_id);
    key.push_str(production_line_id);
    key
}

/// 組合短鍵
pub fn short_key(process_type: &str, process_id: &str) -> String {
    let mut key = String::with_capacity(process_type.len() + process_id.len());
    key.push_str(process_type);
    key.push_str(process_id);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        let entry = LeadTimeEntry::new(
            "M1".to_string(),
            "100".to_string(),
            "L2".to_string(),
            Decimal::from(3),
        );

        assert_eq!(entry.full_key(), "M1100L2");
        assert_eq!(entry.short_key(), "M1100");
    }

    #[test]
    fn test_from_f64() {
        let entry = LeadTimeEntry::from_f64(
            "M1".to_string(),
            "100".to_string(),
            "L2".to_string(),
            2.5,
        );
        assert_eq!(entry.lead_time_days, Decimal::new(25, 1));

        let bad = LeadTimeEntry::from_f64(
            "M1".to_string(),
            "100".to_string(),
            "L2".to_string(),
            f64::NAN,
        );
        assert_eq!(bad.lead_time_days, Decimal::ZERO);
    }
}
