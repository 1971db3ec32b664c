//! 提前期索引

use rust_decimal::Decimal;
use slack_core::lead_time::{full_key, short_key};
use slack_core::{LeadTimeEntry, SlackConfig};
use std::collections::HashMap;

/// 提前期查詢索引
///
/// 同一張映射表同時存放完整鍵（類型+製程+產線）與短鍵（類型+製程）。
/// 插入採先到先得：重複的鍵一律保留第一筆，後來的記錄被忽略。
#[derive(Debug, Clone)]
pub struct LeadTimeIndex {
    days_by_key: HashMap<String, Decimal>,
    config: SlackConfig,
}

impl LeadTimeIndex {
    /// 以預設配置建立索引
    pub fn build<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a LeadTimeEntry>,
    {
        Self::build_with_config(rows, SlackConfig::default())
    }

    /// 以指定配置建立索引
    pub fn build_with_config<'a, I>(rows: I, config: SlackConfig) -> Self
    where
        I: IntoIterator<Item = &'a LeadTimeEntry>,
    {
        let mut days_by_key = HashMap::new();
        let mut row_count = 0usize;

        for entry in rows {
            row_count += 1;
            // 兩種鍵都對每筆記錄寫入；第一筆勝出
            days_by_key
                .entry(entry.full_key())
                .or_insert(entry.lead_time_days);
            days_by_key
                .entry(entry.short_key())
                .or_insert(entry.lead_time_days);
        }

        tracing::debug!(
            "提前期索引建立完成：記錄 {} 筆，鍵 {} 個",
            row_count,
            days_by_key.len()
        );

        Self {
            days_by_key,
            config,
        }
    }

    /// 查詢提前期
    ///
    /// 製程類型首字元屬於短鍵集合時只用「類型+製程」查詢，否則用完整鍵。
    /// 找不到時回傳 `None`，呼叫端視為 0 天。
    pub fn lookup(
        &self,
        process_type: &str,
        process_id: &str,
        production_line_id: &str,
    ) -> Option<Decimal> {
        let key = if self.config.is_routing_agnostic(process_type) {
            short_key(process_type, process_id)
        } else {
            full_key(process_type, process_id, production_line_id)
        };
        self.days_by_key.get(&key).copied()
    }

    /// 查詢提前期，找不到時為 0
    pub fn lookup_or_zero(
        &self,
        process_type: &str,
        process_id: &str,
        production_line_id: &str,
    ) -> Decimal {
        self.lookup(process_type, process_id, production_line_id)
            .unwrap_or(Decimal::ZERO)
    }

    /// 鍵數量（完整鍵與短鍵合計）
    pub fn len(&self) -> usize {
        self.days_by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days_by_key.is_empty()
    }

    pub fn config(&self) -> &SlackConfig {
        &self.config
    }
}
