//! 批次 Slack 輸入與輸出模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 單一批次的 Slack 計算輸入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackInput {
    /// 批次ID
    pub batch_id: String,

    /// 承諾交期（缺少時不計算 Slack）
    pub promise_date: Option<NaiveDate>,
}

impl SlackInput {
    /// 創建新的輸入
    pub fn new(batch_id: String, promise_date: Option<NaiveDate>) -> Self {
        Self {
            batch_id,
            promise_date,
        }
    }

    /// 修剪後的批次ID（舊表為定寬欄位，可能帶尾端空白）
    pub fn key(&self) -> &str {
        self.batch_id.trim()
    }

    /// 需要載入途程的批次ID（只有帶承諾交期的批次）
    ///
    /// 資料存取層應只對這些批次批量讀取途程資料。
    pub fn requested_batch_ids(inputs: &[SlackInput]) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut ids: Vec<String> = Vec::new();
        for input in inputs.iter().filter(|i| i.promise_date.is_some()) {
            let key = input.key();
            if seen.insert(key) {
                ids.push(key.to_string());
            }
        }
        ids
    }
}

/// 單一批次的 Slack 計算結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSlack {
    /// 批次ID（已修剪）
    pub batch_id: String,

    /// 承諾交期
    pub promise_date: NaiveDate,

    /// 剩餘提前期（天，已無條件進位）
    pub remaining_lead_time_days: i64,

    /// Slack（天）：正值超前，負值落後
    pub slack_days: i64,

    /// 預計完工日 = 今日 + 剩餘提前期
    pub expected_finish_date: NaiveDate,
}

impl BatchSlack {
    /// 是否落後交期
    pub fn is_behind_schedule(&self) -> bool {
        self.slack_days < 0
    }
}
