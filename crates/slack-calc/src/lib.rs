//! # Slack Calculation Engine
//!
//! 剩餘提前期與交期餘裕（Slack）計算引擎
//!
//! 呼叫順序：每次查詢先建立 [`LeadTimeIndex`] 與 [`RouteLoader`] 分組結果，
//! 再對每個批次（或整批）呼叫 [`SlackEngine`] / [`SlackCalculator`]。
//! 引擎本身不做任何 I/O。

pub mod calculator;
pub mod lead_time;
pub mod route;
pub mod slack;

// Re-export 主要類型
pub use calculator::SlackCalculator;
pub use lead_time::LeadTimeIndex;
pub use route::{BatchRoutes, RouteLoader};
pub use slack::SlackEngine;

use serde::{Deserialize, Serialize};
use slack_core::BatchSlack;
use std::collections::HashMap;

/// 畫面狀態列在缺少提前期資料時附加的說明
pub const NO_LEAD_TIME_DATA_NOTE: &str = " [Slack: no lead time data]";

/// Slack 計算結果（單次查詢）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackResult {
    /// 批次ID → Slack（天）；無承諾交期的批次不出現
    pub slack: HashMap<String, i64>,

    /// 逐批次明細（依輸入順序）
    pub details: Vec<BatchSlack>,

    /// 提前期表與途程表是否皆可讀（整次查詢共用）
    pub has_lead_time_data: bool,

    /// 警告信息
    pub warnings: Vec<SlackWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl SlackResult {
    /// 創建空的計算結果
    pub fn empty(has_lead_time_data: bool) -> Self {
        Self {
            slack: HashMap::new(),
            details: Vec::new(),
            has_lead_time_data,
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: SlackWarning) {
        self.warnings.push(warning);
    }

    /// 查詢單一批次的 Slack
    pub fn slack_for(&self, batch_id: &str) -> Option<i64> {
        self.slack.get(batch_id.trim()).copied()
    }

    /// 落後交期的批次（Slack < 0），依輸入順序
    pub fn behind_schedule(&self) -> Vec<&str> {
        self.details
            .iter()
            .filter(|d| d.is_behind_schedule())
            .map(|d| d.batch_id.as_str())
            .collect()
    }

    /// 狀態列說明；有提前期資料時為 `None`
    pub fn status_note(&self) -> Option<&'static str> {
        if self.has_lead_time_data {
            None
        } else {
            Some(NO_LEAD_TIME_DATA_NOTE)
        }
    }
}

/// Slack 警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackWarning {
    /// 相關批次（查詢層級的警告為 `None`）
    pub batch_id: Option<String>,
    pub message: String,
    pub severity: WarningSeverity,
}

impl SlackWarning {
    pub fn new(batch_id: Option<String>, message: String, severity: WarningSeverity) -> Self {
        Self {
            batch_id,
            message,
            severity,
        }
    }

    pub fn info(batch_id: Option<String>, message: String) -> Self {
        Self::new(batch_id, message, WarningSeverity::Info)
    }

    pub fn warning(batch_id: Option<String>, message: String) -> Self {
        Self::new(batch_id, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
