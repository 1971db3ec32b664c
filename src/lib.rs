//! # Batch Slack
//!
//! 批次交期餘裕（Slack）與剩餘提前期計算
//!
//! 本套件僅重新匯出 [`slack_core`] 的資料模型與 [`slack_calc`] 的計算引擎。

pub use slack_calc::{
    BatchRoutes, LeadTimeIndex, RouteLoader, SlackCalculator, SlackEngine, SlackResult,
    SlackWarning, WarningSeverity, NO_LEAD_TIME_DATA_NOTE,
};
pub use slack_core::{
    BatchRoute, BatchSlack, LeadTimeEntry, RouteStep, SlackConfig, SlackError, SlackInput,
};
