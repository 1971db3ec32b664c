//! # Slack Core
//!
//! 核心資料模型與類型定義（交期餘裕 / 剩餘提前期）

pub mod batch;
pub mod config;
pub mod lead_time;
pub mod route;

// Re-export 主要類型
pub use batch::{BatchSlack, SlackInput};
pub use config::{SlackConfig, DEFAULT_ROUTING_AGNOSTIC_MARKERS};
pub use lead_time::LeadTimeEntry;
pub use route::{BatchRoute, RouteStep};

/// Slack 錯誤類型
///
/// 只有配置層會失敗；計算引擎本身為全函數，缺資料以 `None` 表示。
#[derive(Debug, thiserror::Error)]
pub enum SlackError {
    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("配置解析錯誤: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlackError>;
