//! Slack 計算配置

use serde::{Deserialize, Serialize};

use crate::{Result, SlackError};

/// 預設的「與產線無關」製程類型首字元（舊系統字串 `"U_K"`）
pub const DEFAULT_ROUTING_AGNOSTIC_MARKERS: [char; 3] = ['U', '_', 'K'];

/// Slack 計算配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackConfig {
    /// 製程類型首字元若在此集合內，提前期以短鍵（製程類型 + 製程）查詢，忽略產線
    pub routing_agnostic_markers: Vec<char>,
}

impl SlackConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            routing_agnostic_markers: DEFAULT_ROUTING_AGNOSTIC_MARKERS.to_vec(),
        }
    }

    /// 建構器模式：設置短鍵首字元集合
    pub fn with_routing_agnostic_markers(mut self, markers: Vec<char>) -> Self {
        self.routing_agnostic_markers = markers;
        self
    }

    /// 從 JSON 載入配置（缺少的欄位使用預設值）
    ///
    /// # 範例
    /// ```
    /// # use slack_core::SlackConfig;
    /// let config = SlackConfig::from_json(r#"{ "routing_agnostic_markers": ["U", "K"] }"#).unwrap();
    /// assert!(config.is_routing_agnostic("U1"));
    /// assert!(!config.is_routing_agnostic("_X"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SlackConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if self.routing_agnostic_markers.is_empty() {
            return Err(SlackError::InvalidConfig(
                "routing_agnostic_markers 不可為空".to_string(),
            ));
        }
        Ok(())
    }

    /// 檢查製程類型是否走短鍵查詢（只看第一個字元）
    pub fn is_routing_agnostic(&self, process_type: &str) -> bool {
        process_type
            .chars()
            .next()
            .map(|c| self.routing_agnostic_markers.contains(&c))
            .unwrap_or(false)
    }
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self::new()
    }
}
