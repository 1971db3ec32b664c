//! 途程分組

use slack_core::{BatchRoute, RouteStep};
use std::collections::{HashMap, HashSet};

/// 批次ID → 有序途程
pub type BatchRoutes = HashMap<String, BatchRoute>;

/// 途程載入器
pub struct RouteLoader;

impl RouteLoader {
    /// 將批量讀取的途程記錄依批次分組
    ///
    /// 輸入須已依（批次, 站序）排序；每個批次內保持輸入順序，不重新排序，
    /// 因為剩餘提前期的「跳過已完成前段」規則依賴站序。
    /// 不在 `requested_batch_ids` 內的記錄照樣分組（過濾是呼叫端的責任）。
    /// 分組鍵為修剪後的批次ID。
    pub fn group_by_batch<I>(rows: I, requested_batch_ids: &HashSet<String>) -> BatchRoutes
    where
        I: IntoIterator<Item = RouteStep>,
    {
        let mut grouped: BatchRoutes = HashMap::new();
        let mut unrequested = 0usize;

        for step in rows {
            let batch_id = step.batch_id.trim().to_string();
            if !requested_batch_ids.is_empty() && !requested_batch_ids.contains(&batch_id) {
                unrequested += 1;
            }

            grouped
                .entry(batch_id.clone())
                .or_insert_with(|| BatchRoute::new(batch_id))
                .push(step);
        }

        for route in grouped.values() {
            if !route.is_stage_ordered() {
                tracing::warn!("批次 {} 途程站序未遞增，依載入順序計算", route.batch_id);
            }
        }

        if unrequested > 0 {
            tracing::debug!("途程記錄中有 {} 筆不屬於請求的批次", unrequested);
        }
        tracing::debug!("途程分組完成：批次 {} 個", grouped.len());

        grouped
    }
}
