//! Slack 查詢計算器

use chrono::{Duration, NaiveDate};
use slack_core::{BatchSlack, LeadTimeEntry, RouteStep, SlackConfig, SlackInput};
use std::collections::HashSet;

use crate::{BatchRoutes, LeadTimeIndex, RouteLoader, SlackEngine, SlackResult, SlackWarning};

/// Slack 計算器（每次查詢建立一次索引與途程分組）
pub struct SlackCalculator {
    /// 計算配置
    config: SlackConfig,
}

impl SlackCalculator {
    /// 創建新的計算器
    pub fn new(config: SlackConfig) -> Self {
        Self { config }
    }

    /// 查詢層級入口
    ///
    /// `lead_time_rows` / `route_rows` 為 `None` 表示對應的表無法讀取。
    /// 沒有任何批次帶承諾交期時不會讀取途程，同樣視為無途程資料。
    /// 提前期索引與途程分組在此建立一次，之後每個批次共用。
    pub fn calculate(
        &self,
        inputs: &[SlackInput],
        lead_time_rows: Option<Vec<LeadTimeEntry>>,
        route_rows: Option<Vec<RouteStep>>,
        today: NaiveDate,
    ) -> SlackResult {
        let index = lead_time_rows
            .as_ref()
            .map(|rows| LeadTimeIndex::build_with_config(rows, self.config.clone()));

        let requested: HashSet<String> = SlackInput::requested_batch_ids(inputs)
            .into_iter()
            .collect();
        let routes = if requested.is_empty() {
            tracing::debug!("沒有帶承諾交期的批次，不載入途程");
            None
        } else {
            route_rows.map(|rows| RouteLoader::group_by_batch(rows, &requested))
        };

        Self::compute_for_batches(inputs, index.as_ref(), routes.as_ref(), today)
    }

    /// 整批計算 Slack
    ///
    /// - 只有索引與途程皆提供時 `has_lead_time_data` 才為 true（整次查詢共用一個旗標）
    /// - 無承諾交期的批次不產生結果
    /// - 找不到途程的批次視為剩餘提前期 0
    pub fn compute_for_batches(
        inputs: &[SlackInput],
        index: Option<&LeadTimeIndex>,
        routes: Option<&BatchRoutes>,
        today: NaiveDate,
    ) -> SlackResult {
        let start_time = std::time::Instant::now();
        let has_lead_time_data = index.is_some() && routes.is_some();

        tracing::info!(
            "開始 Slack 計算：批次 {} 筆，提前期資料 {}",
            inputs.len(),
            if has_lead_time_data { "可用" } else { "不可用" }
        );

        let mut result = SlackResult::empty(has_lead_time_data);

        if !has_lead_time_data {
            tracing::warn!("提前期表或途程表無法讀取，Slack 改以承諾交期 − 今日計算");
            result.add_warning(SlackWarning::warning(
                None,
                "提前期資料不可用，Slack 未扣除剩餘提前期".to_string(),
            ));
        }

        for input in inputs {
            let Some(promise_date) = input.promise_date else {
                continue;
            };
            let batch_id = input.key();

            let lead_time_days = match (routes, index) {
                (Some(routes), Some(index)) => {
                    let route = routes.get(batch_id);
                    if route.is_none() {
                        result.add_warning(SlackWarning::info(
                            Some(batch_id.to_string()),
                            "找不到途程資料，剩餘提前期以 0 計".to_string(),
                        ));
                    }
                    SlackEngine::remaining_lead_time_days(route, Some(index))
                }
                _ => 0,
            };

            let slack_days =
                SlackEngine::compute_slack(promise_date, today, lead_time_days, has_lead_time_data);

            tracing::debug!(
                "批次 {} 剩餘提前期 {} 天，Slack {} 天",
                batch_id,
                lead_time_days,
                slack_days
            );

            if result
                .slack
                .insert(batch_id.to_string(), slack_days)
                .is_some()
            {
                result.add_warning(SlackWarning::warning(
                    Some(batch_id.to_string()),
                    "批次重複出現，以後者為準".to_string(),
                ));
                result.details.retain(|d| d.batch_id != batch_id);
            }

            result.details.push(BatchSlack {
                batch_id: batch_id.to_string(),
                promise_date,
                remaining_lead_time_days: lead_time_days,
                slack_days,
                expected_finish_date: expected_finish_date(today, lead_time_days),
            });
        }

        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "Slack 計算完成，耗時 {:?}，結果 {} 筆，落後 {} 筆",
            start_time.elapsed(),
            result.slack.len(),
            result.behind_schedule().len()
        );

        result
    }

    /// 獲取配置引用
    pub fn config(&self) -> &SlackConfig {
        &self.config
    }
}

/// 預計完工日 = 今日 + 剩餘提前期（超出日期範圍時取邊界值）
fn expected_finish_date(today: NaiveDate, lead_time_days: i64) -> NaiveDate {
    Duration::try_days(lead_time_days)
        .and_then(|offset| today.checked_add_signed(offset))
        .unwrap_or(if lead_time_days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

impl Default for SlackCalculator {
    fn default() -> Self {
        Self::new(SlackConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use slack_core::BatchRoute;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 10).unwrap()
    }

    fn lead_times() -> Vec<LeadTimeEntry> {
        vec![
            LeadTimeEntry::new(
                "M1".to_string(),
                "A".to_string(),
                "L1".to_string(),
                Decimal::from(2),
            ),
            LeadTimeEntry::new(
                "M1".to_string(),
                "B".to_string(),
                "L1".to_string(),
                Decimal::new(15, 1),
            ),
        ]
    }

    fn step(batch: &str, proc_id: &str, stage: i32, finished: bool) -> RouteStep {
        RouteStep::new(
            batch.to_string(),
            "M1".to_string(),
            proc_id.to_string(),
            "L1".to_string(),
            stage,
        )
        .with_finished(finished)
    }

    #[test]
    fn test_has_lead_time_data_requires_both_tables() {
        let inputs = vec![SlackInput::new(
            "B-001".to_string(),
            Some(today() + Duration::days(10)),
        )];
        let index = LeadTimeIndex::build(&lead_times());
        let routes = BatchRoutes::new();

        let only_index =
            SlackCalculator::compute_for_batches(&inputs, Some(&index), None, today());
        assert!(!only_index.has_lead_time_data);
        assert_eq!(only_index.slack_for("B-001"), Some(10));

        let only_routes =
            SlackCalculator::compute_for_batches(&inputs, None, Some(&routes), today());
        assert!(!only_routes.has_lead_time_data);
        assert_eq!(only_routes.status_note(), Some(crate::NO_LEAD_TIME_DATA_NOTE));

        let both =
            SlackCalculator::compute_for_batches(&inputs, Some(&index), Some(&routes), today());
        assert!(both.has_lead_time_data);
        assert_eq!(both.status_note(), None);
    }

    #[test]
    fn test_missing_promise_date_omitted() {
        let inputs = vec![
            SlackInput::new("B-001".to_string(), None),
            SlackInput::new("B-002".to_string(), Some(today())),
        ];

        let result = SlackCalculator::compute_for_batches(&inputs, None, None, today());

        assert_eq!(result.slack.len(), 1);
        assert_eq!(result.slack_for("B-001"), None);
        assert_eq!(result.slack_for("B-002"), Some(0));
    }

    #[test]
    fn test_missing_route_counts_as_zero() {
        let inputs = vec![SlackInput::new(
            "B-404".to_string(),
            Some(today() + Duration::days(3)),
        )];
        let index = LeadTimeIndex::build(&lead_times());
        let routes = BatchRoutes::new();

        let result =
            SlackCalculator::compute_for_batches(&inputs, Some(&index), Some(&routes), today());

        assert!(result.has_lead_time_data);
        assert_eq!(result.slack_for("B-404"), Some(3));
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].batch_id.as_deref(), Some("B-404"));
    }

    #[test]
    fn test_calculate_pipeline() {
        let inputs = vec![
            SlackInput::new("B-001 ".to_string(), Some(today() + Duration::days(2))),
            SlackInput::new("B-002".to_string(), Some(today() + Duration::days(10))),
        ];
        let route_rows = vec![
            step("B-001", "A", 1, false),
            step("B-001", "B", 2, false),
            step("B-002", "A", 1, true),
            step("B-002", "B", 2, false),
        ];

        let calculator = SlackCalculator::default();
        let result = calculator.calculate(&inputs, Some(lead_times()), Some(route_rows), today());

        // B-001: 2 + 1.5 = 3.5 → 4，Slack = 2 − 4 = −2
        assert_eq!(result.slack_for("B-001"), Some(-2));
        // B-002: 1.5 → 2，Slack = 10 − 2 = 8
        assert_eq!(result.slack_for("B-002"), Some(8));
        assert_eq!(result.behind_schedule(), vec!["B-001"]);

        let detail = &result.details[0];
        assert_eq!(detail.remaining_lead_time_days, 4);
        assert_eq!(detail.expected_finish_date, today() + Duration::days(4));
        assert!(result.calculation_time_ms.is_some());
    }

    #[test]
    fn test_calculate_without_route_table() {
        let inputs = vec![SlackInput::new(
            "B-001".to_string(),
            Some(today() + Duration::days(7)),
        )];

        let result =
            SlackCalculator::default().calculate(&inputs, Some(lead_times()), None, today());

        assert!(!result.has_lead_time_data);
        assert_eq!(result.slack_for("B-001"), Some(7));
        assert_eq!(result.details[0].remaining_lead_time_days, 0);
    }

    #[test]
    fn test_duplicate_batch_later_wins() {
        let inputs = vec![
            SlackInput::new("B-001".to_string(), Some(today() + Duration::days(1))),
            SlackInput::new("B-001".to_string(), Some(today() + Duration::days(5))),
        ];
        let index = LeadTimeIndex::build(&lead_times());
        let mut routes = BatchRoutes::new();
        routes.insert("B-001".to_string(), BatchRoute::new("B-001".to_string()));

        let result =
            SlackCalculator::compute_for_batches(&inputs, Some(&index), Some(&routes), today());

        assert_eq!(result.slack_for("B-001"), Some(5));
        assert_eq!(result.details.len(), 1);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_no_promise_dates_means_no_route_data() {
        let inputs = vec![
            SlackInput::new("B-001".to_string(), None),
            SlackInput::new("B-002".to_string(), None),
        ];
        let route_rows = vec![step("B-001", "A", 1, false)];

        let result = SlackCalculator::default().calculate(
            &inputs,
            Some(lead_times()),
            Some(route_rows),
            today(),
        );

        assert!(!result.has_lead_time_data);
        assert!(result.slack.is_empty());
        assert_eq!(result.status_note(), Some(crate::NO_LEAD_TIME_DATA_NOTE));
    }

    #[test]
    fn test_calculator_config_reaches_index() {
        let config = SlackConfig::new().with_routing_agnostic_markers(vec!['M']);
        let calculator = SlackCalculator::new(config.clone());
        assert_eq!(calculator.config(), &config);

        // M 類改走短鍵：產線 L9 也能查到 M1A 的 2 天
        let inputs = vec![SlackInput::new(
            "B-001".to_string(),
            Some(today() + Duration::days(5)),
        )];
        let route_rows = vec![RouteStep::new(
            "B-001".to_string(),
            "M1".to_string(),
            "A".to_string(),
            "L9".to_string(),
            1,
        )];

        let result = calculator.calculate(&inputs, Some(lead_times()), Some(route_rows), today());
        assert_eq!(result.slack_for("B-001"), Some(3));
    }
}
