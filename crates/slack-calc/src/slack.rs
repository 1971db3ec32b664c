//! 剩餘提前期與 Slack 計算

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use slack_core::BatchRoute;

use crate::LeadTimeIndex;

/// Slack 計算引擎（無狀態）
pub struct SlackEngine;

impl SlackEngine {
    /// 計算批次剩餘提前期（天）
    ///
    /// 1. 途程或索引缺少時回傳 0
    /// 2. 跳過途程開頭連續的已完成站別
    /// 3. 從第一個未完成站別起，之後每一站都累加提前期
    /// 4. 有小數則無條件進位
    ///
    /// 注意第 3 步：第一個未完成站別之後的站別即使已標記完成，仍會累加。
    /// 這是沿用舊系統的行為，是否應改為「只計未完成站別」尚待產品端確認，
    /// 在確認前請勿更動。
    pub fn remaining_lead_time_days(
        route: Option<&BatchRoute>,
        index: Option<&LeadTimeIndex>,
    ) -> i64 {
        let (Some(route), Some(index)) = (route, index) else {
            return 0;
        };

        let mut total_days = Decimal::ZERO;
        let mut past_initial_finished_run = false;

        for step in route.steps() {
            if !past_initial_finished_run {
                if step.finished {
                    continue;
                }
                past_initial_finished_run = true;
            }

            let days = index.lookup_or_zero(
                &step.process_type,
                &step.process_id,
                &step.production_line_id,
            );
            // Decimal 相加溢位時飽和，之後由 round_up_days 夾到 i64 範圍
            total_days = total_days.checked_add(days).unwrap_or(if days.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            });
        }

        Self::round_up_days(total_days)
    }

    /// 天數進位：小數部分大於 0 時取整數部分 + 1，否則取整數部分
    pub fn round_up_days(total_days: Decimal) -> i64 {
        let whole = total_days.trunc();
        let rounded = if total_days.fract() > Decimal::ZERO {
            whole + Decimal::ONE
        } else {
            whole
        };
        // Decimal 整數部分超出 i64 範圍時飽和
        rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
    }

    /// 計算 Slack（天）
    ///
    /// - 有提前期資料：(承諾交期 − 今日) − 剩餘提前期
    /// - 無提前期資料：(承諾交期 − 今日)
    ///
    /// `today` 由呼叫端提供。
    pub fn compute_slack(
        promise_date: NaiveDate,
        today: NaiveDate,
        lead_time_days: i64,
        has_lead_time_data: bool,
    ) -> i64 {
        let days_to_promise = (promise_date - today).num_days();
        if has_lead_time_data {
            days_to_promise.saturating_sub(lead_time_days)
        } else {
            days_to_promise
        }
    }
}
