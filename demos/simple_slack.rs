//! 簡單 Slack 計算示例

use batch_slack::{BatchRoute, LeadTimeEntry, LeadTimeIndex, RouteStep, SlackEngine};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== 簡單 Slack 計算示例 ===\n");

    // 提前期參考表
    let lead_times = vec![
        lead_time("M1", "100", "L1", Decimal::from(2)),
        lead_time("M1", "200", "L1", Decimal::new(15, 1)),
        lead_time("U1", "300", "", Decimal::from(3)),
    ];
    let index = LeadTimeIndex::build(&lead_times);

    // 批次途程：第 1 站已完成
    let route = BatchRoute::from_steps(
        "B-001".to_string(),
        vec![
            route_step("M1", "100", "L1", 10).with_finished(true),
            route_step("M1", "200", "L1", 20),
            route_step("U1", "300", "L7", 30),
        ],
    );

    let today = NaiveDate::from_ymd_opt(2025, 11, 10).ok_or("無效的日期")?;
    let promise = today + Duration::days(10);

    let ltime = SlackEngine::remaining_lead_time_days(Some(&route), Some(&index));
    let slack = SlackEngine::compute_slack(promise, today, ltime, true);

    println!("批次: {}", route.batch_id);
    println!("  剩餘提前期: {} 天", ltime);
    println!("  承諾交期: {}", promise);
    println!("  Slack: {} 天", slack);

    Ok(())
}

fn lead_time(ptype: &str, proc_id: &str, line: &str, days: Decimal) -> LeadTimeEntry {
    LeadTimeEntry::new(
        ptype.to_string(),
        proc_id.to_string(),
        line.to_string(),
        days,
    )
}

fn route_step(ptype: &str, proc_id: &str, line: &str, stage: i32) -> RouteStep {
    RouteStep::new(
        "B-001".to_string(),
        ptype.to_string(),
        proc_id.to_string(),
        line.to_string(),
        stage,
    )
}
