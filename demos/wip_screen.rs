//! WIP 畫面 Slack 欄位示例
//!
//! 模擬資料存取層：先批量讀取提前期表與途程表，再一次計算所有批次。

use batch_slack::{LeadTimeEntry, RouteStep, SlackCalculator, SlackConfig, SlackInput};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== WIP 畫面 Slack 示例 ===\n");

    let today = NaiveDate::from_ymd_opt(2025, 11, 10).ok_or("無效的日期")?;
    let config = SlackConfig::from_json(r#"{ "routing_agnostic_markers": ["U", "_", "K"] }"#)?;

    let inputs = vec![
        SlackInput::new("B-1001".to_string(), Some(today + Duration::days(7))),
        SlackInput::new("B-1002".to_string(), Some(today + Duration::days(2))),
        SlackInput::new("B-1003".to_string(), None),
    ];

    // 只對帶承諾交期的批次讀取途程
    let requested = SlackInput::requested_batch_ids(&inputs);
    println!("需讀取途程的批次: {:?}\n", requested);

    let lead_times = vec![
        LeadTimeEntry::from_f64("M1".into(), "CUT".into(), "L1".into(), 1.0),
        LeadTimeEntry::from_f64("M1".into(), "ETCH".into(), "L1".into(), 2.5),
        LeadTimeEntry::from_f64("K".into(), "QC".into(), "".into(), 0.5),
    ];

    let mut route_rows = Vec::new();
    for batch in &requested {
        route_rows.push(
            RouteStep::new(batch.clone(), "M1".into(), "CUT".into(), "L1".into(), 1)
                .with_finished(true),
        );
        route_rows.push(RouteStep::new(
            batch.clone(),
            "M1".into(),
            "ETCH".into(),
            "L1".into(),
            2,
        ));
        route_rows.push(RouteStep::new(
            batch.clone(),
            "K".into(),
            "QC".into(),
            "L9".into(),
            3,
        ));
    }

    let calculator = SlackCalculator::new(config);
    let result = calculator.calculate(&inputs, Some(lead_times), Some(route_rows), today);

    for input in &inputs {
        match result.slack_for(&input.batch_id) {
            Some(slack) if slack < 0 => {
                println!("  {}  Slack {:>4}  ← 落後", input.batch_id, slack)
            }
            Some(slack) => println!("  {}  Slack {:>4}", input.batch_id, slack),
            None => println!("  {}  Slack    -", input.batch_id),
        }
    }

    println!(
        "\n批次 {} 筆{}",
        inputs.len(),
        result.status_note().unwrap_or_default()
    );

    Ok(())
}
