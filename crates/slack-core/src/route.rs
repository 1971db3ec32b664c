//! 批次途程模型

use serde::{Deserialize, Serialize};

/// 途程站別（批次尚需經過或已完成的一個製程站）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStep {
    /// 批次ID
    pub batch_id: String,

    /// 製程類型
    pub process_type: String,

    /// 製程ID
    pub process_id: String,

    /// 產線ID
    pub production_line_id: String,

    /// 站序（決定先後順序）
    pub stage_sequence: i32,

    /// 是否已完成
    pub finished: bool,
}

impl RouteStep {
    /// 創建新的途程站別（預設未完成）
    pub fn new(
        batch_id: String,
        process_type: String,
        process_id: String,
        production_line_id: String,
        stage_sequence: i32,
    ) -> Self {
        Self {
            batch_id,
            process_type,
            process_id,
            production_line_id,
            stage_sequence,
            finished: false,
        }
    }

    /// 建構器模式：設置完成標記
    pub fn with_finished(mut self, finished: bool) -> Self {
        self.finished = finished;
        self
    }
}

/// 單一批次的有序途程（依站序遞增）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRoute {
    /// 批次ID
    pub batch_id: String,

    /// 途程站別（保持載入順序，不重新排序）
    steps: Vec<RouteStep>,
}

impl BatchRoute {
    /// 創建空途程
    pub fn new(batch_id: String) -> Self {
        Self {
            batch_id,
            steps: Vec::new(),
        }
    }

    /// 以既有順序的站別建立途程
    pub fn from_steps(batch_id: String, steps: Vec<RouteStep>) -> Self {
        Self { batch_id, steps }
    }

    /// 追加站別
    pub fn push(&mut self, step: RouteStep) {
        self.steps.push(step);
    }

    /// 所有站別
    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// 檢查站序是否非遞減
    pub fn is_stage_ordered(&self) -> bool {
        self.steps
            .windows(2)
            .all(|pair| pair[0].stage_sequence <= pair[1].stage_sequence)
    }
}
