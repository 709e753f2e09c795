use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// 單一示範步驟產出的輸出：要印出的行與結果中繼資料
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutput {
    pub lines: Vec<String>,
    pub metadata: HashMap<String, serde_json::Value>,
}

/// 示範步驟執行報告
#[derive(Debug, Clone)]
pub struct StepReport {
    pub step_name: String,
    pub lines: Vec<String>,
    pub duration: Duration,
    pub metadata: HashMap<String, serde_json::Value>,
}
