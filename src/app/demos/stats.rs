use crate::core::stats::{mean, sum};
use crate::domain::model::StepOutput;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::collections::HashMap;

/// 陣列統計示範：印出總和與平均（兩位小數）
pub struct StatsDemo {
    samples: Vec<i64>,
}

impl StatsDemo {
    pub fn new(samples: Vec<i64>) -> Self {
        Self { samples }
    }
}

impl Demo for StatsDemo {
    fn name(&self) -> &str {
        "stats"
    }

    fn run(&self) -> Result<StepOutput> {
        let total = sum(&self.samples);
        let average = mean(&self.samples).unwrap_or(0.0);
        tracing::debug!(
            "📥 {} samples, sum = {}, average = {:.2}",
            self.samples.len(),
            total,
            average
        );

        let mut metadata = HashMap::new();
        metadata.insert(
            "count".to_string(),
            serde_json::Value::Number(self.samples.len().into()),
        );
        metadata.insert("sum".to_string(), serde_json::Value::Number(total.into()));
        metadata.insert("average".to_string(), serde_json::Value::from(average));

        Ok(StepOutput {
            lines: vec![
                format!("Array sum: {}", total),
                format!("Array average: {:.2}", average),
            ],
            metadata,
        })
    }
}
