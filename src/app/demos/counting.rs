use crate::domain::model::StepOutput;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::collections::HashMap;

/// 迴圈示範：印出 `Numbers {from}-{to}:` 與其間的所有整數
pub struct CountingDemo {
    from: i64,
    to: i64,
}

impl CountingDemo {
    pub fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }
}

impl Demo for CountingDemo {
    fn name(&self) -> &str {
        "counting"
    }

    fn run(&self) -> Result<StepOutput> {
        // 每個數字後跟一個空白，最後一個數字之後的空白也保留
        let mut rendered = String::new();
        let mut count: usize = 0;
        for value in self.from..=self.to {
            rendered.push_str(&format!("{} ", value));
            count += 1;
        }
        tracing::debug!("📥 counted {} numbers from {} to {}", count, self.from, self.to);

        let mut metadata = HashMap::new();
        metadata.insert(
            "from".to_string(),
            serde_json::Value::Number(self.from.into()),
        );
        metadata.insert("to".to_string(), serde_json::Value::Number(self.to.into()));
        metadata.insert("count".to_string(), serde_json::Value::Number(count.into()));

        Ok(StepOutput {
            lines: vec![format!(
                "Numbers {}-{}: {}",
                self.from, self.to, rendered
            )],
            metadata,
        })
    }
}
