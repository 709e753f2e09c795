use crate::core::factorial::factorial;
use crate::domain::model::StepOutput;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::collections::HashMap;

/// 階乘示範：印出 `Factorial of {n}: {n!}`
pub struct FactorialDemo {
    input: i64,
}

impl FactorialDemo {
    pub fn new(input: i64) -> Self {
        Self { input }
    }
}

impl Demo for FactorialDemo {
    fn name(&self) -> &str {
        "factorial"
    }

    fn run(&self) -> Result<StepOutput> {
        let result = factorial(self.input);
        tracing::debug!("📥 factorial({}) = {}", self.input, result);

        let mut metadata = HashMap::new();
        metadata.insert(
            "input".to_string(),
            serde_json::Value::Number(self.input.into()),
        );
        metadata.insert(
            "result".to_string(),
            serde_json::Value::Number(result.into()),
        );

        Ok(StepOutput {
            lines: vec![format!("Factorial of {}: {}", self.input, result)],
            metadata,
        })
    }
}
