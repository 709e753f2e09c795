use crate::core::primality::is_prime;
use crate::domain::model::StepOutput;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::collections::HashMap;

/// 質數示範：印出 `Is {num} prime? Yes|No`
pub struct PrimalityDemo {
    candidate: i64,
}

impl PrimalityDemo {
    pub fn new(candidate: i64) -> Self {
        Self { candidate }
    }
}

impl Demo for PrimalityDemo {
    fn name(&self) -> &str {
        "primality"
    }

    fn run(&self) -> Result<StepOutput> {
        let prime = is_prime(self.candidate);
        let verdict = if prime { "Yes" } else { "No" };
        tracing::debug!("📥 is_prime({}) = {}", self.candidate, prime);

        let mut metadata = HashMap::new();
        metadata.insert(
            "candidate".to_string(),
            serde_json::Value::Number(self.candidate.into()),
        );
        metadata.insert("is_prime".to_string(), serde_json::Value::Bool(prime));

        Ok(StepOutput {
            lines: vec![format!("Is {} prime? {}", self.candidate, verdict)],
            metadata,
        })
    }
}
