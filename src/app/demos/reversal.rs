use crate::core::reversal::reverse_in_place;
use crate::domain::model::StepOutput;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::collections::HashMap;

/// 字串反轉示範：印出原字串與就地反轉後的結果
pub struct ReversalDemo {
    message: String,
}

impl ReversalDemo {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

impl Demo for ReversalDemo {
    fn name(&self) -> &str {
        "reversal"
    }

    fn run(&self) -> Result<StepOutput> {
        let mut chars: Vec<char> = self.message.chars().collect();
        reverse_in_place(&mut chars);
        let reversed: String = chars.iter().collect();
        tracing::debug!("📥 reversed {:?} into {:?}", self.message, reversed);

        let mut metadata = HashMap::new();
        metadata.insert(
            "original".to_string(),
            serde_json::Value::String(self.message.clone()),
        );
        metadata.insert(
            "reversed".to_string(),
            serde_json::Value::String(reversed.clone()),
        );
        metadata.insert(
            "length".to_string(),
            serde_json::Value::Number(chars.len().into()),
        );

        Ok(StepOutput {
            lines: vec![
                format!("Original string: {}", self.message),
                format!("Reversed string: {}", reversed),
            ],
            metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_original_then_reversed() {
        let output = ReversalDemo::new("Hello World".to_string()).run().unwrap();
        assert_eq!(
            output.lines,
            vec![
                "Original string: Hello World".to_string(),
                "Reversed string: dlroW olleH".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_message_is_a_no_op() {
        let output = ReversalDemo::new(String::new()).run().unwrap();
        assert_eq!(
            output.metadata["reversed"],
            serde_json::Value::String(String::new())
        );
        assert_eq!(
            output.metadata["length"],
            serde_json::Value::Number(0.into())
        );
    }

    #[test]
    fn test_demo_leaves_its_configured_message_intact() {
        let demo = ReversalDemo::new("abc".to_string());
        demo.run().unwrap();
        // 反轉發生在示範所擁有的緩衝區上，設定值本身不變
        let output = demo.run().unwrap();
        assert_eq!(output.lines[0], "Original string: abc");
    }
}
