use crate::core::factorial::MAX_EXACT_INPUT;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 示範輸入配置；預設值即固定示範輸入
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub factorial_input: i64,
    pub prime_candidate: i64,
    pub message: String,
    pub count_from: i64,
    pub count_to: i64,
    pub samples: Vec<i64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            factorial_input: 5,
            prime_candidate: 17,
            message: "Hello World".to_string(),
            count_from: 1,
            count_to: 10,
            samples: vec![3, 7, 1, 9, 4, 6, 2, 8, 5],
        }
    }
}

impl DemoConfig {
    /// 從 TOML 字串解析配置；缺少的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        // 階乘輸入限制在 i64 可精確表示的範圍
        validation::validate_range("factorial_input", self.factorial_input, 0, MAX_EXACT_INPUT)?;
        validation::validate_ordered_pair("count_range", self.count_from, self.count_to)?;
        // 平均數需要至少一個樣本
        validation::validate_non_empty_slice("samples", &self.samples)?;
        Ok(())
    }
}
