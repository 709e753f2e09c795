use crate::domain::model::StepReport;
use crate::domain::ports::{Demo, OutputSink};
use crate::utils::error::{DemoError, Result};
use std::collections::HashMap;
use std::time::Instant;

/// 歡迎橫幅標題；底線長度跟隨標題長度
pub const BANNER_TITLE: &str = "Welcome to the Classic Algorithms Demo!";

/// 所有示範完成後印出的結尾行
pub const COMPLETION_FOOTER: &str = "Program completed successfully!";

/// 示範序列，負責依固定順序執行各示範步驟並輸出編號結果
pub struct DemoSequence {
    demos: Vec<Box<dyn Demo>>,
    run_id: String,
}

impl DemoSequence {
    pub fn new(run_id: String) -> Self {
        Self {
            demos: Vec::new(),
            run_id,
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// 添加示範步驟；執行順序即添加順序
    pub fn add_demo(&mut self, demo: Box<dyn Demo>) {
        self.demos.push(demo);
    }

    /// 執行所有示範步驟
    ///
    /// 先輸出橫幅，再依序執行每個步驟：第一行加上 `N. ` 編號，
    /// 後續行縮排三格對齊，最後輸出結尾行。
    pub fn execute_all(&self, sink: &mut dyn OutputSink) -> Result<Vec<StepReport>> {
        tracing::info!("🎬 Starting demo sequence (run: {})", self.run_id);

        sink.write_line(BANNER_TITLE)?;
        sink.write_line(&"=".repeat(BANNER_TITLE.chars().count()))?;
        sink.write_line("")?;

        let mut reports = Vec::new();

        for (index, demo) in self.demos.iter().enumerate() {
            let start_time = Instant::now();

            let output = match demo.run() {
                Ok(output) => output,
                Err(e) => {
                    tracing::error!("❌ Demo execution failed: {}", e);
                    return Err(DemoError::StepError {
                        step: demo.name().to_string(),
                        details: format!("Demo execution failed: {}", e),
                    });
                }
            };

            for (line_index, line) in output.lines.iter().enumerate() {
                if line_index == 0 {
                    sink.write_line(&format!("{}. {}", index + 1, line))?;
                } else {
                    sink.write_line(&format!("   {}", line))?;
                }
            }

            let report = StepReport {
                step_name: demo.name().to_string(),
                lines: output.lines,
                duration: start_time.elapsed(),
                metadata: output.metadata,
            };

            tracing::info!(
                "✅ Demo executed: {} ({} lines, duration: {:?})",
                report.step_name,
                report.lines.len(),
                report.duration
            );

            reports.push(report);
        }

        sink.write_line("")?;
        sink.write_line(COMPLETION_FOOTER)?;

        tracing::info!("🎉 Demo sequence completed: {} demos", reports.len());

        Ok(reports)
    }

    /// 獲取執行摘要
    pub fn get_execution_summary(reports: &[StepReport]) -> HashMap<String, serde_json::Value> {
        let mut summary = HashMap::new();

        let total_demos = reports.len();
        let total_lines: usize = reports.iter().map(|r| r.lines.len()).sum();
        let total_duration: std::time::Duration = reports.iter().map(|r| r.duration).sum();

        summary.insert(
            "total_demos".to_string(),
            serde_json::Value::Number(total_demos.into()),
        );
        summary.insert(
            "total_lines".to_string(),
            serde_json::Value::Number(total_lines.into()),
        );
        summary.insert(
            "total_duration_ms".to_string(),
            serde_json::Value::Number((total_duration.as_millis() as u64).into()),
        );

        let demo_names: Vec<serde_json::Value> = reports
            .iter()
            .map(|r| serde_json::Value::String(r.step_name.clone()))
            .collect();
        summary.insert(
            "executed_demos".to_string(),
            serde_json::Value::Array(demo_names),
        );

        summary
    }
}
