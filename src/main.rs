use small_algos::utils::{logger, validation::Validate};
use small_algos::{build_demos, ConsoleSink, DemoConfig, DemoSequence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日誌
    logger::init_cli_logger();

    tracing::info!("Starting small-algos demo driver");

    // 固定示範輸入；本程式不讀取命令列參數、環境變數或設定檔
    let config = DemoConfig::default();

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 生成執行 ID
    let run_id = format!("demo_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"));

    // 建立示範序列
    let mut sequence = DemoSequence::new(run_id.clone());
    for demo in build_demos(&config) {
        sequence.add_demo(demo);
    }

    let mut sink = ConsoleSink::stdout();

    match sequence.execute_all(&mut sink) {
        Ok(reports) => {
            let summary = DemoSequence::get_execution_summary(&reports);
            tracing::info!("🎉 Demo run completed successfully (run: {})", run_id);
            tracing::info!("📊 Execution summary: {:?}", summary);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Demo run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                small_algos::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                small_algos::utils::error::ErrorSeverity::Medium => 2, // 重試錯誤
                small_algos::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                small_algos::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
