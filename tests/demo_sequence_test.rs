use anyhow::Result;
use small_algos::core::sequence::{BANNER_TITLE, COMPLETION_FOOTER};
use small_algos::utils::error::DemoError;
use small_algos::utils::validation::Validate;
use small_algos::{build_demos, ConsoleSink, DemoConfig, DemoSequence};

fn run_sequence(config: &DemoConfig, run_id: &str) -> Result<(String, usize)> {
    config.validate()?;

    let mut sequence = DemoSequence::new(run_id.to_string());
    for demo in build_demos(config) {
        sequence.add_demo(demo);
    }

    let mut sink = ConsoleSink::new(Vec::new());
    let reports = sequence.execute_all(&mut sink)?;

    let output = String::from_utf8(sink.into_inner())?;
    Ok((output, reports.len()))
}

#[test]
fn test_default_run_produces_exact_demo_output() -> Result<()> {
    // 預設配置下的完整輸出，逐行比對（注意第 4 項結尾的空白）
    let expected_lines = [
        "Welcome to the Classic Algorithms Demo!",
        "=======================================",
        "",
        "1. Factorial of 5: 120",
        "2. Is 17 prime? Yes",
        "3. Original string: Hello World",
        "   Reversed string: dlroW olleH",
        "4. Numbers 1-10: 1 2 3 4 5 6 7 8 9 10 ",
        "5. Array sum: 45",
        "   Array average: 5.00",
        "",
        "Program completed successfully!",
    ];
    let expected = expected_lines.join("\n") + "\n";

    let (output, demo_count) = run_sequence(&DemoConfig::default(), "itest_default")?;

    assert_eq!(output, expected);
    assert_eq!(demo_count, 5);
    Ok(())
}

#[test]
fn test_banner_underline_matches_title_length() -> Result<()> {
    let (output, _) = run_sequence(&DemoConfig::default(), "itest_banner")?;
    let mut lines = output.lines();

    let title = lines.next().unwrap();
    let underline = lines.next().unwrap();

    assert_eq!(title, BANNER_TITLE);
    assert_eq!(underline.chars().count(), title.chars().count());
    assert!(underline.chars().all(|c| c == '='));
    Ok(())
}

#[test]
fn test_output_ends_with_completion_footer() -> Result<()> {
    let (output, _) = run_sequence(&DemoConfig::default(), "itest_footer")?;
    assert!(output.ends_with(&format!("\n{}\n", COMPLETION_FOOTER)));
    Ok(())
}

#[test]
fn test_custom_inputs_flow_through_every_demo() -> Result<()> {
    let config = DemoConfig {
        factorial_input: 6,
        prime_candidate: 18,
        message: "ab".to_string(),
        count_from: 3,
        count_to: 5,
        samples: vec![2, 4],
    };

    let (output, demo_count) = run_sequence(&config, "itest_custom")?;

    assert_eq!(demo_count, 5);
    assert!(output.contains("1. Factorial of 6: 720\n"));
    assert!(output.contains("2. Is 18 prime? No\n"));
    assert!(output.contains("3. Original string: ab\n"));
    assert!(output.contains("   Reversed string: ba\n"));
    assert!(output.contains("4. Numbers 3-5: 3 4 5 \n"));
    assert!(output.contains("5. Array sum: 6\n"));
    assert!(output.contains("   Array average: 3.00\n"));
    Ok(())
}

#[test]
fn test_reports_follow_the_fixed_demo_order() -> Result<()> {
    let config = DemoConfig::default();
    let mut sequence = DemoSequence::new("itest_reports".to_string());
    for demo in build_demos(&config) {
        sequence.add_demo(demo);
    }

    let mut sink = ConsoleSink::new(Vec::new());
    let reports = sequence.execute_all(&mut sink)?;

    let names: Vec<&str> = reports.iter().map(|r| r.step_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["factorial", "primality", "reversal", "counting", "stats"]
    );

    // 每步都要有一行以上的輸出與結果中繼資料
    for report in &reports {
        assert!(!report.lines.is_empty());
        assert!(!report.metadata.is_empty());
    }

    let summary = DemoSequence::get_execution_summary(&reports);
    assert_eq!(summary["total_demos"], serde_json::Value::Number(5.into()));
    assert_eq!(summary["total_lines"], serde_json::Value::Number(7.into()));
    Ok(())
}

#[test]
fn test_broken_sink_surfaces_io_error() {
    struct BrokenSink;

    impl small_algos::domain::ports::OutputSink for BrokenSink {
        fn write_line(&mut self, _line: &str) -> small_algos::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed").into())
        }
    }

    let config = DemoConfig::default();
    let mut sequence = DemoSequence::new("itest_broken_sink".to_string());
    for demo in build_demos(&config) {
        sequence.add_demo(demo);
    }

    let err = sequence.execute_all(&mut BrokenSink).unwrap_err();
    assert!(matches!(err, DemoError::IoError(_)));
}
