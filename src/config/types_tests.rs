//! Tests for config/types

use super::*;
use proptest::prelude::*;

#[test]
fn test_report_defaults() {
    let report = ReportConfig::default();
    assert_eq!(report.stats, vec!["min", "max", "count", "mean"]);
    assert_eq!(report.absent, "-");
    assert_eq!(report.format, OutputFormat::Text);
}

#[test]
fn test_empty_section_uses_defaults() {
    let config: Config = toml::from_str("[report]\n").unwrap();
    assert_eq!(config.report.stats, ReportConfig::default().stats);
    assert_eq!(config.report.absent, "-");
}

#[test]
fn test_parse_full_section() {
    let toml = r#"
[report]
stats = ["stddev", "percentiles"]
absent = "n/a"
format = "json"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.report.stats, vec!["stddev", "percentiles"]);
    assert_eq!(config.report.absent, "n/a");
    assert_eq!(config.report.format, OutputFormat::Json);
}

#[test]
fn test_invalid_format_fails_parse() {
    let result: Result<Config, _> = toml::from_str("[report]\nformat = \"csv\"\n");
    assert!(result.is_err(), "Invalid format should fail to parse");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_valid_format_parsing(format in prop::sample::select(vec!["text", "json"])) {
        let toml_content = format!("[report]\nformat = \"{}\"\n", format);

        let config: Config = toml::from_str(&toml_content).unwrap();

        let expected = match format {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            _ => unreachable!(),
        };
        prop_assert_eq!(config.report.format, expected);
    }

    #[test]
    fn prop_absent_text_round_trips(absent in "[a-zA-Z/ -]{0,6}") {
        let toml_content = format!("[report]\nabsent = \"{}\"\n", absent);

        let config: Config = toml::from_str(&toml_content).unwrap();

        prop_assert_eq!(config.report.absent, absent);
    }
}
