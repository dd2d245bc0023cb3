//! # Config Module Unit Tests / Config 模块单元测试
//!
//! Tests for parsing `exec-runner.toml` and for merging defaults, file values
//! and command-line overrides into `RunSettings`.
//!
//! 测试 `exec-runner.toml` 的解析，以及默认值、文件值和命令行覆盖
//! 合并为 `RunSettings` 的过程。

use exec_runner::RunnerError;
use exec_runner::cli::commands::init::DEFAULT_CONFIG;
use exec_runner::config::{
    ColorChoice, OutputMode, Overrides, RunSettings, RunnerConfig, DEFAULT_TEST_DIR,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = RunnerConfig::from_toml_str("").unwrap();
        assert_eq!(config, RunnerConfig::default());
        assert_eq!(config.output, OutputMode::Stream);
        assert_eq!(config.color, ColorChoice::Auto);
        assert!(!config.numeric_prefix);
    }

    #[test]
    fn test_full_file() {
        let content = r#"
language = "zh-CN"
test_dir = "out/tests"
numeric_prefix = true
output = "capture"
timeout_secs = 30
color = "never"
"#;
        let config = RunnerConfig::from_toml_str(content).unwrap();
        assert_eq!(config.language.as_deref(), Some("zh-CN"));
        assert_eq!(config.test_dir.as_deref(), Some("out/tests"));
        assert!(config.numeric_prefix);
        assert_eq!(config.output, OutputMode::Capture);
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.color, ColorChoice::Never);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(RunnerConfig::from_toml_str("retries = 3").is_err());
    }

    #[test]
    fn test_invalid_output_mode_is_rejected() {
        assert!(RunnerConfig::from_toml_str(r#"output = "batchy""#).is_err());
    }

    #[test]
    fn test_default_config_template_parses() {
        let config = RunnerConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.test_dir.as_deref(), Some("build"));
        assert_eq!(config.output, OutputMode::Stream);
        assert_eq!(config.timeout_secs, Some(0));
        assert_eq!(config.language, None);
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "numeric_prefix = [").unwrap();

        let err = RunnerConfig::load(&path).unwrap_err();
        assert!(matches!(err, RunnerError::Config { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RunnerConfig::load(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, RunnerError::Config { .. }));
    }
}

#[cfg(test)]
mod resolve_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings =
            RunSettings::resolve(&RunnerConfig::default(), None, Overrides::default()).unwrap();
        assert_eq!(settings, RunSettings::default());
        assert_eq!(settings.test_dir, PathBuf::from(DEFAULT_TEST_DIR));
        assert_eq!(settings.timeout, None);
    }

    #[test]
    fn test_config_dir_is_relative_to_config_file() {
        let config = RunnerConfig {
            test_dir: Some("build/tests".to_string()),
            ..Default::default()
        };
        let settings = RunSettings::resolve(
            &config,
            Some(Path::new("/work/project/exec-runner.toml")),
            Overrides::default(),
        )
        .unwrap();
        assert_eq!(settings.test_dir, PathBuf::from("/work/project/build/tests"));
    }

    #[test]
    fn test_absolute_config_dir_is_kept() {
        let config = RunnerConfig {
            test_dir: Some("/opt/suite".to_string()),
            ..Default::default()
        };
        let settings = RunSettings::resolve(
            &config,
            Some(Path::new("/work/project/exec-runner.toml")),
            Overrides::default(),
        )
        .unwrap();
        assert_eq!(settings.test_dir, PathBuf::from("/opt/suite"));
    }

    #[test]
    fn test_command_line_wins() {
        let config = RunnerConfig {
            test_dir: Some("from-config".to_string()),
            numeric_prefix: false,
            output: OutputMode::Stream,
            timeout_secs: Some(10),
            color: ColorChoice::Always,
            ..Default::default()
        };
        let overrides = Overrides {
            test_dir: Some(PathBuf::from("from-cli")),
            numeric_prefix: true,
            capture: true,
            timeout_secs: Some(2),
            color: Some(ColorChoice::Never),
        };
        let settings =
            RunSettings::resolve(&config, Some(Path::new("/cfg/exec-runner.toml")), overrides)
                .unwrap();

        assert_eq!(settings.test_dir, PathBuf::from("from-cli"));
        assert!(settings.numeric_prefix);
        assert_eq!(settings.output, OutputMode::Capture);
        assert_eq!(settings.timeout, Some(Duration::from_secs(2)));
        assert_eq!(settings.color, ColorChoice::Never);
    }

    #[test]
    fn test_config_values_apply_without_overrides() {
        let config = RunnerConfig {
            numeric_prefix: true,
            output: OutputMode::Capture,
            timeout_secs: Some(7),
            color: ColorChoice::Never,
            ..Default::default()
        };
        let settings = RunSettings::resolve(&config, None, Overrides::default()).unwrap();

        assert!(settings.numeric_prefix);
        assert_eq!(settings.output, OutputMode::Capture);
        assert_eq!(settings.timeout, Some(Duration::from_secs(7)));
        assert_eq!(settings.color, ColorChoice::Never);
    }

    #[test]
    fn test_zero_timeout_disables_limit() {
        let config = RunnerConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        let settings = RunSettings::resolve(&config, None, Overrides::default()).unwrap();
        assert_eq!(settings.timeout, None);
    }

    #[cfg(unix)]
    #[test]
    fn test_environment_variables_are_expanded() {
        let Ok(home) = std::env::var("HOME") else {
            return;
        };
        let config = RunnerConfig {
            test_dir: Some("$HOME/suite".to_string()),
            ..Default::default()
        };
        let settings = RunSettings::resolve(
            &config,
            Some(Path::new("/elsewhere/exec-runner.toml")),
            Overrides::default(),
        )
        .unwrap();
        assert_eq!(settings.test_dir, PathBuf::from(home).join("suite"));
    }

    #[test]
    fn test_undefined_variable_is_config_error() {
        let config = RunnerConfig {
            test_dir: Some("$EXEC_RUNNER_SURELY_UNDEFINED_VAR/suite".to_string()),
            ..Default::default()
        };
        let err = RunSettings::resolve(&config, None, Overrides::default()).unwrap_err();
        assert!(matches!(err, RunnerError::Config { .. }));
    }
}
