use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use crate::cli::{ConditionArgs, OutputFormat};
use crate::error::{CliError, Result};
use rnanav::core::models::conditions::Conditions;
use rnanav::core::models::sequence::Sequence;
use rnanav::engine::error::EngineError;
use std::path::PathBuf;
use tracing::debug;

/// Fully resolved inputs for one command invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub sequence: Sequence,
    pub conditions: Conditions,
    pub export_directory: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Merges defaults, the config file, `-S` overrides and flags, in increasing
/// order of precedence.
pub fn build_settings(args: &ConditionArgs) -> Result<RunSettings> {
    let defaults = DefaultsConfig::default();

    let mut file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    file_config.apply_set_values(&args.set_values)?;

    let conditions_file = file_config.conditions.take().unwrap_or_default();
    let output_file = file_config.output.take().unwrap_or_default();

    let raw_sequence = args
        .sequence
        .clone()
        .or(file_config.sequence)
        .unwrap_or(defaults.sequence);
    let sequence = Sequence::parse(&raw_sequence).map_err(EngineError::from)?;

    let conditions = Conditions::new(
        args.ion_concentration
            .or(conditions_file.ion_concentration)
            .unwrap_or(defaults.ion_concentration),
        args.temperature
            .or(conditions_file.temperature)
            .unwrap_or(defaults.temperature),
        args.crowding_index
            .or(conditions_file.crowding_index)
            .unwrap_or(defaults.crowding_index),
    );

    if let Some(field) = conditions.first_non_finite() {
        return Err(CliError::Argument(format!(
            "{} must be a finite number",
            field
        )));
    }

    let settings = RunSettings {
        sequence,
        conditions,
        export_directory: output_file.directory,
        format: output_file.format.unwrap_or(defaults.format),
    };
    debug!("Resolved run settings: {:?}", &settings);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use once_cell::sync::Lazy;
    use std::fs;
    use std::path::Path;
    use tempfile::{TempDir, tempdir};

    static TEST_DIR: Lazy<TempDir> = Lazy::new(|| tempdir().expect("Failed to create temp dir"));

    fn write_config_file(name: &str, content: &str) -> PathBuf {
        let file_path = TEST_DIR.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn condition_args(extra: &[&str], config_path: Option<&Path>) -> ConditionArgs {
        let mut args = vec!["rnanav".to_string(), "simulate".to_string()];
        if let Some(path) = config_path {
            args.push("--config".to_string());
            args.push(path.to_str().unwrap().to_string());
        }
        args.extend(extra.iter().map(|s| s.to_string()));
        match Cli::parse_from(args).command {
            Commands::Simulate(sim) => sim.conditions,
            other => panic!("Expected 'simulate' subcommand, got {:?}", other),
        }
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let settings = build_settings(&condition_args(&[], None)).unwrap();
        assert_eq!(settings.sequence.as_str(), "GGGCGACUGAAGCGCCC");
        assert_eq!(settings.conditions, Conditions::new(10.0, 37.0, 25.0));
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.export_directory.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let path = write_config_file(
            "file_over_defaults.toml",
            r#"
            sequence = "AUAUAUAU"
            [conditions]
            ion-concentration = 40.0
            [output]
            directory = "out"
            "#,
        );
        let settings = build_settings(&condition_args(&[], Some(&path))).unwrap();
        assert_eq!(settings.sequence.as_str(), "AUAUAUAU");
        assert_eq!(settings.conditions, Conditions::new(40.0, 37.0, 25.0));
        assert_eq!(settings.export_directory, Some(PathBuf::from("out")));
    }

    #[test]
    fn set_values_override_file_and_flags_override_set_values() {
        let path = write_config_file(
            "set_and_flags.toml",
            r#"
            [conditions]
            temperature = 20.0
            crowding-index = 10.0
            "#,
        );
        let settings = build_settings(&condition_args(
            &[
                "-S",
                "conditions.temperature=60",
                "-S",
                "conditions.crowding-index=80",
                "--crowding",
                "90",
            ],
            Some(&path),
        ))
        .unwrap();
        assert_eq!(settings.conditions.temperature, 60.0);
        assert_eq!(settings.conditions.crowding_index, 90.0);
    }

    #[test]
    fn invalid_sequence_is_reported_as_engine_error() {
        let result = build_settings(&condition_args(&["--sequence", "ATGC"], None));
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::Sequence { .. }))
        ));
    }

    #[test]
    fn non_finite_flag_is_rejected() {
        let result = build_settings(&condition_args(&["--ion", "NaN"], None));
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}
