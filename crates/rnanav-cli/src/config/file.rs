use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConditions {
    pub ion_concentration: Option<f64>,
    pub temperature: Option<f64>,
    pub crowding_index: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileOutput {
    pub directory: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub sequence: Option<String>,
    pub conditions: Option<FileConditions>,
    pub output: Option<FileOutput>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Applies `KEY=VALUE` overrides in order; later pairs win.
    pub fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            match key {
                "sequence" => self.sequence = Some(value_str.to_string()),
                "conditions.ion-concentration" => {
                    self.conditions
                        .get_or_insert_with(Default::default)
                        .ion_concentration = Some(parse_float(key, value_str)?);
                }
                "conditions.temperature" => {
                    self.conditions
                        .get_or_insert_with(Default::default)
                        .temperature = Some(parse_float(key, value_str)?);
                }
                "conditions.crowding-index" => {
                    self.conditions
                        .get_or_insert_with(Default::default)
                        .crowding_index = Some(parse_float(key, value_str)?);
                }
                "output.directory" => {
                    self.output.get_or_insert_with(Default::default).directory =
                        Some(PathBuf::from(value_str));
                }
                "output.format" => {
                    let format = match value_str {
                        "text" => OutputFormat::Text,
                        "json" => OutputFormat::Json,
                        other => {
                            return Err(CliError::Config(format!(
                                "Invalid value for {}: '{}'. Expected 'text' or 'json'.",
                                key, other
                            )));
                        }
                    };
                    self.output.get_or_insert_with(Default::default).format = Some(format);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_float(key: &str, value_str: &str) -> Result<f64> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
    })
}
