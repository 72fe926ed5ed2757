use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

/// Location and file names of the seven reference tables
///
/// The names default to the shapes the dataset ships with; deployments
/// that rename files override the matching knob rather than the code.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_data_dir")]
    pub dir: String,
    #[serde(default = "default_training_file")]
    pub training_file: String,
    #[serde(default = "default_severity_file")]
    pub severity_file: String,
    #[serde(default = "default_description_file")]
    pub description_file: String,
    #[serde(default = "default_diets_file")]
    pub diets_file: String,
    #[serde(default = "default_medications_file")]
    pub medications_file: String,
    #[serde(default = "default_precautions_file")]
    pub precautions_file: String,
    #[serde(default = "default_workout_file")]
    pub workout_file: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            training_file: default_training_file(),
            severity_file: default_severity_file(),
            description_file: default_description_file(),
            diets_file: default_diets_file(),
            medications_file: default_medications_file(),
            precautions_file: default_precautions_file(),
            workout_file: default_workout_file(),
        }
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}
fn default_training_file() -> String {
    "Training.csv".to_string()
}
fn default_severity_file() -> String {
    "Symptom-severity.csv".to_string()
}
fn default_description_file() -> String {
    "description.csv".to_string()
}
fn default_diets_file() -> String {
    "diets.csv".to_string()
}
fn default_medications_file() -> String {
    "medications.csv".to_string()
}
fn default_precautions_file() -> String {
    "precautions_df.csv".to_string()
}
fn default_workout_file() -> String {
    "workout_df.csv".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Cap on symptoms accepted per request; requests above it are
    /// rejected outright
    #[serde(default = "default_max_selected")]
    pub max_selected: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_selected: default_max_selected(),
        }
    }
}

fn default_max_selected() -> usize {
    50
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with REMEDI_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. REMEDI_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("REMEDI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("REMEDI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Shorthand overrides used by deployment scripts
///
/// DATA_DIR is checked before the namespaced REMEDI_DATASET__DIR form.
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(dir) = env::var("DATA_DIR").or_else(|_| env::var("REMEDI_DATASET__DIR")) {
        builder = builder.set_override("dataset.dir", dir)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset_file_names() {
        let dataset = DatasetSettings::default();
        assert_eq!(dataset.dir, "data");
        assert_eq!(dataset.training_file, "Training.csv");
        assert_eq!(dataset.severity_file, "Symptom-severity.csv");
        assert_eq!(dataset.workout_file, "workout_df.csv");
    }

    #[test]
    fn test_default_server() {
        let server = ServerSettings::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
        assert!(server.workers.is_none());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_default_matching_cap() {
        assert_eq!(MatchingSettings::default().max_selected, 50);
    }
}
