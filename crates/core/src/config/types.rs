use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::store::VariableStore;
use crate::vars::DEFAULT_SEPARATOR;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct Profile {
    /// Fixed seed for the random source. Unset means OS entropy.
    pub seed: Option<u64>,
    /// Default list separator (a single character). Defaults to `,`.
    pub separator: Option<String>,
    /// Variable values handed to the accessor. Scalars of any TOML type are
    /// kept as their text form; arrays and tables are rejected on resolve.
    #[serde(default)]
    pub vars: HashMap<String, toml::Value>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vars: VariableStore,
    pub seed: Option<u64>,
    pub separator: char,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Settings used when no config file exists.
    pub fn builtin() -> Self {
        Self {
            active_profile: "default".to_string(),
            vars: VariableStore::new(),
            seed: None,
            separator: DEFAULT_SEPARATOR,
            logging: LoggingConfig::default(),
        }
    }
}
