/* -------------------------------------------------------------------------- */
/*                                   Import                                   */
/* -------------------------------------------------------------------------- */

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::CircularBufferError,
    operation::{default_scenario, Operation},
    ring_buffer::SEPARATOR,
};

/* -------------------------------------------------------------------------- */
/*                                  Constants                                 */
/* -------------------------------------------------------------------------- */
pub const CONFIG_FILE_PATH: &str = "./config.yaml";
const DEFAULT_LOG_PATH: &str = "./circbuf.log";
const DEFAULT_HISTORY_SIZE: usize = 32;

/* -------------------------------------------------------------------------- */
/*                                   Struct                                   */
/* -------------------------------------------------------------------------- */
/// settings shared by the driver and the shell
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// capacity of the buffer, the user is prompted for it when missing
    #[serde(default)]
    pub capacity: Option<i64>,

    /// placed between two items when the buffer is displayed
    #[serde(default = "default_separator")]
    pub separator: String,

    /// where the logger appends its entries
    #[serde(rename = "logfile", default = "default_log_file")]
    pub log_file: String,

    /// how many lines the shell remembers
    #[serde(rename = "historysize", default = "default_history_size")]
    pub history_size: usize,

    /// the operations replayed by the driver
    #[serde(default)]
    pub scenario: Vec<Operation>,
}

/* -------------------------------------------------------------------------- */
/*                               Implementation                               */
/* -------------------------------------------------------------------------- */
impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: None,
            separator: default_separator(),
            log_file: default_log_file(),
            history_size: default_history_size(),
            scenario: Vec::new(),
        }
    }
}

impl Config {
    /// create a config based on the file located at the root of the project,
    /// the default config is used if there is no such file
    pub fn load() -> Result<Self, CircularBufferError> {
        let path = Path::new(CONFIG_FILE_PATH);
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, CircularBufferError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, CircularBufferError> {
        let config: Config = serde_yaml::from_str(contents)?;
        if let Some(capacity) = config.capacity {
            validate_capacity(capacity)?;
        }
        if config.history_size == 0 {
            return Err(CircularBufferError::Custom(
                "historysize must be greater than 0".to_owned(),
            ));
        }
        Ok(config)
    }

    /// the configured capacity once validated, None if the user must be prompted
    pub fn buffer_capacity(&self) -> Option<usize> {
        self.capacity
            .and_then(|capacity| validate_capacity(capacity).ok())
    }

    /// the configured scenario, or the default walkthrough when none is given
    pub fn scenario(&self) -> Vec<Operation> {
        if self.scenario.is_empty() {
            default_scenario()
        } else {
            self.scenario.clone()
        }
    }
}

/// validate a capacity typed by the user, anything that is not a strictly
/// positive integer is refused
pub fn parse_capacity(input: &str) -> Result<usize, CircularBufferError> {
    let capacity = input.trim().parse::<i64>().map_err(|_| {
        CircularBufferError::Custom(format!("`{}` is not a valid capacity", input.trim()))
    })?;
    validate_capacity(capacity)
}

pub fn validate_capacity(capacity: i64) -> Result<usize, CircularBufferError> {
    match usize::try_from(capacity) {
        Ok(capacity) if capacity > 0 => Ok(capacity),
        _ => Err(CircularBufferError::InvalidCapacity(capacity)),
    }
}

fn default_separator() -> String {
    SEPARATOR.to_owned()
}

fn default_log_file() -> String {
    DEFAULT_LOG_PATH.to_owned()
}

fn default_history_size() -> usize {
    DEFAULT_HISTORY_SIZE
}

/* -------------------------------------------------------------------------- */
/*                                    Test                                    */
/* -------------------------------------------------------------------------- */
