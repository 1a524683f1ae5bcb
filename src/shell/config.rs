use std::net::Ipv4Addr;

use config::{ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

const FILE_NAME: &str = "logbook";
const ENV_PREFIX: &str = "LOGBOOK";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub address: Ipv4Addr,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    /// Defaults, then `logbook.toml` if present, then `LOGBOOK_*` variables
    /// (a `.env` file is loaded into the environment first).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        defaults()?
            .add_source(File::with_name(FILE_NAME).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: Ipv4Addr::LOCALHOST,
            port: 8080,
            log_level: String::from("info"),
        }
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let Config {
        address,
        port,
        log_level,
    } = Config::default();

    config::Config::builder()
        .set_default("address", address.to_string())?
        .set_default("port", port)?
        .set_default("log_level", log_level)
}
