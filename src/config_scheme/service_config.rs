use crate::config_scheme::helper_functions::{
    get_config_from_config_files, get_default_log_level,
};
use clap::ArgMatches;
use log::LevelFilter;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub log_level: LevelFilter,
}

impl ServiceConfig {
    pub fn new(matches: &ArgMatches) -> Result<Self, String> {
        let service_config = get_config_from_config_files(matches, "service_config")?;

        Self::from_config(&service_config)
    }

    pub fn from_config(service_config: &config::Config) -> Result<Self, String> {
        let default = Self::default();

        let log_level = match service_config.get_str("log_level") {
            Ok(log_level) => log_level
                .parse()
                .map_err(|_| format!("service_config: invalid log_level {:?}", log_level))?,
            Err(_) => default.log_level,
        };

        Ok(Self { log_level })
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: get_default_log_level(),
        }
    }
}
