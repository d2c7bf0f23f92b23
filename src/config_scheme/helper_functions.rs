use crate::config_scheme::service_config::ServiceConfig;
use clap::ArgMatches;
use env_logger::Builder;
use log::LevelFilter;

pub fn get_config_file_path(matches: &ArgMatches, key: &str) -> Option<String> {
    matches.value_of(key).map(|v| v.to_string())
}

pub fn get_config_from_config_files(
    matches: &ArgMatches,
    key: &str,
) -> Result<config::Config, String> {
    let mut config = config::Config::default();

    if let Some(path) = get_config_file_path(matches, key) {
        config
            .merge(config::File::with_name(&path))
            .map_err(|e| format!("{}: {}", key, e))?;
    } else {
        let env_key = "APP__".to_string() + &key.to_uppercase() + "_";

        config
            .merge(config::Environment::with_prefix(&env_key).separator("__"))
            .map_err(|e| format!("{}: {}", key, e))?;
    }

    Ok(config)
}

pub fn get_param_value_as_vec_of_string(config: &config::Config, key: &str) -> Option<Vec<String>> {
    if let Ok(string) = config.get_str(key) {
        Some(split_list(&string))
    } else {
        config.get_array(key).ok().map(|v| {
            v.into_iter()
                .filter_map(|v| v.into_str().ok())
                .map(|v| v.trim().to_string())
                .collect()
        })
    }
}

pub fn split_list(string: &str) -> Vec<String> {
    string
        .split(',')
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .collect()
}

pub fn set_log_level(service_config: &ServiceConfig) {
    let mut builder = Builder::from_default_env();
    builder.filter(Some("fx_triangulation"), service_config.log_level);
    let _ = builder.try_init();
}

pub fn get_default_log_level() -> LevelFilter {
    LevelFilter::Info
}
