pub mod config_scheme;
pub mod helper_functions;
pub mod market_config;
pub mod service_config;
