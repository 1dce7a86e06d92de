use std::env;
use std::fmt::Formatter;
use std::time::Duration;

use dotenv::dotenv;

pub const DEFAULT_BRASIL_API_URL: &str = "https://brasilapi.com.br/api/cep/v1";
pub const DEFAULT_VIA_CEP_URL: &str = "https://viacep.com.br/ws";
const DEFAULT_TIMEOUT_MS: u64 = 1000;

#[derive(Debug)]
pub enum ConfigError {
    InvalidTimeout(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ConfigError::InvalidTimeout(value) => {
                write!(f, "LOOKUP_TIMEOUT_MS must be a positive integer, got '{}'", value)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub brasil_api_url: String,
    pub via_cep_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            brasil_api_url: DEFAULT_BRASIL_API_URL.to_owned(),
            via_cep_url: DEFAULT_VIA_CEP_URL.to_owned(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenv().ok();

        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let timeout = match lookup("LOOKUP_TIMEOUT_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => defaults.timeout,
        };

        Ok(Config {
            brasil_api_url: lookup("BRASIL_API_URL")
                .map(trim_base)
                .unwrap_or(defaults.brasil_api_url),
            via_cep_url: lookup("VIA_CEP_URL")
                .map(trim_base)
                .unwrap_or(defaults.via_cep_url),
            timeout,
        })
    }
}

fn trim_base(url: String) -> String {
    url.trim().trim_end_matches('/').to_owned()
}
