use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::banner;
use crate::csrf::DEFAULT_TOKEN_MAX_AGE_MILLIS;
use crate::rate_limit::RateLimitConfig;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    pub rate_limit: Option<RateLimitConfig>,
    pub csrf: Option<CsrfConfig>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct CsrfConfig {
    pub max_age_millis: Option<i64>,
}

impl CsrfConfig {
    pub fn max_age(&self) -> i64 {
        self.max_age_millis.unwrap_or(DEFAULT_TOKEN_MAX_AGE_MILLIS)
    }
}

pub fn load_config() -> Config {
    let path = PathBuf::from("formguard.toml");

    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(config) => {
                    banner::print_success(&format!("Loaded config from {}", path.display()));
                    return config;
                }
                Err(e) => {
                    banner::print_error(&format!("Failed to parse {}: {}", path.display(), e))
                }
            },
            Err(e) => banner::print_error(&format!("Failed to read {}: {}", path.display(), e)),
        }
    } else {
        banner::print_warning(&format!(
            "No formguard.toml found at {}. Using defaults.",
            path.display()
        ));
    }
    Config::default()
}
