#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::fmt;

use dashmap::DashMap;
use once_cell::sync::Lazy;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigKey {
    ApiUrl,
    ConfigFile,
    LogFile,
    TimeoutSecs,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::ApiUrl,
        ConfigKey::ConfigFile,
        ConfigKey::LogFile,
        ConfigKey::TimeoutSecs,
    ];
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigKey::ApiUrl => "api-url",
            ConfigKey::ConfigFile => "config-file",
            ConfigKey::LogFile => "log-file",
            ConfigKey::TimeoutSecs => "timeout-secs",
        };
        return f.write_str(name);
    }
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return Config::default(key);
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::ApiUrl => "http://127.0.0.1:5000",
            ConfigKey::ConfigFile => "elyra.yaml",
            ConfigKey::LogFile => "elyra-term.log",
            ConfigKey::TimeoutSecs => "30",
        };

        return res.to_string();
    }

    /// Resets every key to its default, then applies the given overrides.
    pub fn load(overrides: &[(ConfigKey, Option<&str>)]) {
        for key in ConfigKey::ALL {
            Config::set(key, &Config::default(key));
        }

        for (key, value) in overrides {
            if let Some(value) = value {
                log::debug!("Config {} = {}", key, value);
                Config::set(*key, value);
            }
        }
    }
}
