// Environment variable overrides

use crate::Overrides;
use std::env;

/// Prefix used when none is configured
pub const DEFAULT_PREFIX: &str = "ROSTRUM";

/// Environment variable loader
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Full variable name for a key, e.g. `host` -> `ROSTRUM_HOST`
    pub fn var_name(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }

    /// Overrides taken from the process environment
    pub fn overrides(&self) -> Overrides {
        self.overrides_from(|name| env::var(name).ok())
    }

    /// Overrides taken from an arbitrary lookup; empty values are ignored
    pub fn overrides_from<F>(&self, lookup: F) -> Overrides
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(&self.var_name(key)).filter(|v| !v.is_empty());

        Overrides {
            host: get("host"),
            base_path: get("base_path"),
            api_version: get("api_version"),
        }
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(Some(DEFAULT_PREFIX.to_string()))
    }
}
