//! Process configuration, read from the environment.

use serde::Deserialize;

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "GRUBDASH_";

/// Runtime settings. Every field has a default, so an empty environment is valid.
///
/// | Variable | Default |
/// |----------|---------|
/// | `GRUBDASH_BIND_ADDR` | `127.0.0.1:5000` |
/// | `GRUBDASH_CHANNEL_CAPACITY` | `32` |
/// | `GRUBDASH_SEED` | `true` |
/// | `GRUBDASH_LOG_FILTER` | `info` (`RUST_LOG` wins when set) |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind_addr: String,
    /// Mailbox size of each resource actor.
    pub channel_capacity: usize,
    /// Load `data/*.json` into the stores at startup.
    pub seed: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            channel_capacity: 32,
            seed: true,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env()
    }

    /// Reads settings from explicit key/value pairs (keys carry the prefix).
    pub fn from_pairs<I>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(Config::from_pairs(Vec::new()).unwrap(), Config::default());
    }

    #[test]
    fn reads_prefixed_variables() {
        let config = Config::from_pairs(pairs(&[
            ("GRUBDASH_BIND_ADDR", "0.0.0.0:8080"),
            ("GRUBDASH_CHANNEL_CAPACITY", "4"),
            ("GRUBDASH_SEED", "false"),
            ("BIND_ADDR", "ignored:1"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.channel_capacity, 4);
        assert!(!config.seed);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(Config::from_pairs(pairs(&[("GRUBDASH_CHANNEL_CAPACITY", "lots")])).is_err());
    }
}
