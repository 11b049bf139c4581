//! Environment-driven settings.
//!
//! | variable                 | meaning                                    |
//! |--------------------------|--------------------------------------------|
//! | `BASE16_FETCH_STRATEGY`  | `fanout` (default) or `bulk`               |
//! | `BASE16_FETCH_WORKERS`   | fan-out pool size, at least 1 (default 4)  |
//! | `BASE16_SCHEMES_URL`     | registry document for `fanout`             |
//! | `BASE16_SCHEMES_REPO`    | aggregate repository for `bulk`            |
//!
//! The strategy also fixes where scheme files are looked for, in directory
//! mode too: `fanout` → `<dir>/*/*.yaml`, `bulk` → `<dir>/*.yaml`.

use anyhow::{bail, Context, Result};

use base16_fetch::{acquire::SCHEMES_REPO, registry::SCHEMES_URL, FetchStrategy, DEFAULT_WORKERS};

pub const STRATEGY_VAR: &str = "BASE16_FETCH_STRATEGY";
pub const WORKERS_VAR: &str = "BASE16_FETCH_WORKERS";
pub const SCHEMES_URL_VAR: &str = "BASE16_SCHEMES_URL";
pub const SCHEMES_REPO_VAR: &str = "BASE16_SCHEMES_REPO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub strategy: FetchStrategy,
    pub workers: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let strategy = match get(STRATEGY_VAR).as_deref().map(str::trim) {
            None | Some("") | Some("fanout") => FetchStrategy::FanOut {
                registry_url: get(SCHEMES_URL_VAR).unwrap_or_else(|| SCHEMES_URL.to_string()),
            },
            Some("bulk") => FetchStrategy::Bulk {
                repository: get(SCHEMES_REPO_VAR).unwrap_or_else(|| SCHEMES_REPO.to_string()),
            },
            Some(other) => bail!("{STRATEGY_VAR}: unknown strategy '{other}'; expected: fanout, bulk"),
        };

        let workers = match get(WORKERS_VAR) {
            None => DEFAULT_WORKERS,
            Some(raw) => {
                let n: usize = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{WORKERS_VAR}: '{raw}' is not a number"))?;
                if n == 0 {
                    bail!("{WORKERS_VAR} must be at least 1");
                }
                n
            }
        };

        Ok(Settings { strategy, workers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_to_fan_out_with_four_workers() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.strategy, FetchStrategy::fan_out());
        assert_eq!(s.workers, 4);
    }

    #[test]
    fn bulk_uses_repo_override() {
        let s = settings(&[(STRATEGY_VAR, "bulk"), (SCHEMES_REPO_VAR, "file:///schemes")]).unwrap();
        assert_eq!(
            s.strategy,
            FetchStrategy::Bulk {
                repository: "file:///schemes".to_string()
            }
        );
    }

    #[test]
    fn fan_out_uses_url_override() {
        let s = settings(&[(SCHEMES_URL_VAR, "https://mirror.example/list.yaml")]).unwrap();
        assert_eq!(
            s.strategy,
            FetchStrategy::FanOut {
                registry_url: "https://mirror.example/list.yaml".to_string()
            }
        );
    }

    #[test]
    fn rejects_unknown_strategy_and_bad_workers() {
        assert!(settings(&[(STRATEGY_VAR, "rsync")]).is_err());
        assert!(settings(&[(WORKERS_VAR, "many")]).is_err());
        assert!(settings(&[(WORKERS_VAR, "0")]).is_err());
        assert_eq!(settings(&[(WORKERS_VAR, " 8 ")]).unwrap().workers, 8);
    }
}
