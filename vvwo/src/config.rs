//! Application configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::dispatch::DispatchConfig;
use crate::nlu::NluConfig;

/// Default fixture file for the transit provider, inside the crate directory.
const DEFAULT_FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/transit_fixtures.json");

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be used
    #[error("invalid value for {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub nlu: NluConfig,
    pub dispatch: DispatchConfig,
    /// JSON file served by the fixture transit provider.
    pub fixtures_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable                 | Default                                  |
    /// |--------------------------|------------------------------------------|
    /// | `VVWO_NLU_URL`           | `https://vvwo.kilian.io`                 |
    /// | `VVWO_NLU_TIMEOUT_SECS`  | `30`                                     |
    /// | `VVWO_DEFAULT_STOP`      | `Sächsische Staats- und Unibibliothek`   |
    /// | `VVWO_HOME_LANDMARK`     | `Albertplatz`                            |
    /// | `VVWO_HERE_TOKEN`        | `hier`                                   |
    /// | `VVWO_HOME_TOKEN`        | `hause`                                  |
    /// | `VVWO_TRANSIT_FIXTURES`  | `<crate dir>/data/transit_fixtures.json` |
    /// | `VVWO_BIND_ADDR`         | `127.0.0.1:3000`                         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut nlu = NluConfig::default();
        if let Some(url) = lookup("VVWO_NLU_URL") {
            nlu = nlu.with_base_url(url);
        }
        if let Some(secs) = lookup("VVWO_NLU_TIMEOUT_SECS") {
            let secs = secs.trim().parse().map_err(|e| ConfigError::Invalid {
                name: "VVWO_NLU_TIMEOUT_SECS",
                message: format!("{e}"),
            })?;
            nlu = nlu.with_timeout(secs);
        }

        let mut dispatch = DispatchConfig::default();
        if let Some(stop) = non_empty(&lookup, "VVWO_DEFAULT_STOP")? {
            dispatch.default_stop = stop;
        }
        if let Some(landmark) = non_empty(&lookup, "VVWO_HOME_LANDMARK")? {
            dispatch.home_landmark = landmark;
        }
        if let Some(token) = non_empty(&lookup, "VVWO_HERE_TOKEN")? {
            dispatch = dispatch.with_here_token(token);
        }
        if let Some(token) = non_empty(&lookup, "VVWO_HOME_TOKEN")? {
            dispatch = dispatch.with_home_token(token);
        }

        let fixtures_path = lookup("VVWO_TRANSIT_FIXTURES")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURES));

        let bind_addr = lookup("VVWO_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e| ConfigError::Invalid {
                name: "VVWO_BIND_ADDR",
                message: format!("{e}"),
            })?;

        Ok(Self {
            nlu,
            dispatch,
            fixtures_path,
            bind_addr,
        })
    }
}

/// A variable that, when set, must not be blank.
fn non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<String>, ConfigError> {
    match lookup(name) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Invalid {
            name,
            message: "must not be empty".to_string(),
        }),
        other => Ok(other),
    }
}
