//! Host settings for `serviciosd`.
//!
//! Read from `servicios.toml` in the working directory when it exists, then
//! overridden by `SERVICIOS_*` environment variables. A malformed override
//! is an error, never a silent fallback.

use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const CONFIG_FILE: &str = "servicios.toml";

const HOST_VAR: &str = "SERVICIOS_HOST";
const PORT_VAR: &str = "SERVICIOS_PORT";
const BIND_VAR: &str = "SERVICIOS_BIND";
const DIST_DIR_VAR: &str = "SERVICIOS_DIST_DIR";
const LOG_VAR: &str = "SERVICIOS_LOG";
const RUST_LOG_VAR: &str = "RUST_LOG";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_FILTER: &str = "serviciosd=info,servicios=info,tower_http=debug";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
}

/// Where the listener binds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Compiled front-end bundle.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Output directory of the front-end build, holding `index.html`.
    pub dist_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive.
    pub filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_owned(),
        }
    }
}

impl Config {
    /// Resolve settings from `servicios.toml` and the process environment.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed, when an environment
    /// override is malformed, or when the result does not validate.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
    }

    fn resolve<E>(path: &Path, env: E) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let mut config = Self::read(path)?;
        config.apply_env_overrides(env)?;
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `SERVICIOS_BIND` wins over `SERVICIOS_HOST`/`SERVICIOS_PORT`, and
    /// `RUST_LOG` wins over `SERVICIOS_LOG`.
    fn apply_env_overrides<E>(&mut self, env: E) -> Result<(), ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        if let Some(host) = env(HOST_VAR) {
            self.server.host = host;
        }
        if let Some(raw) = env(PORT_VAR) {
            self.server.port = parse_port(PORT_VAR, &raw)?;
        }
        if let Some(raw) = env(BIND_VAR) {
            let (host, port) = split_bind(&raw)?;
            self.server.host = host.to_owned();
            self.server.port = port;
        }
        if let Some(dir) = env(DIST_DIR_VAR) {
            self.site.dist_dir = PathBuf::from(dir);
        }
        if let Some(filter) = env(RUST_LOG_VAR).or_else(|| env(LOG_VAR)) {
            self.logging.filter = filter;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::Validation("server.host is empty".into()));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port is 0".into()));
        }
        if self.site.dist_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation("site.dist_dir is empty".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_port(var: &str, raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse().map_err(|err: ParseIntError| {
        ConfigError::Validation(format!("{var}={raw:?} is not a port: {err}"))
    })
}

fn split_bind(raw: &str) -> Result<(&str, u16), ConfigError> {
    match raw.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() => Ok((host, parse_port(BIND_VAR, port)?)),
        _ => Err(ConfigError::Validation(format!(
            "{BIND_VAR}={raw:?} is not host:port"
        ))),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Validation(String),
}
