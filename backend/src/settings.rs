//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SCOOPS_*` environment variables and an
//! optional config file, in that order of precedence.

use std::net::SocketAddr;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::memory::{Collection, UnknownCollection};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Returned for a log format other than `json` or `pretty`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log format `{0}`; expected json or pretty")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(UnknownLogFormat(s.to_owned())),
        }
    }
}

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SCOOPS")]
pub struct AppSettings {
    /// Interface to bind.
    #[ortho_config(default = String::from(DEFAULT_HOST))]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// `json` (default) or `pretty`.
    pub log_format: Option<String>,
    /// Collections to leave unprovisioned, e.g. `SCOOPS_UNPROVISIONED=rooms,users`.
    #[serde(default)]
    pub unprovisioned: Vec<String>,
}

impl AppSettings {
    /// Resolve host and port into a socket address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|err| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("invalid bind address {}:{}: {err}", self.host, self.port),
                )
            })
    }

    /// Parsed log format, falling back to JSON when unset.
    pub fn log_format(&self) -> Result<LogFormat, UnknownLogFormat> {
        self.log_format
            .as_deref()
            .map_or(Ok(LogFormat::default()), str::parse)
    }

    /// Collections the data store should leave out.
    pub fn unprovisioned(&self) -> Result<Vec<Collection>, UnknownCollection> {
        self.unprovisioned
            .iter()
            .map(String::as_str)
            .filter(|item| !item.trim().is_empty())
            .map(str::parse)
            .collect()
    }
}
