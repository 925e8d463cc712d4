use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use eyre::WrapErr;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(eyre::eyre!("unknown log format '{other}', expected json or pretty")),
        }
    }
}

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    /// Tera template overriding the built-in report.
    pub report_template: Option<PathBuf>,
    /// Single allowed CORS origin; any origin when unset.
    pub allowed_origin: Option<HeaderValue>,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("PSORA_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .wrap_err("PSORA_BIND_ADDR is not a socket address")?;

        let log_format = get("PSORA_LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>())
            .transpose()
            .wrap_err("invalid PSORA_LOG_FORMAT")?
            .unwrap_or_default();

        let allowed_origin = get("PSORA_ALLOWED_ORIGIN")
            .map(|v| HeaderValue::from_str(&v))
            .transpose()
            .wrap_err("PSORA_ALLOWED_ORIGIN is not a valid header value")?;

        Ok(Self {
            bind_addr,
            log_format,
            report_template: get("PSORA_REPORT_TEMPLATE").map(PathBuf::from),
            allowed_origin,
        })
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let origin = match &self.allowed_origin {
            Some(origin) => AllowOrigin::exact(origin.clone()),
            None => AllowOrigin::from(Any),
        };
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
