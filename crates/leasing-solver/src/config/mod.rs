use crate::money::Money;
use crate::workflows::rent_gap::SolverPolicy;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the solver service and CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub solver: SolverPolicy,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = match env::var("APP_LOG_FORMAT") {
            Ok(raw) => LogFormat::parse(&raw).ok_or(ConfigError::InvalidSetting {
                key: "APP_LOG_FORMAT",
                value: raw,
            })?,
            Err(_) => LogFormat::Compact,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                log_format,
            },
            solver: load_solver_policy()?,
        })
    }
}

fn load_solver_policy() -> Result<SolverPolicy, ConfigError> {
    let defaults = SolverPolicy::default();

    let policy = SolverPolicy {
        length_tie_tolerance: env_or::<Money>(
            "SOLVER_TIE_TOLERANCE",
            defaults.length_tie_tolerance,
        )?,
        combination_threshold: env_or::<Money>(
            "SOLVER_COMBINATION_THRESHOLD",
            defaults.combination_threshold,
        )?,
        min_gap_reduction_pct: env_or::<u8>(
            "SOLVER_MIN_REDUCTION_PCT",
            defaults.min_gap_reduction_pct,
        )?,
        max_combination_size: env_or::<usize>(
            "SOLVER_MAX_COMBINATION",
            defaults.max_combination_size,
        )?,
    };

    if policy.min_gap_reduction_pct > 100 {
        return Err(ConfigError::InvalidSetting {
            key: "SOLVER_MIN_REDUCTION_PCT",
            value: policy.min_gap_reduction_pct.to_string(),
        });
    }
    if policy.max_combination_size == 0 {
        return Err(ConfigError::InvalidSetting {
            key: "SOLVER_MAX_COMBINATION",
            value: "0".to_string(),
        });
    }
    if policy.length_tie_tolerance < Money::ZERO || policy.combination_threshold < Money::ZERO {
        return Err(ConfigError::InvalidSetting {
            key: "SOLVER_TIE_TOLERANCE/SOLVER_COMBINATION_THRESHOLD",
            value: format!(
                "{}/{}",
                policy.length_tie_tolerance, policy.combination_threshold
            ),
        });
    }

    Ok(policy)
}

fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidSetting { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidSetting { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidSetting { key, value } => {
                write!(f, "{key} has an unusable value '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort | ConfigError::InvalidSetting { .. } => None,
        }
    }
}
