use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub display: DisplayConfig,
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

        let defaults = DisplayConfig::default();
        let currency_symbol = env::var("APP_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol);
        let phone_country_code =
            env::var("APP_PHONE_COUNTRY_CODE").unwrap_or(defaults.phone_country_code);
        if phone_country_code.is_empty()
            || !phone_country_code.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ConfigError::InvalidCountryCode {
                value: phone_country_code,
            });
        }
        let area_unit = env::var("APP_AREA_UNIT").unwrap_or(defaults.area_unit);
        let placeholder = env::var("APP_PLACEHOLDER").unwrap_or(defaults.placeholder);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            display: DisplayConfig {
                currency_symbol,
                phone_country_code,
                area_unit,
                placeholder,
            },
        })
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

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Locale knobs for rendering listing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    /// Digits only, without the leading `+`.
    pub phone_country_code: String,
    pub area_unit: String,
    pub placeholder: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "\u{20b9}".to_string(),
            phone_country_code: "91".to_string(),
            area_unit: "sqft".to_string(),
            placeholder: "-".to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidCountryCode { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { source } => {
                write!(f, "APP_HOST must be a valid IP address: {}", source)
            }
            ConfigError::InvalidCountryCode { value } => write!(
                f,
                "APP_PHONE_COUNTRY_CODE must contain digits only (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidCountryCode { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
