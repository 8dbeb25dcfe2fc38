use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Maximum accepted residual, in distance units, when locating a source.
    pub locator_tolerance: f64,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            locator_tolerance: 10.0,
            request_timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let locator_tolerance = match std::env::var("LOCATOR_TOLERANCE") {
            Ok(raw) => parse_tolerance(&raw)?,
            Err(_) => defaults.locator_tolerance,
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            locator_tolerance,
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| defaults.request_timeout_secs.to_string())
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

fn parse_tolerance(raw: &str) -> Result<f64> {
    let tolerance = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("LOCATOR_TOLERANCE '{raw}' is not a number"))?;
    if !tolerance.is_finite() || tolerance < 0.0 {
        bail!("LOCATOR_TOLERANCE must be finite and non-negative, got {tolerance}");
    }
    Ok(tolerance)
}
