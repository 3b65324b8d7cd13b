use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    /// Optional path to a permission catalog JSON file; the built-in catalog
    /// is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub send_success_rate: f64,
    pub verify_success_rate: f64,
    pub bypass_code: String,
    pub send_delay_ms: u64,
    pub verify_delay_ms: u64,
    pub resend_cooldown_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let catalog_path = env::var("CATALOG_PATH").ok().map(PathBuf::from);

        let send_success_rate = parse_rate("SEND_SUCCESS_RATE", 0.9)?;
        let verify_success_rate = parse_rate("VERIFY_SUCCESS_RATE", 0.7)?;

        let bypass_code = env::var("OTP_BYPASS_CODE").unwrap_or_else(|_| "123456".to_string());
        if bypass_code.len() != 6 || !bypass_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidBypassCode);
        }

        let send_delay_ms = parse_u64("SEND_DELAY_MS", 1500)?;
        let verify_delay_ms = parse_u64("VERIFY_DELAY_MS", 1000)?;
        let resend_cooldown_secs = parse_u64("RESEND_COOLDOWN_SECS", 60)?;

        Ok(Config {
            catalog_path,
            send_success_rate,
            verify_success_rate,
            bypass_code,
            send_delay_ms,
            verify_delay_ms,
            resend_cooldown_secs,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            send_success_rate: 0.9,
            verify_success_rate: 0.7,
            bypass_code: "123456".to_string(),
            send_delay_ms: 1500,
            verify_delay_ms: 1000,
            resend_cooldown_secs: 60,
        }
    }
}

fn parse_u64(key: &str, default: u64) -> Result<u64, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidInteger(key.to_string())),
        Err(_) => Ok(default),
    }
}

fn parse_rate(key: &str, default: f64) -> Result<f64, ConfigError> {
    let rate = match env::var(key) {
        Ok(value) => value
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidRate(key.to_string()))?,
        Err(_) => default,
    };
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidRate(key.to_string()));
    }
    Ok(rate)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be a number between 0.0 and 1.0")]
    InvalidRate(String),

    #[error("OTP_BYPASS_CODE must be exactly 6 digits")]
    InvalidBypassCode,

    #[error("{0} must be a non-negative integer")]
    InvalidInteger(String),
}
