use std::env;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    pub log_level: String,
    pub event_buffer_size: usize,
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            http_host: env::var("HTTP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            http_port: parse_or_default("HTTP_PORT", 5000)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            event_buffer_size: parse_or_default("EVENT_BUFFER_SIZE", 1024)?,
            seed_sample_data: parse_or_default("SEED_SAMPLE_DATA", true)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|err| AppError::Internal(format!("invalid {key}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::parse_value;

    #[test]
    fn parses_port_with_surrounding_whitespace() {
        let port: u16 = parse_value("HTTP_PORT", " 8080 ").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn rejects_out_of_range_port() {
        let result: Result<u16, _> = parse_value("HTTP_PORT", "70000");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("invalid HTTP_PORT"));
    }

    #[test]
    fn parses_seed_flag() {
        let seed: bool = parse_value("SEED_SAMPLE_DATA", "false").unwrap();
        assert!(!seed);
    }
}
