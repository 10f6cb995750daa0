use std::{fmt::Display, str::FromStr};
use tracing::warn;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_HTTP_WORKERS: usize = 4;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on. `0` lets the OS pick one.
    pub port: u16,
    /// Number of http workers serving requests
    pub http_workers: usize,
}

impl Config {
    pub fn new() -> Self {
        let port = parse_env_or("PORT", DEFAULT_PORT, |_| true);
        let http_workers = parse_env_or("HTTP_WORKERS", DEFAULT_HTTP_WORKERS, |workers| {
            *workers > 0
        });
        Self { port, http_workers }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env_or<T, F>(key: &str, default: T, is_valid: F) -> T
where
    T: FromStr + Display,
    F: Fn(&T) -> bool,
{
    let value = match std::env::var(key) {
        Ok(value) => value,
        Err(_) => return default,
    };
    match value.parse::<T>() {
        Ok(parsed) if is_valid(&parsed) => parsed,
        _ => {
            warn!(
                "The given {}: {} is not valid, falling back to the default value: {}.",
                key, value, default
            );
            default
        }
    }
}
