use std::env;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_NUMBERS: usize = 10_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_name: String,
    pub host: String,
    pub port: u16,
    pub max_numbers: usize,
    pub plain_output: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("SORT_SERVICE_NAME")
                .unwrap_or_else(|_| "ferris-sort".to_string()),
            host: env::var("SORT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_or(env::var("SORT_PORT").ok(), DEFAULT_PORT),
            max_numbers: parse_or(env::var("SORT_MAX_NUMBERS").ok(), DEFAULT_MAX_NUMBERS),
            plain_output: is_truthy(&env::var("SORT_PLAIN_OUTPUT").unwrap_or_default()),
        }
    }

    /// Configuration for a server bound to localhost on `port`.
    pub fn local(port: u16) -> Self {
        Self {
            service_name: "ferris-sort".to_string(),
            host: "127.0.0.1".to_string(),
            port,
            max_numbers: DEFAULT_MAX_NUMBERS,
            plain_output: false,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value == "1" || value == "true" || value == "yes"
}

/// Parses an optional variable value, falling back to `default` when it is
/// missing or malformed.
fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_values() {
        for value in ["1", "true", "yes", "TRUE", " Yes "] {
            assert!(is_truthy(value), "{value:?} should be truthy");
        }
        for value in ["", "0", "false", "no", "on"] {
            assert!(!is_truthy(value), "{value:?} should not be truthy");
        }
    }

    #[test]
    fn port_parses_or_falls_back() {
        assert_eq!(parse_or(Some("9000".to_string()), DEFAULT_PORT), 9000);
        assert_eq!(parse_or(Some(" 9001 ".to_string()), DEFAULT_PORT), 9001);
        assert_eq!(parse_or(Some("http".to_string()), DEFAULT_PORT), DEFAULT_PORT);
        assert_eq!(parse_or(Some("70000".to_string()), DEFAULT_PORT), DEFAULT_PORT);
        assert_eq!(parse_or(None, DEFAULT_PORT), DEFAULT_PORT);
    }

    #[test]
    fn max_numbers_parses_or_falls_back() {
        assert_eq!(parse_or(Some("250".to_string()), DEFAULT_MAX_NUMBERS), 250);
        assert_eq!(
            parse_or(Some("-1".to_string()), DEFAULT_MAX_NUMBERS),
            DEFAULT_MAX_NUMBERS
        );
        assert_eq!(
            parse_or(Some("".to_string()), DEFAULT_MAX_NUMBERS),
            DEFAULT_MAX_NUMBERS
        );
    }
}
