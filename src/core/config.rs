//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Default tracing filter when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public URL the site is reachable under, used in startup logs
    /// Example: https://leadpilot.ai
    pub site_url: Option<String>,

    /// Tracing filter directive used when `RUST_LOG` is unset
    /// Example: info,leadpilot=debug
    pub log_level: String,

    /// Whether responses are brotli/gzip compressed
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            site_url: std::env::var("SITE_URL").ok().filter(|v| !v.is_empty()),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            compression: std::env::var("ENABLE_COMPRESSION")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Check if a public URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }

    /// URL to announce at startup: the public URL if set, else the bind address
    pub fn announced_url(&self, addr: &std::net::SocketAddr) -> String {
        self.site_url
            .clone()
            .unwrap_or_else(|| format!("http://{}", addr))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            compression: true,
        }
    }
}

/// Interpret an on/off environment value. Anything not clearly "off" is on.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.has_site_url());
        assert_eq!(config.log_level, "info");
        assert!(config.compression);
    }

    #[test]
    fn test_has_site_url() {
        let config = Config {
            site_url: Some("https://leadpilot.ai".to_string()),
            ..Config::default()
        };
        assert!(config.has_site_url());
    }

    #[test]
    fn test_announced_url() {
        let addr: std::net::SocketAddr = "127.0.0.1:3000".parse().unwrap();

        let local = Config::default();
        assert_eq!(local.announced_url(&addr), "http://127.0.0.1:3000");

        let public = Config {
            site_url: Some("https://leadpilot.ai".to_string()),
            ..Config::default()
        };
        assert_eq!(public.announced_url(&addr), "https://leadpilot.ai");
    }

    #[test]
    fn test_parse_flag() {
        for off in ["0", "false", "OFF", " no "] {
            assert!(!parse_flag(off), "{off} should disable");
        }
        for on in ["1", "true", "on", "yes", ""] {
            assert!(parse_flag(on), "{on} should enable");
        }
    }
}
