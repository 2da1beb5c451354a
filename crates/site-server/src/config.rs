//! Server Configuration
//!
//! Everything comes from the environment (after `.env` is loaded).

/// Fallback when `SITE_URL` is not set
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// `BIND_ADDR`
    pub bind_addr: String,

    /// `SITE_URL`, no trailing slash
    pub site_url: String,

    /// `STATIC_DIR`, where the built frontend lives
    pub static_dir: String,

    /// `ASSISTANT_UPSTREAM_URL`, hosted assistant runtime endpoint
    pub assistant_upstream_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            site_url: DEFAULT_SITE_URL.into(),
            static_dir: "static".into(),
            assistant_upstream_url: None,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or(defaults.bind_addr),
            site_url: non_empty("SITE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.site_url),
            static_dir: non_empty("STATIC_DIR").unwrap_or(defaults.static_dir),
            assistant_upstream_url: non_empty("ASSISTANT_UPSTREAM_URL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.assistant_upstream_url.is_none());
    }

    #[test]
    fn test_reads_and_trims() {
        let env: HashMap<&str, &str> = [
            ("SITE_URL", "https://www.exemplo.com.br/"),
            ("ASSISTANT_UPSTREAM_URL", "  "),
            ("STATIC_DIR", "dist"),
        ]
        .into_iter()
        .collect();
        let config = SiteConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.site_url, "https://www.exemplo.com.br");
        assert_eq!(config.static_dir, "dist");
        assert!(config.assistant_upstream_url.is_none());
    }
}
