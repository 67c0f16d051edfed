//! # Wallet Configuration
//!
//! Defaults target the Internet Computer mainnet. The site may override the
//! identity provider URL and the network host at build time; every override
//! goes through [`WalletConfig::validate`] before it is used.

use std::time::Duration;

use crate::provider::ConnectRequest;
use crate::state::ProviderKind;

/// Internet Identity login page
pub const DEFAULT_IDENTITY_PROVIDER_URL: &str = "https://identity.ic0.app";

/// Network endpoint handed to Plug's `requestConnect`
pub const DEFAULT_IC_HOST: &str = "https://mainnet.dfinity.network";

/// Redirect identity session lifetime (7 days)
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Plug extension in the Chrome Web Store
pub const PLUG_INSTALL_URL: &str =
    "https://chrome.google.com/webstore/detail/plug/cfbfdhimifdmdehjmkdobpcjfefblkjm";

const MAX_SESSION_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletConfig {
    /// Identity provider the redirect login is sent to
    pub identity_provider_url: String,

    /// Network endpoint for the injected extension
    pub ic_host: String,

    /// Canister ids the extension is allowed to talk to (empty: none)
    pub whitelist: Vec<String>,

    /// Lifetime requested for redirect identity sessions.
    ///
    /// Valid range: 1 minute to 30 days.
    pub session_ttl: Duration,

    /// Where the install prompt points when Plug is missing
    pub plug_install_url: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            identity_provider_url: DEFAULT_IDENTITY_PROVIDER_URL.to_string(),
            ic_host: DEFAULT_IC_HOST.to_string(),
            whitelist: Vec::new(),
            session_ttl: DEFAULT_SESSION_TTL,
            plug_install_url: PLUG_INSTALL_URL.to_string(),
        }
    }
}

impl WalletConfig {
    pub fn with_identity_provider(mut self, url: impl Into<String>) -> Self {
        self.identity_provider_url = url.into();
        self
    }

    pub fn with_ic_host(mut self, host: impl Into<String>) -> Self {
        self.ic_host = host.into();
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        for (name, url) in [
            ("identity_provider_url", &self.identity_provider_url),
            ("ic_host", &self.ic_host),
            ("plug_install_url", &self.plug_install_url),
        ] {
            if !is_http_url(url) {
                return Err(format!("{} must be an http(s) URL, got '{}'", name, url));
            }
        }

        if self.session_ttl < Duration::from_secs(60) || self.session_ttl > MAX_SESSION_TTL {
            return Err("session_ttl must be between 1 minute and 30 days".to_string());
        }

        if self.whitelist.iter().any(|id| id.trim().is_empty()) {
            return Err("whitelist entries must not be empty".to_string());
        }

        Ok(())
    }

    /// Parameters for a provider's connect call
    pub fn connect_request(&self) -> ConnectRequest {
        ConnectRequest {
            whitelist: self.whitelist.clone(),
            host: self.ic_host.clone(),
            identity_provider: self.identity_provider_url.clone(),
            max_time_to_live: self.session_ttl,
        }
    }

    /// Install page for a provider kind, if it needs installing at all
    pub fn install_url(&self, kind: ProviderKind) -> Option<&str> {
        match kind {
            ProviderKind::InjectedExtension => Some(&self.plug_install_url),
            ProviderKind::RedirectIdentity => None,
        }
    }
}

fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WalletConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.whitelist.is_empty());
        assert_eq!(config.session_ttl, Duration::from_secs(604_800));
    }

    #[test]
    fn test_rejects_bad_urls() {
        let config = WalletConfig::default().with_identity_provider("identity.ic0.app");
        assert!(config.validate().unwrap_err().contains("identity_provider_url"));

        let config = WalletConfig::default().with_ic_host("https://");
        assert!(config.validate().unwrap_err().contains("ic_host"));

        let config = WalletConfig::default().with_identity_provider("http://localhost:4943/?canisterId=rdmx6");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_session_ttl_out_of_range() {
        let mut config = WalletConfig::default();
        config.session_ttl = Duration::from_secs(10);
        assert!(config.validate().is_err());

        config.session_ttl = Duration::from_secs(31 * 24 * 60 * 60);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_connect_request() {
        let request = WalletConfig::default().connect_request();
        assert!(request.whitelist.is_empty());
        assert_eq!(request.host, "https://mainnet.dfinity.network");
        assert_eq!(request.identity_provider, "https://identity.ic0.app");
        assert_eq!(request.max_time_to_live_nanos(), 604_800_000_000_000);
    }

    #[test]
    fn test_install_url() {
        let config = WalletConfig::default();
        assert_eq!(config.install_url(ProviderKind::InjectedExtension), Some(PLUG_INSTALL_URL));
        assert_eq!(config.install_url(ProviderKind::RedirectIdentity), None);
    }
}
