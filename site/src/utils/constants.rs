//! Application constants

use lib_wallet::WalletConfig;

/// In-page anchors shown in the navbar
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Features", "#features"),
    ("Token", "#token"),
    ("Roadmap", "#roadmap"),
    ("Community", "#community"),
];

pub const GITHUB_URL: &str = "https://github.com/leonshion";
pub const DFINITY_URL: &str = "https://dfinity.org/";

// UI constants
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 20.0;
pub const TOAST_DURATION_MS: u32 = 5000;
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Wallet configuration with the build-time overrides applied.
///
/// `INDA_IDENTITY_PROVIDER_URL` points the redirect login at a local replica;
/// `INDA_IC_HOST` does the same for Plug. An invalid override is logged and
/// the mainnet defaults are used instead.
pub fn site_config() -> WalletConfig {
    let mut config = WalletConfig::default();
    if let Some(url) = option_env!("INDA_IDENTITY_PROVIDER_URL") {
        config = config.with_identity_provider(url);
    }
    if let Some(host) = option_env!("INDA_IC_HOST") {
        config = config.with_ic_host(host);
    }

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::error!("[WALLET] Invalid wallet configuration, using defaults: {}", e);
            WalletConfig::default()
        }
    }
}
