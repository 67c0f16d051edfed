//! # Formatting Utilities for the Site
//!
//! Labels derived from the connection snapshot. Address abbreviation itself
//! lives in the `shared` crate.

use lib_wallet::{ConnectionSnapshot, ConnectionStatus};

/// Text of the connect button for a given snapshot
pub fn widget_label(snapshot: &ConnectionSnapshot) -> String {
    match snapshot.status {
        ConnectionStatus::Connecting => "Connecting...".to_string(),
        ConnectionStatus::Connected => snapshot
            .short_account_id()
            .unwrap_or_else(|| "Wallet Connected".to_string()),
        ConnectionStatus::Uninitialized | ConnectionStatus::Initializing => "Checking session...".to_string(),
        ConnectionStatus::Disconnected => "Connect Wallet".to_string(),
    }
}

/// CSS modifier for a roadmap milestone badge
pub fn milestone_class(status: &str) -> &'static str {
    match status {
        "Completed" => "badge badge-done",
        "In Progress" => "badge badge-active",
        _ => "badge badge-upcoming",
    }
}

/// `transition-delay` style for staggered reveals
pub fn reveal_delay(base_ms: u32, index: usize, step_ms: u32) -> u32 {
    base_ms + index as u32 * step_ms
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_wallet::ProviderKind;

    #[test]
    fn test_widget_label() {
        let mut snapshot = ConnectionSnapshot {
            status: ConnectionStatus::Connecting,
            ..Default::default()
        };
        assert_eq!(widget_label(&snapshot), "Connecting...");

        snapshot.status = ConnectionStatus::Initializing;
        assert_eq!(widget_label(&snapshot), "Checking session...");
        assert_eq!(widget_label(&ConnectionSnapshot::default()), "Checking session...");

        snapshot.status = ConnectionStatus::Disconnected;
        assert_eq!(widget_label(&snapshot), "Connect Wallet");

        snapshot.status = ConnectionStatus::Connected;
        snapshot.account_id = Some("rwlgt-iiaaa-aaaaa-aaaaa-cai".to_string());
        snapshot.provider_kind = Some(ProviderKind::RedirectIdentity);
        assert_eq!(widget_label(&snapshot), "rwlgt...a-cai");
    }

    #[test]
    fn test_milestone_class() {
        assert_eq!(milestone_class("Completed"), "badge badge-done");
        assert_eq!(milestone_class("In Progress"), "badge badge-active");
        assert_eq!(milestone_class("Upcoming"), "badge badge-upcoming");
    }

    #[test]
    fn test_reveal_delay() {
        assert_eq!(reveal_delay(400, 2, 100), 600);
        assert_eq!(reveal_delay(0, 0, 100), 0);
    }
}
