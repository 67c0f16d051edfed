//! Wallet connection DTOs
//!
//! The read-only view of the wallet connection that the connection core hands
//! to whatever renders it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::truncate_address;

/// Lifecycle status of a wallet connection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    #[default]
    Uninitialized,
    Initializing,
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Uninitialized => "uninitialized",
            ConnectionStatus::Initializing => "initializing",
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Connected => "connected",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported wallet integrations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Identity service reached through a redirect or popup (Internet Identity)
    RedirectIdentity,
    /// Extension that injects its API into the page (Plug)
    InjectedExtension,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::InjectedExtension, ProviderKind::RedirectIdentity];

    /// Human readable wallet name
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::RedirectIdentity => "Internet Identity",
            ProviderKind::InjectedExtension => "Plug",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of the connection state at one point in time.
///
/// `account_id` and `provider_kind` are only set while `status` is
/// [`ConnectionStatus::Connected`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSnapshot {
    pub status: ConnectionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_kind: Option<ProviderKind>,
}

impl ConnectionSnapshot {
    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    pub fn is_connecting(&self) -> bool {
        self.status == ConnectionStatus::Connecting
    }

    /// True while the widget should not accept a connect click
    pub fn is_busy(&self) -> bool {
        matches!(
            self.status,
            ConnectionStatus::Uninitialized | ConnectionStatus::Initializing | ConnectionStatus::Connecting
        )
    }

    /// Abbreviated account id for badges (`abcde...vwxyz`)
    pub fn short_account_id(&self) -> Option<String> {
        self.account_id.as_deref().map(truncate_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot() {
        let snapshot = ConnectionSnapshot::default();
        assert_eq!(snapshot.status, ConnectionStatus::Uninitialized);
        assert!(snapshot.is_busy());
        assert!(!snapshot.is_connected());
        assert_eq!(snapshot.short_account_id(), None);
    }

    #[test]
    fn test_snapshot_wire_format() {
        let snapshot = ConnectionSnapshot {
            status: ConnectionStatus::Connected,
            account_id: Some("abc-123".to_string()),
            provider_kind: Some(ProviderKind::InjectedExtension),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["status"], "connected");
        assert_eq!(json["account_id"], "abc-123");
        assert_eq!(json["provider_kind"], "injected_extension");

        let disconnected = serde_json::to_string(&ConnectionSnapshot {
            status: ConnectionStatus::Disconnected,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(disconnected, r#"{"status":"disconnected"}"#);
    }

    #[test]
    fn test_short_account_id() {
        let snapshot = ConnectionSnapshot {
            status: ConnectionStatus::Connected,
            account_id: Some("rwlgt-iiaaa-aaaaa-aaaaa-cai".to_string()),
            provider_kind: Some(ProviderKind::RedirectIdentity),
        };
        assert_eq!(snapshot.short_account_id().as_deref(), Some("rwlgt...a-cai"));
    }
}
