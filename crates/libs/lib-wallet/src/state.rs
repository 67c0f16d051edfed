//! Connection state
//!
//! [`ConnectionState`] carries the account id and provider kind only in its
//! `Connected` variant, so "account id present iff connected" holds by
//! construction. [`ConnectionState::can_transition_to`] encodes the allowed
//! edges; the controller refuses anything else.

use std::fmt;

use serde::Serialize;

use crate::error::ConnectFailure;
pub use shared::dto::wallet::{ConnectionSnapshot, ConnectionStatus, ProviderKind};

/// Opaque, non-empty account identifier (principal text)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Returns `None` for empty or whitespace-only identifiers.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(AccountId(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Uninitialized,
    Initializing,
    Disconnected,
    Connecting,
    Connected {
        account_id: AccountId,
        provider: ProviderKind,
    },
}

impl ConnectionState {
    pub fn status(&self) -> ConnectionStatus {
        match self {
            ConnectionState::Uninitialized => ConnectionStatus::Uninitialized,
            ConnectionState::Initializing => ConnectionStatus::Initializing,
            ConnectionState::Disconnected => ConnectionStatus::Disconnected,
            ConnectionState::Connecting => ConnectionStatus::Connecting,
            ConnectionState::Connected { .. } => ConnectionStatus::Connected,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }

    pub fn account_id(&self) -> Option<&AccountId> {
        match self {
            ConnectionState::Connected { account_id, .. } => Some(account_id),
            _ => None,
        }
    }

    pub fn provider(&self) -> Option<ProviderKind> {
        match self {
            ConnectionState::Connected { provider, .. } => Some(*provider),
            _ => None,
        }
    }

    /// Whether `next` is a legal successor of `self`.
    pub fn can_transition_to(&self, next: &ConnectionState) -> bool {
        use ConnectionStatus as S;
        matches!(
            (self.status(), next.status()),
            (S::Uninitialized, S::Initializing)
                | (S::Initializing, S::Connected)
                | (S::Initializing, S::Disconnected)
                | (S::Disconnected, S::Connecting)
                | (S::Connecting, S::Connected)
                | (S::Connecting, S::Disconnected)
                | (S::Connected, S::Disconnected)
        )
    }

    pub fn snapshot(&self) -> ConnectionSnapshot {
        ConnectionSnapshot {
            status: self.status(),
            account_id: self.account_id().map(|id| id.as_str().to_string()),
            provider_kind: self.provider(),
        }
    }
}

/// Outcome of a single connect call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionResult {
    pub success: bool,
    pub account_id: Option<String>,
    pub reason: Option<ConnectFailure>,
}

impl ConnectionResult {
    pub fn connected(account_id: &AccountId) -> Self {
        Self {
            success: true,
            account_id: Some(account_id.as_str().to_string()),
            reason: None,
        }
    }

    pub fn failed(reason: ConnectFailure) -> Self {
        Self {
            success: false,
            account_id: None,
            reason: Some(reason),
        }
    }
}
