//! # Wallet Errors
//!
//! [`WalletError`] is what provider integrations return; the controller turns
//! every one of them into a state transition, a notification and a log line.
//! Nothing here ever reaches the UI as an `Err`.
//!
//! ## Error Categories
//!
//! - **ProviderUnavailable**: the requested wallet is not present in the page (user can install it)
//! - **UserCancelled**: the user declined the connection prompt
//! - **ProviderCallFailed**: a connect, disconnect or identity call rejected
//! - **InitializationFailed**: the identity client could not be created at startup
//! - **Clipboard**: the browser refused the clipboard write
//!
//! [`ConnectFailure`] is the `Copy` reason code carried by
//! [`ConnectionResult`](crate::state::ConnectionResult).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::ProviderKind;

/// Convenience type alias for `Result<T, WalletError>`.
pub type Result<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("{0} wallet is not installed")]
    ProviderUnavailable(ProviderKind),

    #[error("Connection request was cancelled by the user")]
    UserCancelled,

    #[error("{kind} call failed: {message}")]
    ProviderCallFailed { kind: ProviderKind, message: String },

    #[error("Failed to initialize {kind} client: {message}")]
    InitializationFailed { kind: ProviderKind, message: String },

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl WalletError {
    pub fn call_failed(kind: ProviderKind, message: impl Into<String>) -> Self {
        WalletError::ProviderCallFailed {
            kind,
            message: message.into(),
        }
    }

    pub fn init_failed(kind: ProviderKind, message: impl Into<String>) -> Self {
        WalletError::InitializationFailed {
            kind,
            message: message.into(),
        }
    }
}

/// Why a connect attempt did not end connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectFailure {
    /// Provider not present; the UI should prompt for installation
    ProviderUnavailable,
    /// User declined; a normal negative outcome
    UserCancelled,
    /// Provider call threw or rejected
    ConnectionFailed,
    /// A session is initializing, connecting or already connected; the call was ignored
    AlreadyActive,
}

impl From<&WalletError> for ConnectFailure {
    fn from(err: &WalletError) -> Self {
        match err {
            WalletError::ProviderUnavailable(_) => ConnectFailure::ProviderUnavailable,
            WalletError::UserCancelled => ConnectFailure::UserCancelled,
            _ => ConnectFailure::ConnectionFailed,
        }
    }
}
