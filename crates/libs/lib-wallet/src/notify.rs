//! # Notifications
//!
//! The controller reports every user-visible outcome as a [`Notification`].
//! The wording is a default the UI may replace; the [`NotificationKind`] is
//! what must survive (it picks the toast style).

use serde::Serialize;

use crate::state::ProviderKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Cancelled,
    Failed,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Cancelled => "cancelled",
            NotificationKind::Failed => "failed",
            NotificationKind::Info => "info",
        }
    }
}

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletEvent {
    Connecting(ProviderKind),
    Connected(ProviderKind),
    Cancelled(ProviderKind),
    ProviderMissing(ProviderKind),
    ConnectFailed(ProviderKind),
    Disconnected,
    AccountCopied,
    CopyFailed,
}

impl WalletEvent {
    pub fn kind(&self) -> NotificationKind {
        match self {
            WalletEvent::Connected(_) | WalletEvent::Disconnected => NotificationKind::Success,
            WalletEvent::Cancelled(_) => NotificationKind::Cancelled,
            WalletEvent::ProviderMissing(_) | WalletEvent::ConnectFailed(_) | WalletEvent::CopyFailed => {
                NotificationKind::Failed
            }
            WalletEvent::Connecting(_) | WalletEvent::AccountCopied => NotificationKind::Info,
        }
    }

    pub fn title(&self) -> String {
        match self {
            WalletEvent::Connecting(_) => "Connecting wallet".to_string(),
            WalletEvent::Connected(_) => "Wallet connected".to_string(),
            WalletEvent::Cancelled(_) => "Connection cancelled".to_string(),
            WalletEvent::ProviderMissing(kind) => format!("{} wallet not installed", kind.name()),
            WalletEvent::ConnectFailed(_) => "Connection failed".to_string(),
            WalletEvent::Disconnected => "Wallet disconnected".to_string(),
            WalletEvent::AccountCopied => "Address copied".to_string(),
            WalletEvent::CopyFailed => "Copy failed".to_string(),
        }
    }

    pub fn description(&self) -> String {
        match self {
            WalletEvent::Connecting(kind) => format!("Approve the connection request in {}", kind.name()),
            WalletEvent::Connected(_) => {
                "Your Internet Computer wallet has been connected successfully".to_string()
            }
            WalletEvent::Cancelled(kind) => format!("The {} connection request was declined", kind.name()),
            WalletEvent::ProviderMissing(kind) => {
                format!("Please install the {} wallet extension to connect", kind.name())
            }
            WalletEvent::ConnectFailed(_) => "Failed to connect to your wallet. Please try again.".to_string(),
            WalletEvent::Disconnected => "Your wallet has been disconnected successfully".to_string(),
            WalletEvent::AccountCopied => "Your principal ID has been copied to the clipboard".to_string(),
            WalletEvent::CopyFailed => "Could not access the clipboard".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub event: WalletEvent,
    pub title: String,
    pub description: String,
    /// Optional call to action (install page)
    pub link: Option<String>,
}

impl Notification {
    pub fn new(event: WalletEvent) -> Self {
        Self {
            kind: event.kind(),
            event,
            title: event.title(),
            description: event.description(),
            link: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Receives notifications (toast surface, log, test recorder)
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

impl<F> NotificationSink for F
where
    F: Fn(Notification),
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

/// Writes notifications to the log; the default sink
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: Notification) {
        log::info!(
            "[WALLET] {} ({}): {}",
            notification.title,
            notification.kind.as_str(),
            notification.description
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_event_kinds() {
        let plug = ProviderKind::InjectedExtension;
        assert_eq!(WalletEvent::Connected(plug).kind(), NotificationKind::Success);
        assert_eq!(WalletEvent::Disconnected.kind(), NotificationKind::Success);
        assert_eq!(WalletEvent::Cancelled(plug).kind(), NotificationKind::Cancelled);
        assert_eq!(WalletEvent::ProviderMissing(plug).kind(), NotificationKind::Failed);
        assert_eq!(WalletEvent::ConnectFailed(plug).kind(), NotificationKind::Failed);
        assert_eq!(WalletEvent::Connecting(plug).kind(), NotificationKind::Info);
    }

    #[test]
    fn test_notification_text() {
        let n = Notification::new(WalletEvent::ProviderMissing(ProviderKind::InjectedExtension))
            .with_link("https://plugwallet.ooo");
        assert_eq!(n.title, "Plug wallet not installed");
        assert_eq!(n.description, "Please install the Plug wallet extension to connect");
        assert_eq!(n.link.as_deref(), Some("https://plugwallet.ooo"));
    }

    #[test]
    fn test_closure_sink() {
        let seen = RefCell::new(Vec::new());
        let sink = |n: Notification| seen.borrow_mut().push(n.kind);
        sink.notify(Notification::new(WalletEvent::AccountCopied));
        assert_eq!(*seen.borrow(), vec![NotificationKind::Info]);
    }
}
