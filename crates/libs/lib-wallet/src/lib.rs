//! # Wallet Connection Core
//!
//! Provider-agnostic state machine behind the "connect wallet" widget.
//!
//! ## Structure
//!
//! - **[`state`]**: [`ConnectionState`], [`AccountId`] and [`ConnectionResult`]
//! - **[`provider`]**: the [`ProviderHandle`] capability trait implemented by each wallet integration
//! - **[`detector`]**: injectable provider availability probe
//! - **[`controller`]**: [`ConnectionController`] (connect, disconnect, copy account id)
//! - **[`session`]**: one-shot session resume at startup
//! - **[`notify`]**: notification events for the toast surface
//! - **[`clipboard`]**: clipboard capability
//! - **[`config`]**: [`WalletConfig`] with the Internet Computer defaults
//! - **[`error`]**: [`WalletError`] and [`ConnectFailure`]
//!
//! ## State Machine
//!
//! ```text
//! uninitialized -> initializing -> connected | disconnected
//! disconnected  -> connecting   -> connected | disconnected
//! connected     -> disconnected
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use lib_wallet::{ConnectionController, ProviderKind, WalletConfig};
//! # async fn run(plug: Rc<dyn lib_wallet::ProviderHandle>) {
//! let controller = ConnectionController::builder(WalletConfig::default())
//!     .provider(plug)
//!     .build();
//!
//! controller.initialize().await;
//! let result = controller.connect(ProviderKind::InjectedExtension).await;
//! if result.success {
//!     println!("connected as {:?}", result.account_id);
//! }
//! # }
//! ```

pub mod clipboard;
pub mod config;
pub mod controller;
pub mod detector;
pub mod error;
pub mod notify;
pub mod provider;
pub mod session;
pub mod state;

pub use clipboard::Clipboard;
pub use config::WalletConfig;
pub use controller::{ConnectionController, ControllerBuilder};
pub use detector::Detector;
pub use error::{ConnectFailure, Result, WalletError};
pub use notify::{Notification, NotificationKind, NotificationSink, WalletEvent};
pub use provider::{ConnectOutcome, ConnectRequest, ProviderHandle, ProviderSet};
pub use state::{AccountId, ConnectionResult, ConnectionState};
pub use shared::dto::wallet::{ConnectionSnapshot, ConnectionStatus, ProviderKind};
