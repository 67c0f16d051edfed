//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the wallet connection core and the
//! views that render it.
//!
//! ## Module Organization
//!
//! - [`wallet`] - Connection status, provider kinds and the connection snapshot
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to snake_case strings using `#[serde(rename_all = "snake_case")]`
//!
//! ```text
//! {
//!   "status": "connected",
//!   "account_id": "rwlgt-iiaaa-aaaaa-aaaaa-cai",
//!   "provider_kind": "redirect_identity"
//! }
//! ```

pub mod wallet;

pub use wallet::*;
