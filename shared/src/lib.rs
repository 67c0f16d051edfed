//! # Shared Types Library
//!
//! Types and helpers shared by the wallet connection core (`lib-wallet`) and
//! the landing site (`site`).
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::wallet`]**: Connection status, provider kinds, connection snapshot
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format account identifiers for display
//!   - **[`utils::truncate_address`]**: Truncate account identifiers with ellipsis
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::wallet::{ConnectionSnapshot, ConnectionStatus};
//! use shared::utils::truncate_address;
//!
//! let snapshot = ConnectionSnapshot::default();
//! assert_eq!(snapshot.status, ConnectionStatus::Uninitialized);
//! assert_eq!(truncate_address("rwlgt-iiaaa-aaaaa-aaaaa-cai"), "rwlgt...a-cai");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
