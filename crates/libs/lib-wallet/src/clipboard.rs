//! Clipboard capability used by `copy_account_id`

use async_trait::async_trait;

use crate::error::{Result, WalletError};

#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Placeholder for hosts without a clipboard; every write fails
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

#[async_trait(?Send)]
impl Clipboard for NoClipboard {
    async fn write_text(&self, _text: &str) -> Result<()> {
        Err(WalletError::Clipboard("no clipboard available".to_string()))
    }
}
