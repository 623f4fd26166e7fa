use crate::error::PolishError;
use async_trait::async_trait;

/// External rewrite of templated text into more natural prose.
/// Callers must treat every error as recoverable and fall back to the input.
#[async_trait]
pub trait Polisher: Send + Sync {
    /// Rewrite the text, keeping its facts intact
    async fn polish(&self, text: &str) -> Result<String, PolishError>;

    /// Name of the backing service, for logging
    fn name(&self) -> &'static str;
}
