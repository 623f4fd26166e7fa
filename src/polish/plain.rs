use crate::error::PolishError;
use crate::polish::traits::Polisher;
use async_trait::async_trait;

/// Returns text untouched; used when no polish service is configured
pub struct PlainPolisher;

#[async_trait]
impl Polisher for PlainPolisher {
    async fn polish(&self, text: &str) -> Result<String, PolishError> {
        Ok(text.to_string())
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}
