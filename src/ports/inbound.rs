//! Inbound port. The front-end (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: terminal UI drives the upload → evaluate → report flow and the chat.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive session until the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
