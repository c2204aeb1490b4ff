//! Error types for the conversation crate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversationError {
    /// An answer arrived after the final step had been processed
    #[error("Conversation already complete after {steps} steps; reset to start again")]
    AlreadyComplete { steps: usize },
}

pub type Result<T> = std::result::Result<T, ConversationError>;
