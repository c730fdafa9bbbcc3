//! Assistant gateway contract.
//!
//! # Responsibility
//! - Define the outbound text-generation interface the chat session uses.
//! - Classify transport, status and payload failures under one error type.
//!
//! # Invariants
//! - Every failure variant is recoverable; callers surface a fallback reply
//!   instead of propagating.
//! - No automatic retries at this layer.

use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for a single assistant request.
#[derive(Debug)]
pub enum GatewayError {
    /// Network-level failure before a status line was received.
    Transport(reqwest::Error),
    /// The endpoint answered with a non-success status.
    Status { status: u16 },
    /// The body could not be decoded into the expected response shape.
    MalformedPayload(String),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "{err}"),
            Self::Status { status } => write!(f, "assistant request failed with status {status}"),
            Self::MalformedPayload(message) => {
                write!(f, "malformed assistant response: {message}")
            }
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Status { .. } => None,
            Self::MalformedPayload(_) => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Remote text-generation collaborator.
///
/// Object-safe so sessions and tests can hold `&dyn AssistantGateway`.
#[async_trait]
pub trait AssistantGateway: Send + Sync {
    /// Sends one user message and returns the assistant's reply text.
    async fn complete(&self, user_text: &str) -> Result<String, GatewayError>;
}
