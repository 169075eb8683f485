// Agent abstraction
//
// A single polymorphic capability: given a request (text + origin tag),
// produce a text reply. The classifier and the specialist are two
// configured instances of the same trait, so the router can treat them
// uniformly and tests can swap in deterministic doubles.

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

pub mod azure;

pub use azure::AzureAgent;

/// One user-originated message handed to an agent.
///
/// Immutable once created; a fresh request is built per turn and discarded
/// when the turn completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRequest {
    /// Raw message text, passed through unmodified.
    pub content: String,
    /// Origin tag (currently always "user").
    pub source: String,
}

impl AgentRequest {
    /// Build a request tagged as coming from the user.
    pub fn from_user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: "user".to_string(),
        }
    }
}

/// Errors from the agent layer.
///
/// The router does not catch any of these; they propagate to the caller.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The upstream API call could not complete (network, auth, HTTP status).
    #[error("agent '{agent}' unavailable: {reason}")]
    Unavailable { agent: String, reason: String },

    /// The API replied but carried no text content.
    #[error("agent '{agent}' returned an empty response")]
    EmptyResponse { agent: String },

    /// The cancellation handle fired while the call was in flight.
    #[error("agent '{agent}' call cancelled")]
    Cancelled { agent: String },
}

/// An agent that answers one request with one text reply.
///
/// The call suspends on network I/O. The cancellation token is passed
/// explicitly per call so concurrent requests can be cancelled
/// independently; no ambient context is consulted.
#[async_trait]
pub trait TextAgent: Send + Sync {
    /// Send the request and wait for the full text reply.
    async fn respond(
        &self,
        request: &AgentRequest,
        cancel: &CancellationToken,
    ) -> Result<String, AgentError>;

    /// Agent name for logs and error messages.
    fn name(&self) -> &str;
}
