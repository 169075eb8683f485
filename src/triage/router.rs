// Triage router
//
// The one piece of decision logic in the system: classify, then either
// short-circuit with the fixed safety message or forward to the
// specialist. Everything else (HTTP, prompts, config) is plumbing.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use super::decision::{decide, normalize_label, RouteDecision};
use crate::agent::{AgentRequest, TextAgent};

/// Routes one query through the gatekeeper classifier and, unless it
/// short-circuits, on to the specialist.
///
/// Holds no mutable state; each `route` call is independent, so one
/// router can serve concurrent requests without locking. Both
/// collaborators are injected, which keeps the router testable with
/// deterministic doubles.
pub struct TriageRouter {
    classifier: Arc<dyn TextAgent>,
    specialist: Arc<dyn TextAgent>,
}

impl TriageRouter {
    pub fn new(classifier: Arc<dyn TextAgent>, specialist: Arc<dyn TextAgent>) -> Self {
        Self {
            classifier,
            specialist,
        }
    }

    /// Turn one query into one reply.
    ///
    /// Exactly one classification call, then at most one specialist call,
    /// strictly in that order. Collaborator failures propagate unchanged;
    /// no fallback label or default reply is substituted.
    pub async fn route(&self, text: &str, cancel: &CancellationToken) -> Result<String> {
        let request = AgentRequest::from_user(text);

        let label = self
            .classifier
            .respond(&request, cancel)
            .await
            .context("Classification failed")?;

        let normalized = normalize_label(&label);
        tracing::info!("Classifier label: '{}'", normalized);

        match decide(&normalized) {
            RouteDecision::ShortCircuit { response } => {
                tracing::warn!("Emergency detected, short-circuiting to safety response");
                Ok(response.to_string())
            }
            RouteDecision::Forward => {
                // The specialist sees the original text, not the label.
                let answer = self
                    .specialist
                    .respond(&request, cancel)
                    .await
                    .context("Specialist response failed")?;
                Ok(answer)
            }
        }
    }
}
