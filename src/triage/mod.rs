// Triage module
// Public interface for routing decisions

mod decision;
mod router;

pub use decision::{decide, normalize_label, RouteDecision, EMERGENCY_RESPONSE};
pub use router::TriageRouter;
