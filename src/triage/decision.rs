// Routing decision logic

/// Fixed safety reply for emergency queries. Returned verbatim.
pub const EMERGENCY_RESPONSE: &str =
    "It appears you have an emergency. Please dial 911 or seek immediate care.";

/// Substring that marks a classification as an emergency.
const EMERGENCY_MARKER: &str = "emergency";

/// Outcome of inspecting one classification label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Reply with the fixed safety message; do not consult the specialist.
    ShortCircuit { response: &'static str },
    /// Hand the original query to the specialist.
    Forward,
}

/// Normalize a raw classifier label for the routing decision.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Decide the route for a normalized label.
///
/// This is a substring test, not an enum comparison: any label that
/// mentions the emergency marker anywhere short-circuits. The bias is
/// intentional — for a medical gatekeeper a false positive (safety
/// message for a non-emergency) is far cheaper than a false negative.
pub fn decide(normalized_label: &str) -> RouteDecision {
    if normalized_label.contains(EMERGENCY_MARKER) {
        RouteDecision::ShortCircuit {
            response: EMERGENCY_RESPONSE,
        }
    } else {
        RouteDecision::Forward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_label("  Emergency \n"), "emergency");
        assert_eq!(normalize_label("NEW_SYMPTOMS"), "new_symptoms");
    }

    #[test]
    fn test_emergency_labels_short_circuit() {
        for label in ["emergency", "Emergency", " emergency ", "EMERGENCY"] {
            let decision = decide(&normalize_label(label));
            assert!(
                matches!(decision, RouteDecision::ShortCircuit { .. }),
                "label {:?} should short-circuit",
                label
            );
        }
    }

    #[test]
    fn test_substring_match_is_permissive() {
        let decision = decide(&normalize_label("not an emergency, just worried"));
        assert_eq!(
            decision,
            RouteDecision::ShortCircuit {
                response: EMERGENCY_RESPONSE
            }
        );

        let decision = decide(&normalize_label("possibly emergency-adjacent"));
        assert!(matches!(decision, RouteDecision::ShortCircuit { .. }));
    }

    #[test]
    fn test_known_non_emergency_labels_forward() {
        for label in ["new_symptoms", "existing_condition", "other"] {
            assert_eq!(decide(&normalize_label(label)), RouteDecision::Forward);
        }
    }

    #[test]
    fn test_unrecognized_labels_forward() {
        assert_eq!(decide(&normalize_label("gibberish label")), RouteDecision::Forward);
        assert_eq!(decide(""), RouteDecision::Forward);
    }
}
