//! JSON renderer for machine-readable output

use super::OutputRenderer;
use crate::classify::{score_width_percent, sensationalism_tier, trust_tier};
use crate::controller::RequestState;
use serde_json::{json, Value};

/// Renders the state as pretty-printed JSON, with derived tiers alongside the
/// service's own fields
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Build the JSON document for a state
    pub fn to_value(&self, state: &RequestState) -> Value {
        match state {
            RequestState::Idle => json!({ "state": "idle" }),
            RequestState::Loading => json!({ "state": "loading" }),
            RequestState::Error(message) => json!({ "state": "error", "error": message }),
            RequestState::Success(result) => {
                let trust = trust_tier(result.trust_score);
                let sensationalism = sensationalism_tier(result.sensationalism_score);
                json!({
                    "state": "success",
                    "result": result,
                    "classification": {
                        "trustTier": trust,
                        "trustSeverity": trust.severity(),
                        "trustIcon": trust.icon(),
                        "trustWidthPercent": score_width_percent(result.trust_score),
                        "sensationalismTier": sensationalism,
                        "sensationalismSeverity": sensationalism.severity(),
                        "sensationalismWidthPercent":
                            score_width_percent(result.sensationalism_score),
                    }
                })
            }
        }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, state: &RequestState) -> String {
        format!("{:#}\n", self.to_value(state))
    }
}
