use std::path::Path;

use anyhow::Context;

use crate::{
    controller::{config::ControllerConfig, gesture::GestureKind},
    expression::id::ExpressionId,
    foundation::error::{RobofaceError, RobofaceResult},
    selector::conversation::{ConversationEvent, SelectorTiming},
};

/// What a cue does when its time comes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CueAction {
    Expression {
        expression: ExpressionId,
    },
    Gesture {
        gesture: GestureKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration_ms: Option<u64>,
    },
    /// Routed through the expression selector.
    Conversation {
        event: ConversationEvent,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cue {
    /// Seconds since the start of the session.
    pub at: f64,
    #[serde(flatten)]
    pub action: CueAction,
}

/// Timed cues plus the tunables to replay them with.
///
/// ```json
/// {
///   "controller": { "seed": 7 },
///   "cues": [
///     { "at": 0.5, "action": "expression", "expression": "greeting" },
///     { "at": 2.0, "action": "gesture", "gesture": "nod" },
///     { "at": 3.0, "action": "conversation", "event": { "event": "response_failed" } }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Script {
    pub controller: ControllerConfig,
    pub selector: SelectorTiming,
    pub cues: Vec<Cue>,
}

impl Script {
    pub fn validate(&self) -> RobofaceResult<()> {
        self.controller.validate()?;
        let t = &self.selector;
        if !(t.settle_after.is_finite() && t.settle_after >= 0.0) {
            return Err(RobofaceError::validation(
                "selector.settle_after must be finite and >= 0",
            ));
        }
        if !(t.idle_after.is_finite() && t.idle_after > 0.0) {
            return Err(RobofaceError::validation(
                "selector.idle_after must be finite and > 0",
            ));
        }
        for (i, cue) in self.cues.iter().enumerate() {
            if !cue.at.is_finite() || cue.at < 0.0 {
                return Err(RobofaceError::validation(format!(
                    "cue #{i} time must be finite and >= 0, got {}",
                    cue.at
                )));
            }
        }
        Ok(())
    }

    /// Cues ordered by time; cues sharing a time keep their written order.
    pub fn sorted_cues(&self) -> Vec<Cue> {
        let mut cues = self.cues.clone();
        cues.sort_by(|a, b| a.at.total_cmp(&b.at));
        cues
    }

    pub fn from_json_str(s: &str) -> RobofaceResult<Self> {
        let script: Self = serde_json::from_str(s)?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_path(path: impl AsRef<Path>) -> RobofaceResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read script '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/script.rs"]
mod tests;
