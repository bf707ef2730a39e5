use std::fmt;
use std::str::FromStr;

use crate::foundation::error::RobofaceError;

/// Closed set of expressions the avatar can display.
///
/// Adding a variant is a compile error until [`crate::preset_for`] grows a matching row.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionId {
    #[default]
    Neutral,
    Happy,
    Thinking,
    Listening,
    Speaking,
    Greeting,
    Sad,
}

impl ExpressionId {
    pub const ALL: [ExpressionId; 7] = [
        ExpressionId::Neutral,
        ExpressionId::Happy,
        ExpressionId::Thinking,
        ExpressionId::Listening,
        ExpressionId::Speaking,
        ExpressionId::Greeting,
        ExpressionId::Sad,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Happy => "happy",
            Self::Thinking => "thinking",
            Self::Listening => "listening",
            Self::Speaking => "speaking",
            Self::Greeting => "greeting",
            Self::Sad => "sad",
        }
    }
}

impl fmt::Display for ExpressionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpressionId {
    type Err = RobofaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| RobofaceError::UnknownExpression(s.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/id.rs"]
mod tests;
