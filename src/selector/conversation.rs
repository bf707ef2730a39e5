use crate::{expression::id::ExpressionId, selector::classify::classify_text};

/// Something that happened in the conversation around the avatar.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", content = "text", rename_all = "snake_case")]
pub enum ConversationEvent {
    /// The user submitted a message.
    UserMessage(String),
    ResponseStarted,
    /// Accumulated response text so far.
    ResponseChunk(String),
    /// Full response text.
    ResponseFinished(String),
    ResponseFailed,
    Listening,
    Speaking,
    Thinking,
}

/// Seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SelectorTiming {
    /// Delay after a response ends before settling back to neutral.
    pub settle_after: f64,
    /// Inactivity after which the avatar returns to neutral.
    pub idle_after: f64,
}

impl Default for SelectorTiming {
    fn default() -> Self {
        Self {
            settle_after: 3.0,
            idle_after: 5.0,
        }
    }
}

/// Turns conversation events into expression changes.
///
/// The selector never talks to a controller. [`handle`](Self::handle) and [`tick`](Self::tick)
/// return the expression to apply, and only when it differs from the last one returned.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionSelector {
    timing: SelectorTiming,
    current: ExpressionId,
    last_activity: f64,
    settle_at: Option<f64>,
    in_flight: bool,
}

impl Default for ExpressionSelector {
    fn default() -> Self {
        Self::new(SelectorTiming::default())
    }
}

impl ExpressionSelector {
    pub fn new(timing: SelectorTiming) -> Self {
        Self {
            timing,
            current: ExpressionId::Neutral,
            last_activity: 0.0,
            settle_at: None,
            in_flight: false,
        }
    }

    pub fn current(&self) -> ExpressionId {
        self.current
    }

    /// Whether a user message is awaiting the end of its response.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn handle(&mut self, now: f64, event: &ConversationEvent) -> Option<ExpressionId> {
        let next = match event {
            ConversationEvent::UserMessage(text) => {
                // One exchange at a time: messages sent mid-response are dropped.
                if self.in_flight || text.trim().is_empty() {
                    return None;
                }
                self.in_flight = true;
                self.settle_at = None;
                Some(ExpressionId::Listening)
            }
            ConversationEvent::ResponseStarted => Some(ExpressionId::Speaking),
            ConversationEvent::ResponseChunk(so_far) => {
                Some(classify_text(so_far)).filter(|&id| id != ExpressionId::Speaking)
            }
            ConversationEvent::ResponseFinished(text) => {
                self.finish(now);
                Some(classify_text(text))
            }
            ConversationEvent::ResponseFailed => {
                self.finish(now);
                Some(ExpressionId::Sad)
            }
            ConversationEvent::Listening => Some(ExpressionId::Listening),
            ConversationEvent::Speaking => Some(ExpressionId::Speaking),
            ConversationEvent::Thinking => Some(ExpressionId::Thinking),
        };
        self.last_activity = now;
        next.and_then(|id| self.switch(id))
    }

    /// Time-driven transitions: the post-response settle and the idle fallback.
    pub fn tick(&mut self, now: f64) -> Option<ExpressionId> {
        if let Some(at) = self.settle_at
            && now >= at
        {
            self.settle_at = None;
            if !self.in_flight {
                return self.switch(ExpressionId::Neutral);
            }
        }
        if now - self.last_activity > self.timing.idle_after {
            return self.switch(ExpressionId::Neutral);
        }
        None
    }

    fn finish(&mut self, now: f64) {
        self.in_flight = false;
        self.settle_at = Some(now + self.timing.settle_after);
    }

    fn switch(&mut self, id: ExpressionId) -> Option<ExpressionId> {
        if id == self.current {
            return None;
        }
        tracing::debug!(from = %self.current, to = %id, "selector picked expression");
        self.current = id;
        Some(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/selector/conversation.rs"]
mod tests;
