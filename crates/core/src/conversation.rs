//! Conversation-related types.

use chatbot_model::ModelMessage;

/// An ordered exchange history, as it is sent to the model provider on
/// every call.
///
/// The first turn is always the system turn, set at construction and
/// replaced only by an explicit [`reset`](Conversation::reset). There
/// are no removal or reordering operations; the history only grows.
#[derive(Clone, Debug)]
pub struct Conversation {
    items: Vec<ModelMessage>,
}

impl Conversation {
    /// Creates a conversation containing a single system turn.
    pub fn new<S: Into<String>>(system_prompt: S) -> Self {
        Self {
            items: vec![ModelMessage::System(system_prompt.into())],
        }
    }

    /// Replaces the whole history with a single system turn.
    pub fn reset<S: Into<String>>(&mut self, system_prompt: S) {
        self.items.clear();
        self.items.push(ModelMessage::System(system_prompt.into()));
    }

    /// Appends a turn to the end of the history.
    ///
    /// A tool turn is expected to correlate with a request carried by
    /// the preceding assistant turn; this is a caller contract and is
    /// not validated here.
    #[inline]
    pub fn push(&mut self, msg: ModelMessage) {
        self.items.push(msg);
    }

    /// Returns the turns in insertion order.
    #[inline]
    pub fn messages(&self) -> &[ModelMessage] {
        &self.items
    }

    /// Returns the number of turns in the history.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the history is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
