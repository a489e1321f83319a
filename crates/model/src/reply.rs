use serde::{Deserialize, Serialize};

/// A normalized reply from the model provider.
///
/// Providers adapt their own wire shapes into this one at the boundary:
/// absent content becomes an empty string and absent tool calls become
/// an empty list, so the dispatch loop never has to reason about
/// optional fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModelReply {
    /// The text content of the reply, possibly empty.
    pub content: String,
    /// Tool calls requested by the model, possibly empty.
    pub tool_calls: Vec<ToolCallRequest>,
}

impl ModelReply {
    /// Creates a text-only reply.
    #[inline]
    pub fn with_content<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            tool_calls: Vec::new(),
        }
    }
}

/// Describes a tool call request from the model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// The unique identifier for the tool call request.
    pub id: String,
    /// The name of the tool to call.
    pub name: String,
    /// The arguments payload, as the JSON-encoded text received from
    /// the provider. Parsing is left to the consumer, which decides
    /// what a malformed payload degrades to.
    pub arguments: String,
}
