use chatbot_model::{ModelReply, ToolCallRequest};
use serde::{Deserialize, Serialize};

/// A preset reply for one scripted step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetReply {
    /// The text content of the reply.
    pub content: String,
    /// Tool calls requested by the reply.
    pub tool_calls: Vec<ToolCallRequest>,
}

impl PresetReply {
    /// Creates a `PresetReply` with the specified text content.
    #[inline]
    pub fn with_content<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            tool_calls: Vec::new(),
        }
    }

    /// Appends a tool call request to the reply.
    #[inline]
    pub fn with_tool_call<S1, S2, S3>(
        mut self,
        id: S1,
        name: S2,
        arguments: S3,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        self.tool_calls.push(ToolCallRequest {
            id: id.into(),
            name: name.into(),
            arguments: arguments.into(),
        });
        self
    }

    pub(crate) fn into_reply(self) -> ModelReply {
        ModelReply {
            content: self.content,
            tool_calls: self.tool_calls,
        }
    }
}
