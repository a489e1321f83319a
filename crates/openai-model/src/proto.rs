use chatbot_model::{
    ModelMessage, ModelReply, ModelRequest, ModelTool, ToolCallRequest,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::OpenAIConfig;

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct FunctionToolCall {
    pub name: Option<String>,
    pub arguments: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ToolCall {
    pub id: Option<String>,
    pub function: Option<FunctionToolCall>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    pub finish_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
    pub tool_calls: Option<Vec<ToolCall>>,
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
struct FunctionTool {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
struct Tool {
    r#type: &'static str,
    function: FunctionTool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SentFunctionCall {
    name: String,
    arguments: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SentToolCall {
    id: String,
    r#type: &'static str,
    function: SentFunctionCall,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    System {
        content: String,
    },
    User {
        content: String,
    },
    Assistant {
        content: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tool_calls: Option<Vec<SentToolCall>>,
    },
    Tool {
        tool_call_id: String,
        name: String,
        content: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(
    req: &ModelRequest,
    config: &OpenAIConfig,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: req
            .model
            .clone()
            .unwrap_or_else(|| config.model.clone()),
        messages: req.messages.iter().map(create_message).collect(),
        tools: req.tools.iter().map(create_tool).collect(),
    }
}

#[inline]
fn create_message(msg: &ModelMessage) -> Message {
    match msg {
        ModelMessage::System(content) => Message::System {
            content: content.clone(),
        },
        ModelMessage::User(content) => Message::User {
            content: content.clone(),
        },
        ModelMessage::Assistant(content) => Message::Assistant {
            content: Some(content.clone()),
            tool_calls: None,
        },
        ModelMessage::AssistantToolCalls { content, requests } => {
            Message::Assistant {
                content: if content.is_empty() {
                    None
                } else {
                    Some(content.clone())
                },
                tool_calls: Some(
                    requests.iter().map(create_sent_tool_call).collect(),
                ),
            }
        }
        ModelMessage::Tool(result) => Message::Tool {
            tool_call_id: result.id.clone(),
            name: result.name.clone(),
            content: result.content.clone(),
        },
    }
}

#[inline]
fn create_sent_tool_call(req: &ToolCallRequest) -> SentToolCall {
    SentToolCall {
        id: req.id.clone(),
        r#type: "function",
        function: SentFunctionCall {
            name: req.name.clone(),
            arguments: req.arguments.clone(),
        },
    }
}

#[inline]
fn create_tool(tool: &ModelTool) -> Tool {
    Tool {
        r#type: "function",
        function: FunctionTool {
            name: tool.name.clone(),
            description: tool.description.clone(),
            parameters: tool.parameters.clone(),
        },
    }
}

/// Normalizes the first choice of a completion into a [`ModelReply`].
///
/// Absent content becomes an empty string and absent tool calls become
/// an empty list. Tool call entries with no id or name cannot be
/// correlated and are dropped. Returns `None` when the completion has
/// no choices at all.
pub fn into_reply(mut completion: ChatCompletion) -> Option<ModelReply> {
    if completion.choices.is_empty() {
        return None;
    }
    let choice = completion.choices.swap_remove(0);
    trace!("finish reason: {:?}", choice.finish_reason);
    let message = choice.message;

    let mut tool_calls = Vec::new();
    for call in message.tool_calls.unwrap_or_default() {
        let (Some(id), Some(function)) = (call.id, call.function) else {
            warn!("dropping a tool call without an id or function");
            continue;
        };
        let Some(name) = function.name else {
            warn!("dropping a tool call without a function name");
            continue;
        };
        tool_calls.push(ToolCallRequest {
            id,
            name,
            arguments: function.arguments.unwrap_or_default(),
        });
    }

    Some(ModelReply {
        content: message.content.unwrap_or_default(),
        tool_calls,
    })
}
