mod builder;
#[cfg(test)]
mod tests;

use chatbot_model::{
    ModelMessage, ModelProviderError, ModelRequest, ToolCallResult,
};

use crate::conversation::Conversation;
use crate::model_client::ModelClient;
use crate::tool::Registry;
pub use builder::ChatbotBuilder;

/// A chat agent instance, which owns a conversation, a model provider
/// and a tool registry.
///
/// One [`ask`](Chatbot::ask) call drives a full cycle: the question is
/// appended to the conversation and sent to the model together with the
/// tool schemas. When the reply requests tool calls, they are executed
/// sequentially in request order, each producing exactly one tool turn,
/// and a single follow-up call obtains the final answer. A follow-up
/// reply that requests more tool calls is not dispatched again; one
/// round per cycle is a deliberate policy.
pub struct Chatbot {
    model_client: ModelClient,
    registry: Registry,
    conversation: Conversation,
    model: Option<String>,
}

impl Chatbot {
    fn from_builder(builder: ChatbotBuilder) -> Self {
        let ChatbotBuilder {
            model_client,
            system_prompt,
            model,
            tools,
        } = builder;
        Self {
            model_client,
            registry: Registry::with_tools(tools),
            conversation: Conversation::new(system_prompt),
            model,
        }
    }

    /// Asks a question using the default model and returns the answer.
    ///
    /// An empty `question` appends no user turn; the model is called on
    /// the history as it stands.
    ///
    /// # Errors
    ///
    /// Only transport-level provider failures are returned; tool-side
    /// anomalies are absorbed into the conversation. On failure the
    /// turns appended so far are kept, and the caller decides whether
    /// to retry, reset or abort.
    pub async fn ask(
        &mut self,
        question: &str,
    ) -> Result<String, Box<dyn ModelProviderError>> {
        let model = self.model.clone();
        self.ask_inner(question, model).await
    }

    /// Asks a question, overriding the model for this single call.
    pub async fn ask_with_model<S: Into<String>>(
        &mut self,
        question: &str,
        model: S,
    ) -> Result<String, Box<dyn ModelProviderError>> {
        self.ask_inner(question, Some(model.into())).await
    }

    async fn ask_inner(
        &mut self,
        question: &str,
        model: Option<String>,
    ) -> Result<String, Box<dyn ModelProviderError>> {
        if !question.is_empty() {
            self.conversation
                .push(ModelMessage::User(question.to_owned()));
        }

        let request = self.build_request(model.clone());
        let reply = self.model_client.send_request(request).await?;

        if reply.tool_calls.is_empty() {
            self.conversation
                .push(ModelMessage::Assistant(reply.content.clone()));
            return Ok(reply.content);
        }

        debug!("model requested {} tool call(s)", reply.tool_calls.len());
        self.conversation.push(ModelMessage::AssistantToolCalls {
            content: reply.content,
            requests: reply.tool_calls.clone(),
        });

        for req in reply.tool_calls {
            let content = self.registry.invoke(&req.name, &req.arguments).await;
            self.conversation.push(ModelMessage::Tool(ToolCallResult {
                id: req.id,
                name: req.name,
                content,
            }));
        }

        let request = self.build_request(model);
        let reply = self.model_client.send_request(request).await?;
        if !reply.tool_calls.is_empty() {
            warn!(
                "follow-up reply requested {} more tool call(s), ignoring",
                reply.tool_calls.len()
            );
        }
        self.conversation
            .push(ModelMessage::Assistant(reply.content.clone()));
        Ok(reply.content)
    }

    /// Resets the conversation to a single system turn.
    #[inline]
    pub fn reset<S: Into<String>>(&mut self, system_prompt: S) {
        self.conversation.reset(system_prompt);
    }

    /// Returns the conversation history.
    #[inline]
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    fn build_request(&self, model: Option<String>) -> ModelRequest {
        ModelRequest {
            model,
            messages: self.conversation.messages().to_vec(),
            tools: self.registry.definitions(),
        }
    }
}
