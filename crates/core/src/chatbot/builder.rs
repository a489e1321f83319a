use chatbot_model::ModelProvider;

use super::Chatbot;
use crate::model_client::ModelClient;
use crate::tool::{AnyTool, Tool, ToolObject};

const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// [`Chatbot`] builder.
pub struct ChatbotBuilder {
    pub(crate) model_client: ModelClient,
    pub(crate) system_prompt: String,
    pub(crate) model: Option<String>,
    pub(crate) tools: Vec<Box<dyn ToolObject>>,
}

impl ChatbotBuilder {
    /// Creates a new builder with the specified model provider.
    #[inline]
    pub fn with_model_provider<P: ModelProvider + 'static>(
        provider: P,
    ) -> Self {
        Self {
            model_client: ModelClient::new(provider),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_owned(),
            model: None,
            tools: vec![],
        }
    }

    /// Sets the system prompt for the chatbot.
    #[inline]
    pub fn with_system_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Sets the default model identifier for every request.
    ///
    /// When unset, the provider's own configured default is used.
    #[inline]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Registers a tool.
    ///
    /// Tools are advertised to the model in registration order.
    #[inline]
    pub fn with_tool<T: Tool>(mut self, tool: T) -> Self {
        let tool = Box::new(AnyTool(tool));
        self.tools.push(tool);
        self
    }

    /// Builds the chatbot.
    #[inline]
    pub fn build(self) -> Chatbot {
        Chatbot::from_builder(self)
    }
}
