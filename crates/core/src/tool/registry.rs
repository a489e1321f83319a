use chatbot_model::ModelTool;
use serde_json::{Map, Value};

use crate::tool::ToolObject;

/// A registry that resolves tool names to executable capabilities and
/// describes each tool for advertisement to the model.
///
/// Tools are kept in registration order, which is the order their
/// schemas are advertised in.
pub struct Registry {
    tools: Vec<Box<dyn ToolObject>>,
}

impl Registry {
    pub(crate) fn with_tools(tools: Vec<Box<dyn ToolObject>>) -> Self {
        Self { tools }
    }

    /// Returns the declarative shape of every registered tool, in
    /// registration order.
    pub fn definitions(&self) -> Vec<ModelTool> {
        self.tools
            .iter()
            .map(|tool| ModelTool {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                parameters: tool.parameter_schema().clone(),
            })
            .collect()
    }

    /// Invokes a tool by name and returns the result as text.
    ///
    /// This is a total operation: every anomaly is absorbed into the
    /// returned text so it can be surfaced back into the conversation.
    /// An unknown name yields `Unknown tool: <name>`, arguments that
    /// fail to parse degrade to an empty argument set, and a failing
    /// tool yields `Error: <reason>`.
    pub async fn invoke(&self, name: &str, raw_arguments: &str) -> String {
        let Some(tool) = self.tools.iter().find(|tool| tool.name() == name)
        else {
            warn!("tool not found: {name}");
            return format!("Unknown tool: {name}");
        };

        let arguments = match serde_json::from_str::<Value>(raw_arguments) {
            Ok(arguments) => arguments,
            Err(err) => {
                warn!("malformed arguments for {name} ({err}), using an empty set");
                Value::Object(Map::new())
            }
        };

        trace!("invoking {name} with args: {arguments:?}");
        match tool.execute(arguments).await {
            Ok(output) => output,
            Err(err) => format!("Error: {}", err.reason()),
        }
    }
}
