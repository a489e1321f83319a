use chatbot_core::tool::{Error as ToolError, Tool, ToolResult};
use rand::Rng;
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::Value;

/// Parameters of [`RandomNumberTool`].
#[derive(Deserialize, JsonSchema)]
pub struct RandomNumberParameters {
    #[schemars(description = "Upper bound of the range, inclusive. Must be \
                              at least 1.")]
    #[serde(default = "default_upper_bound")]
    n: u64,
}

// A plain dice when the model sends no arguments.
fn default_upper_bound() -> u64 {
    6
}

/// A tool that draws a uniformly distributed integer in `[1, n]`.
pub struct RandomNumberTool {
    parameter_schema: Value,
}

impl RandomNumberTool {
    /// Creates a new random number tool.
    #[inline]
    pub fn new() -> Self {
        Self {
            parameter_schema: schema_for!(RandomNumberParameters).to_value(),
        }
    }
}

impl Default for RandomNumberTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for RandomNumberTool {
    type Input = RandomNumberParameters;

    fn name(&self) -> &str {
        "random_number"
    }

    fn description(&self) -> &str {
        "Returns a uniformly distributed random integer between 1 and n, \
         inclusive."
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    #[allow(clippy::manual_async_fn)]
    fn execute(
        &self,
        input: RandomNumberParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        async move {
            if input.n < 1 {
                return Err(ToolError::invalid_input()
                    .with_reason("`n` must be at least 1"));
            }
            let value = rand::rng().random_range(1..=input.n);
            Ok(value.to_string())
        }
    }
}
