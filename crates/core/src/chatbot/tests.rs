use std::future::ready;

use chatbot_model::ModelMessage;
use chatbot_test_model::{PresetReply, TestModelProvider};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::ChatbotBuilder;
use crate::tool::{Error as ToolError, Tool, ToolResult};

#[derive(Deserialize)]
struct RollInput {
    #[serde(default = "default_sides")]
    n: u64,
}

fn default_sides() -> u64 {
    6
}

/// A deterministic stand-in for a dice tool: echoes the upper bound.
struct RollTool {
    parameter_schema: Value,
}

impl RollTool {
    fn new() -> Self {
        Self {
            parameter_schema: json!({
                "type": "object",
                "properties": {
                    "n": { "type": "integer", "minimum": 1 }
                },
                "required": ["n"]
            }),
        }
    }
}

impl Tool for RollTool {
    type Input = RollInput;

    fn name(&self) -> &str {
        "random_number"
    }

    fn description(&self) -> &str {
        "Returns a random number between 1 and n."
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    fn execute(
        &self,
        input: RollInput,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        ready(Ok(input.n.to_string()))
    }
}

struct BrokenTool {
    parameter_schema: Value,
}

impl Tool for BrokenTool {
    type Input = Value;

    fn name(&self) -> &str {
        "broken"
    }

    fn description(&self) -> &str {
        "Always fails."
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    fn execute(
        &self,
        _input: Value,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        ready(Err(ToolError::execution_error().with_reason("out of order")))
    }
}

fn builder(provider: TestModelProvider) -> ChatbotBuilder {
    ChatbotBuilder::with_model_provider(provider)
        .with_system_prompt("You are a helpful assistant.")
        .with_tool(RollTool::new())
        .with_tool(BrokenTool {
            parameter_schema: Value::Null,
        })
}

fn roles(messages: &[ModelMessage]) -> Vec<&'static str> {
    messages
        .iter()
        .map(|msg| match msg {
            ModelMessage::System(_) => "system",
            ModelMessage::User(_) => "user",
            ModelMessage::Assistant(_) => "assistant",
            ModelMessage::AssistantToolCalls { .. } => "assistant+tools",
            ModelMessage::Tool(_) => "tool",
        })
        .collect()
}

#[tokio::test]
async fn test_direct_answer() {
    let provider = TestModelProvider::new();
    provider.add_reply(PresetReply::with_content("Hi there!"));

    let mut bot = builder(provider.clone()).build();
    let answer = bot.ask("Hello").await.unwrap();
    assert_eq!(answer, "Hi there!");

    // No follow-up call is made for a text-only reply.
    assert_eq!(provider.call_count(), 1);
    assert_eq!(
        roles(bot.conversation().messages()),
        ["system", "user", "assistant"]
    );

    // Exactly one user turn was appended before the call.
    let requests = provider.requests();
    let sent = &requests[0];
    assert_eq!(roles(&sent.messages), ["system", "user"]);
}

#[tokio::test]
async fn test_dice_scenario() {
    let provider = TestModelProvider::new();
    provider.add_reply(
        PresetReply::with_content("")
            .with_tool_call("call:1", "random_number", r#"{"n":6}"#)
            .with_tool_call("call:2", "random_number", r#"{"n":6}"#)
            .with_tool_call("call:3", "random_number", r#"{"n":6}"#),
    );
    provider.add_reply(PresetReply::with_content(
        "You rolled 6, 6 and 6, for a sum of 18.",
    ));

    let mut bot = builder(provider.clone()).build();
    let answer = bot
        .ask("Roll a dice three times, tell me the numbers and their sum.")
        .await
        .unwrap();
    assert_eq!(answer, "You rolled 6, 6 and 6, for a sum of 18.");

    // 1 system + 1 user + 1 assistant(tool_calls) + 3 tool + 1 assistant.
    assert_eq!(
        roles(bot.conversation().messages()),
        ["system", "user", "assistant+tools", "tool", "tool", "tool", "assistant"]
    );
    assert_eq!(provider.call_count(), 2);

    // All three results precede the follow-up call, in request order.
    let requests = provider.requests();
    let follow_up = &requests[1];
    let results: Vec<_> = follow_up
        .messages
        .iter()
        .filter_map(|msg| match msg {
            ModelMessage::Tool(result) => Some((result.id.as_str(), result.content.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(
        results,
        [("call:1", "6"), ("call:2", "6"), ("call:3", "6")]
    );
}

#[tokio::test]
async fn test_tool_requests_preserved_verbatim() {
    let provider = TestModelProvider::new();
    provider.add_reply(
        PresetReply::with_content("Let me roll.").with_tool_call(
            "call:1",
            "random_number",
            r#"{"n":20}"#,
        ),
    );
    provider.add_reply(PresetReply::with_content("A natural 20!"));

    let mut bot = builder(provider.clone()).build();
    bot.ask("Roll a d20").await.unwrap();

    let requests = provider.requests();
    let follow_up = &requests[1];
    let Some(ModelMessage::AssistantToolCalls { content, requests }) =
        follow_up.messages.get(2)
    else {
        panic!("expected an assistant turn carrying the requests");
    };
    assert_eq!(content, "Let me roll.");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, "call:1");
    assert_eq!(requests[0].arguments, r#"{"n":20}"#);
}

#[tokio::test]
async fn test_batch_failures_are_isolated() {
    let provider = TestModelProvider::new();
    provider.add_reply(
        PresetReply::with_content("")
            .with_tool_call("call:1", "fortune", "{}")
            .with_tool_call("call:2", "broken", "{}")
            .with_tool_call("call:3", "random_number", r#"{"n":3}"#),
    );
    provider.add_reply(PresetReply::with_content("That was bumpy."));

    let mut bot = builder(provider.clone()).build();
    let answer = bot.ask("Do things").await.unwrap();
    assert_eq!(answer, "That was bumpy.");

    let contents: Vec<_> = bot
        .conversation()
        .messages()
        .iter()
        .filter_map(|msg| match msg {
            ModelMessage::Tool(result) => Some(result.content.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        contents,
        ["Unknown tool: fortune", "Error: out of order", "3"]
    );
}

#[tokio::test]
async fn test_malformed_arguments_fall_back_to_defaults() {
    let provider = TestModelProvider::new();
    provider.add_reply(PresetReply::with_content("").with_tool_call(
        "call:1",
        "random_number",
        "{bad json",
    ));
    provider.add_reply(PresetReply::with_content("Rolled with defaults."));

    let mut bot = builder(provider.clone()).build();
    bot.ask("Roll").await.unwrap();

    let Some(ModelMessage::Tool(result)) =
        bot.conversation().messages().get(3)
    else {
        panic!("expected a tool turn");
    };
    assert_eq!(result.content, "6");
}

#[tokio::test]
async fn test_follow_up_tool_calls_are_not_dispatched() {
    let provider = TestModelProvider::new();
    provider.add_reply(PresetReply::with_content("").with_tool_call(
        "call:1",
        "random_number",
        r#"{"n":6}"#,
    ));
    provider.add_reply(
        PresetReply::with_content("One more?").with_tool_call(
            "call:2",
            "random_number",
            r#"{"n":6}"#,
        ),
    );

    let mut bot = builder(provider.clone()).build();
    let answer = bot.ask("Roll").await.unwrap();
    assert_eq!(answer, "One more?");

    // Exactly one follow-up call per cycle; the second round is ignored.
    assert_eq!(provider.call_count(), 2);
    assert!(matches!(
        bot.conversation().messages().last(),
        Some(ModelMessage::Assistant(content)) if content == "One more?"
    ));
}

#[tokio::test]
async fn test_empty_question_appends_no_user_turn() {
    let provider = TestModelProvider::new();
    provider.add_reply(PresetReply::with_content("Still here."));

    let mut bot = builder(provider.clone()).build();
    bot.ask("").await.unwrap();

    let requests = provider.requests();
    let sent = &requests[0];
    assert_eq!(roles(&sent.messages), ["system"]);
}

#[tokio::test]
async fn test_provider_failure_propagates_without_rollback() {
    let provider = TestModelProvider::new();
    provider.add_failure("connection refused");

    let mut bot = builder(provider.clone()).build();
    let err = bot.ask("Hello").await.unwrap_err();
    assert_eq!(format!("{err}"), "connection refused");

    // The user turn appended before the failing call is kept.
    assert_eq!(roles(bot.conversation().messages()), ["system", "user"]);
}

#[tokio::test]
async fn test_reset() {
    let provider = TestModelProvider::new();
    provider.add_reply(PresetReply::with_content("Hi!"));

    let mut bot = builder(provider).build();
    bot.ask("Hello").await.unwrap();
    assert_eq!(bot.conversation().len(), 3);

    bot.reset("You are a pirate.");
    assert_eq!(
        bot.conversation().messages(),
        [ModelMessage::System("You are a pirate.".to_owned())]
    );
}

#[tokio::test]
async fn test_model_override() {
    let provider = TestModelProvider::new();
    provider.add_reply(PresetReply::with_content("first"));
    provider.add_reply(PresetReply::with_content("second"));
    provider.add_reply(PresetReply::with_content("third"));

    let mut bot = builder(provider.clone()).with_model("gpt-4o-mini").build();
    bot.ask("one").await.unwrap();
    bot.ask_with_model("two", "gpt-4o").await.unwrap();
    bot.ask("three").await.unwrap();

    let models: Vec<_> = provider
        .requests()
        .iter()
        .map(|req| req.model.clone())
        .collect();
    assert_eq!(
        models,
        [
            Some("gpt-4o-mini".to_owned()),
            Some("gpt-4o".to_owned()),
            Some("gpt-4o-mini".to_owned())
        ]
    );
}

#[tokio::test]
async fn test_tool_schemas_sent_with_every_call() {
    let provider = TestModelProvider::new();
    provider.add_reply(PresetReply::with_content("").with_tool_call(
        "call:1",
        "random_number",
        r#"{"n":6}"#,
    ));
    provider.add_reply(PresetReply::with_content("Done."));

    let mut bot = builder(provider.clone()).build();
    bot.ask("Roll").await.unwrap();

    for req in provider.requests() {
        let names: Vec<_> =
            req.tools.iter().map(|tool| tool.name.as_str()).collect();
        assert_eq!(names, ["random_number", "broken"]);
    }
}
