use chatbot::core::ChatbotBuilder;
use chatbot::tools::RandomNumberTool;
use chatbot_model::ModelMessage;
use chatbot_test_model::{PresetReply, TestModelProvider};

#[tokio::test]
async fn test_roll_round_trip() {
    let provider = TestModelProvider::new();
    provider.add_reply(PresetReply::with_content("").with_tool_call(
        "call:1",
        "random_number",
        r#"{"n":6}"#,
    ));
    provider.add_reply(PresetReply::with_content("You rolled it!"));

    let mut bot = ChatbotBuilder::with_model_provider(provider.clone())
        .with_system_prompt("You are a helpful assistant.")
        .with_tool(RandomNumberTool::new())
        .build();
    let answer = bot.ask("Roll a dice").await.unwrap();
    assert_eq!(answer, "You rolled it!");
    assert_eq!(provider.call_count(), 2);

    // The tool result sent with the follow-up call is a number in range.
    let requests = provider.requests();
    let follow_up = &requests[1];
    let result = follow_up
        .messages
        .iter()
        .find_map(|msg| match msg {
            ModelMessage::Tool(result) => Some(result.content.clone()),
            _ => None,
        })
        .expect("a tool turn should precede the follow-up call");
    let value: u64 = result.parse().unwrap();
    assert!((1..=6).contains(&value));
}

#[tokio::test]
async fn test_schema_advertised_to_the_model() {
    let provider = TestModelProvider::new();
    provider.add_reply(PresetReply::with_content("Hi!"));

    let mut bot = ChatbotBuilder::with_model_provider(provider.clone())
        .with_tool(RandomNumberTool::new())
        .build();
    bot.ask("Hello").await.unwrap();

    let requests = provider.requests();
    let sent = &requests[0];
    assert_eq!(sent.tools.len(), 1);
    assert_eq!(sent.tools[0].name, "random_number");
    assert!(sent.tools[0].parameters["properties"]["n"].is_object());
}
