//! A one-shot demo that asks a fixed question, then a second one with a
//! per-call model override.

use std::env;

use chatbot::ModelKey;
use chatbot::core::ChatbotBuilder;
use chatbot::tools::RandomNumberTool;
use chatbot_openai_model::{OpenAIConfigBuilder, OpenAIProvider};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Ok(api_key) = env::var("OPENAI_API_KEY") else {
        eprintln!("OPENAI_API_KEY environment variable is not set");
        return;
    };
    let mut config = OpenAIConfigBuilder::with_api_key(api_key)
        .with_model(ModelKey::Gemma34b.identifier());
    if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    let model_provider = OpenAIProvider::new(config.build());

    let mut bot = ChatbotBuilder::with_model_provider(model_provider)
        .with_system_prompt("You are a helpful assistant.")
        .with_tool(RandomNumberTool::new())
        .build();

    let question = "Hello, what model are you?";
    match bot.ask(question).await {
        Ok(answer) => {
            println!("Question: {question}");
            println!("Answer: {answer}");
            println!();
        }
        Err(err) => {
            eprintln!("Unexpected Error: {err}");
            return;
        }
    }

    let question = "And now?";
    match bot
        .ask_with_model(question, ModelKey::Gpt4oMini.identifier())
        .await
    {
        Ok(answer) => {
            println!("Question: {question}");
            println!("Answer: {answer}");
        }
        Err(err) => eprintln!("Unexpected Error: {err}"),
    }
}
