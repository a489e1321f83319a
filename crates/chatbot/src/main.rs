//! An interactive command-line chat session with the built-in tools.

#[macro_use]
extern crate tracing;

use std::env;
use std::io::Write as _;

use chatbot::ModelKey;
use chatbot::core::ChatbotBuilder;
use chatbot::tools::RandomNumberTool;
use chatbot_openai_model::{OpenAIConfigBuilder, OpenAIProvider};
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufReadExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Ok(api_key) = env::var("OPENAI_API_KEY") else {
        eprintln!("OPENAI_API_KEY environment variable is not set");
        return;
    };
    let model_key = match env::var("CHATBOT_MODEL") {
        Ok(raw) => match raw.parse::<ModelKey>() {
            Ok(key) => key,
            Err(err) => {
                eprintln!("{err}");
                return;
            }
        },
        Err(_) => ModelKey::Gpt4oMini,
    };

    let mut config = OpenAIConfigBuilder::with_api_key(api_key)
        .with_model(model_key.identifier());
    if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    let model_provider = OpenAIProvider::new(config.build());

    let mut bot = ChatbotBuilder::with_model_provider(model_provider)
        .with_system_prompt(include_str!("./system_prompt.md"))
        .with_tool(RandomNumberTool::new())
        .build();

    println!("Type 'exit' to quit.");
    loop {
        print!("You: ");
        std::io::stdout().flush().unwrap();

        let Some(line) = read_line().await else {
            break;
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            break;
        }

        match bot.ask(line).await {
            Ok(answer) => {
                println!("{} {}", "Bot:".bright_cyan(), answer.bright_white());
            }
            Err(err) => {
                println!("Unexpected Error: {err}");
                break;
            }
        }
    }
}

async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
