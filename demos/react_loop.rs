//! ReAct Loop with Scratchpad and Logging Hook
//!
//! Drives the full reason/act/observe cycle for two hard-coded questions,
//! carrying the scratchpad between steps and logging every prompt and raw
//! reply through a [`LoggingHook`].
//!
//! ## Setup
//!
//! Set up credentials for one provider before running:
//!
//! ```bash
//! export OPENAI_API_KEY="your-openai-api-key"
//! # or
//! export ANTHROPIC_API_KEY="your-anthropic-api-key"
//! # or (optional, defaults to localhost:11434)
//! export OLLAMA_BASE_URL="http://localhost:11434"
//! ```
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example react_loop
//! ```

use reagent::prelude::*;
use std::sync::Arc;
use tracing::{Level, info};

#[tokio::main]
async fn main() -> reagent::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("🚀 Starting ReAct loop demo");

    let client = Arc::new(SiumaiCompletionClient::from_config(config_from_env()).await?);

    let mut tools = ToolRegistry::new();
    tools.register(Arc::new(TextLengthTool::new()));
    let tools = Arc::new(tools);

    let agent = ReActAgent::new(
        ReActConfig::new("react_loop").with_max_iterations(5),
        tools,
        client,
    )
    .with_hook(Arc::new(LoggingHook::new()));

    let questions = [
        "What is the length of 'DOG' in characters?",
        "What is the length of the word 'PENGUIN' in characters?",
    ];

    for question in questions {
        info!("📝 Question: {}", question);

        let outcome = agent.run(question).await?;
        for step in &outcome.steps {
            info!(
                tool = %step.action.tool,
                input = %step.action.tool_input,
                observation = %step.observation,
                "step taken"
            );
        }
        println!("{question}\n  -> {}", outcome.answer);
    }

    Ok(())
}

/// Pick a provider from whichever credential variable is set.
fn config_from_env() -> CompletionConfig {
    if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
        return CompletionConfig::new("openai", "gpt-4o-mini").with_api_key(api_key);
    }

    if let Ok(api_key) = std::env::var("ANTHROPIC_API_KEY") {
        return CompletionConfig::new("anthropic", "claude-3-haiku-20240307").with_api_key(api_key);
    }

    let base_url =
        std::env::var("OLLAMA_BASE_URL").unwrap_or_else(|_| "http://localhost:11434".to_string());
    CompletionConfig::new("ollama", "llama3.2").with_base_url(base_url)
}
