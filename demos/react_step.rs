//! Single ReAct Orchestration Step
//!
//! Performs exactly one orchestration step against a hard-coded question,
//! prints the parsed decision and, if the model chose an action, invokes the
//! tool and prints the observation. No scratchpad is involved.
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
//! cargo run --example react_step
//! ```

use reagent::prelude::*;
use std::sync::Arc;
use tracing::{Level, info};

#[tokio::main]
async fn main() -> reagent::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("🚀 Starting single ReAct step demo");

    let client = Arc::new(SiumaiCompletionClient::from_config(config_from_env()).await?);

    let mut tools = ToolRegistry::new();
    tools.register(Arc::new(TextLengthTool::new()));
    let tools = Arc::new(tools);
    info!("🔧 Tool registry created with {} tools", tools.len());

    let agent = ReActAgent::new(ReActConfig::new("react_step"), tools, client);

    let question = "What is the length of 'DOG' in characters?";
    info!("📝 Question: {}", question);

    let decision = agent.step(question, &[]).await?;
    println!("{decision:?}");

    if let AgentDecision::Action(action) = decision {
        let step = agent.act(action).await?;
        println!("observation={}", step.observation);
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
