//! # Reagent
//!
//! ReAct (Reason + Act) single-step agent orchestration in Rust.
//!
//! A reagent agent renders a prompt from a question, a tool inventory, and a
//! scratchpad of prior steps; issues one completion call to a language
//! model; and parses the reply into a structured decision: either an action
//! to take (a named tool plus its input) or a final answer. Acting on a
//! decision invokes the tool locally and records the observation for the
//! next step. The loop is caller-driven; a bounded convenience loop is
//! provided on top.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reagent::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn demo() -> reagent::Result<()> {
//! let mut tools = ToolRegistry::new();
//! tools.register(Arc::new(TextLengthTool::new()));
//!
//! let config = CompletionConfig::new("openai", "gpt-4o-mini").with_api_key("sk-...");
//! let client = Arc::new(SiumaiCompletionClient::from_config(config).await?);
//!
//! let agent = ReActAgent::new(ReActConfig::new("demo"), Arc::new(tools), client);
//! let outcome = agent.run("What is the length of 'DOG' in characters?").await?;
//! println!("{}", outcome.answer);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`tool`]: the [`tool::Tool`] trait and [`tool::ToolRegistry`]
//! - [`agent::react`]: prompt formatter, output parser, and the
//!   single-step orchestrator
//! - [`llm`]: the [`llm::CompletionClient`] capability and the
//!   siumai-backed implementation
//! - [`error`]: the crate-wide error enum
//!
//! The completion call is the only external collaborator; everything else
//! is deterministic and synchronous per step, which keeps the whole cycle
//! testable against scripted stub clients.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod prelude;

pub mod agent;
pub mod error;
pub mod llm;
pub mod tool;
pub mod types;

pub use error::{AgentError, Result};
pub use types::{AgentAction, AgentDecision, AgentFinish, AgentId, AgentStep};

/// Version information for the reagent library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the reagent library.
pub const NAME: &str = env!("CARGO_PKG_NAME");
