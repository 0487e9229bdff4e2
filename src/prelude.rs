//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types and traits so that agent code
//! can start from a single `use`.
//!
//! # Examples
//!
//! ```rust
//! use reagent::prelude::*;
//! use std::sync::Arc;
//!
//! let mut tools = ToolRegistry::new();
//! tools.register(Arc::new(TextLengthTool::new()));
//! assert!(tools.contains("get_text_length"));
//! ```

// Re-export core error types
pub use crate::error::{AgentError, Result};

// Re-export the data model
pub use crate::types::{AgentAction, AgentDecision, AgentFinish, AgentId, AgentStep};

// Re-export the tool system
pub use crate::tool::{Tool, ToolRegistry, builtin::TextLengthTool};

// Re-export the ReAct orchestrator
pub use crate::agent::react::{ReActAgent, ReActConfig, ReActFormatter, ReActOutcome, ReActOutputParser};

// Re-export the completion capability
pub use crate::llm::{
    CompletionClient, CompletionConfig, CompletionHook, LoggingHook, SiumaiCompletionClient,
};
