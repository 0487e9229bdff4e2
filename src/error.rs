//! Error types for the reagent crate.

use thiserror::Error;

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Error types for ReAct orchestration
#[derive(Error, Debug)]
pub enum AgentError {
    /// A decision named a tool that is not present in the registry
    #[error("Tool not found: '{name}'")]
    ToolNotFound {
        /// Name the decision asked for
        name: String,
    },

    /// The model reply did not match the Action / Final Answer grammar
    #[error("Parse error: {message}")]
    Parse {
        /// Error message
        message: String,
    },

    /// A tool invocation failed
    #[error("Tool error: {tool_name} - {message}")]
    Tool {
        /// Tool name
        tool_name: String,
        /// Error message
        message: String,
    },

    /// The completion request to the remote model failed
    #[error("Completion error: {message}")]
    Completion {
        /// Error message
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Orchestration-level execution errors
    #[error("Execution error: {message}")]
    Execution {
        /// Error message
        message: String,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AgentError {
    /// Create a tool-not-found error
    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound { name: name.into() }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a tool error
    pub fn tool(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Tool {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }

    /// Create a completion error
    pub fn completion(message: impl Into<String>) -> Self {
        Self::Completion {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an execution error
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::ToolNotFound { .. } => "tool_not_found",
            Self::Parse { .. } => "parse",
            Self::Tool { .. } => "tool",
            Self::Completion { .. } => "completion",
            Self::Configuration { .. } => "configuration",
            Self::Execution { .. } => "execution",
            Self::Serialization(_) => "serialization",
        }
    }
}

// Convert from anyhow errors
impl From<anyhow::Error> for AgentError {
    fn from(err: anyhow::Error) -> Self {
        Self::execution(format!("{err}"))
    }
}
