//! Core types and data structures for ReAct orchestration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for agents
pub type AgentId = Uuid;

/// A parsed instruction to invoke a named tool
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentAction {
    /// Name of the tool to invoke
    pub tool: String,
    /// Input text to pass to the tool
    pub tool_input: String,
    /// Verbatim model text this action was parsed from
    pub log: String,
}

/// A parsed final answer; orchestration stops here
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentFinish {
    /// The final answer to the original question
    pub answer: String,
    /// Verbatim model text this answer was parsed from
    pub log: String,
}

/// The decision parsed from one model reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AgentDecision {
    /// Invoke a tool and observe its result
    Action(AgentAction),
    /// Stop with a final answer
    Finish(AgentFinish),
}

/// One completed iteration: the action taken and what it produced.
///
/// Append-only; the scratchpad passed into each orchestration step is an
/// ordered slice of these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentStep {
    /// Step identifier
    pub id: Uuid,
    /// The action that was executed
    pub action: AgentAction,
    /// Text observed from the tool invocation
    pub observation: String,
    /// Timestamp when the step was recorded
    pub timestamp: DateTime<Utc>,
}

impl AgentAction {
    /// Create a new action
    pub fn new(
        tool: impl Into<String>,
        tool_input: impl Into<String>,
        log: impl Into<String>,
    ) -> Self {
        Self {
            tool: tool.into(),
            tool_input: tool_input.into(),
            log: log.into(),
        }
    }
}

impl AgentFinish {
    /// Create a new final answer
    pub fn new(answer: impl Into<String>, log: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            log: log.into(),
        }
    }
}

impl AgentDecision {
    /// Whether this decision is an action
    #[must_use]
    pub fn is_action(&self) -> bool {
        matches!(self, Self::Action(_))
    }

    /// Whether this decision is a final answer
    #[must_use]
    pub fn is_finish(&self) -> bool {
        matches!(self, Self::Finish(_))
    }

    /// Get the action, if this decision is one
    #[must_use]
    pub fn as_action(&self) -> Option<&AgentAction> {
        match self {
            Self::Action(action) => Some(action),
            Self::Finish(_) => None,
        }
    }

    /// Get the final answer, if this decision is one
    #[must_use]
    pub fn as_finish(&self) -> Option<&AgentFinish> {
        match self {
            Self::Action(_) => None,
            Self::Finish(finish) => Some(finish),
        }
    }
}

impl AgentStep {
    /// Record a new step from an executed action and its observation
    pub fn new(action: AgentAction, observation: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            action,
            observation: observation.into(),
            timestamp: Utc::now(),
        }
    }
}
