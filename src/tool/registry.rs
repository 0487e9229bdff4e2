//! Tool registry for managing and looking up tools.

use crate::{
    error::{AgentError, Result},
    tool::Tool,
};
use std::sync::Arc;
use tracing::debug;

/// Ordered collection of the tools available to an agent.
///
/// Registration order is preserved: it determines both the order of the
/// rendered tool inventory and which tool wins when two share a name
/// (lookup scans front to back and returns the first match; duplicate
/// names are not rejected at registration).
#[derive(Debug, Default, Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        debug!("Registering tool: {}", tool.name());
        self.tools.push(tool);
    }

    /// Look up a tool by name.
    ///
    /// Returns the first registered tool whose name matches, or
    /// [`AgentError::ToolNotFound`] if no tool has that name.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Tool>> {
        self.tools
            .iter()
            .find(|tool| tool.name() == name)
            .map(Arc::clone)
            .ok_or_else(|| AgentError::tool_not_found(name))
    }

    /// Check whether a tool with the given name is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|tool| tool.name() == name)
    }

    /// Names of all registered tools, in registration order
    #[must_use]
    pub fn tool_names(&self) -> Vec<String> {
        self.tools
            .iter()
            .map(|tool| tool.name().to_string())
            .collect()
    }

    /// Render the tool inventory for prompt injection: one
    /// `name: description` line per tool, in registration order.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.tools.is_empty() {
            return "No tools available.".to_string();
        }

        self.tools
            .iter()
            .map(|tool| format!("{}: {}", tool.name(), tool.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// All registered tools, in registration order
    #[must_use]
    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
