//! ReAct single-step orchestrator.
//!
//! One [`ReActAgent::step`] renders the prompt, issues one completion call,
//! and parses the reply into a decision. The caller owns the loop: on an
//! action decision it calls [`ReActAgent::act`] and appends the returned
//! step to its scratchpad before stepping again. [`ReActAgent::run`] wraps
//! that loop with a bounded iteration count for callers that want a final
//! answer in one call.

use super::{formatter::ReActFormatter, output_parser::ReActOutputParser};
use crate::{
    error::{AgentError, Result},
    llm::{CompletionClient, CompletionHook},
    tool::ToolRegistry,
    types::{AgentAction, AgentDecision, AgentId, AgentStep},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// ReAct agent configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReActConfig {
    /// Agent name, used in logs
    pub name: String,
    /// Maximum number of action steps [`ReActAgent::run`] will take before
    /// giving up. Manual `step`/`act` driving is not bounded.
    pub max_iterations: usize,
    /// Stop sequences sent with every completion request
    pub stop_sequences: Vec<String>,
}

impl ReActConfig {
    /// Create a new configuration with the default stop sequences
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_iterations: 10,
            stop_sequences: vec!["\nObservation".to_string(), "Observation".to_string()],
        }
    }

    /// Set the maximum iterations for the bounded loop
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl Default for ReActConfig {
    fn default() -> Self {
        Self::new("react_agent")
    }
}

/// The result of a bounded [`ReActAgent::run`] loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReActOutcome {
    /// The final answer
    pub answer: String,
    /// Every step taken on the way there, in order
    pub steps: Vec<AgentStep>,
}

/// ReAct single-step orchestrator
#[derive(Debug)]
pub struct ReActAgent {
    id: AgentId,
    config: ReActConfig,
    tools: Arc<ToolRegistry>,
    client: Arc<dyn CompletionClient>,
    formatter: ReActFormatter,
    parser: ReActOutputParser,
    hooks: Vec<Arc<dyn CompletionHook>>,
}

impl ReActAgent {
    /// Create a new agent over a tool registry and completion client
    pub fn new(
        config: ReActConfig,
        tools: Arc<ToolRegistry>,
        client: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            tools,
            client,
            formatter: ReActFormatter::new(),
            parser: ReActOutputParser::new(),
            hooks: Vec::new(),
        }
    }

    /// Replace the prompt formatter
    #[must_use]
    pub fn with_formatter(mut self, formatter: ReActFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Attach a completion hook, invoked around every completion call
    #[must_use]
    pub fn with_hook(mut self, hook: Arc<dyn CompletionHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Get the agent's unique identifier
    #[must_use]
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Get the agent's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Get the agent configuration
    #[must_use]
    pub fn config(&self) -> &ReActConfig {
        &self.config
    }

    /// Get the tool registry
    #[must_use]
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Perform one orchestration step.
    ///
    /// Renders the prompt from the question and the caller-held scratchpad,
    /// issues one completion call, and parses the reply. No retries: a
    /// failed call or a malformed reply propagates as an error. The caller
    /// is responsible for acting on an action decision and extending the
    /// scratchpad before stepping again.
    pub async fn step(&self, question: &str, scratchpad: &[AgentStep]) -> Result<AgentDecision> {
        let prompt = self.formatter.render(&self.tools, question, scratchpad);
        for hook in &self.hooks {
            hook.on_prompt(&prompt);
        }

        debug!(agent = %self.config.name, steps = scratchpad.len(), "sending completion request");
        let reply = self
            .client
            .complete(&prompt, &self.config.stop_sequences)
            .await?;
        for hook in &self.hooks {
            hook.on_completion(&reply);
        }

        let decision = self.parser.parse(&reply)?;
        match &decision {
            AgentDecision::Action(action) => {
                debug!(agent = %self.config.name, tool = %action.tool, "parsed action decision");
            }
            AgentDecision::Finish(_) => {
                debug!(agent = %self.config.name, "parsed finish decision");
            }
        }

        Ok(decision)
    }

    /// Execute an action decision: look up the named tool, invoke it, and
    /// record the observation as a new scratchpad step.
    pub async fn act(&self, action: AgentAction) -> Result<AgentStep> {
        let tool = self.tools.lookup(&action.tool)?;
        let observation = tool.call(&action.tool_input).await?;

        debug!(tool = %action.tool, observation = %observation, "tool invoked");
        Ok(AgentStep::new(action, observation))
    }

    /// Drive step/act until a final answer, bounded by
    /// [`ReActConfig::max_iterations`] action steps.
    pub async fn run(&self, question: &str) -> Result<ReActOutcome> {
        let mut scratchpad: Vec<AgentStep> = Vec::new();

        for iteration in 0..self.config.max_iterations {
            match self.step(question, &scratchpad).await? {
                AgentDecision::Finish(finish) => {
                    info!(
                        agent = %self.config.name,
                        steps = scratchpad.len(),
                        "final answer reached"
                    );
                    return Ok(ReActOutcome {
                        answer: finish.answer,
                        steps: scratchpad,
                    });
                }
                AgentDecision::Action(action) => {
                    info!(
                        agent = %self.config.name,
                        iteration,
                        tool = %action.tool,
                        "executing action"
                    );
                    let step = self.act(action).await?;
                    scratchpad.push(step);
                }
            }
        }

        Err(AgentError::execution(format!(
            "no final answer after {} iterations",
            self.config.max_iterations
        )))
    }
}
