//! ReAct output parsing: model reply text to a structured decision.

use crate::{
    error::{AgentError, Result},
    types::{AgentAction, AgentDecision, AgentFinish},
};
use regex::Regex;

const FINAL_ANSWER_MARKER: &str = "Final Answer:";

/// Parses one model reply into an [`AgentDecision`].
///
/// A reply is either an action (`Action:` / `Action Input:` lines) or a
/// final answer (`Final Answer:` marker). A reply containing both, or
/// neither, is a parse error; there is no repair or fallback.
#[derive(Debug, Clone)]
pub struct ReActOutputParser {
    action_regex: Regex,
}

impl ReActOutputParser {
    /// Create a new ReAct output parser
    #[must_use]
    pub fn new() -> Self {
        // Tool name and input are each confined to their own line, so any
        // `Observation:` text a misbehaving provider appends on later lines
        // can never join the captured action.
        let action_regex = Regex::new(
            r"Action\s*\d*\s*:[ \t]*([^\r\n]+?)[ \t]*\r?\n\s*Action\s*\d*\s*Input\s*\d*\s*:[ \t]*([^\r\n]*)",
        )
        .expect("Invalid action regex");

        Self { action_regex }
    }

    /// Parse a raw model reply into a decision
    pub fn parse(&self, output: &str) -> Result<AgentDecision> {
        let text = output.trim();
        let action_captures = self.action_regex.captures(text);

        if let Some(index) = text.find(FINAL_ANSWER_MARKER) {
            if action_captures.is_some() {
                return Err(AgentError::parse(
                    "reply contains both an action and a final answer",
                ));
            }

            let answer = text[index + FINAL_ANSWER_MARKER.len()..].trim();
            return Ok(AgentDecision::Finish(AgentFinish::new(answer, text)));
        }

        if let Some(captures) = action_captures {
            let tool = captures[1].trim().to_string();
            let tool_input = captures[2].trim().trim_matches('"').to_string();
            return Ok(AgentDecision::Action(AgentAction {
                tool,
                tool_input,
                log: text.to_string(),
            }));
        }

        Err(AgentError::parse(format!(
            "reply matches neither the action nor the final answer grammar: {text}"
        )))
    }
}

impl Default for ReActOutputParser {
    fn default() -> Self {
        Self::new()
    }
}
