//! ReAct prompt rendering.
//!
//! Fills the fixed ReAct template with the tool inventory, the question,
//! and a rendered scratchpad of prior steps. Rendering is deterministic:
//! the same registry contents, question, and scratchpad always produce an
//! identical prompt string.

use crate::{
    error::{AgentError, Result},
    tool::ToolRegistry,
    types::AgentStep,
};

/// Default ReAct prompt template.
///
/// Placeholders: `{tools}` (inventory lines), `{tool_names}` (comma-separated
/// names), `{input}` (the question), `{agent_scratchpad}` (prior steps; empty
/// on the first iteration).
pub const DEFAULT_TEMPLATE: &str = r"Answer the following questions as best you can. You have access to the following tools:

{tools}

Use the following format:

Question: the input question you must answer
Thought: you should always think about what to do
Action: the action to take, should be one of [{tool_names}]
Action Input: the input to the action
Observation: the result of the action
... (this Thought/Action/Action Input/Observation can repeat N times)
Thought: I now know the final answer
Final Answer: the final answer to the original input question

Begin!

Question: {input}
Thought: {agent_scratchpad}";

const PLACEHOLDERS: [&str; 4] = ["{tools}", "{tool_names}", "{input}", "{agent_scratchpad}"];

/// ReAct prompt renderer
#[derive(Debug, Clone)]
pub struct ReActFormatter {
    template: String,
}

impl ReActFormatter {
    /// Create a formatter using the default template
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Create a formatter with a custom template.
    ///
    /// The template must contain every placeholder the renderer substitutes.
    pub fn with_template(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        for placeholder in PLACEHOLDERS {
            if !template.contains(placeholder) {
                return Err(AgentError::configuration(format!(
                    "template is missing the {placeholder} placeholder"
                )));
            }
        }

        Ok(Self { template })
    }

    /// Get the template text
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render the prompt for one orchestration step
    #[must_use]
    pub fn render(&self, tools: &ToolRegistry, question: &str, scratchpad: &[AgentStep]) -> String {
        self.template
            .replace("{tools}", &tools.describe())
            .replace("{tool_names}", &tools.tool_names().join(", "))
            .replace("{input}", question)
            .replace("{agent_scratchpad}", &Self::render_scratchpad(scratchpad))
    }

    /// Serialize prior steps into the scratchpad block.
    ///
    /// Each step contributes the verbatim model text it was parsed from,
    /// its observation, and a trailing `Thought: ` cue for the next
    /// iteration. An empty scratchpad renders as the empty string.
    #[must_use]
    pub fn render_scratchpad(scratchpad: &[AgentStep]) -> String {
        let mut rendered = String::new();
        for step in scratchpad {
            rendered.push_str(step.action.log.trim_end());
            rendered.push_str("\nObservation: ");
            rendered.push_str(&step.observation);
            rendered.push_str("\nThought: ");
        }
        rendered
    }
}

impl Default for ReActFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tool::builtin::TextLengthTool, types::AgentAction};
    use std::sync::Arc;

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(TextLengthTool::new()));
        registry
    }

    fn step(input: &str, observation: &str) -> AgentStep {
        let log = format!(
            "Thought: I should count the characters\nAction: get_text_length\nAction Input: {input}"
        );
        AgentStep::new(AgentAction::new("get_text_length", input, log), observation)
    }

    #[test]
    fn test_render_substitutes_tool_inventory() {
        let formatter = ReActFormatter::new();
        let prompt = formatter.render(&registry(), "What is the length of 'DOG' in characters?", &[]);

        assert!(prompt.contains("get_text_length: Returns the length of the given text in characters."));
        assert!(prompt.contains("should be one of [get_text_length]"));
        assert!(prompt.contains("Question: What is the length of 'DOG' in characters?"));
        assert!(!prompt.contains("{tools}"));
        assert!(!prompt.contains("{agent_scratchpad}"));
    }

    #[test]
    fn test_empty_scratchpad_renders_empty() {
        assert_eq!(ReActFormatter::render_scratchpad(&[]), "");

        let formatter = ReActFormatter::new();
        let prompt = formatter.render(&registry(), "question", &[]);
        assert!(prompt.ends_with("Thought: "));
    }

    #[test]
    fn test_scratchpad_steps_render_in_order() {
        let steps = vec![step("'DOG'", "3"), step("'PENGUIN'", "7")];
        let rendered = ReActFormatter::render_scratchpad(&steps);

        let first = rendered.find("Observation: 3").unwrap();
        let second = rendered.find("Observation: 7").unwrap();
        assert!(first < second);
        assert_eq!(rendered.matches("Observation:").count(), 2);
        assert!(rendered.ends_with("Thought: "));
    }

    #[test]
    fn test_render_is_idempotent() {
        let formatter = ReActFormatter::new();
        let registry = registry();
        let steps = vec![step("'DOG'", "3")];

        let first = formatter.render(&registry, "question", &steps);
        let second = formatter.render(&registry, "question", &steps);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_template_requires_all_placeholders() {
        let err = ReActFormatter::with_template("Question: {input}").unwrap_err();
        assert!(matches!(err, AgentError::Configuration { .. }));

        let ok = ReActFormatter::with_template(
            "{tools} {tool_names} {input} {agent_scratchpad}",
        );
        assert!(ok.is_ok());
    }
}
