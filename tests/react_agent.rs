//! End-to-end orchestration tests against scripted completion clients.

use async_trait::async_trait;
use reagent::prelude::*;
use std::sync::{Arc, Mutex};

/// Completion stub that replays a fixed script of replies and records every
/// prompt it was given. Stop sequences are deliberately ignored, like a
/// provider that does not honor the stop parameter.
#[derive(Debug)]
struct ScriptedClient {
    replies: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn new(replies: &[&str]) -> Self {
        let mut replies: Vec<String> = replies.iter().map(|r| (*r).to_string()).collect();
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts lock").clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, prompt: &str, _stop: &[String]) -> reagent::Result<String> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(prompt.to_string());

        self.replies
            .lock()
            .expect("replies lock")
            .pop()
            .ok_or_else(|| AgentError::completion("script exhausted"))
    }
}

fn agent_with(client: Arc<ScriptedClient>) -> ReActAgent {
    let mut tools = ToolRegistry::new();
    tools.register(Arc::new(TextLengthTool::new()));

    ReActAgent::new(ReActConfig::new("test_agent"), Arc::new(tools), client)
}

#[tokio::test]
async fn run_reaches_final_answer_through_tool_observation() {
    let client = Arc::new(ScriptedClient::new(&[
        "Thought: I should count the characters\nAction: get_text_length\nAction Input: 'DOG'",
        "Thought: I now know the final answer\nFinal Answer: 3",
    ]));
    let agent = agent_with(Arc::clone(&client));

    let outcome = agent
        .run("What is the length of 'DOG' in characters?")
        .await
        .unwrap();

    assert_eq!(outcome.answer, "3");
    assert_eq!(outcome.steps.len(), 1);
    assert_eq!(outcome.steps[0].action.tool, "get_text_length");
    assert_eq!(outcome.steps[0].observation, "3");

    // The second prompt must carry the first step's observation back to the
    // model, and the first prompt must not contain any scratchpad yet.
    let prompts = client.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(!prompts[0].contains("Observation:"));
    assert!(prompts[1].contains("Observation: 3"));
    assert!(prompts[1].contains("Action Input: 'DOG'"));
}

#[tokio::test]
async fn manual_step_loop_matches_run_semantics() {
    let client = Arc::new(ScriptedClient::new(&[
        "Thought: count\nAction: get_text_length\nAction Input: 'PENGUIN'",
        "Final Answer: 7",
    ]));
    let agent = agent_with(client);

    let question = "What is the length of the word 'PENGUIN' in characters?";
    let mut scratchpad = Vec::new();

    let decision = agent.step(question, &scratchpad).await.unwrap();
    let action = decision.as_action().unwrap().clone();
    assert_eq!(action.tool_input, "'PENGUIN'");

    let step = agent.act(action).await.unwrap();
    assert_eq!(step.observation, "7");
    scratchpad.push(step);

    let decision = agent.step(question, &scratchpad).await.unwrap();
    assert_eq!(decision.as_finish().unwrap().answer, "7");
}

#[tokio::test]
async fn run_fails_when_model_never_finishes() {
    let action_reply = "Thought: again\nAction: get_text_length\nAction Input: 'DOG'";
    let client = Arc::new(ScriptedClient::new(&[action_reply; 3]));

    let mut tools = ToolRegistry::new();
    tools.register(Arc::new(TextLengthTool::new()));
    let agent = ReActAgent::new(
        ReActConfig::new("test_agent").with_max_iterations(3),
        Arc::new(tools),
        client,
    );

    let err = agent.run("question").await.unwrap_err();
    assert!(matches!(err, AgentError::Execution { .. }));
}

#[tokio::test]
async fn run_fails_on_unknown_tool() {
    let client = Arc::new(ScriptedClient::new(&[
        "Thought: try something else\nAction: web_search\nAction Input: dogs",
    ]));
    let agent = agent_with(client);

    let err = agent.run("question").await.unwrap_err();
    assert!(matches!(err, AgentError::ToolNotFound { .. }));
}

#[tokio::test]
async fn fabricated_observation_from_stop_ignoring_client_does_not_leak() {
    // The stub ignores stop sequences and appends its own observation; the
    // parsed action input and the recorded observation must both come out
    // untainted.
    let client = Arc::new(ScriptedClient::new(&[
        "Thought: count\nAction: get_text_length\nAction Input: 'DOG'\nObservation: 999",
        "Final Answer: 3",
    ]));
    let agent = agent_with(client);

    let outcome = agent.run("question").await.unwrap();
    assert_eq!(outcome.steps.len(), 1);
    assert_eq!(outcome.steps[0].action.tool_input, "'DOG'");
    assert_eq!(outcome.steps[0].observation, "3");
    assert_eq!(outcome.answer, "3");
}

#[tokio::test]
async fn completion_failure_propagates() {
    // An exhausted script behaves like a failed remote call.
    let client = Arc::new(ScriptedClient::new(&[]));
    let agent = agent_with(client);

    let err = agent.run("question").await.unwrap_err();
    assert!(matches!(err, AgentError::Completion { .. }));
}
