//! Tool system: the local functions an agent may invoke.

use crate::error::Result;
use async_trait::async_trait;

pub mod builtin;
pub mod registry;

pub use registry::ToolRegistry;

/// A named, locally executed function the orchestrator may invoke on the
/// model's behalf.
///
/// Tools are text in, text out: the parsed `Action Input` goes in verbatim
/// and the returned string becomes the observation fed back into the next
/// prompt. Identity is the name; registries do not validate uniqueness, so
/// names must be unique for lookup to behave predictably.
#[async_trait]
pub trait Tool: Send + Sync + std::fmt::Debug {
    /// The tool name as it appears in prompts and `Action:` lines
    fn name(&self) -> &str;

    /// One-line description rendered into the prompt's tool inventory
    fn description(&self) -> &str;

    /// Invoke the tool on the given input text
    async fn call(&self, input: &str) -> Result<String>;
}
