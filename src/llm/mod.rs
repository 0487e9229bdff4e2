//! Completion capability and hooks.
//!
//! The remote model is an opaque text-completion function behind the
//! [`CompletionClient`] trait, so orchestration can be tested against
//! deterministic stubs without contacting any external service. The shipped
//! implementation, [`SiumaiCompletionClient`], talks to hosted providers
//! through the siumai library.

use crate::error::Result;
use async_trait::async_trait;
use tracing::info;

pub mod siumai_integration;

pub use siumai_integration::{CompletionConfig, SiumaiCompletionClient};

/// Opaque text-completion capability: prompt in, reply text out.
#[async_trait]
pub trait CompletionClient: Send + Sync + std::fmt::Debug {
    /// Issue one completion request.
    ///
    /// `stop` lists literal strings that must halt generation; replies are
    /// expected to contain no text at or past the first stop occurrence.
    async fn complete(&self, prompt: &str, stop: &[String]) -> Result<String>;
}

/// Observer invoked around every completion call, for logging.
pub trait CompletionHook: Send + Sync + std::fmt::Debug {
    /// Called with the fully rendered prompt before the request is sent
    fn on_prompt(&self, prompt: &str);

    /// Called with the raw reply text after the response arrives
    fn on_completion(&self, reply: &str);
}

/// Hook that logs prompts and replies through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LoggingHook;

impl LoggingHook {
    /// Create a new logging hook
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CompletionHook for LoggingHook {
    fn on_prompt(&self, prompt: &str) {
        info!("*** Prompt ***\n{prompt}");
    }

    fn on_completion(&self, reply: &str) {
        info!("*** Reply ***\n{reply}");
    }
}

/// Truncate `text` at the earliest occurrence of any stop sequence.
///
/// Used by client implementations whose provider path cannot carry stop
/// sequences in the request itself.
#[must_use]
pub fn enforce_stop<'a>(text: &'a str, stop: &[String]) -> &'a str {
    let cut = stop
        .iter()
        .filter_map(|sequence| text.find(sequence.as_str()))
        .min();

    match cut {
        Some(index) => &text[..index],
        None => text,
    }
}
