//! Text length tool - counts characters in a piece of text.

use crate::{
    error::Result,
    tool::Tool,
};
use async_trait::async_trait;
use tracing::debug;

/// Counts the characters of the given text.
///
/// Model-produced inputs often arrive wrapped in quote characters or with a
/// trailing newline; those are stripped from both ends before counting, so
/// `'DOG'` and `DOG` both observe `3`.
#[derive(Debug, Clone, Default)]
pub struct TextLengthTool;

impl TextLengthTool {
    /// Create a new text length tool
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for TextLengthTool {
    fn name(&self) -> &str {
        "get_text_length"
    }

    fn description(&self) -> &str {
        "Returns the length of the given text in characters."
    }

    async fn call(&self, input: &str) -> Result<String> {
        let text = input
            .trim()
            .trim_matches(|c| c == '\'' || c == '"' || c == '\n');
        debug!(text = %text, "get_text_length invoked");

        Ok(text.chars().count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counts_plain_text() {
        let tool = TextLengthTool::new();
        assert_eq!(tool.call("DOG").await.unwrap(), "3");
    }

    #[tokio::test]
    async fn test_strips_single_quotes() {
        let tool = TextLengthTool::new();
        assert_eq!(tool.call("'DOG'").await.unwrap(), "3");
    }

    #[tokio::test]
    async fn test_strips_double_quotes_and_newline() {
        let tool = TextLengthTool::new();
        assert_eq!(tool.call("\"PENGUIN\"\n").await.unwrap(), "7");
    }

    #[tokio::test]
    async fn test_empty_input() {
        let tool = TextLengthTool::new();
        assert_eq!(tool.call("").await.unwrap(), "0");
    }

    #[tokio::test]
    async fn test_counts_characters_not_bytes() {
        let tool = TextLengthTool::new();
        assert_eq!(tool.call("héllo").await.unwrap(), "5");
    }
}
