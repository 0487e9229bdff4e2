//! Builtin tools shipped with the crate.

pub mod text_length;

pub use text_length::TextLengthTool;
