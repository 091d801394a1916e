// ============================================================================
// Input Module
// Prompted reads of integers, doubles and lines
// ============================================================================
//
// This module provides:
// - PromptedReader: prompt-then-read over injected input/output handles
// - ReaderConfig: prompt flushing and line handling
// - InputError: FormatMismatch / EndOfInput and stream failures

mod config;
mod cursor;
mod errors;
mod reader;

pub use config::ReaderConfig;
pub use errors::{InputError, InputResult};
pub use reader::PromptedReader;
