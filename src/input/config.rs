// ============================================================================
// Reader Configuration
// Prompt flushing and line handling for the prompted reader
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`PromptedReader`](super::PromptedReader)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderConfig {
    /// Flush the output after every prompt so it is visible before the
    /// reader blocks
    pub flush_prompt: bool,

    /// Drop a `\r` preceding the line terminator (CRLF input)
    pub strip_carriage_return: bool,

    /// Optional: Maximum bytes buffered for one physical input line
    /// None means unlimited
    pub max_line_length: Option<usize>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            flush_prompt: true,
            strip_carriage_return: true,
            max_line_length: None,
        }
    }
}

impl ReaderConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Enable or disable prompt flushing
    pub fn with_flush_prompt(mut self, flush: bool) -> Self {
        self.flush_prompt = flush;
        self
    }

    /// Builder method: Enable or disable CR stripping
    pub fn with_strip_carriage_return(mut self, strip: bool) -> Self {
        self.strip_carriage_return = strip;
        self
    }

    /// Builder method: Set maximum line length
    pub fn with_max_line_length(mut self, limit: usize) -> Self {
        self.max_line_length = Some(limit);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_line_length == Some(0) {
            return Err("Maximum line length must be positive".to_string());
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take their
    /// default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl ReaderConfig {
    /// Human at a terminal
    /// - Prompts flushed immediately
    /// - Lines capped at 4 KiB
    pub fn interactive() -> Self {
        Self::new().with_max_line_length(4096)
    }

    /// Piped or scripted input
    /// - Prompts left to the sink's own buffering
    /// - No line cap
    pub fn scripted() -> Self {
        Self::new().with_flush_prompt(false)
    }
}
