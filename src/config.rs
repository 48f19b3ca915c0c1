//! Configuration for TallyKV sessions
//!
//! Centralized configuration with sensible defaults. The store has no
//! settings of its own; everything here shapes how a session talks to it.

/// Main configuration for a TallyKV session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Prompt Configuration
    // -------------------------------------------------------------------------
    /// Text written before each command is read
    pub prompt: String,

    /// Whether to write the prompt at all (off for scripts and pipes)
    pub show_prompt: bool,

    // -------------------------------------------------------------------------
    // Parsing Configuration
    // -------------------------------------------------------------------------
    /// Report unknown commands instead of silently skipping them
    pub strict_commands: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "Enter Command: ".to_string(),
            show_prompt: true,
            strict_commands: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the prompt text
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    /// Enable or disable the prompt
    pub fn show_prompt(mut self, show: bool) -> Self {
        self.config.show_prompt = show;
        self
    }

    /// Enable or disable reporting of unknown commands
    pub fn strict_commands(mut self, strict: bool) -> Self {
        self.config.strict_commands = strict;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
