//! Prompt module - role-tagged chat messages sent to a completion API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default chat model identifier
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default completion length limit
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instruction framing the assistant's behaviour
    System,
    /// The actual request
    User,
}

impl Role {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single role-tagged message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who is speaking
    pub role: Role,
    /// Message body
    pub content: String,
}

/// A two-message chat prompt: one system instruction followed by one user request.
///
/// Prompts are built fresh for every call and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use gloss_domain::{Prompt, Role};
///
/// let prompt = Prompt::new("You are terse.", "Say hi.");
/// let messages = prompt.messages();
/// assert_eq!(messages[0].role, Role::System);
/// assert_eq!(messages[1].content, "Say hi.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    system: ChatMessage,
    user: ChatMessage,
}

impl Prompt {
    /// Create a prompt from a system instruction and a user request
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: ChatMessage {
                role: Role::System,
                content: system.into(),
            },
            user: ChatMessage {
                role: Role::User,
                content: user.into(),
            },
        }
    }

    /// The system instruction
    pub fn system(&self) -> &str {
        &self.system.content
    }

    /// The user request
    pub fn user(&self) -> &str {
        &self.user.content
    }

    /// Messages in send order (system first)
    pub fn messages(&self) -> [&ChatMessage; 2] {
        [&self.system, &self.user]
    }
}

/// Generation parameters for a single completion call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}
