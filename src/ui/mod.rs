// UI Layer
pub mod prompt;

pub use prompt::{Prompt, ScriptedPrompt, StdioPrompt};
