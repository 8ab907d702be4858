//! LLM provider backends.

mod anthropic;

pub use anthropic::{
    AnthropicAuth, AnthropicBackend, AnthropicBackendBuilder, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL,
};
