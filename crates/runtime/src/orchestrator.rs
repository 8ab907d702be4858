//! The per-query loop between the user, the hosted model and the tool host.

use tracing::{debug, warn};

use crate::model::{Backend, Message, ModelRequest, Part};
use crate::prompt::QueryConfig;
use crate::tools::{ToolError, ToolHost};
use crate::{Error, Result};

/// Bridges one hosted model and one tool host.
pub struct Orchestrator<B, T> {
    backend: B,
    tools: T,
    config: QueryConfig,
}

impl<B: Backend, T: ToolHost> Orchestrator<B, T> {
    pub fn new(backend: B, tools: T) -> Self {
        Self {
            backend,
            tools,
            config: QueryConfig::default(),
        }
    }

    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    #[cfg(test)]
    fn tools(&self) -> &T {
        &self.tools
    }

    /// Give back the tool host so the caller can close it.
    pub fn into_tools(self) -> T {
        self.tools
    }

    /// Answer one user query.
    ///
    /// Every tool call in the model's first reply is executed in order; each
    /// result is appended to the transcript as a user turn and followed by a
    /// tool-free model call. Follow-up replies are not inspected for tool
    /// calls.
    pub async fn process_query(&self, query: &str) -> Result<String> {
        let mut messages = vec![Message::user(self.config.render(query))];

        let response = self
            .backend
            .call(ModelRequest {
                messages: &messages,
                tools: self.tools.specs(),
                system: Some(self.config.system_prompt.as_str()),
            })
            .await?;

        let mut output = Vec::new();
        for part in response.message.parts {
            match part {
                Part::Text(text) => output.push(text),
                Part::ToolCall(call) => {
                    let result = self.tools.execute(&call).await;
                    output.push(format!(
                        "[Calling tool {} with args {}]",
                        call.name, call.input
                    ));

                    let content = match result {
                        Ok(text) => {
                            debug!(tool = %call.name, bytes = text.len(), "tool succeeded");
                            text
                        }
                        Err(ToolError::Transport(reason)) => return Err(Error::Transport(reason)),
                        Err(e) => {
                            warn!(tool = %call.name, error = %e, "tool call failed");
                            format!("Tool {} failed: {e}", call.name)
                        }
                    };
                    messages.push(Message::user(content));

                    let follow_up = self
                        .backend
                        .call(ModelRequest {
                            messages: &messages,
                            tools: &[],
                            system: None,
                        })
                        .await?;
                    output.push(follow_up.message.first_text().unwrap_or_default().to_string());
                }
            }
        }

        Ok(output.join("\n"))
    }
}
