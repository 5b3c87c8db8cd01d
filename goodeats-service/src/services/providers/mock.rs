//! Mock provider implementation for testing.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum Behaviour {
    Reply(String),
    Fail(String),
    Empty,
    Disabled,
}

/// Mock text provider that records every prompt it is asked to complete.
pub struct MockTextProvider {
    behaviour: Behaviour,
    calls: Mutex<Vec<(String, GenerationParams)>>,
}

impl MockTextProvider {
    fn with_behaviour(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_behaviour(Behaviour::Reply(reply.into()))
    }

    /// Always fails with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_behaviour(Behaviour::Fail(message.into()))
    }

    /// Succeeds without producing any text.
    pub fn empty() -> Self {
        Self::with_behaviour(Behaviour::Empty)
    }

    /// Behaves like a provider with no credentials.
    pub fn disabled() -> Self {
        Self::with_behaviour(Behaviour::Disabled)
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.calls().into_iter().map(|(prompt, _)| prompt).collect()
    }

    /// Prompts and parameters received so far, oldest first.
    pub fn calls(&self) -> Vec<(String, GenerationParams)> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        match self.calls.lock() {
            Ok(mut calls) => calls.push((prompt.to_string(), params.clone())),
            Err(poisoned) => poisoned
                .into_inner()
                .push((prompt.to_string(), params.clone())),
        }

        let text = match &self.behaviour {
            Behaviour::Reply(reply) => Some(reply.clone()),
            Behaviour::Empty => None,
            Behaviour::Fail(message) => return Err(ProviderError::ApiError(message.clone())),
            Behaviour::Disabled => {
                return Err(ProviderError::NotConfigured(
                    "Mock text provider not enabled".to_string(),
                ))
            }
        };

        Ok(ProviderResponse {
            output_tokens: text.as_ref().map_or(0, |t| t.len() as i32 / 4),
            text,
            input_tokens: prompt.len() as i32 / 4,
            finish_reason: FinishReason::Complete,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match self.behaviour {
            Behaviour::Disabled => Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
