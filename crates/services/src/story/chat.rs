use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::StoryGeneratorError;

use super::StoryGenerator;
use super::prompt::{SYSTEM_INSTRUCTION, StoryVocabulary, TEMPERATURE, build_prompt, parse_story_lines};

#[derive(Clone, Debug)]
pub struct StoryGeneratorConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl StoryGeneratorConfig {
    /// Read `AKSON_AI_API_KEY`, `AKSON_AI_BASE_URL` and `AKSON_AI_MODEL`.
    ///
    /// Returns `None` when the key is absent or blank.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("AKSON_AI_API_KEY").ok()?;
        Self::new(
            api_key,
            env::var("AKSON_AI_BASE_URL").ok(),
            env::var("AKSON_AI_MODEL").ok(),
        )
    }

    #[must_use]
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Option<Self> {
        if api_key.trim().is_empty() {
            return None;
        }
        Some(Self {
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".into()),
            api_key,
            model: model.unwrap_or_else(|| "gpt-4o-mini".into()),
        })
    }
}

/// Story generator backed by an OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct ChatStoryGenerator {
    client: Client,
    config: Option<StoryGeneratorConfig>,
}

impl ChatStoryGenerator {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(StoryGeneratorConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<StoryGeneratorConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl StoryGenerator for ChatStoryGenerator {
    fn enabled(&self) -> bool {
        self.config.is_some()
    }

    async fn generate(
        &self,
        vocabulary: &StoryVocabulary,
    ) -> Result<Vec<String>, StoryGeneratorError> {
        let config = self
            .config
            .as_ref()
            .ok_or(StoryGeneratorError::Disabled)?;

        let url = format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_prompt(vocabulary),
                },
            ],
            temperature: TEMPERATURE,
        };

        tracing::debug!(model = %config.model, "requesting story");
        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoryGeneratorError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        let lines = parse_story_lines(&content);
        if lines.is_empty() {
            return Err(StoryGeneratorError::EmptyResponse);
        }
        Ok(lines)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
