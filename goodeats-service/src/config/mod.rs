use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Gemini REST endpoint used when `GENAI_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MAX_OUTPUT_TOKENS: i32 = 200;

/// Context prepended to every chat message.
pub const DEFAULT_SYSTEM_PROMPT: &str = concat!(
    "You are an intelligent assistant for the GoodEats application. ",
    "GoodEats is an interactive platform designed for food enthusiasts, tourists, and individuals passionate about exploring new restaurants. ",
    "The application allows users to search for restaurants by type and distance, rate them, and propose new restaurants. ",
    "Restaurants are displayed on an interactive ArcGIS map of Bucharest, and users can apply advanced filters based on cuisine, rating, and distance. ",
    "Users can also publish posts to promote their favorite restaurants and interact socially by sharing comments and images. ",
    "Admins must approve restaurants before they appear on the map to ensure quality and relevance. ",
    "The platform features advanced functionalities such as user authentication, secure data handling, and interactive notifications. ",
    "GoodEats distinguishes itself from platforms like TripAdvisor, Yelp, and Zomato by enabling social interactions, custom posts, and detailed filtering on a map. ",
    "Your role is to assist users with tasks related to managing restaurants, reviewing cuisines, exploring the interactive map, and engaging with the community. ",
    "When answering questions, always prioritize providing clear, accurate, and helpful responses specific to GoodEats functionality."
);

#[derive(Debug, Clone)]
pub struct GoodeatsConfig {
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
    pub chat: ChatConfig,
    /// OTLP collector for span export. Tracing stays local when unset.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: Secret<String>,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model used for chat replies (e.g., gemini-1.5-flash)
    pub text_model: String,
    pub api_base: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub system_prompt: String,
    pub max_output_tokens: i32,
}

impl GoodeatsConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(GoodeatsConfig {
            common: common_config,
            google: GoogleConfig {
                api_key: Secret::new(get_env("GOOGLE_API_KEY", None, is_prod)?),
            },
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL), is_prod)?,
                api_base: get_env("GENAI_API_BASE", Some(DEFAULT_API_BASE), false)?,
                request_timeout_secs: parse_setting(
                    "GENAI_REQUEST_TIMEOUT_SECS",
                    get_env(
                        "GENAI_REQUEST_TIMEOUT_SECS",
                        Some(&DEFAULT_REQUEST_TIMEOUT_SECS.to_string()),
                        false,
                    )?,
                )?,
            },
            chat: ChatConfig {
                system_prompt: get_env("CHAT_SYSTEM_PROMPT", Some(DEFAULT_SYSTEM_PROMPT), false)?,
                max_output_tokens: parse_setting(
                    "CHAT_MAX_OUTPUT_TOKENS",
                    get_env(
                        "CHAT_MAX_OUTPUT_TOKENS",
                        Some(&DEFAULT_MAX_OUTPUT_TOKENS.to_string()),
                        false,
                    )?,
                )?,
            },
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
        })
    }
}

impl ChatConfig {
    pub fn new(system_prompt: impl Into<String>, max_output_tokens: i32) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            max_output_tokens,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT, DEFAULT_MAX_OUTPUT_TOKENS)
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

fn parse_setting<T>(key: &str, raw: String) -> Result<T, AppError>
where
    T: std::str::FromStr,
{
    raw.trim().parse().map_err(|_| {
        AppError::ConfigError(anyhow::anyhow!(
            "{} must be a valid number, got '{}'",
            key,
            raw
        ))
    })
}
