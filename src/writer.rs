//! Article generation: the fixed prompts, the single completion call and the download name.

use crate::cli::{MAX_TOKENS, TEMPERATURE};
use crate::config::Config;
use crate::errors::ScribeError;
use crate::groq::{ChatMessage, ChatRequest, GroqClient};

/// Defines the writer's role and the structure expected of every article.
pub const SYSTEM_PROMPT: &str = "You are an expert content creator with deep knowledge across many subjects.
Your task is to create a well-researched, engaging, and informative article on the given topic.

Follow these steps:
1. Research the topic thoroughly
2. Create an outline with key sections
3. Write the article with proper formatting
4. Include relevant examples, data, and sources
5. Ensure the content is well-structured with an introduction, body, and conclusion
6. Use markdown formatting for better readability
7. Include section headers (##), bullet points, and bold/italic text where appropriate

The article should be comprehensive yet easy to understand, suitable for a general audience.
";

/// User instructions; `{topic}` is replaced verbatim with the submitted topic.
pub const USER_PROMPT_TEMPLATE: &str = "Write a comprehensive, well-researched article about: {topic}

Please include:
- An engaging introduction
- Main content with subsections
- Relevant examples and data
- A conclusion that summarizes key points
- Sources or references if possible

Format the response in markdown.
";

/// Prefix of every user-facing generation failure.
pub const FAILURE_PREFIX: &str = "An error occurred while generating content";

/// Longest topic prefix (in characters) kept in a download file name.
const FILE_NAME_TOPIC_CHARS: usize = 30;

/// The `[system, user]` messages for one topic.
pub fn build_messages(topic: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(USER_PROMPT_TEMPLATE.replace("{topic}", topic)),
    ]
}

/// The full chat request for one topic.
pub fn build_request(topic: &str, model: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: build_messages(topic),
        temperature: Some(TEMPERATURE),
        max_tokens: Some(MAX_TOKENS),
    }
}

/// Generate an article about `topic` with one best-effort completion call.
///
/// The returned markdown is exactly the model's text. Blocks until the API
/// answers; must not be called from inside an async runtime thread.
pub fn generate_article(config: &Config, topic: &str) -> Result<String, ScribeError> {
    let client = GroqClient::from_config(config)?;
    log::info!("Generating article with {}", config.model);
    client.chat(&build_request(topic, &config.model))
}

/// Human-readable text for a failed generation.
pub fn failure_message(err: &ScribeError) -> String {
    format!("{}: {}", FAILURE_PREFIX, err)
}

/// File name offered for downloading the article about `topic`.
pub fn download_file_name(topic: &str) -> String {
    let prefix: String = topic.chars().take(FILE_NAME_TOPIC_CHARS).collect();
    format!("{}_article.md", prefix.replace(' ', "_").to_lowercase())
}
