//! Connectivity probe for the Groq API.
//!
//! Checks the credential, lists the models the key can see and sends one test
//! completion. Remote failures are printed with a troubleshooting checklist rather
//! than returned, so only a missing credential makes the probe fail.

use std::io::Write;

use crate::config::Config;
use crate::errors::ScribeError;
use crate::groq::{ChatMessage, ChatRequest, GroqClient};

const TEST_PROMPT: &str = "Hello! How are you?";

const MISSING_KEY_MESSAGE: &str = "Error: GROQ_API_KEY not found in .env file.
Please add your Groq API key to the .env file like this:
GROQ_API_KEY=your_api_key_here";

const TROUBLESHOOTING: &str = "Troubleshooting steps:
1. Make sure you have a valid Groq API key
2. Check your internet connection
3. Make sure you've added the API key to your .env file
4. Make sure you are running the latest release of scribe
5. Check the Groq documentation for the latest model names: https://console.groq.com/docs/models";

/// Run the probe, writing its report to `out`.
///
/// Returns `MissingApiKey` (after printing instructions) if no key is configured;
/// no request is made in that case. Every other failure is reported in `out`.
pub fn run_probe<W: Write>(config: &Config, out: &mut W) -> Result<(), ScribeError> {
    if config.api_key.is_none() {
        writeln!(out, "{}", MISSING_KEY_MESSAGE)?;
        return Err(ScribeError::MissingApiKey);
    }

    if let Err(e) = exercise_api(config, out) {
        log::debug!("Probe failed: {:?}", e);
        writeln!(out, "\nError testing Groq API: {}", e)?;
        writeln!(out, "\n{}", TROUBLESHOOTING)?;
        if let Some(body) = e.response_body() {
            writeln!(out, "\nAdditional error details:")?;
            writeln!(out, "{}", body)?;
        }
    }
    Ok(())
}

fn exercise_api<W: Write>(config: &Config, out: &mut W) -> Result<(), ScribeError> {
    writeln!(out, "Initializing Groq client...")?;
    let client = GroqClient::from_config(config)?;

    writeln!(out, "\nFetching available models...")?;
    let models = client.list_models()?;
    writeln!(out, "\nAvailable models:")?;
    for id in &models {
        writeln!(out, "- {}", id)?;
    }
    // The requested model is not checked against the listing.

    writeln!(out, "\nTrying with model: {}", config.model)?;
    let reply = client.chat(&ChatRequest {
        model: config.model.clone(),
        messages: vec![ChatMessage::user(TEST_PROMPT)],
        temperature: None,
        max_tokens: None,
    })?;

    writeln!(out, "\nGroq API Response:")?;
    writeln!(out, "{}", reply)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use mockito::Server;

    use super::*;

    fn config_for(server: &Server) -> Config {
        Config {
            api_key: Some("gsk_test".to_string()),
            base_url: server.url(),
            model: "llama-3.3-70b-versatile".to_string(),
        }
    }

    #[test]
    fn missing_key_prints_instructions_without_requests() {
        let mut server = Server::new();
        let any = server.mock("GET", mockito::Matcher::Any).expect(0).create();
        let config = Config {
            api_key: None,
            ..config_for(&server)
        };

        let mut out = Vec::new();
        let result = run_probe(&config, &mut out);
        assert!(matches!(result, Err(ScribeError::MissingApiKey)));
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("GROQ_API_KEY not found"));
        assert!(printed.contains("GROQ_API_KEY=your_api_key_here"));
        any.assert();
    }

    #[test]
    fn reports_models_and_reply() {
        let mut server = Server::new();
        server
            .mock("GET", "/models")
            .with_status(200)
            .with_body(r#"{"data":[{"id":"llama-3.3-70b-versatile"},{"id":"whisper-large-v3"}]}"#)
            .create();
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"I'm doing well!"}}]}"#)
            .create();

        let mut out = Vec::new();
        run_probe(&config_for(&server), &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("- llama-3.3-70b-versatile\n- whisper-large-v3\n"));
        assert!(printed.contains("Trying with model: llama-3.3-70b-versatile"));
        assert!(printed.contains("Groq API Response:\nI'm doing well!"));
        assert!(!printed.contains("Troubleshooting"));
    }

    #[test]
    fn remote_failure_prints_checklist_and_body() {
        let mut server = Server::new();
        let chat = server
            .mock("POST", "/chat/completions")
            .expect(0)
            .create();
        server
            .mock("GET", "/models")
            .with_status(401)
            .with_body(r#"{"error":{"message":"Invalid API Key"}}"#)
            .create();

        let mut out = Vec::new();
        run_probe(&config_for(&server), &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Error testing Groq API"));
        assert!(printed.contains("Troubleshooting steps:"));
        assert!(printed.contains("Additional error details:\n{\"error\":{\"message\":\"Invalid API Key\"}}"));
        chat.assert();
    }

    #[test]
    fn malformed_reply_has_no_extra_details() {
        let mut server = Server::new();
        server
            .mock("GET", "/models")
            .with_status(200)
            .with_body("not json")
            .create();

        let mut out = Vec::new();
        run_probe(&config_for(&server), &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Malformed response"));
        assert!(!printed.contains("Additional error details"));
    }
}
