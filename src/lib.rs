//! # Scribe
//! Write a markdown article about any topic with the Groq chat API.
//!
//! The `scribe` binary bundles three independent tools:
//! - `scribe serve`: a web page that takes a topic, asks the model for an article,
//!   renders the markdown and offers it as a download.
//! - `scribe probe`: a connectivity check that lists the models your key can see
//!   and sends one test completion.
//! - `scribe logo`: draws the placeholder banner shown on the page to `logo4.jpg`.
//!
//! ## Usage
//! ```shell
//! $ scribe --help
//! ```
//!
//! ## Environment Variables:
//! - `GROQ_API_KEY`: Required for any request to the API. May also be set in a `.env` file
//!   in the working directory.
//! - `GROQ_BASE_URL`: Optional. Base URL of the OpenAI-compatible API (default: `https://api.groq.com/openai/v1`).
//! - `SCRIBE_MODEL`: Optional. Model id used for articles and the probe (default: `llama-3.3-70b-versatile`).
//! - `RUST_LOG`: Optional. Log filter (default: `info`).
//!
//! ## Notes:
//! - Generated articles are never stored by the server. The download posts the
//!   rendered article back and receives it as a `.md` attachment.
//! - Each generation is a single request with no retries.
//!
pub mod cli;
pub mod config;
pub mod errors;
pub mod groq;
pub mod logo;
pub mod page;
pub mod probe;
pub mod server;
pub mod writer;
