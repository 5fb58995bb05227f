use clap::{command, Parser, Subcommand};

/// The model used for article generation and the connectivity probe.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
/// Base URL of the Groq OpenAI-compatible API.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
/// Address the content page binds to unless `--addr` is given.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8501";
/// Sampling temperature for article generation.
pub const TEMPERATURE: f32 = 0.7;
/// Upper bound on generated tokens per article.
pub const MAX_TOKENS: u32 = 2000;

/// CLI for `scribe`
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Scribe subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serves the content writer page. A topic submitted through the form is
    /// turned into a markdown article by the Groq API.
    #[command(alias = "s")]
    Serve {
        #[arg(short, long, default_value = DEFAULT_ADDR)]
        addr: String,
    },
    /// Checks that `GROQ_API_KEY` is set, lists the available models and
    /// sends one test completion.
    #[command(alias = "p")]
    Probe,
    /// Draws the placeholder logo to `logo4.jpg` in the current directory.
    #[command(alias = "l")]
    Logo,
}
