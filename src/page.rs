//! The content writer page: interaction states and their HTML.

use pulldown_cmark::{html, Options, Parser};

use crate::errors::ScribeError;
use crate::writer::{download_file_name, failure_message};

pub const EMPTY_TOPIC_WARNING: &str = "Please enter a topic first!";
pub const FAILURE_HINT: &str = "Please make sure your Groq API key is properly set in the .env file.";
const TOPIC_PLACEHOLDER: &str = "e.g., The Future of Renewable Energy, Benefits of Meditation, etc.";

const STYLE: &str = r#"<style>
body { font-family: "Source Sans Pro", sans-serif; max-width: 730px; margin: 0 auto; padding: 3rem 1rem; color: #31333f; }
.main-title { font-size: 2.5em; color: #2c3e50; text-align: center; margin-bottom: 0.5em; }
.subtitle { text-align: center; color: #7f8c8d; margin-bottom: 2em; }
.logo { display: block; width: 300px; max-width: 100%; margin: 0 auto 2em; }
.content-box { background-color: #f8f9fa; border-radius: 10px; padding: 20px; margin: 20px 0; border-left: 5px solid #4B8BBE; }
label { font-weight: bold; display: block; margin-bottom: 0.5em; }
input[type=text] { width: 100%; box-sizing: border-box; border-radius: 8px; padding: 10px; border: 1px solid #ccc; font-size: 16px; }
button { background-color: #4B8BBE; color: white; border: none; padding: 12px 24px; font-size: 16px; margin: 10px 0; cursor: pointer; border-radius: 8px; width: 100%; transition: all 0.3s; }
button:hover { background-color: #306998; transform: translateY(-2px); box-shadow: 0 4px 8px rgba(0,0,0,0.1); }
.warning { background: #fffce7; color: #926c05; padding: 12px; border-radius: 8px; }
.error { background: #ffebee; color: #b71c1c; padding: 12px; border-radius: 8px; }
.info { background: #e8f4fd; color: #0c5460; padding: 12px; border-radius: 8px; margin-top: 10px; }
</style>"#;

/// Where the page is in the generate flow.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    /// Nothing submitted yet.
    Idle,
    /// Submitted topic was blank; generation was not attempted.
    Warning { topic: String },
    /// Article generated and ready for download.
    Rendered {
        topic: String,
        content: String,
        file_name: String,
    },
    /// Generation failed; `message` describes why.
    Failed { topic: String, message: String },
}

/// Handle one press of "Generate Content".
///
/// `generate` is only called for a topic with non-whitespace content.
pub fn submit<F>(topic: &str, generate: F) -> PageState
where
    F: FnOnce(&str) -> Result<String, ScribeError>,
{
    if topic.trim().is_empty() {
        return PageState::Warning {
            topic: topic.to_string(),
        };
    }
    match generate(topic) {
        Ok(content) => PageState::Rendered {
            topic: topic.to_string(),
            file_name: download_file_name(topic),
            content,
        },
        Err(e) => {
            log::error!("Generation failed: {}", e);
            PageState::Failed {
                topic: topic.to_string(),
                message: failure_message(&e),
            }
        }
    }
}

/// Render the full HTML document for `state`.
pub fn render(state: &PageState) -> String {
    let topic = match state {
        PageState::Idle => "",
        PageState::Warning { topic }
        | PageState::Rendered { topic, .. }
        | PageState::Failed { topic, .. } => topic.as_str(),
    };

    let mut out = String::with_capacity(4096);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("<title>AI Content Writer</title>\n");
    out.push_str(STYLE);
    out.push_str("\n</head>\n<body>\n");
    out.push_str("<h1 class='main-title'>AI Content Writer</h1>\n");
    out.push_str(
        "<p class='subtitle'>Generate high-quality, well-researched content with AI</p>\n",
    );
    // Hidden when no logo has been generated.
    out.push_str("<img class='logo' src='/logo.jpg' alt='' onerror=\"this.style.display='none'\">\n");

    out.push_str("<form method='post' action='/generate'>\n");
    out.push_str("<label for='topic'>What would you like to write about?</label>\n");
    out.push_str(&format!(
        "<input type='text' id='topic' name='topic' value=\"{}\" placeholder=\"{}\" title='Enter a topic for your article'>\n",
        escape_html(topic),
        TOPIC_PLACEHOLDER
    ));
    out.push_str("<button type='submit'>Generate Content</button>\n</form>\n");

    match state {
        PageState::Idle => {}
        PageState::Warning { .. } => {
            out.push_str(&format!(
                "<div class='warning'>{}</div>\n",
                EMPTY_TOPIC_WARNING
            ));
        }
        PageState::Rendered {
            topic,
            content,
            file_name,
        } => {
            out.push_str("<hr>\n<h2>&#10024; Your Generated Content</h2>\n");
            out.push_str("<div class='content-box'>\n");
            out.push_str(&markdown_to_html(content));
            out.push_str("</div>\n");
            out.push_str("<form method='post' action='/download'>\n");
            out.push_str(&format!(
                "<input type='hidden' name='topic' value=\"{}\">\n",
                escape_html(topic)
            ));
            out.push_str(&format!(
                "<input type='hidden' name='content' value=\"{}\">\n",
                escape_html(content)
            ));
            out.push_str(&format!(
                "<button type='submit' title=\"{}\">&#128229; Download as Markdown</button>\n</form>\n",
                escape_html(file_name)
            ));
        }
        PageState::Failed { message, .. } => {
            out.push_str(&format!(
                "<div class='error'>&#10060; {}</div>\n",
                escape_html(message)
            ));
            out.push_str(&format!("<div class='info'>{}</div>\n", FAILURE_HINT));
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}

/// Render model markdown as HTML. Raw HTML in the markdown passes through.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
