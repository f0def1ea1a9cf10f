mod config;
mod error;
mod html;
mod parser;
pub mod template;
mod token;

pub use config::{Config, HtmlConfig, TemplateConfig};
pub use error::{Error, Result};
pub use html::tokens_to_html;
pub use parser::parse_inline;
pub use template::{TemplatePart, VariableReport};
pub use token::{Token, literal_text};

/// Parse a WhatsApp-style message into tokens.
pub fn render(input: &str) -> Vec<Token> {
    parser::parse(input)
}

/// Render a message to HTML using default config.
pub fn render_html(input: &str) -> String {
    render_html_with_config(input, &Config::compiled_default())
}

/// Render a message to HTML with custom config.
pub fn render_html_with_config(input: &str, config: &Config) -> String {
    let tokens = render(input);
    html::tokens_to_html(&tokens, &config.html)
}

/// Preview a template with each `{{name}}` shown as `[name]`.
pub fn preview(template: &str) -> String {
    template::preview(template)
}
