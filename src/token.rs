use serde::Serialize;

/// Inline tokens produced from a WhatsApp-style message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Token {
    Text(String),
    Bold(Vec<Token>),
    Italic(Vec<Token>),
    Strikethrough(Vec<Token>),
    /// Verbatim content of a ```` ```...``` ```` span, never re-parsed
    Monospace(String),
    /// A line that started with `"> "`, prefix removed
    Quote(Vec<Token>),
    LineBreak,
}

impl Token {
    /// Shorthand for a `Text` token.
    pub fn text(text: impl Into<String>) -> Self {
        Token::Text(text.into())
    }

    fn push_literal(&self, out: &mut String) {
        match self {
            Token::Text(text) | Token::Monospace(text) => out.push_str(text),
            Token::Bold(inner)
            | Token::Italic(inner)
            | Token::Strikethrough(inner)
            | Token::Quote(inner) => {
                for token in inner {
                    token.push_literal(out);
                }
            }
            Token::LineBreak => out.push('\n'),
        }
    }
}

/// Concatenate the literal text of `tokens`, dropping all styling.
///
/// Line breaks come back as `\n`, so this is the input with consumed quote
/// prefixes and delimiters removed.
pub fn literal_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        token.push_literal(&mut out);
    }
    out
}
