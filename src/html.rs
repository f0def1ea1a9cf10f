use crate::config::HtmlConfig;
use crate::token::Token;

/// Convert tokens to an HTML fragment
pub fn tokens_to_html(tokens: &[Token], config: &HtmlConfig) -> String {
    let mut out = String::new();

    let wrapped = !config.wrapper_class.is_empty();
    if wrapped {
        open_tag("span", &config.wrapper_class, &mut out);
    }
    emit_tokens(tokens, config, &mut out);
    if wrapped {
        out.push_str("</span>");
    }

    out
}

fn emit_tokens(tokens: &[Token], config: &HtmlConfig, out: &mut String) {
    for token in tokens {
        emit_token(token, config, out);
    }
}

fn emit_token(token: &Token, config: &HtmlConfig, out: &mut String) {
    match token {
        Token::Text(text) => escape(text, out),
        Token::Bold(inner) => wrap("strong", inner, config, out),
        Token::Italic(inner) => wrap("em", inner, config, out),
        Token::Strikethrough(inner) => wrap("del", inner, config, out),
        Token::Monospace(code) => {
            open_tag("code", &config.code_class, out);
            escape(code, out);
            out.push_str("</code>");
        }
        Token::Quote(inner) => {
            open_tag("blockquote", &config.quote_class, out);
            emit_tokens(inner, config, out);
            out.push_str("</blockquote>");
        }
        Token::LineBreak => out.push_str("<br>"),
    }
}

fn wrap(tag: &str, inner: &[Token], config: &HtmlConfig, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    emit_tokens(inner, config, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn open_tag(tag: &str, class: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if !class.is_empty() {
        out.push_str(" class=\"");
        escape(class, out);
        out.push('"');
    }
    out.push('>');
}

fn escape(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
