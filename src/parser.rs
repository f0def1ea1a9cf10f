use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::token::Token;

const QUOTE_PREFIX: &str = "> ";

// Alternation order is the precedence at each position. Monospace content
// stops at line terminators, including a stray `\r` from CRLF input.
static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```([^\r\n\x{2028}\x{2029}]+?)```|\*([^*]+)\*|_([^_]+)_|~([^~]+)~")
        .expect("inline markup pattern is valid")
});

/// Parse a message into tokens, one line at a time
pub fn parse(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (i, line) in input.split('\n').enumerate() {
        if i > 0 {
            tokens.push(Token::LineBreak);
        }
        match line.strip_prefix(QUOTE_PREFIX) {
            Some(quoted) => tokens.push(Token::Quote(parse_inline(quoted))),
            None => tokens.extend(parse_inline(line)),
        }
    }

    tokens
}

/// Parse bold/italic/strikethrough/monospace spans within a single line
pub fn parse_inline(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in INLINE.captures_iter(text) {
        let whole = caps.get_match();
        if whole.start() > last {
            tokens.push(Token::text(&text[last..whole.start()]));
        }
        tokens.push(styled(&caps));
        last = whole.end();
    }

    if last < text.len() {
        tokens.push(Token::text(&text[last..]));
    }

    tokens
}

/// Styled content is kept as a single text run; styles do not nest.
fn styled(caps: &Captures<'_>) -> Token {
    if let Some(code) = caps.get(1) {
        Token::Monospace(code.as_str().to_string())
    } else if let Some(bold) = caps.get(2) {
        Token::Bold(vec![Token::text(bold.as_str())])
    } else if let Some(italic) = caps.get(3) {
        Token::Italic(vec![Token::text(italic.as_str())])
    } else {
        Token::Strikethrough(vec![Token::text(&caps[4])])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold(s: &str) -> Token {
        Token::Bold(vec![Token::text(s)])
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse(""), vec![]);
    }

    #[test]
    fn plain_line() {
        assert_eq!(parse("hello there"), vec![Token::text("hello there")]);
    }

    #[test]
    fn single_bold_span() {
        assert_eq!(parse("*bold*"), vec![bold("bold")]);
    }

    #[test]
    fn mixed_styles() {
        assert_eq!(
            parse("_a_ and ~b~"),
            vec![
                Token::Italic(vec![Token::text("a")]),
                Token::text(" and "),
                Token::Strikethrough(vec![Token::text("b")]),
            ]
        );
    }

    #[test]
    fn monospace_is_verbatim() {
        assert_eq!(parse("```x```"), vec![Token::Monospace("x".to_string())]);
        assert_eq!(
            parse("```*not bold*```"),
            vec![Token::Monospace("*not bold*".to_string())]
        );
    }

    #[test]
    fn monospace_wins_over_bold_at_same_position() {
        assert_eq!(
            parse("```a*b*c```"),
            vec![Token::Monospace("a*b*c".to_string())]
        );
    }

    #[test]
    fn unterminated_delimiter_is_literal() {
        assert_eq!(parse("*unterminated"), vec![Token::text("*unterminated")]);
        assert_eq!(parse("a ~ b"), vec![Token::text("a ~ b")]);
    }

    #[test]
    fn empty_pairs_fall_through() {
        assert_eq!(parse("**"), vec![Token::text("**")]);
        assert_eq!(parse("__ ~~"), vec![Token::text("__ ~~")]);
        assert_eq!(parse("``````"), vec![Token::text("``````")]);
    }

    #[test]
    fn first_match_wins_without_backtracking() {
        assert_eq!(
            parse("*a*b*c*"),
            vec![bold("a"), Token::text("b"), bold("c")]
        );
    }

    #[test]
    fn styled_content_is_not_reparsed() {
        assert_eq!(parse("*_x_*"), vec![bold("_x_")]);
        assert_eq!(parse("*snake_case_name*"), vec![bold("snake_case_name")]);
        assert_eq!(
            parse("~go *now*~"),
            vec![Token::Strikethrough(vec![Token::text("go *now*")])]
        );
    }

    #[test]
    fn monospace_stops_at_carriage_return() {
        assert_eq!(parse("```a\rb```"), vec![Token::text("```a\rb```")]);
        assert_eq!(
            parse("```code```\r"),
            vec![Token::Monospace("code".to_string()), Token::text("\r")]
        );
    }

    #[test]
    fn quote_and_line_break() {
        assert_eq!(
            parse("> quoted line\nnormal line"),
            vec![
                Token::Quote(vec![Token::text("quoted line")]),
                Token::LineBreak,
                Token::text("normal line"),
            ]
        );
    }

    #[test]
    fn quote_requires_space() {
        assert_eq!(parse(">no space"), vec![Token::text(">no space")]);
        assert_eq!(parse("> "), vec![Token::Quote(vec![])]);
    }

    #[test]
    fn quote_content_is_styled() {
        assert_eq!(
            parse("> *hi* there"),
            vec![Token::Quote(vec![bold("hi"), Token::text(" there")])]
        );
    }

    #[test]
    fn empty_lines_keep_breaks() {
        assert_eq!(
            parse("a\n\nb\n"),
            vec![
                Token::text("a"),
                Token::LineBreak,
                Token::LineBreak,
                Token::text("b"),
                Token::LineBreak,
            ]
        );
    }

    #[test]
    fn delimiters_do_not_cross_lines() {
        assert_eq!(
            parse("*a\nb*"),
            vec![Token::text("*a"), Token::LineBreak, Token::text("b*")]
        );
    }

    #[test]
    fn unicode_content() {
        assert_eq!(
            parse("héllo *wörld* 👋"),
            vec![Token::text("héllo "), bold("wörld"), Token::text(" 👋")]
        );
    }

    #[test]
    fn snake_case_picks_up_italic() {
        assert_eq!(
            parse("snake_case_name"),
            vec![
                Token::text("snake"),
                Token::Italic(vec![Token::text("case")]),
                Token::text("name"),
            ]
        );
    }
}
