//! Helpers for message templates with `{{name}}` placeholders.
//!
//! Real substitution happens in the backend when a template is sent; these
//! functions only drive previews and the template cards.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder pattern is valid")
});

// Cards highlight anything between double braces, not just word characters.
static LOOSE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{[^}]+\}\}").expect("loose placeholder pattern is valid"));

const ELLIPSIS: &str = "...";

/// A piece of template text as shown on a template card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TemplatePart {
    Text(String),
    /// The placeholder including its braces, e.g. `{{name}}`
    Variable(String),
}

/// Placeholders that disagree with a template's declared variable list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariableReport {
    /// Used in the text but not declared
    pub missing: Vec<String>,
    /// Declared but never used in the text
    pub unused: Vec<String>,
}

impl VariableReport {
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty() && self.unused.is_empty()
    }
}

/// Replace every `{{name}}` with `[name]`, leaving everything else alone.
pub fn preview(text: &str) -> String {
    PLACEHOLDER.replace_all(text, "[$1]").into_owned()
}

/// Placeholder names in first-occurrence order, without duplicates.
pub fn variables(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(text) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Compare the placeholders used in `text` with the `declared` names.
pub fn check_variables<S: AsRef<str>>(text: &str, declared: &[S]) -> VariableReport {
    let used = variables(text);

    let missing = used
        .iter()
        .filter(|name| !declared.iter().any(|d| d.as_ref() == name.as_str()))
        .cloned()
        .collect();

    let mut unused: Vec<String> = Vec::new();
    for name in declared.iter().map(AsRef::as_ref) {
        if !used.iter().any(|u| u == name) && !unused.iter().any(|u| u == name) {
            unused.push(name.to_string());
        }
    }

    VariableReport { missing, unused }
}

/// Split `text` into literal text and `{{...}}` spans.
pub fn highlight(text: &str) -> Vec<TemplatePart> {
    let mut parts = Vec::new();
    let mut last = 0;

    for m in LOOSE_PLACEHOLDER.find_iter(text) {
        if m.start() > last {
            parts.push(TemplatePart::Text(text[last..m.start()].to_string()));
        }
        parts.push(TemplatePart::Variable(m.as_str().to_string()));
        last = m.end();
    }

    if last < text.len() {
        parts.push(TemplatePart::Text(text[last..].to_string()));
    }

    parts
}

/// Cut `text` after `max_chars` characters and mark the cut with `...`.
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..end])),
        None => Cow::Borrowed(text),
    }
}
