//! Placeholder tokens embedded in translated text.
//!
//! Supported forms are `[i:count]` and the Lokalise style `[%i:count]`, where
//! the tag is `i` (integer), `s` (text) or `f` (float).

use std::sync::LazyLock;

use regex::Regex;

use crate::core::ArgumentKind;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[%?([isf]):([A-Za-z0-9_][A-Za-z0-9_\-]*)\]").expect("placeholder regex is valid")
});

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "do", "dyn", "else",
    "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop",
    "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return", "self",
    "static", "struct", "super", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// A placeholder occurrence in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Name as written by the translator.
    pub raw_name: String,
    /// Normalized identifier used for the argument.
    pub name: String,
    pub kind: ArgumentKind,
}

/// A piece of text split at placeholder boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(Placeholder),
}

/// All placeholders in `text`, in order of appearance (duplicates kept).
pub fn scan(text: &str) -> Vec<Placeholder> {
    segments(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(placeholder),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Split `text` into literal runs and placeholders.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();
    let mut last = 0;
    for captures in PLACEHOLDER_REGEX.captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        if whole.start() > last {
            result.push(Segment::Literal(&text[last..whole.start()]));
        }
        let kind = ArgumentKind::from_tag(&captures[1]).unwrap_or(ArgumentKind::Text);
        result.push(Segment::Placeholder(Placeholder {
            raw_name: captures[2].to_string(),
            name: to_identifier(&captures[2]),
            kind,
        }));
        last = whole.end();
    }
    if last < text.len() {
        result.push(Segment::Literal(&text[last..]));
    }
    result
}

/// Normalize an arbitrary name into a snake_case Rust identifier.
///
/// `userName` → `user_name`, `Button Title` → `button_title`,
/// `2fa-code` → `_2fa_code`, `type` → `type_`.
pub fn to_identifier(name: &str) -> String {
    let mut ident = String::with_capacity(name.len() + 2);
    let mut previous: Option<char> = None;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if c.is_uppercase() {
                let after_lower = previous.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
                if after_lower && !ident.ends_with('_') {
                    ident.push('_');
                }
                ident.extend(c.to_lowercase());
            } else {
                ident.push(c);
            }
        } else if !ident.is_empty() && !ident.ends_with('_') {
            ident.push('_');
        }
        previous = Some(c);
    }
    while ident.ends_with('_') {
        ident.pop();
    }
    if ident.is_empty() {
        return "unnamed".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if RUST_KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}
