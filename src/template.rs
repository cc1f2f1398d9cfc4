//! Mustache-style templates for pull request descriptions
//!
//! Supports variables (`{{name}}`, `{{{name}}}`, `{{& name}}`), sections and
//! inverted sections over a JSON context, and comments. Partials, lambdas and
//! delimiter changes are not supported.

use crate::error::{Error, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| {
        Regex::new(r"\{\{\{\s*([^}]*?)\s*\}\}\}|\{\{\s*([#^/&!]?)\s*([^}]*?)\s*\}\}")
            .expect("hardcoded tag pattern is valid")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Escaped,
    Raw,
    Section,
    Inverted,
    Close,
    Comment,
}

impl TagKind {
    /// Tags that vanish with their line when they stand alone on it
    const fn is_standalone_candidate(self) -> bool {
        matches!(
            self,
            Self::Section | Self::Inverted | Self::Close | Self::Comment
        )
    }
}

#[derive(Debug, Clone)]
enum Token {
    Text(String),
    Tag(TagKind, String),
}

#[derive(Debug, Clone)]
enum Node {
    Text(String),
    Variable { name: String, escape: bool },
    Section {
        name: String,
        inverted: bool,
        children: Vec<Node>,
    },
}

/// A parsed template
#[derive(Debug, Clone)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Parse template source
    ///
    /// Fails if sections are left open or closed out of order.
    pub fn parse(source: &str) -> Result<Self> {
        let mut tokens = tokenize(source);
        strip_standalone_lines(&mut tokens);
        let nodes = build_tree(tokens)?;
        Ok(Self { nodes })
    }

    /// Render against a JSON context
    pub fn render(&self, context: &Value) -> String {
        let mut out = String::new();
        let mut stack = vec![context];
        render_nodes(&self.nodes, &mut stack, &mut out);
        out
    }
}

fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in tag_pattern().captures_iter(source) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            tokens.push(Token::Text(source[last..whole.start()].to_string()));
        }
        last = whole.end();

        if let Some(raw) = caps.get(1) {
            tokens.push(Token::Tag(TagKind::Raw, raw.as_str().to_string()));
            continue;
        }

        let sigil = caps.get(2).map_or("", |m| m.as_str());
        let name = caps.get(3).map_or("", |m| m.as_str()).to_string();
        let kind = match sigil {
            "#" => TagKind::Section,
            "^" => TagKind::Inverted,
            "/" => TagKind::Close,
            "&" => TagKind::Raw,
            "!" => TagKind::Comment,
            _ => TagKind::Escaped,
        };
        tokens.push(Token::Tag(kind, name));
    }

    if last < source.len() {
        tokens.push(Token::Text(source[last..].to_string()));
    }
    tokens
}

/// Remove the whitespace and newline around tags that sit alone on a line
fn strip_standalone_lines(tokens: &mut [Token]) {
    let standalone: Vec<usize> = (0..tokens.len())
        .filter(|&i| is_standalone(tokens, i))
        .collect();

    for i in standalone {
        if let Some(Token::Text(text)) = i.checked_sub(1).map(|p| &mut tokens[p]) {
            let keep = text.rfind('\n').map_or(0, |nl| nl + 1);
            text.truncate(keep);
        }
        if let Some(Token::Text(text)) = tokens.get_mut(i + 1) {
            *text = text
                .find('\n')
                .map_or_else(String::new, |nl| text[nl + 1..].to_string());
        }
    }
}

fn is_standalone(tokens: &[Token], i: usize) -> bool {
    let Token::Tag(kind, _) = &tokens[i] else {
        return false;
    };
    if !kind.is_standalone_candidate() {
        return false;
    }

    let blank = |s: &str| s.chars().all(|c| c == ' ' || c == '\t' || c == '\r');

    // Whatever precedes the tag on its line must be blank text.
    let before_ok = match i.checked_sub(1).map(|p| &tokens[p]) {
        None => true,
        Some(Token::Text(text)) => match text.rfind('\n') {
            Some(nl) => blank(&text[nl + 1..]),
            None => i == 1 && blank(text),
        },
        Some(Token::Tag(..)) => false,
    };

    // Likewise for whatever follows it up to the end of the line.
    let after_ok = match tokens.get(i + 1) {
        None => true,
        Some(Token::Text(text)) => blank(text.find('\n').map_or(text.as_str(), |nl| &text[..nl])),
        Some(Token::Tag(..)) => false,
    };

    before_ok && after_ok
}

fn build_tree(tokens: Vec<Token>) -> Result<Vec<Node>> {
    // Each frame holds the nodes collected so far and the section that opened it.
    let mut frames: Vec<(Vec<Node>, Option<(String, bool)>)> = vec![(Vec::new(), None)];

    for token in tokens {
        match token {
            Token::Text(text) if text.is_empty() => {}
            Token::Text(text) => push_node(&mut frames, Node::Text(text)),
            Token::Tag(TagKind::Escaped, name) => {
                push_node(&mut frames, Node::Variable { name, escape: true });
            }
            Token::Tag(TagKind::Raw, name) => {
                push_node(&mut frames, Node::Variable { name, escape: false });
            }
            Token::Tag(TagKind::Comment, _) => {}
            Token::Tag(TagKind::Section, name) => frames.push((Vec::new(), Some((name, false)))),
            Token::Tag(TagKind::Inverted, name) => frames.push((Vec::new(), Some((name, true)))),
            Token::Tag(TagKind::Close, name) => {
                let (children, opened) = frames
                    .pop()
                    .ok_or_else(|| Error::Template(format!("unexpected closing tag `{name}`")))?;
                let Some((open_name, inverted)) = opened else {
                    return Err(Error::Template(format!("unexpected closing tag `{name}`")));
                };
                if open_name != name {
                    return Err(Error::Template(format!(
                        "section `{open_name}` closed by `{name}`"
                    )));
                }
                push_node(
                    &mut frames,
                    Node::Section {
                        name,
                        inverted,
                        children,
                    },
                );
            }
        }
    }

    match frames.pop() {
        Some((nodes, None)) if frames.is_empty() => Ok(nodes),
        Some((_, Some((name, _)))) => Err(Error::Template(format!("unclosed section `{name}`"))),
        _ => Err(Error::Template("unbalanced sections".to_string())),
    }
}

fn push_node(frames: &mut [(Vec<Node>, Option<(String, bool)>)], node: Node) {
    if let Some((nodes, _)) = frames.last_mut() {
        nodes.push(node);
    }
}

fn render_nodes<'v>(nodes: &[Node], stack: &mut Vec<&'v Value>, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Variable { name, escape } => {
                let text = lookup(stack, name).map(stringify).unwrap_or_default();
                if *escape {
                    out.push_str(&escape_html(&text));
                } else {
                    out.push_str(&text);
                }
            }
            Node::Section {
                name,
                inverted,
                children,
            } => {
                let value = lookup(stack, name);
                let truthy = value.is_some_and(is_truthy);

                if *inverted {
                    if !truthy {
                        render_nodes(children, stack, out);
                    }
                    continue;
                }

                match value {
                    Some(Value::Array(items)) => {
                        for item in items {
                            stack.push(item);
                            render_nodes(children, stack, out);
                            stack.pop();
                        }
                    }
                    Some(value) if truthy => {
                        stack.push(value);
                        render_nodes(children, stack, out);
                        stack.pop();
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Resolve a (possibly dotted) name, searching from the innermost context out
fn lookup<'a>(stack: &[&'a Value], name: &str) -> Option<&'a Value> {
    if name == "." {
        return stack.last().copied();
    }

    let mut parts = name.split('.');
    let first = parts.next()?;
    let mut value = stack
        .iter()
        .rev()
        .find_map(|ctx| ctx.as_object().and_then(|obj| obj.get(first)))?;

    for part in parts {
        value = value.as_object()?.get(part)?;
    }
    Some(value)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Number(_) | Value::Object(_) => true,
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null | Value::Object(_) => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
    }
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
            '/' => out.push_str("&#x2F;"),
            '`' => out.push_str("&#x60;"),
            '=' => out.push_str("&#x3D;"),
            _ => out.push(c),
        }
    }
    out
}
