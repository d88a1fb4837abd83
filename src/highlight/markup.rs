//! Reading highlight markup back
//!
//! The highlight surface holds markup produced by the renderer. Hosts that
//! draw it (and tests that check it) need the text, the line structure and
//! the style in effect for each piece. Only the three constructs the renderer
//! emits are recognized: `<span style="...">`, `</span>` and `<br>`, plus the
//! trailing `&nbsp;` filler. The escaped `&amp;`, `&lt;` and `&gt;` decode
//! to their characters. Anything else, including the half-formed tags that
//! sequential rules can produce, is kept as literal text.

use super::render::{ENTITIES, LINE_BREAK, TRAILING_FILLER};
use super::style::Style;

const SPAN_OPEN: &str = "<span style=\"";
const SPAN_CLOSE: &str = "</span>";

/// A markup token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text
    Text(&'a str),
    /// Opening span with its inline style declarations
    Open(&'a str),
    /// Closing span
    Close,
    /// Line break
    Break,
    /// Trailing blank-line filler
    Filler,
}

/// A run of text sharing one resolved style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub style: Style,
}

/// Tokenize markup
pub fn tokenize(markup: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < markup.len() {
        let rest = &markup[pos..];
        let matched = if rest.starts_with(LINE_BREAK) {
            Some((Token::Break, LINE_BREAK.len()))
        } else if rest.starts_with(SPAN_CLOSE) {
            Some((Token::Close, SPAN_CLOSE.len()))
        } else if rest.starts_with(SPAN_OPEN) {
            open_tag(rest)
        } else if rest == TRAILING_FILLER && markup[..pos].ends_with(LINE_BREAK) {
            Some((Token::Filler, TRAILING_FILLER.len()))
        } else if rest.starts_with('&') {
            entity(rest)
        } else {
            None
        };

        match matched {
            Some((token, len)) => {
                if text_start < pos {
                    tokens.push(Token::Text(&markup[text_start..pos]));
                }
                tokens.push(token);
                pos += len;
                text_start = pos;
            }
            None => {
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if text_start < markup.len() {
        tokens.push(Token::Text(&markup[text_start..]));
    }
    tokens
}

/// Decode an escaped character at the start of `rest`
fn entity(rest: &str) -> Option<(Token<'static>, usize)> {
    ENTITIES
        .iter()
        .find(|(entity, _)| rest.starts_with(*entity))
        .map(|&(entity, ch)| (Token::Text(ch), entity.len()))
}

/// Match `<span style="...">` at the start of `rest`
fn open_tag(rest: &str) -> Option<(Token<'_>, usize)> {
    let body = &rest[SPAN_OPEN.len()..];
    let quote = body.find('"')?;
    if !body[quote + 1..].starts_with('>') {
        return None;
    }
    let style = &body[..quote];
    Some((Token::Open(style), SPAN_OPEN.len() + quote + 2))
}

/// Split markup into lines of styled runs
///
/// Nested spans layer their declarations over the enclosing span's style.
/// Stray closing tags are ignored.
pub fn parse_lines(markup: &str) -> Vec<Vec<Run>> {
    let mut lines = vec![Vec::new()];
    let mut stack: Vec<Style> = Vec::new();

    for token in tokenize(markup) {
        match token {
            Token::Text(text) => {
                let style = stack.last().copied().unwrap_or_default();
                push_run(lines.last_mut(), text, style);
            }
            Token::Open(css) => {
                let mut style = stack.last().copied().unwrap_or_default();
                style.apply_declarations(css);
                stack.push(style);
            }
            Token::Close => {
                stack.pop();
            }
            Token::Break => lines.push(Vec::new()),
            Token::Filler => {}
        }
    }

    lines
}

fn push_run(line: Option<&mut Vec<Run>>, text: &str, style: Style) {
    let Some(line) = line else {
        return;
    };
    match line.last_mut() {
        Some(last) if last.style == style => last.text.push_str(text),
        _ => line.push(Run {
            text: text.to_string(),
            style,
        }),
    }
}

/// Recover the plain text from markup
pub fn strip(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    for token in tokenize(markup) {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::Break => out.push('\n'),
            Token::Open(_) | Token::Close | Token::Filler => {}
        }
    }
    out
}
