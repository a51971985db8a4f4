use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use std::ops::Range;

/// A matched region of a file. `body` is the span of capture group 1, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub span: Range<usize>,
    pub text: String,
    pub body: Option<Range<usize>>,
}

impl Anchor {
    fn from_captures(caps: &regex::Captures<'_>) -> Option<Self> {
        let whole = caps.get(0)?;
        Some(Self {
            span: whole.range(),
            text: whole.as_str().to_string(),
            body: caps.get(1).map(|m| m.range()),
        })
    }

    /// Text of capture group 1 within `haystack`, or the empty string.
    pub fn body_text<'a>(&self, haystack: &'a str) -> &'a str {
        self.body.clone().map(|r| &haystack[r]).unwrap_or("")
    }
}

// Anchors span several source lines, so `.` has to cross newlines.
fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .dot_matches_new_line(true)
        .build()
        .with_context(|| format!("Invalid anchor pattern: {}", pattern))
}

/// First match of `pattern` in `text`. Not finding one is `Ok(None)`.
pub fn find(text: &str, pattern: &str) -> Result<Option<Anchor>> {
    let re = compile(pattern)?;
    Ok(re
        .captures(text)
        .and_then(|caps| Anchor::from_captures(&caps)))
}

/// Every non-overlapping match of `pattern` in `text`.
pub fn find_all(text: &str, pattern: &str) -> Result<Vec<Anchor>> {
    let re = compile(pattern)?;
    Ok(re
        .captures_iter(text)
        .filter_map(|caps| Anchor::from_captures(&caps))
        .collect())
}

/// Like [`find`], for a `header` pattern that ends on an opening brace: the
/// returned anchor runs through the matching closing brace and `body` covers
/// everything between the two. Braces inside string literals and comments
/// don't count.
pub fn find_braced(text: &str, header: &str) -> Result<Option<Anchor>> {
    let Some(head) = find(text, header)? else {
        return Ok(None);
    };
    if !head.text.ends_with('{') {
        anyhow::bail!("Header pattern must end on an opening brace: {}", header);
    }

    let open = head.span.end;
    let Some(close) = closing_brace(&text[open..]).map(|offset| open + offset) else {
        return Ok(None);
    };
    Ok(Some(Anchor {
        span: head.span.start..close + 1,
        text: text[head.span.start..close + 1].to_string(),
        body: Some(open..close),
    }))
}

/// Byte offset of the `}` closing an already-opened block, if balanced.
fn closing_brace(rest: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut found = None;
    walk_code(rest, |idx, ch| match ch {
        '{' => {
            depth += 1;
            true
        }
        '}' if depth == 0 => {
            found = Some(idx);
            false
        }
        '}' => {
            depth -= 1;
            true
        }
        _ => true,
    });
    found
}

/// Byte offsets of the commas in `body` that sit outside any nested
/// braces, brackets, parentheses, string literals or comments.
pub fn top_level_commas(body: &str) -> Vec<usize> {
    let mut depth = 0i32;
    let mut out = Vec::new();
    walk_code(body, |idx, ch| {
        match ch {
            '{' | '[' | '(' => depth += 1,
            '}' | ']' | ')' => depth -= 1,
            ',' if depth == 0 => out.push(idx),
            _ => {}
        }
        true
    });
    out
}

/// Feeds `visit` every character of `text` that is code, skipping string
/// literals, `//` line comments and `/* */` block comments. Stops as soon as
/// `visit` returns false.
fn walk_code<F>(text: &str, mut visit: F)
where
    F: FnMut(usize, char) -> bool,
{
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\'' | '"' | '`' => {
                while let Some((_, c)) = chars.next() {
                    if c == '\\' {
                        chars.next();
                    } else if c == ch {
                        break;
                    }
                }
            }
            '/' if matches!(chars.peek(), Some((_, '/'))) => {
                for (_, c) in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '/' if matches!(chars.peek(), Some((_, '*'))) => {
                chars.next();
                let mut prev = '\0';
                for (_, c) in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => {
                if !visit(idx, ch) {
                    return;
                }
            }
        }
    }
}
