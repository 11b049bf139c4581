//! Lowering of logic-less mustache bodies into tera source.
//!
//! | mustache          | tera                                          |
//! |-------------------|-----------------------------------------------|
//! | `{{key}}`         | `{{ base16["key"] \| mustache_escape }}`      |
//! | `{{{key}}}`       | `{{ base16["key"] }}`                         |
//! | `{{&key}}`        | `{{ base16["key"] }}`                         |
//! | `{{! comment }}`  | dropped, with its line when standalone        |
//!
//! Sections, inverted sections, partials and delimiter changes are rejected.
//! Literal text containing `{` is wrapped in `raw` blocks so tera never
//! sees its own delimiters in it. A `{%` in literal text is emitted as a
//! string expression, so no raw block can be closed early.

use std::collections::HashMap;

use tera::Value;

use crate::context::CONTEXT_VAR;

/// Name of the filter registered for `{{key}}` substitutions.
pub(crate) const ESCAPE_FILTER: &str = "mustache_escape";

enum Tag<'a> {
    Escaped(&'a str),
    Unescaped(&'a str),
    Comment,
}

enum Piece<'a> {
    Text(&'a str),
    Tag(Tag<'a>),
}

/// Translate a mustache body into equivalent tera source.
///
/// Errors carry a human-readable message; the caller attaches the template
/// name and path.
pub fn lower(body: &str) -> Result<String, String> {
    let mut pieces = tokenize(body)?;
    strip_standalone_comments(&mut pieces);

    let mut out = String::with_capacity(body.len() + body.len() / 4);
    for piece in pieces {
        match piece {
            Piece::Text(text) => push_literal(&mut out, text),
            Piece::Tag(Tag::Escaped(key)) => {
                out.push_str(&format!(
                    "{{{{ {CONTEXT_VAR}[\"{key}\"] | {ESCAPE_FILTER} }}}}"
                ));
            }
            Piece::Tag(Tag::Unescaped(key)) => {
                out.push_str(&format!("{{{{ {CONTEXT_VAR}[\"{key}\"] }}}}"));
            }
            Piece::Tag(Tag::Comment) => {}
        }
    }
    Ok(out)
}

/// HTML escaping as mustache does it: `& < > " '` and nothing else.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// tera filter wrapping [`escape_html`].
pub(crate) fn escape_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = tera::try_get_value!(ESCAPE_FILTER, "value", String, value);
    Ok(Value::String(escape_html(&text)))
}

fn tokenize(body: &str) -> Result<Vec<Piece<'_>>, String> {
    let mut pieces = Vec::new();
    let mut rest = body;

    while let Some(start) = rest.find("{{") {
        if start > 0 {
            pieces.push(Piece::Text(&rest[..start]));
        }
        let after = &rest[start + 2..];

        let (tag, consumed) = if let Some(inner) = after.strip_prefix('{') {
            let end = inner
                .find("}}}")
                .ok_or_else(|| format!("unclosed tag `{{{{{{{}`", preview(inner)))?;
            (Tag::Unescaped(inner[..end].trim()), 1 + end + 3)
        } else {
            let end = after
                .find("}}")
                .ok_or_else(|| format!("unclosed tag `{{{{{}`", preview(after)))?;
            (classify(after[..end].trim())?, end + 2)
        };

        if let Tag::Escaped(key) | Tag::Unescaped(key) = tag {
            check_key(key)?;
        }
        pieces.push(Piece::Tag(tag));
        rest = &after[consumed..];
    }
    if !rest.is_empty() {
        pieces.push(Piece::Text(rest));
    }
    Ok(pieces)
}

/// Remove lines holding nothing but a comment tag and blanks, newline
/// included.
fn strip_standalone_comments(pieces: &mut [Piece<'_>]) {
    let mut last_standalone = None;
    for i in 0..pieces.len() {
        if !matches!(pieces[i], Piece::Tag(Tag::Comment)) {
            continue;
        }

        let before = match i.checked_sub(1).map(|j| &pieces[j]) {
            None => Some(0),
            Some(Piece::Text(text)) => match text.rfind('\n') {
                Some(nl) if is_blank(&text[nl + 1..]) => Some(text.len() - nl - 1),
                None if is_blank(text) && (i == 1 || last_standalone == Some(i - 2)) => {
                    Some(text.len())
                }
                _ => None,
            },
            Some(Piece::Tag(_)) => None,
        };
        let after = match pieces.get(i + 1) {
            None => Some(0),
            Some(Piece::Text(text)) => match text.find('\n') {
                Some(nl) if is_blank(text[..nl].trim_end_matches('\r')) => Some(nl + 1),
                None if i + 2 == pieces.len() && is_blank(text) => Some(text.len()),
                _ => None,
            },
            Some(Piece::Tag(_)) => None,
        };

        if let (Some(cut_before), Some(cut_after)) = (before, after) {
            if let Some(Piece::Text(text)) = i.checked_sub(1).map(|j| &mut pieces[j]) {
                let full: &str = *text;
                *text = &full[..full.len() - cut_before];
            }
            if let Some(Piece::Text(text)) = pieces.get_mut(i + 1) {
                let full: &str = *text;
                *text = &full[cut_after..];
            }
            last_standalone = Some(i);
        }
    }
}

fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c == ' ' || c == '\t')
}

fn classify(inner: &str) -> Result<Tag<'_>, String> {
    match inner.chars().next() {
        Some('!') => Ok(Tag::Comment),
        Some('&') => Ok(Tag::Unescaped(inner[1..].trim())),
        Some(c @ ('#' | '^' | '/' | '>' | '=')) => Err(format!(
            "unsupported tag `{{{{{inner}}}}}`: '{c}' tags are not available, only key substitution"
        )),
        _ => Ok(Tag::Escaped(inner)),
    }
}

fn check_key(key: &str) -> Result<(), String> {
    if key.is_empty() {
        return Err("empty tag `{{}}`".to_string());
    }
    if let Some(bad) = key
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '"' | '\\' | '{' | '}'))
    {
        return Err(format!("invalid character {bad:?} in key `{key}`"));
    }
    Ok(())
}

fn push_literal(out: &mut String, text: &str) {
    for (i, part) in text.split("{%").enumerate() {
        if i > 0 {
            out.push_str("{{ \"{%\" }}");
        }
        if part.contains('{') {
            out.push_str("{% raw %}");
            out.push_str(part);
            out.push_str("{% endraw %}");
        } else {
            out.push_str(part);
        }
    }
}

fn preview(text: &str) -> String {
    text.chars().take(20).collect()
}
