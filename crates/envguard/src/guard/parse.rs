//! Dotenv parsing into an in-memory map.
//!
//! Values are taken literally: `$VAR` is never expanded and the process
//! environment is neither read nor modified. Later occurrences of a key
//! overwrite earlier ones.
//!
//! Grammar, one entry per line:
//! - Blank lines and lines starting with `#` are ignored.
//! - `[export ]KEY=VALUE` or `KEY: VALUE`, keys made of `[A-Za-z0-9_.-]`.
//! - Single, double and backtick quotes are stripped and may span lines.
//!   Only double quotes turn `\n` and `\r` into line breaks.
//! - Unquoted values end at the first `#` and are trimmed.
//! - Lines that match none of the above are skipped with a warning that
//!   carries the line number, never the line content.

use std::collections::HashMap;

/// Parse dotenv `content` into a key/value map.
pub fn parse_dotenv(content: &str) -> HashMap<String, String> {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();
    let mut vars = HashMap::new();
    let mut index = 0;

    while index < lines.len() {
        let line_number = index + 1;
        let line = lines[index].trim_start();
        index += 1;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, rest)) = split_assignment(line) else {
            tracing::warn!(line = line_number, "Skipping malformed .env line");
            continue;
        };

        let (value, consumed) = parse_value(rest.trim_start(), &lines[index..]);
        index += consumed;
        vars.insert(key.to_string(), value);
    }

    vars
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

/// Split `line` into key and raw value, honoring an optional `export` prefix.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    if let Some(rest) = line.strip_prefix("export")
        && rest.starts_with(char::is_whitespace)
        && let Some(assignment) = split_key(rest.trim_start())
    {
        return Some(assignment);
    }
    split_key(line)
}

fn split_key(line: &str) -> Option<(&str, &str)> {
    let key_len = line.find(|c: char| !is_key_char(c)).unwrap_or(line.len());
    if key_len == 0 {
        return None;
    }
    let (key, rest) = line.split_at(key_len);

    if let Some(value) = rest.trim_start().strip_prefix('=') {
        return Some((key, value));
    }
    match rest.strip_prefix(':') {
        Some(value) if value.starts_with(char::is_whitespace) => Some((key, value)),
        _ => None,
    }
}

/// Parse a raw value, pulling in `following` lines for multi-line quotes.
///
/// Returns the value and the number of following lines consumed.
fn parse_value(raw: &str, following: &[&str]) -> (String, usize) {
    let Some(quote) = raw.chars().next().filter(|c| matches!(*c, '"' | '\'' | '`')) else {
        return (unquoted(raw), 0);
    };
    let body = &raw[quote.len_utf8()..];

    if let Some(end) = closing_quote(body, quote) {
        if only_comment_after(&body[end + quote.len_utf8()..]) {
            return (quoted(&body[..end], quote), 0);
        }
        return (unquoted(raw), 0);
    }

    let mut value = body.to_string();
    for (offset, line) in following.iter().enumerate() {
        value.push('\n');
        match closing_quote(line, quote) {
            Some(end) if only_comment_after(&line[end + quote.len_utf8()..]) => {
                value.push_str(&line[..end]);
                return (quoted(&value, quote), offset + 1);
            }
            Some(_) => break,
            None => value.push_str(line),
        }
    }

    // Unterminated quote: the opening quote is kept as part of a plain value.
    (unquoted(raw), 0)
}

/// Byte offset of the first `quote` in `text` not preceded by a backslash.
fn closing_quote(text: &str, quote: char) -> Option<usize> {
    let mut chars = text.char_indices().peekable();
    while let Some((offset, c)) = chars.next() {
        if c == '\\' && chars.peek().is_some_and(|&(_, next)| next == quote) {
            chars.next();
        } else if c == quote {
            return Some(offset);
        }
    }
    None
}

fn only_comment_after(rest: &str) -> bool {
    let rest = rest.trim_start();
    rest.is_empty() || rest.starts_with('#')
}

fn quoted(body: &str, quote: char) -> String {
    if quote == '"' {
        body.replace("\\n", "\n").replace("\\r", "\r")
    } else {
        body.to_string()
    }
}

fn unquoted(raw: &str) -> String {
    raw.split('#').next().unwrap_or_default().trim().to_string()
}
