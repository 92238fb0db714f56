//! Path expressions for configuration lookups
//!
//! A path is a sequence of keys joined by `.`. Keys may be quoted with `"` to
//! carry characters the unquoted form rejects, including `.` itself.

use crate::error::TreeError;

/// Characters that may not appear in an unquoted key
const FORBIDDEN: &[char] = &[
    '$', '"', '{', '}', '[', ']', ':', '=', ',', '+', '#', '`', '^', '?', '!', '@', '*', '&',
    '\\',
];

/// A parsed configuration path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPath {
    segments: Vec<String>,
}

impl ConfigPath {
    /// Parse a path expression such as `storeByValue.strategy` or `caches."a.b"`
    pub fn parse(expression: &str) -> Result<Self, TreeError> {
        let bad = |reason: &str| TreeError::BadPath {
            path: expression.to_string(),
            reason: reason.to_string(),
        };

        if expression.is_empty() {
            return Err(bad("path is empty"));
        }

        let mut segments = Vec::new();
        let mut chars = expression.chars().peekable();

        loop {
            let mut segment = String::new();

            if chars.peek() == Some(&'"') {
                chars.next();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match c {
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\\' => match chars.next() {
                            Some(escaped) => segment.push(escaped),
                            None => return Err(bad("dangling escape in quoted key")),
                        },
                        other => segment.push(other),
                    }
                }
                if !closed {
                    return Err(bad("unterminated quoted key"));
                }
            } else {
                while let Some(&c) = chars.peek() {
                    if c == '.' {
                        break;
                    }
                    if c.is_whitespace() {
                        return Err(bad("whitespace must be quoted"));
                    }
                    if FORBIDDEN.contains(&c) {
                        return Err(bad(&format!("character '{}' must be quoted", c)));
                    }
                    segment.push(c);
                    chars.next();
                }
                if segment.is_empty() {
                    return Err(bad("empty key"));
                }
            }

            segments.push(segment);

            match chars.next() {
                None => break,
                Some('.') => {
                    if chars.peek().is_none() {
                        return Err(bad("path ends with '.'"));
                    }
                }
                Some(c) => {
                    return Err(bad(&format!("unexpected '{}' after quoted key", c)));
                }
            }
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Render the path back into expression form, quoting keys where needed
    pub fn render(&self) -> String {
        self.segments
            .iter()
            .map(|s| quote_key(s))
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// A single key as a path segment, quoted when the bare form would not parse
/// back to the same key
pub fn quote_key(key: &str) -> String {
    if needs_quotes(key) {
        format!("\"{}\"", key.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        key.to_string()
    }
}

fn needs_quotes(key: &str) -> bool {
    key.is_empty()
        || key
            .chars()
            .any(|c| c == '.' || c.is_whitespace() || FORBIDDEN.contains(&c))
}
