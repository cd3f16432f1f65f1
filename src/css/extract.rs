//! Brace-matching extraction of a single rule block from raw stylesheet text.
//!
//! This is a plain text scan: braces inside comments or string literals are counted like any
//! other brace, and the first textual header match wins even if it sits inside a comment.

/// Locates a rule header in stylesheet text.
pub trait HeaderPattern {
    /// Byte offset of the first match in `text`.
    fn find_in(&self, text: &str) -> Option<usize>;
}

impl HeaderPattern for str {
    fn find_in(&self, text: &str) -> Option<usize> {
        text.find(self)
    }
}

impl HeaderPattern for String {
    fn find_in(&self, text: &str) -> Option<usize> {
        text.find(self.as_str())
    }
}

impl<P: HeaderPattern + ?Sized> HeaderPattern for &P {
    fn find_in(&self, text: &str) -> Option<usize> {
        (**self).find_in(text)
    }
}

/// `@keyframes <name> {`, optionally vendor-prefixed (`@-webkit-keyframes <name> {`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyframesHeader {
    pub name: String,
    pub prefix: Option<String>,
}

impl KeyframesHeader {
    pub fn standard(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: None,
        }
    }

    pub fn webkit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: Some("-webkit-".to_string()),
        }
    }

    fn at_rule(&self) -> String {
        format!("@{}keyframes", self.prefix.as_deref().unwrap_or(""))
    }
}

impl HeaderPattern for KeyframesHeader {
    fn find_in(&self, text: &str) -> Option<usize> {
        if self.name.is_empty() {
            return None;
        }
        let at_rule = self.at_rule();
        first_match(text, &at_rule, |rest| {
            // At least one whitespace char between the at-rule and the name.
            let name_start = rest.len() - rest.trim_start().len();
            if name_start == 0 {
                return false;
            }
            let Some(after_name) = rest[name_start..].strip_prefix(self.name.as_str()) else {
                return false;
            };
            after_name.trim_start().starts_with('{')
        })
    }
}

/// `.<name> {`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassHeader {
    pub name: String,
}

impl ClassHeader {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl HeaderPattern for ClassHeader {
    fn find_in(&self, text: &str) -> Option<usize> {
        if self.name.is_empty() {
            return None;
        }
        let needle = format!(".{}", self.name);
        first_match(text, &needle, |rest| rest.trim_start().starts_with('{'))
    }
}

/// First occurrence of `needle` whose trailing text satisfies `accept`.
fn first_match(text: &str, needle: &str, accept: impl Fn(&str) -> bool) -> Option<usize> {
    text.match_indices(needle)
        .find(|(idx, _)| accept(&text[idx + needle.len()..]))
        .map(|(idx, _)| idx)
}

/// One brace-delimited rule, header included, borrowed from the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StylesheetBlock<'a> {
    source: &'a str,
    start: usize,
    end: usize, // exclusive, just past the closing brace
}

impl<'a> StylesheetBlock<'a> {
    /// Header through closing brace, trimmed.
    pub fn text(&self) -> &'a str {
        self.source[self.start..self.end].trim()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }
}

/// Extract the first block whose header matches `header`.
///
/// Returns `None` when the header is absent, when no `{` follows it, or when the braces never
/// balance before the end of `text`.
pub fn extract_block<'a, P>(text: &'a str, header: &P) -> Option<StylesheetBlock<'a>>
where
    P: HeaderPattern + ?Sized,
{
    let start = header.find_in(text)?;
    let open = start + text[start..].find('{')?;

    let mut depth = 0usize;
    for (offset, b) in text.as_bytes()[open..].iter().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(StylesheetBlock {
                        source: text,
                        start,
                        end: open + offset + 1,
                    });
                }
            }
            _ => {}
        }
    }

    tracing::debug!(start, "unbalanced braces after rule header");
    None
}

#[cfg(test)]
#[path = "../../tests/unit/css/extract.rs"]
mod tests;
