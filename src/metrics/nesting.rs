/// Tags that never hold content and never increase depth.
pub const DEFAULT_VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Nesting-depth estimator for markup-like input.
///
/// A single left-to-right scan recognizes opening tags, closing tags,
/// and self-closing/void tags; comments, processing instructions, and
/// doctype declarations never affect depth. The estimator tolerates
/// unbalanced fragments: depth floors at zero on an unmatched closing
/// tag instead of going negative.
#[derive(Debug, Clone)]
pub struct NestingDepth {
    void_tags: Vec<String>,
}

impl NestingDepth {
    #[must_use]
    pub fn new<I, S>(void_tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            void_tags: void_tags
                .into_iter()
                .map(|t| t.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    #[must_use]
    pub fn with_default_void_tags() -> Self {
        Self::new(DEFAULT_VOID_TAGS)
    }

    fn is_void(&self, tag: &str) -> bool {
        self.void_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Maximum concurrent open-tag count observed in the buffer.
    #[must_use]
    pub fn max_depth(&self, buffer: &str) -> usize {
        let mut depth = 0usize;
        let mut max = 0usize;
        let mut i = 0;

        while let Some(pos) = buffer[i..].find('<') {
            let at = i + pos;
            let rest = &buffer[at..];

            if let Some(skip) = non_element_len(rest) {
                i = at + skip;
                continue;
            }

            if let Some(after) = rest.strip_prefix("</") {
                depth = depth.saturating_sub(1);
                i = at + 2 + after.find('>').map_or(after.len(), |p| p + 1);
                continue;
            }

            let name = tag_name(&rest[1..]);
            if name.is_empty() {
                // Bare `<` that opens no tag; step past it.
                i = at + 1;
                continue;
            }

            let body_end = rest.find('>').unwrap_or(rest.len());
            let self_closing = rest[..body_end].ends_with('/');
            if !self_closing && !self.is_void(name) {
                depth += 1;
                max = max.max(depth);
            }
            i = at + body_end + usize::from(body_end < rest.len());
        }

        max
    }
}

/// Length to skip for comments, processing instructions, and doctype
/// declarations; `None` when `rest` starts an ordinary tag.
fn non_element_len(rest: &str) -> Option<usize> {
    if let Some(body) = rest.strip_prefix("<!--") {
        return Some(4 + body.find("-->").map_or(body.len(), |p| p + 3));
    }
    if let Some(body) = rest.strip_prefix("<?") {
        return Some(2 + body.find("?>").map_or(body.len(), |p| p + 2));
    }
    if let Some(body) = rest.strip_prefix("<!") {
        return Some(2 + body.find('>').map_or(body.len(), |p| p + 1));
    }
    None
}

fn tag_name(after_bracket: &str) -> &str {
    if !after_bracket.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return "";
    }
    let end = after_bracket
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(after_bracket.len());
    &after_bracket[..end]
}

#[cfg(test)]
#[path = "nesting_tests.rs"]
mod tests;
