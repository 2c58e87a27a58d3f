use regex::Captures;

use crate::rule::Suggestion;

/// Render a rule's suggestion against a raw match.
///
/// Returns `None` when the suggestion cannot produce a replacement
/// (missing capture group, function declined); the finding is still
/// emitted without one. The engine only proposes replacements, it never
/// rewrites the source.
#[must_use]
pub fn render(suggestion: &Suggestion, caps: &Captures<'_>) -> Option<String> {
    match suggestion {
        Suggestion::Function(f) => f(caps),
        Suggestion::Template(template) => render_template(template, caps),
    }
}

/// Expand `$0`..`$9` placeholders from capture groups. `$$` is a literal
/// dollar sign. A placeholder for a group that did not participate in
/// the match fails the whole rendering.
fn render_template(template: &str, caps: &Captures<'_>) -> Option<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('$') => {
                chars.next();
                out.push('$');
            }
            Some(d) if d.is_ascii_digit() => {
                let group = d.to_digit(10).map(|n| n as usize)?;
                chars.next();
                out.push_str(caps.get(group)?.as_str());
            }
            _ => out.push('$'),
        }
    }

    Some(out)
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
