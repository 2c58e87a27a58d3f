use regex::Captures;

use super::{RuleSpec, Severity, Suggestion};

/// The default in-process catalog: style suggestions, markup checks, and
/// fundamentals rules generalized from the tool family this engine grew
/// out of. Callers embedding the library can supply their own catalog
/// instead; nothing below is special to the engine.
#[must_use]
pub fn builtin_rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec::new(
            "prefer-let",
            r"\bvar\s+([A-Za-z_$][A-Za-z0-9_$]*)",
            "`var` declaration; use `let` or `const`",
            Severity::Warning,
        )
        .with_suggestion(Suggestion::Template("let $1".to_string())),
        RuleSpec::new(
            "prefer-const",
            r"\blet\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=",
            "binding is never reassigned; use `const`",
            Severity::Info,
        )
        .with_usage_check(never_reassigned)
        .with_suggestion(Suggestion::Function(const_fix)),
        RuleSpec::new(
            "strict-equality",
            r"[^=!<>]==[^=]",
            "loose equality comparison; use `===`",
            Severity::Error,
        )
        .with_exceptions(["== null", "!= null"])
        .with_exception_context(16)
        .with_suggestion(Suggestion::Function(strict_equality_fix)),
        RuleSpec::new(
            "no-console",
            r"console\.(log|debug|trace)\s*\(",
            "console output left in source",
            Severity::Info,
        ),
        RuleSpec::new(
            "no-alert",
            r"\b(alert|confirm|prompt)\s*\(",
            "blocking dialog call",
            Severity::Warning,
        ),
        RuleSpec::new(
            "no-document-write",
            r"document\.write(ln)?\s*\(",
            "document.write blocks parsing and is unsafe with user input",
            Severity::Error,
        ),
        RuleSpec::new(
            "no-eval",
            r"\beval\s*\(",
            "eval() executes arbitrary code",
            Severity::Error,
        ),
        RuleSpec::new(
            "no-empty-catch",
            r"catch\s*(\([^)]*\))?\s*\{\s*\}",
            "empty catch block swallows errors",
            Severity::Warning,
        ),
        RuleSpec::new(
            "img-alt",
            r"<img\b[^>]*>",
            "image tag without alt text",
            Severity::Warning,
        )
        .with_usage_check(missing_alt),
        RuleSpec::new(
            "inline-style",
            r#"<[a-zA-Z][^>]*\bstyle\s*=\s*""#,
            "inline style attribute; prefer a stylesheet",
            Severity::Info,
        ),
        RuleSpec::new(
            "todo-comment",
            r"(?i)\b(todo|fixme|hack)\b",
            "unresolved marker comment",
            Severity::Info,
        ),
        RuleSpec::new(
            "trailing-whitespace",
            r"(?m)[ \t]+$",
            "trailing whitespace",
            Severity::Info,
        ),
    ]
}

fn const_fix(caps: &Captures<'_>) -> Option<String> {
    caps.get(1).map(|name| format!("const {} =", name.as_str()))
}

fn strict_equality_fix(caps: &Captures<'_>) -> Option<String> {
    caps.get(0).map(|m| m.as_str().replacen("==", "===", 1))
}

/// Usage check for `prefer-const`: crude textual reuse search over the
/// rest of the buffer. Intentionally imprecise (shadowed names can
/// misfire); real scope analysis is out of scope for a pattern engine.
fn never_reassigned(buffer: &str, caps: &Captures<'_>) -> bool {
    let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
        return false;
    };
    !is_reassigned(&buffer[whole.end()..], name.as_str())
}

fn is_reassigned(tail: &str, name: &str) -> bool {
    let mut search = 0;
    while let Some(pos) = tail[search..].find(name) {
        let start = search + pos;
        let end = start + name.len();
        search = end;

        let boundary_before = tail[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_' || c == '$'));
        if !boundary_before {
            continue;
        }

        let rest = tail[end..].trim_start_matches([' ', '\t']);
        if let Some(after_eq) = rest.strip_prefix('=') {
            if !after_eq.starts_with('=') {
                return true;
            }
        } else if ["+=", "-=", "*=", "/=", "++", "--"]
            .iter()
            .any(|op| rest.starts_with(op))
        {
            return true;
        }
    }
    false
}

fn missing_alt(_buffer: &str, caps: &Captures<'_>) -> bool {
    caps.get(0).is_none_or(|m| !m.as_str().contains("alt="))
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
