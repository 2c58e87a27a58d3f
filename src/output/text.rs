use std::fmt::Write;

use crate::engine::{AnalysisResult, BatchSummary, Finding};
use crate::error::Result;
use crate::rule::Severity;

use super::ReportFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
            Severity::Info => ansi::CYAN,
        }
    }

    fn format_finding(&self, finding: &Finding, output: &mut String) {
        let label = self.colorize(
            finding.severity.as_str(),
            Self::severity_color(finding.severity),
        );
        let _ = writeln!(
            output,
            "   {label}[{}] {}:{} {}",
            finding.rule, finding.line, finding.column, finding.message
        );
        if !finding.matched.is_empty() {
            let _ = writeln!(output, "      match: `{}`", finding.matched.trim_end());
        }
        if let Some(suggestion) = &finding.suggestion {
            let _ = writeln!(output, "      suggest: `{suggestion}`");
        }
    }

    fn format_metrics(result: &AnalysisResult, output: &mut String) {
        if result.metrics.is_empty() {
            return;
        }
        let rendered: Vec<String> = result
            .metrics
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        let _ = writeln!(output, "   Metrics: {}", rendered.join(", "));
    }

    fn verdict(&self, result: &AnalysisResult) -> String {
        let (icon, status, color) = if result.passed() {
            ("✓", "PASSED", ansi::GREEN)
        } else {
            ("✗", "FAILED", ansi::RED)
        };
        format!(
            "{icon} {}: {} ({} errors, {} warnings, {} info)",
            self.colorize(status, color),
            result.name,
            result.errors.len(),
            result.warnings.len(),
            result.infos.len()
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let mut output = String::new();

        // Clean inputs collapse to the verdict line unless verbose.
        if result.passed() && result.total_findings() == 0 && self.verbose == 0 {
            let _ = writeln!(output, "{}", self.verdict(result));
            return Ok(output);
        }

        let _ = writeln!(output, "=== {}", result.name);
        for finding in result.findings() {
            self.format_finding(finding, &mut output);
        }
        Self::format_metrics(result, &mut output);
        let _ = writeln!(output, "{}", self.verdict(result));

        Ok(output)
    }

    fn format_summary(&self, summary: &BatchSummary) -> Result<String> {
        let passed = summary.analyzed() - summary.failed();
        let passed_str = self.colorize(&passed.to_string(), ansi::GREEN);
        let failed_str = self.colorize(&summary.failed().to_string(), ansi::RED);

        let mut output = format!(
            "Summary: {} inputs analyzed, {passed_str} passed, {failed_str} failed, \
             errors={}, warnings={}, info={}\n",
            summary.analyzed(),
            summary.errors,
            summary.warnings,
            summary.infos
        );

        let verdict = if summary.passed() {
            self.colorize("✓ Batch PASSED", ansi::GREEN)
        } else {
            self.colorize("✗ Batch FAILED", ansi::RED)
        };
        let _ = writeln!(output, "{verdict}");

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
