use std::fs;
use std::path::Path;

use clap::Parser;

use style_guard::cli::{Cli, ColorChoice};
use style_guard::engine::Analyzer;
use style_guard::metrics::{BranchDensity, NestingDepth};
use style_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, ReportFormatter, TextFormatter,
};
use style_guard::rule::{RuleSet, builtin_rules};
use style_guard::runner::{BatchRunner, DEFAULT_EXTENSIONS, InputFilter};
use style_guard::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> style_guard::Result<i32> {
    // Registry and metric patterns compile before any input is read;
    // a bad pattern is a fatal configuration error.
    let analyzer = build_analyzer()?;
    let formatter = build_formatter(cli);

    match (&cli.dir, &cli.path) {
        (Some(dir), _) => run_batch(cli, &analyzer, formatter.as_ref(), dir),
        (None, Some(path)) => run_single(cli, &analyzer, formatter.as_ref(), path),
        (None, None) => Err(style_guard::StyleGuardError::Config(
            "no input path provided".to_string(),
        )),
    }
}

fn build_analyzer() -> style_guard::Result<Analyzer> {
    let rules = RuleSet::compile(builtin_rules())?;
    Ok(Analyzer::new(rules)
        .with_branch_density(BranchDensity::with_default_patterns()?)
        .with_nesting_depth(NestingDepth::with_default_void_tags()))
}

fn build_formatter(cli: &Cli) -> Box<dyn ReportFormatter> {
    match cli.format {
        OutputFormat::Text => {
            let mode = match cli.color {
                ColorChoice::Auto => ColorMode::Auto,
                ColorChoice::Always => ColorMode::Always,
                ColorChoice::Never => ColorMode::Never,
            };
            Box::new(TextFormatter::with_verbose(mode, cli.verbose))
        }
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

fn run_single(
    cli: &Cli,
    analyzer: &Analyzer,
    formatter: &dyn ReportFormatter,
    path: &Path,
) -> style_guard::Result<i32> {
    if !path.is_file() {
        return Err(style_guard::StyleGuardError::InputNotFound(
            path.to_path_buf(),
        ));
    }

    let buffer = fs::read_to_string(path).map_err(|e| style_guard::StyleGuardError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let result = analyzer.analyze(&path.display().to_string(), &buffer);
    let report = formatter.format_result(&result)?;
    write_output(cli.output.as_deref(), &report, cli.quiet)?;

    Ok(if result.passed() {
        EXIT_SUCCESS
    } else {
        EXIT_ISSUES_FOUND
    })
}

fn run_batch(
    cli: &Cli,
    analyzer: &Analyzer,
    formatter: &dyn ReportFormatter,
    dir: &Path,
) -> style_guard::Result<i32> {
    let extensions = cli
        .ext
        .clone()
        .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect());
    let filter = InputFilter::new(extensions, &cli.exclude)?;

    let mut runner = BatchRunner::new(analyzer, filter);
    runner.enqueue_dir(dir)?;

    // Each report streams out as its file completes; only --output
    // buffers the whole run.
    let summary = if let Some(path) = cli.output.as_deref() {
        let mut rendered = Vec::new();
        let summary = runner.run(formatter, &mut rendered)?;
        fs::write(path, rendered)?;
        summary
    } else if cli.quiet {
        runner.run(formatter, &mut std::io::sink())?
    } else {
        runner.run(formatter, &mut std::io::stdout().lock())?
    };

    Ok(if summary.passed() {
        EXIT_SUCCESS
    } else {
        EXIT_ISSUES_FOUND
    })
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> style_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
