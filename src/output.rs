use crate::colors::{Colors, Style};
use crate::error::IniError;
use crate::format::{FormatConfig, FormatResult};
use similar::{ChangeTag, TextDiff};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Normal,
    Quiet,
    Diff,
}

/// What to do with each INI file
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Rewrite into canonical form (or report, with `check_only`)
    Format,
    /// Print the value of `key` in `[section]`
    Get { section: String, key: String },
}

pub struct Config {
    pub check_only: bool,
    pub action: Action,
    pub format: FormatConfig,
}

pub struct OutputContext {
    pub mode: OutputMode,
    pub colors: Colors,
    pub verbose: bool,
    pub show_progress: bool,
}

impl OutputContext {
    pub fn new(mode: OutputMode, use_colors: bool, verbose: bool, show_progress: bool) -> Self {
        Self {
            mode,
            colors: Colors::new(use_colors),
            verbose,
            show_progress,
        }
    }
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub files_formatted: usize,
    /// Files that are not in canonical form (check mode)
    pub files_with_problems: usize,
    /// Files that could not be read, parsed or written
    pub files_with_errors: usize,
    pub missing_settings: usize,
}

impl RunResult {
    pub fn has_problems(&self) -> bool {
        self.files_with_problems > 0
    }

    /// Whether the run should end with a failing exit code.
    pub fn failed(&self, check_only: bool) -> bool {
        self.files_with_errors > 0
            || self.missing_settings > 0
            || (check_only && self.has_problems())
    }
}

pub fn print_check_result(path: &Path, result: &FormatResult, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        println!("{}", path.display());
        return;
    }

    if ctx.mode == OutputMode::Diff {
        print_diff(&path.display().to_string(), &result.original, &result.content);
        return;
    }

    println!(
        "{} {}",
        ctx.colors.paint(Style::Error, "Error:"),
        path.display()
    );

    let changed = result.changed_lines();
    for line in &changed {
        println!("  - line {line} is not in canonical form");
    }
    if changed.is_empty() {
        println!("  - line endings differ");
    }
}

pub fn print_format_result(path: &Path, result: &FormatResult, ctx: &OutputContext) {
    match ctx.mode {
        OutputMode::Quiet => println!("{}", path.display()),
        OutputMode::Diff => print_diff(&path.display().to_string(), &result.original, &result.content),
        OutputMode::Normal => println!(
            "{} {}",
            ctx.colors.paint(Style::Success, "Formatted:"),
            path.display()
        ),
    }
}

pub fn print_error(path: &Path, error: &IniError, ctx: &OutputContext) {
    eprintln!(
        "{} {}: {error}",
        ctx.colors.paint(Style::Error, "Error:"),
        path.display()
    );
}

pub fn print_setting(path: &Path, value: &str, show_path: bool, ctx: &OutputContext) {
    if show_path && ctx.mode != OutputMode::Quiet {
        println!("{}: {value}", path.display());
    } else {
        println!("{value}");
    }
}

pub fn print_missing_setting(path: &Path, section: &str, key: &str, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }
    eprintln!(
        "{} {}: no setting `{key}` in section [{section}]",
        ctx.colors.paint(Style::Warning, "Missing:"),
        path.display()
    );
}

pub fn print_checked(path: &Path, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }
    println!(
        "{} {}",
        ctx.colors.paint(Style::Info, "Checked:"),
        path.display()
    );
}

pub fn print_skipped(path: &Path, reason: &str, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }
    println!(
        "{} {}",
        ctx.colors.paint(Style::Info, &format!("Skipping {reason}:")),
        path.display()
    );
}

pub fn print_diff(label: &str, original: &str, content: &str) {
    let diff = TextDiff::from_lines(original, content);

    println!("--- {label}");
    println!("+++ {label}");

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!();
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                print!("{sign}{change}");
                if change.missing_newline() {
                    println!();
                }
            }
        }
    }
}

pub fn print_summary(result: &RunResult, config: &Config, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }

    let mut parts = vec![];
    if config.check_only && result.files_with_problems > 0 {
        parts.push(ctx.colors.paint(
            Style::Error,
            &format!("{} files need formatting", result.files_with_problems),
        ));
    }
    if result.files_formatted > 0 {
        parts.push(ctx.colors.paint(
            Style::Success,
            &format!("{} files formatted", result.files_formatted),
        ));
    }
    if result.files_with_errors > 0 {
        parts.push(ctx.colors.paint(
            Style::Warning,
            &format!("{} files with errors", result.files_with_errors),
        ));
    }

    if !parts.is_empty() {
        println!();
        println!("{}", parts.join(", "));
    }
}
