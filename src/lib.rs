//! Line-preserving INI documents.
//!
//! [`Document`] keeps every comment, blank line and ordering of the source
//! text, supports section/setting lookup and in-place insertion, and renders
//! back to text line for line. The rest of the crate builds the `iniline`
//! formatter and query CLI on top of it.

pub mod colors;
pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod line;
pub mod line_ending;
mod output;
pub mod progress;
pub mod walker;

pub use colors::{should_use_colors, Colors, Style};
pub use config::{
    find_config_file, find_editorconfig, generate_init_file, load_config, merge_format_config,
    parse_editorconfig, CliFormatOptions, ConfigError, EditorConfigSettings, FormatSection,
    IniLineToml, INILINE_TOML_TEMPLATE,
};
pub use document::{Document, LineId, Lines};
pub use error::{IniError, ParseError};
pub use format::{format_content, FormatConfig, FormatResult};
pub use line::{Line, LineKind};
pub use line_ending::LineEnding;
pub use output::{print_diff, Action, Config, OutputContext, OutputMode, RunResult};
pub use progress::ProgressReporter;
pub use walker::walk_ini_files;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const BINARY_CHECK_SIZE: usize = 8192;

/// Check if content is binary by looking for null bytes in first 8192 bytes
pub fn is_binary(content: &[u8]) -> bool {
    let check_len = content.len().min(BINARY_CHECK_SIZE);
    content[..check_len].contains(&0)
}

/// Main entry point: apply `config.action` to every INI file under `paths`
pub fn run(paths: &[String], config: &Config, ctx: &OutputContext) -> io::Result<RunResult> {
    let mut result = RunResult::default();

    let files = walk_ini_files(paths, &config.format.extensions).collect::<io::Result<Vec<PathBuf>>>()?;
    let show_path = files.len() > 1;

    let progress = ProgressReporter::new(files.len() as u64, ctx.show_progress);

    for path in &files {
        progress.start(path);

        let outcome = match &config.action {
            Action::Format => format_file(path, config, &mut result, ctx),
            Action::Get { section, key } => {
                query_file(path, section, key, show_path, &mut result, ctx)
            }
        };

        if let Err(e) = outcome {
            result.files_with_errors += 1;
            output::print_error(path, &e, ctx);
        }

        progress.inc();
    }

    progress.finish();

    if config.action == Action::Format {
        output::print_summary(&result, config, ctx);
    }

    Ok(result)
}

/// Read `path` as text, or `None` when it is binary or not UTF-8.
fn read_source(path: &Path, ctx: &OutputContext) -> Result<Option<String>, IniError> {
    let bytes = fs::read(path).map_err(|source| IniError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if is_binary(&bytes) {
        if ctx.verbose {
            output::print_skipped(path, "binary", ctx);
        }
        return Ok(None);
    }

    match String::from_utf8(bytes) {
        Ok(content) => Ok(Some(content)),
        Err(_) => {
            if ctx.verbose {
                output::print_skipped(path, "non-UTF-8", ctx);
            }
            Ok(None)
        }
    }
}

fn format_file(
    path: &Path,
    config: &Config,
    result: &mut RunResult,
    ctx: &OutputContext,
) -> Result<(), IniError> {
    let Some(content) = read_source(path, ctx)? else {
        return Ok(());
    };

    if content.is_empty() {
        if ctx.verbose {
            output::print_skipped(path, "empty", ctx);
        }
        return Ok(());
    }

    let formatted = format_content(&content, &config.format)?;

    if !formatted.has_changes() {
        if ctx.verbose {
            output::print_checked(path, ctx);
        }
        return Ok(());
    }

    if config.check_only {
        result.files_with_problems += 1;
        output::print_check_result(path, &formatted, ctx);
    } else {
        formatted
            .document
            .write_with(path, config.format.line_ending)?;
        result.files_formatted += 1;
        output::print_format_result(path, &formatted, ctx);
    }

    Ok(())
}

fn query_file(
    path: &Path,
    section: &str,
    key: &str,
    show_path: bool,
    result: &mut RunResult,
    ctx: &OutputContext,
) -> Result<(), IniError> {
    let Some(content) = read_source(path, ctx)? else {
        return Ok(());
    };

    let document = Document::load_string(&content)?;
    match document.value(section, key) {
        Some(value) => output::print_setting(path, value, show_path, ctx),
        None => {
            result.missing_settings += 1;
            output::print_missing_setting(path, section, key, ctx);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn quiet_ctx() -> OutputContext {
        OutputContext::new(OutputMode::Quiet, false, false, false)
    }

    fn lf_config(check_only: bool, action: Action) -> Config {
        Config {
            check_only,
            action,
            format: FormatConfig {
                line_ending: LineEnding::Lf,
                ..FormatConfig::default()
            },
        }
    }

    // ===========================================
    // Binary Detection
    // ===========================================

    #[test]
    fn test_detect_binary_with_null_byte() {
        assert!(is_binary(b"[a]\x00k=v"));
    }

    #[test]
    fn test_non_binary_text() {
        assert!(!is_binary(b"[a]\nk=v\n"));
    }

    #[test]
    fn test_binary_null_after_8192_bytes_not_detected() {
        let mut content = vec![b'a'; 9000];
        content.push(0);
        assert!(!is_binary(&content));
    }

    // ===========================================
    // Run
    // ===========================================

    #[test]
    fn test_run_formats_and_counts() {
        let dir = TempDir::new().unwrap();
        let messy = dir.path().join("messy.ini");
        let clean = dir.path().join("clean.ini");
        fs::write(&messy, "[ a ]\nk = v\n").unwrap();
        fs::write(&clean, "[a]\nk=v\n").unwrap();

        let paths = vec![dir.path().to_string_lossy().to_string()];
        let result = run(&paths, &lf_config(false, Action::Format), &quiet_ctx()).unwrap();

        assert_eq!(result.files_formatted, 1);
        assert_eq!(fs::read_to_string(&messy).unwrap(), "[a]\nk=v\n");
        assert!(!result.failed(false));
    }

    #[test]
    fn test_run_check_does_not_write() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("app.ini");
        fs::write(&file, "[a]\nk = v\n").unwrap();

        let paths = vec![file.to_string_lossy().to_string()];
        let result = run(&paths, &lf_config(true, Action::Format), &quiet_ctx()).unwrap();

        assert_eq!(result.files_with_problems, 1);
        assert_eq!(fs::read_to_string(&file).unwrap(), "[a]\nk = v\n");
        assert!(result.failed(true));
    }

    #[test]
    fn test_run_parse_error_counted_and_file_untouched() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bad.ini");
        fs::write(&file, "[a]\nnot a setting\n").unwrap();

        let paths = vec![file.to_string_lossy().to_string()];
        let result = run(&paths, &lf_config(false, Action::Format), &quiet_ctx()).unwrap();

        assert_eq!(result.files_with_errors, 1);
        assert_eq!(fs::read_to_string(&file).unwrap(), "[a]\nnot a setting\n");
    }

    #[test]
    fn test_run_get_missing_setting() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("app.ini");
        fs::write(&file, "[db]\nhost=localhost\n[cache]\nport=1\n").unwrap();

        let paths = vec![file.to_string_lossy().to_string()];
        let action = Action::Get {
            section: "db".to_string(),
            key: "port".to_string(),
        };
        let result = run(&paths, &lf_config(false, action), &quiet_ctx()).unwrap();

        assert_eq!(result.missing_settings, 1);
        assert!(result.failed(false));
    }
}
