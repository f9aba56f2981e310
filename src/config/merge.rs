//! Configuration merging logic
//!
//! Priority: CLI args > iniline.toml > .editorconfig > defaults

use crate::format::FormatConfig;
use crate::line_ending::LineEnding;

use super::editorconfig::EditorConfigSettings;
use super::toml_schema::FormatSection;

/// CLI options that can override config file settings.
#[derive(Debug, Default)]
pub struct CliFormatOptions {
    pub line_ending: Option<LineEnding>,
}

pub fn merge_format_config(
    cli: &CliFormatOptions,
    toml: Option<&FormatSection>,
    editorconfig: Option<&EditorConfigSettings>,
) -> FormatConfig {
    let defaults = FormatConfig::default();

    FormatConfig {
        line_ending: cli
            .line_ending
            .or_else(|| toml.and_then(|t| t.line_ending))
            .or_else(|| editorconfig.and_then(|e| e.end_of_line))
            .unwrap_or(defaults.line_ending),
        extensions: toml
            .and_then(|t| t.extensions.clone())
            .unwrap_or(defaults.extensions),
    }
}
