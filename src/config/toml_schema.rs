//! TOML schema definitions for iniline.toml

use serde::Deserialize;

use crate::line_ending::LineEnding;

/// Root structure for iniline.toml
#[derive(Debug, Default, Clone, Deserialize)]
pub struct IniLineToml {
    #[serde(default)]
    pub format: FormatSection,
}

/// `[format]` section in iniline.toml
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatSection {
    /// `native`, `lf` or `crlf`
    pub line_ending: Option<LineEnding>,

    /// File extensions to pick up when walking directories
    pub extensions: Option<Vec<String>>,
}
