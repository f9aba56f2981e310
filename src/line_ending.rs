//! Output line terminator selection

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// Terminator appended after every rendered line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// The host platform's terminator (`\r\n` on Windows, `\n` elsewhere)
    #[default]
    Native,
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }

    /// Map an `.editorconfig` `end_of_line` value. `cr` has no counterpart.
    pub fn from_editorconfig(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "lf" => Some(LineEnding::Lf),
            "crlf" => Some(LineEnding::Crlf),
            _ => None,
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineEnding::Native => "native",
            LineEnding::Lf => "lf",
            LineEnding::Crlf => "crlf",
        };
        f.write_str(name)
    }
}
