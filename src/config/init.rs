//! Template generation for `--init` command

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::file::CONFIG_FILE_NAME;

pub const INILINE_TOML_TEMPLATE: &str = r#"# iniline.toml - Configuration for the iniline INI formatter
#
# iniline rewrites INI files into a canonical form:
# - `key=value` with surrounding whitespace trimmed
# - `[section]` headers with the name trimmed
# - comments written with a `;` marker
# - one terminator after every line, including the last
#
# Settings here override .editorconfig and are overridden by CLI flags.

[format]
# Line terminator: "native" (platform default), "lf" or "crlf".
# line_ending = "native"

# Extensions picked up when walking directories.
# Files named explicitly on the command line are always processed.
# extensions = ["ini"]
"#;

/// Write the template into `dir` (or the current directory if None).
///
/// Refuses to overwrite an existing file.
pub fn generate_init_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(|| PathBuf::from(CONFIG_FILE_NAME), |d| d.join(CONFIG_FILE_NAME));

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{CONFIG_FILE_NAME} already exists"),
        ));
    }

    fs::write(&path, INILINE_TOML_TEMPLATE)?;
    Ok(path)
}

pub fn generate_init_file() -> io::Result<PathBuf> {
    generate_init_file_in(None)
}
