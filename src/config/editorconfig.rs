//! `.editorconfig` as a fallback source for the line ending
//!
//! `.editorconfig` is itself INI, so it is read with [`Document`].

use std::path::{Path, PathBuf};

use super::file::{find_file_upward, ConfigError};
use crate::document::Document;
use crate::line_ending::LineEnding;

/// Settings iniline understands from the `[*]` section
#[derive(Debug, Default, PartialEq)]
pub struct EditorConfigSettings {
    pub end_of_line: Option<LineEnding>,
}

/// Find .editorconfig by searching upward from the given directory.
pub fn find_editorconfig(start_dir: &Path) -> Option<PathBuf> {
    find_file_upward(start_dir, ".editorconfig", false)
}

/// Read the global `[*]` section of an `.editorconfig`.
///
/// Glob-specific sections such as `[*.md]` are ignored. An `end_of_line`
/// value other than `lf` or `crlf` is treated as unset.
pub fn parse_editorconfig(path: &Path) -> Result<EditorConfigSettings, ConfigError> {
    let document = Document::load_file(path)?;

    Ok(EditorConfigSettings {
        end_of_line: document
            .value("*", "end_of_line")
            .and_then(LineEnding::from_editorconfig),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_editorconfig_in_parent() {
        let parent = TempDir::new().unwrap();
        let config_path = parent.path().join(".editorconfig");
        fs::write(&config_path, "root = true\n").unwrap();

        let child = parent.path().join("subdir");
        fs::create_dir(&child).unwrap();

        assert_eq!(find_editorconfig(&child), Some(config_path));
    }

    #[test]
    fn test_parse_global_end_of_line() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".editorconfig");
        fs::write(
            &config_path,
            r#"
root = true

[*]
trim_trailing_whitespace = true
end_of_line = CRLF

[*.md]
end_of_line = lf
"#,
        )
        .unwrap();

        let settings = parse_editorconfig(&config_path).unwrap();
        assert_eq!(settings.end_of_line, Some(LineEnding::Crlf));
    }

    #[test]
    fn test_parse_without_global_section() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".editorconfig");
        fs::write(&config_path, "root = true\n\n[*.js]\nend_of_line = crlf\n").unwrap();

        let settings = parse_editorconfig(&config_path).unwrap();
        assert_eq!(settings, EditorConfigSettings::default());
    }

    #[test]
    fn test_parse_unsupported_end_of_line() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".editorconfig");
        fs::write(&config_path, "[*]\nend_of_line = cr\n").unwrap();

        let settings = parse_editorconfig(&config_path).unwrap();
        assert_eq!(settings.end_of_line, None);
    }

    #[test]
    fn test_parse_malformed_editorconfig() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".editorconfig");
        fs::write(&config_path, "[*]\nthis is not ini\n").unwrap();

        assert!(matches!(
            parse_editorconfig(&config_path),
            Err(ConfigError::Ini(_))
        ));
    }
}
