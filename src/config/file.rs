//! Config file discovery and loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::toml_schema::IniLineToml;
use crate::error::IniError;

pub const CONFIG_FILE_NAME: &str = "iniline.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A malformed `.editorconfig`
    #[error("failed to parse editorconfig: {0}")]
    Ini(#[from] IniError),
}

/// Search upward from `start_dir` for a file with the given name.
///
/// If `stop_at_git_root` is true, stops searching when a `.git` directory is found.
pub fn find_file_upward(
    start_dir: &Path,
    filename: &str,
    stop_at_git_root: bool,
) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(candidate);
        }

        if stop_at_git_root && current.join(".git").exists() {
            return None;
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Find iniline.toml upward from `start_dir`, giving up at the git root.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    find_file_upward(start_dir, CONFIG_FILE_NAME, true)
}

pub fn load_config(path: &Path) -> Result<IniLineToml, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_ending::LineEnding;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_current_dir() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[format]\n").unwrap();

        assert_eq!(find_config_file(dir.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let parent = TempDir::new().unwrap();
        let config_path = parent.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[format]\n").unwrap();

        let child = parent.path().join("nested/deeper");
        fs::create_dir_all(&child).unwrap();

        assert_eq!(find_config_file(&child), Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_git_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let subdir = dir.path().join("subdir");
        fs::create_dir(&subdir).unwrap();

        assert_eq!(find_config_file(&subdir), None);
    }

    #[test]
    fn test_find_ignores_directory_with_config_name() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join(CONFIG_FILE_NAME)).unwrap();

        assert_eq!(find_config_file(dir.path()), None);
    }

    #[test]
    fn test_load_config_full() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &config_path,
            r#"
[format]
line_ending = "crlf"
extensions = ["ini", "cfg"]
"#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.format.line_ending, Some(LineEnding::Crlf));
        assert_eq!(
            config.format.extensions,
            Some(vec!["ini".to_string(), "cfg".to_string()])
        );
    }

    #[test]
    fn test_load_config_empty() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.format.line_ending, None);
        assert_eq!(config.format.extensions, None);
    }

    #[test]
    fn test_load_config_rejects_unknown_line_ending() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[format]\nline_ending = \"cr\"\n").unwrap();

        assert!(matches!(load_config(&config_path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "invalid toml {{{\n").unwrap();

        assert!(matches!(load_config(&config_path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config(&dir.path().join(CONFIG_FILE_NAME));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
