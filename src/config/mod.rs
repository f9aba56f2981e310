//! Configuration for the iniline CLI.
//!
//! - Loading `iniline.toml`, discovered upward from the current directory
//! - Reading `end_of_line` from `.editorconfig`
//! - Merging CLI args, config files and defaults
//! - Template generation with `--init`

mod editorconfig;
mod file;
mod init;
mod merge;
mod toml_schema;

pub use editorconfig::{find_editorconfig, parse_editorconfig, EditorConfigSettings};
pub use file::{find_config_file, find_file_upward, load_config, ConfigError, CONFIG_FILE_NAME};
pub use init::{generate_init_file, generate_init_file_in, INILINE_TOML_TEMPLATE};
pub use merge::{merge_format_config, CliFormatOptions};
pub use toml_schema::{FormatSection, IniLineToml};
