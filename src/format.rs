use crate::document::{physical_lines, Document};
use crate::error::IniError;
use crate::line_ending::LineEnding;

pub const DEFAULT_EXTENSIONS: &[&str] = &["ini"];

/// Settings that drive formatting of INI files
#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    /// Terminator written after every line
    pub line_ending: LineEnding,
    /// Extensions picked up when walking directories (without the dot)
    pub extensions: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::Native,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Outcome of formatting one file's content
#[derive(Debug)]
pub struct FormatResult {
    pub original: String,
    pub content: String,
    pub document: Document,
}

impl FormatResult {
    pub fn has_changes(&self) -> bool {
        self.original != self.content
    }

    /// 1-based numbers of lines whose text differs after formatting.
    ///
    /// Terminators are ignored here; a pure line-ending change shows up in
    /// [`has_changes`](Self::has_changes) only.
    pub fn changed_lines(&self) -> Vec<usize> {
        physical_lines(&self.original)
            .zip(physical_lines(&self.content))
            .enumerate()
            .filter(|(_, (before, after))| before != after)
            .map(|(idx, _)| idx + 1)
            .collect()
    }
}

/// Parse `content` and render it back in canonical form.
///
/// Fails with [`IniError::Unstable`] when the rendered text would not parse
/// again (e.g. `[ ]` renders as `[]`).
pub fn format_content(content: &str, config: &FormatConfig) -> Result<FormatResult, IniError> {
    let document = Document::parse(content)?;
    let formatted = document.render_with(config.line_ending);

    if let Err(err) = Document::parse(&formatted) {
        return Err(match err {
            IniError::Parse { line, source } => IniError::Unstable { line, source },
            other => other,
        });
    }

    Ok(FormatResult {
        original: content.to_string(),
        content: formatted,
        document,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lf() -> FormatConfig {
        FormatConfig {
            line_ending: LineEnding::Lf,
            ..FormatConfig::default()
        }
    }

    #[test]
    fn test_canonical_content_unchanged() {
        let input = "; comment\n[db]\nhost=localhost\n\n[cache]\nsize=64\n";
        let result = format_content(input, &lf()).unwrap();
        assert!(!result.has_changes());
        assert!(result.changed_lines().is_empty());
    }

    #[test]
    fn test_spacing_is_normalized() {
        let input = "[ db ]\nhost = localhost\nport=5432\n";
        let result = format_content(input, &lf()).unwrap();
        assert_eq!(result.content, "[db]\nhost=localhost\nport=5432\n");
        assert_eq!(result.changed_lines(), vec![1, 2]);
    }

    #[test]
    fn test_hash_comments_become_semicolons() {
        let result = format_content("# note\n", &lf()).unwrap();
        assert_eq!(result.content, ";note\n");
        assert!(result.has_changes());
    }

    #[test]
    fn test_missing_final_newline_added() {
        let result = format_content("[a]\nk=v", &lf()).unwrap();
        assert_eq!(result.content, "[a]\nk=v\n");
        assert!(result.has_changes());
        assert!(result.changed_lines().is_empty());
    }

    #[test]
    fn test_crlf_conversion() {
        let result = format_content("[a]\r\nk=v\r\n", &lf()).unwrap();
        assert_eq!(result.content, "[a]\nk=v\n");
        assert!(result.has_changes());

        let crlf = FormatConfig {
            line_ending: LineEnding::Crlf,
            ..FormatConfig::default()
        };
        let result = format_content("[a]\nk=v\n", &crlf).unwrap();
        assert_eq!(result.content, "[a]\r\nk=v\r\n");
    }

    #[test]
    fn test_old_mac_terminators_report_each_line() {
        let result = format_content("[ a ]\rk=v\rx = y\r", &lf()).unwrap();
        assert_eq!(result.content, "[a]\nk=v\nx=y\n");
        assert_eq!(result.changed_lines(), vec![1, 3]);
    }

    #[test]
    fn test_blank_section_name_is_rejected() {
        let result = format_content("[ ]\nk=v\n", &lf());
        match result {
            Err(IniError::Unstable { line, source }) => {
                assert_eq!(line, 1);
                assert_eq!(source.content, "[]");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        let result = format_content("[a]\ngarbage\n", &lf());
        assert!(matches!(result, Err(IniError::Parse { line: 2, .. })));
    }

    #[test]
    fn test_document_is_kept_for_queries() {
        let result = format_content("[a]\nk = v\n", &lf()).unwrap();
        assert_eq!(result.document.value("a", "k"), Some("v"));
    }

    #[test]
    fn test_default_extensions() {
        assert_eq!(FormatConfig::default().extensions, vec!["ini".to_string()]);
    }
}
