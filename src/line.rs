//! A single physical line of an INI document

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{IniError, ParseError};
use crate::line_ending::LineEnding;

/// Characters stripped around lines, section names, keys and values.
/// Other Unicode whitespace such as U+00A0 is content.
const INI_WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

fn trim_ini(text: &str) -> &str {
    text.trim_matches(|c: char| INI_WHITESPACE.contains(&c))
}

static SECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.+?)\]$").unwrap());

static SETTING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)=(.+?)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Comment,
    Section,
    Setting,
    Empty,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::Comment => "comment",
            LineKind::Section => "section",
            LineKind::Setting => "setting",
            LineKind::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// One classified line. Links to neighbouring lines are kept by the owning
/// [`Document`](crate::Document).
///
/// `key` is present if and only if the line is a [`LineKind::Setting`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    kind: LineKind,
    key: Option<String>,
    value: String,
}

impl Line {
    /// Build a line from its parts, rejecting a key on non-settings and a
    /// missing key on settings.
    pub fn new(
        kind: LineKind,
        value: impl Into<String>,
        key: Option<String>,
    ) -> Result<Self, IniError> {
        match (kind, &key) {
            (LineKind::Setting, None) => Err(IniError::InvalidLine {
                kind,
                reason: "a setting requires a key",
            }),
            (LineKind::Comment | LineKind::Section | LineKind::Empty, Some(_)) => {
                Err(IniError::InvalidLine {
                    kind,
                    reason: "only settings carry a key",
                })
            }
            _ => Ok(Self {
                kind,
                key,
                value: value.into(),
            }),
        }
    }

    pub fn empty() -> Self {
        Self {
            kind: LineKind::Empty,
            key: None,
            value: String::new(),
        }
    }

    /// Comment text goes after the `;` marker verbatim.
    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Comment,
            key: None,
            value: text.into(),
        }
    }

    pub fn section(name: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Section,
            key: None,
            value: name.into(),
        }
    }

    pub fn setting(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Setting,
            key: Some(key.into()),
            value: value.into(),
        }
    }

    /// Classify one physical line.
    ///
    /// Rules are tried in order and the first match wins: empty, comment
    /// (`;` or `#`), section (`[name]`), setting (`key=value`, split at the
    /// first `=`). Anything else is a [`ParseError`].
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = trim_ini(raw);

        if trimmed.is_empty() {
            return Ok(Self::empty());
        }

        if trimmed.starts_with([';', '#']) {
            return Ok(Self::comment(&trimmed[1..]));
        }

        if let Some(caps) = SECTION_PATTERN.captures(trimmed) {
            return Ok(Self::section(trim_ini(&caps[1])));
        }

        if let Some(caps) = SETTING_PATTERN.captures(trimmed) {
            return Ok(Self::setting(trim_ini(&caps[1]), trim_ini(&caps[2])));
        }

        Err(ParseError {
            content: raw.to_string(),
        })
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_section(&self) -> bool {
        self.kind == LineKind::Section
    }

    pub fn is_setting(&self) -> bool {
        self.kind == LineKind::Setting
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = value.into();
        self
    }

    /// Rename a setting. Fails on any other kind of line.
    pub fn set_key(&mut self, key: impl Into<String>) -> Result<&mut Self, IniError> {
        if self.kind != LineKind::Setting {
            return Err(IniError::InvalidLine {
                kind: self.kind,
                reason: "only settings carry a key",
            });
        }
        self.key = Some(key.into());
        Ok(self)
    }

    /// Append this line's own text plus terminator to `out`.
    pub(crate) fn render_into(&self, out: &mut String, ending: LineEnding) {
        match self.kind {
            LineKind::Empty => {}
            LineKind::Comment => {
                out.push(';');
                out.push_str(&self.value);
            }
            LineKind::Section => {
                out.push('[');
                out.push_str(&self.value);
                out.push(']');
            }
            LineKind::Setting => {
                out.push_str(self.key.as_deref().unwrap_or_default());
                out.push('=');
                out.push_str(&self.value);
            }
        }
        out.push_str(ending.as_str());
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render_into(&mut out, LineEnding::Native);
        f.write_str(&out)
    }
}
