//! Line-preserving INI document
//!
//! Lines live in an arena and are chained through `before`/`after` indices,
//! so structural edits never fight the borrow checker and every edit touches
//! only the neighbouring links.

use std::fmt;
use std::fs;
use std::io;
use std::ops::Index;
use std::path::Path;
use std::str::FromStr;

use crate::error::IniError;
use crate::line::{Line, LineKind};
use crate::line_ending::LineEnding;

/// Handle to a line inside the [`Document`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(usize);

#[derive(Debug, Clone)]
struct Node {
    line: Line,
    before: Option<LineId>,
    after: Option<LineId>,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Every line ever created, in creation order (not chain order)
    nodes: Vec<Node>,
    head: Option<LineId>,
    tail: Option<LineId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from INI text.
    ///
    /// Physical lines are split on `\r\n`, `\r` or `\n`. A single malformed
    /// line aborts the whole parse.
    pub fn parse(content: &str) -> Result<Self, IniError> {
        let mut document = Self::new();
        let mut previous: Option<LineId> = None;

        for (idx, raw) in physical_lines(content).enumerate() {
            let line = Line::parse(raw).map_err(|source| IniError::Parse {
                line: idx + 1,
                source,
            })?;
            let id = match previous {
                None => document.push(line),
                Some(prev) => document.insert_after(prev, line),
            };
            previous = Some(id);
        }

        Ok(document)
    }

    pub fn load_string(text: &str) -> Result<Self, IniError> {
        Self::parse(text)
    }

    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, IniError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| IniError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn head(&self) -> Option<LineId> {
        self.head
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// # Panics
    ///
    /// If `id` was minted by a different document.
    pub fn line(&self, id: LineId) -> &Line {
        &self.nodes[id.0].line
    }

    pub fn line_mut(&mut self, id: LineId) -> &mut Line {
        &mut self.nodes[id.0].line
    }

    pub fn before(&self, id: LineId) -> Option<LineId> {
        self.nodes[id.0].before
    }

    pub fn after(&self, id: LineId) -> Option<LineId> {
        self.nodes[id.0].after
    }

    /// Lines in chain order, from head to end.
    pub fn iter(&self) -> Lines<'_> {
        Lines {
            document: self,
            next: self.head,
        }
    }

    fn alloc(&mut self, line: Line) -> LineId {
        let id = LineId(self.nodes.len());
        self.nodes.push(Node {
            line,
            before: None,
            after: None,
        });
        id
    }

    /// Append a line at the end of the chain.
    pub fn push(&mut self, line: Line) -> LineId {
        match self.tail {
            Some(tail) => self.insert_after(tail, line),
            None => {
                let id = self.alloc(line);
                self.head = Some(id);
                self.tail = Some(id);
                id
            }
        }
    }

    /// Splice `line` directly after `anchor` and return its id.
    pub fn insert_after(&mut self, anchor: LineId, line: Line) -> LineId {
        let id = self.alloc(line);
        let old_after = self.nodes[anchor.0].after;

        match old_after {
            Some(next) => self.nodes[next.0].before = Some(id),
            None => self.tail = Some(id),
        }
        self.nodes[anchor.0].after = Some(id);
        self.nodes[id.0].before = Some(anchor);
        self.nodes[id.0].after = old_after;

        id
    }

    /// Splice `line` directly before `anchor` and return its id.
    pub fn insert_before(&mut self, anchor: LineId, line: Line) -> LineId {
        let id = self.alloc(line);
        let old_before = self.nodes[anchor.0].before;

        match old_before {
            Some(prev) => self.nodes[prev.0].after = Some(id),
            None => self.head = Some(id),
        }
        self.nodes[anchor.0].before = Some(id);
        self.nodes[id.0].after = Some(anchor);
        self.nodes[id.0].before = old_before;

        id
    }

    pub fn find_section(&self, name: &str) -> Option<LineId> {
        self.iter()
            .find(|(_, line)| line.kind() == LineKind::Section && line.value() == name)
            .map(|(id, _)| id)
    }

    /// Find `name` among the settings that follow `section`, up to the next
    /// section. Returns `None` when `section` is not a section line.
    pub fn find_setting_in(&self, section: LineId, name: &str) -> Option<LineId> {
        if !self.line(section).is_section() {
            return None;
        }

        let mut cursor = self.after(section);
        while let Some(id) = cursor {
            let line = self.line(id);
            match line.kind() {
                LineKind::Section => return None,
                LineKind::Comment | LineKind::Empty => {}
                LineKind::Setting => {
                    if line.key() == Some(name) {
                        return Some(id);
                    }
                }
            }
            cursor = self.after(id);
        }

        None
    }

    pub fn find_setting(&self, section: &str, name: &str) -> Option<LineId> {
        let section = self.find_section(section)?;
        self.find_setting_in(section, name)
    }

    /// Value of `name` in `section`, if both exist.
    pub fn value(&self, section: &str, name: &str) -> Option<&str> {
        self.find_setting(section, name)
            .map(|id| self.line(id).value())
    }

    /// Render `id` and every line after it.
    pub fn render_from(&self, id: LineId, ending: LineEnding) -> String {
        let mut out = String::new();
        let mut cursor = Some(id);
        while let Some(id) = cursor {
            self.line(id).render_into(&mut out, ending);
            cursor = self.after(id);
        }
        out
    }

    pub fn render_with(&self, ending: LineEnding) -> String {
        self.head
            .map(|head| self.render_from(head, ending))
            .unwrap_or_default()
    }

    /// Render with the host platform's line terminator.
    pub fn render(&self) -> String {
        self.render_with(LineEnding::Native)
    }

    pub fn write_to<W: io::Write>(&self, mut writer: W, ending: LineEnding) -> io::Result<()> {
        writer.write_all(self.render_with(ending).as_bytes())?;
        writer.flush()
    }

    pub fn write_with(&self, path: impl AsRef<Path>, ending: LineEnding) -> Result<(), IniError> {
        let path = path.as_ref();
        fs::write(path, self.render_with(ending)).map_err(|source| IniError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), IniError> {
        self.write_with(path, LineEnding::Native)
    }
}

impl Index<LineId> for Document {
    type Output = Line;

    fn index(&self, id: LineId) -> &Line {
        self.line(id)
    }
}

impl FromStr for Document {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Iterator over a document's lines in chain order.
pub struct Lines<'a> {
    document: &'a Document,
    next: Option<LineId>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = (LineId, &'a Line);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.document.after(id);
        Some((id, self.document.line(id)))
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (LineId, &'a Line);
    type IntoIter = Lines<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Split on any of `\r\n`, `\r`, `\n`. A trailing terminator does not yield
/// an extra empty line.
pub(crate) fn physical_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(pos) => {
                let line = &rest[..pos];
                let width = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + width..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
