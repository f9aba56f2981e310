use std::io::{self, IsTerminal};

/// Status categories used in CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Error,
    Warning,
    Success,
    Info,
}

impl Style {
    fn ansi(self) -> &'static str {
        match self {
            Style::Error => "\x1b[31m",   // Red
            Style::Warning => "\x1b[33m", // Yellow
            Style::Success => "\x1b[32m", // Green
            Style::Info => "\x1b[36m",    // Cyan
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, style: Style, text: &str) -> String {
        if self.enabled {
            format!("{}{text}\x1b[0m", style.ansi())
        } else {
            text.to_string()
        }
    }
}

/// Priority: --no-color > --color > NO_COLOR env > TTY detection
pub fn should_use_colors(force_color: bool, no_color: bool) -> bool {
    if no_color {
        return false;
    }
    if force_color {
        return true;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    io::stdout().is_terminal()
}
