//! Styled terminal output.

use console::Term;
use std::io::Write;

use super::{StatusKind, Theme, UserInterface};

/// Terminal UI writing status lines to stdout.
pub struct TerminalUI {
    term: Term,
    theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI; `colors` selects the styled or plain theme.
    pub fn new(colors: bool) -> Self {
        let theme = if colors { Theme::new() } else { Theme::plain() };

        Self {
            term: Term::stdout(),
            theme,
        }
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        writeln!(self.term, "{}", kind.format(&self.theme, msg)).ok();
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        self.status(StatusKind::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.status(StatusKind::Warning, msg);
    }

    fn error(&mut self, msg: &str) {
        self.status(StatusKind::Failed, msg);
    }

    fn show_section(&mut self, title: &str) {
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
    }
}
