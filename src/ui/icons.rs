//! Status glyphs for check output.
//!
//! `StatusKind` is the single set of glyphs and styles used for every
//! status line, so tools, packages and extensions read the same way.

use super::theme::Theme;

/// Canonical status kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Present but not satisfied, or the check could not run.
    Warning,
    /// Not installed.
    Failed,
}

impl StatusKind {
    /// Emoji glyph prefixed to the line.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Failed => "❌",
        }
    }

    /// Format a status line: glyph + message styled with the theme.
    pub fn format(self, theme: &Theme, msg: &str) -> String {
        let style = match self {
            Self::Success => &theme.success,
            Self::Warning => &theme.warning,
            Self::Failed => &theme.error,
        };
        format!("{} {}", self.icon(), style.apply_to(msg))
    }

    /// Format a status line without styling.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.icon(), msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [StatusKind; 3] = [StatusKind::Success, StatusKind::Warning, StatusKind::Failed];

    #[test]
    fn icon_returns_emoji() {
        assert_eq!(StatusKind::Success.icon(), "✅");
        assert_eq!(StatusKind::Warning.icon(), "⚠️");
        assert_eq!(StatusKind::Failed.icon(), "❌");
    }

    #[test]
    fn format_plain_prefixes_icon() {
        assert_eq!(
            StatusKind::Failed.format_plain("git is not installed."),
            "❌ git is not installed."
        );
    }

    #[test]
    fn plain_theme_format_matches_format_plain() {
        let theme = Theme::plain();
        for kind in ALL {
            assert_eq!(kind.format(&theme, "numpy"), kind.format_plain("numpy"));
        }
    }

    #[test]
    fn all_variants_have_unique_icons() {
        let mut icons: Vec<&str> = ALL.iter().map(|k| k.icon()).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), ALL.len());
    }
}
