//! Shared display helpers for check results.
//!
//! Each report maps to exactly one status line, except an unavailable
//! editor CLI, which replaces the whole extension list with one warning.

use crate::checks::{
    ExtensionReport, PackageReport, PackageStatus, Summary, ToolReport, ToolStatus,
};
use crate::config::{ExtensionConfig, PackageConfig};
use crate::ui::UserInterface;

/// Header of the tool section.
pub const TOOLS_HEADER: &str = "🔍 Checking system tools:";

/// Header of the package section.
pub fn packages_header(config: &PackageConfig) -> String {
    format!("📦 Checking {} packages:", config.language)
}

/// Header of the extension section.
pub fn extensions_header(config: &ExtensionConfig) -> String {
    format!(
        "🧩 Checking {} extensions (requires `{}` CLI):",
        config.display_name, config.cli
    )
}

/// Print a single tool's status line.
pub fn show_tool(ui: &mut dyn UserInterface, report: &ToolReport) {
    match &report.status {
        ToolStatus::NotInstalled => ui.error(&format!("{} is not installed.", report.name)),
        ToolStatus::Satisfied { .. } => ui.success(&format!(
            "{} is installed and version is OK.",
            report.name
        )),
        ToolStatus::BelowMinimum { .. } => ui.warning(&format!(
            "{} is installed but version is below {}",
            report.name, report.min_version
        )),
    }
}

/// Print a single package's status line.
pub fn show_package(ui: &mut dyn UserInterface, report: &PackageReport) {
    match report.status {
        PackageStatus::Installed => ui.success(&format!("{} is installed.", report.name)),
        PackageStatus::NotInstalled => ui.error(&format!("{} is NOT installed.", report.name)),
    }
}

/// Print the extension section body.
pub fn show_extensions(
    ui: &mut dyn UserInterface,
    report: &ExtensionReport,
    config: &ExtensionConfig,
) {
    match report {
        ExtensionReport::CliUnavailable => ui.warning(&format!(
            "{name} CLI not found. Run `Shell Command: Install '{cli}' command in PATH` from {name}.",
            name = config.display_name,
            cli = config.cli
        )),
        ExtensionReport::Listed(results) => {
            for result in results {
                if result.installed {
                    ui.success(&format!("{} is installed.", result.id));
                } else {
                    ui.error(&format!("{} is NOT installed.", result.id));
                }
            }
        }
    }
}

/// One-line run summary, e.g. `Summary: 5 ok, 1 warning, 3 missing`.
pub fn format_summary(summary: &Summary) -> String {
    let warning_label = if summary.warnings == 1 {
        "warning"
    } else {
        "warnings"
    };
    format!(
        "Summary: {} ok, {} {}, {} missing",
        summary.ok, summary.warnings, warning_label, summary.missing
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{ExtensionResult, Version};
    use crate::ui::MockUI;

    fn tool(status: ToolStatus) -> ToolReport {
        ToolReport {
            name: "git".to_string(),
            min_version: "2.0".to_string(),
            status,
        }
    }

    #[test]
    fn tool_lines() {
        let mut ui = MockUI::new();
        show_tool(&mut ui, &tool(ToolStatus::NotInstalled));
        show_tool(
            &mut ui,
            &tool(ToolStatus::Satisfied {
                found: Version::Float(2.39),
            }),
        );
        show_tool(&mut ui, &tool(ToolStatus::BelowMinimum { found: None }));

        assert_eq!(
            ui.lines(),
            [
                "❌ git is not installed.",
                "✅ git is installed and version is OK.",
                "⚠️ git is installed but version is below 2.0",
            ]
        );
    }

    #[test]
    fn package_lines() {
        let mut ui = MockUI::new();
        show_package(
            &mut ui,
            &PackageReport {
                name: "numpy".to_string(),
                status: PackageStatus::Installed,
            },
        );
        show_package(
            &mut ui,
            &PackageReport {
                name: "streamlit".to_string(),
                status: PackageStatus::NotInstalled,
            },
        );

        assert_eq!(
            ui.lines(),
            ["✅ numpy is installed.", "❌ streamlit is NOT installed."]
        );
    }

    #[test]
    fn unavailable_cli_is_one_warning() {
        let mut ui = MockUI::new();
        show_extensions(
            &mut ui,
            &ExtensionReport::CliUnavailable,
            &ExtensionConfig::default(),
        );

        assert_eq!(
            ui.lines(),
            ["⚠️ VS Code CLI not found. Run `Shell Command: Install 'code' command in PATH` from VS Code."]
        );
        assert!(ui.successes().is_empty());
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn listed_extension_lines() {
        let mut ui = MockUI::new();
        let report = ExtensionReport::Listed(vec![
            ExtensionResult {
                id: "ms-python.python".to_string(),
                installed: true,
            },
            ExtensionResult {
                id: "charliermarsh.ruff".to_string(),
                installed: false,
            },
        ]);
        show_extensions(&mut ui, &report, &ExtensionConfig::default());

        assert_eq!(
            ui.lines(),
            [
                "✅ ms-python.python is installed.",
                "❌ charliermarsh.ruff is NOT installed.",
            ]
        );
    }

    #[test]
    fn headers_use_config_names() {
        assert_eq!(
            packages_header(&PackageConfig::default()),
            "📦 Checking Python packages:"
        );
        assert_eq!(
            extensions_header(&ExtensionConfig::default()),
            "🧩 Checking VS Code extensions (requires `code` CLI):"
        );
    }

    #[test]
    fn summary_pluralizes_warnings() {
        let one = Summary {
            ok: 5,
            warnings: 1,
            missing: 3,
        };
        assert_eq!(format_summary(&one), "Summary: 5 ok, 1 warning, 3 missing");
        assert_eq!(
            format_summary(&Summary::default()),
            "Summary: 0 ok, 0 warnings, 0 missing"
        );
    }
}
