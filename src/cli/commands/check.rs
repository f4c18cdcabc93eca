//! The check run.
//!
//! Runs the tool, package and extension checks in that order, printing each
//! result as soon as it is known. Findings never change the exit code.

use std::path::PathBuf;

use crate::checks::{Checker, Summary};
use crate::config::DevcheckConfig;
use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The check command implementation.
pub struct CheckCommand<'a> {
    config: DevcheckConfig,
    path_entries: Vec<PathBuf>,
    runner: &'a dyn CommandRunner,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(
        config: DevcheckConfig,
        path_entries: Vec<PathBuf>,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            config,
            path_entries,
            runner,
        }
    }

    /// Get the active configuration.
    pub fn config(&self) -> &DevcheckConfig {
        &self.config
    }

    /// Run every check and print the results.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Summary {
        let checker = Checker::new(
            self.runner,
            self.path_entries.clone(),
            self.config.version_scheme,
        );
        let mut summary = Summary::default();

        ui.show_section(display::TOOLS_HEADER);
        for tool in &self.config.tools {
            let report = checker.check_tool(tool);
            display::show_tool(ui, &report);
            summary.record_tool(&report);
        }

        let packages = &self.config.packages;
        ui.message("");
        ui.show_section(&display::packages_header(packages));
        for name in &packages.names {
            let report = checker.check_package(&packages.interpreter, name);
            display::show_package(ui, &report);
            summary.record_package(&report);
        }

        let extensions = &self.config.extensions;
        ui.message("");
        ui.show_section(&display::extensions_header(extensions));
        let report = checker.check_extensions(extensions);
        display::show_extensions(ui, &report, extensions);
        summary.record_extensions(&report);

        ui.message("");
        ui.message(&display::format_summary(&summary));

        tracing::debug!(
            "Checks finished: {} ok, {} warnings, {} missing",
            summary.ok,
            summary.warnings,
            summary.missing
        );
        summary
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(ui);
        Ok(CommandResult::success())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::ToolSpec;
    use crate::shell::SystemRunner;
    use crate::ui::MockUI;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_script(dir: &Path, name: &str, body: &str) {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn config() -> DevcheckConfig {
        let mut config = DevcheckConfig::default();
        config.tools = vec![
            ToolSpec::new("git", "git --version", "2.0"),
            ToolSpec::new("python3", "python3 --version", "3.11"),
            ToolSpec::new("uv", "uv --version", "0.7"),
        ];
        config.packages.names = vec!["numpy".to_string(), "streamlit".to_string()];
        config.extensions.ids = vec![
            "ms-python.python".to_string(),
            "charliermarsh.ruff".to_string(),
        ];
        config
    }

    #[test]
    fn full_run_prints_every_section() {
        let temp = TempDir::new().unwrap();
        write_script(temp.path(), "git", "echo 'git version 2.39.1'");
        write_script(
            temp.path(),
            "python3",
            r#"if [ "$1" = "--version" ]; then echo 'Python 1.5.0'; exit 0; fi
[ "$2" = "import numpy" ]"#,
        );
        write_script(temp.path(), "code", "printf 'ms-python.python\\n'");

        let runner = SystemRunner;
        let cmd = CheckCommand::new(config(), vec![temp.path().to_path_buf()], &runner);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(
            ui.lines(),
            [
                "🔍 Checking system tools:",
                "✅ git is installed and version is OK.",
                "⚠️ python3 is installed but version is below 3.11",
                "❌ uv is not installed.",
                "",
                "📦 Checking Python packages:",
                "✅ numpy is installed.",
                "❌ streamlit is NOT installed.",
                "",
                "🧩 Checking VS Code extensions (requires `code` CLI):",
                "✅ ms-python.python is installed.",
                "❌ charliermarsh.ruff is NOT installed.",
                "",
                "Summary: 3 ok, 1 warning, 3 missing",
            ]
        );
    }

    #[test]
    fn missing_editor_cli_prints_single_warning() {
        let temp = TempDir::new().unwrap();
        let runner = SystemRunner;
        let cmd = CheckCommand::new(config(), vec![temp.path().to_path_buf()], &runner);
        let mut ui = MockUI::new();

        let summary = cmd.run(&mut ui);
        let extension_lines: Vec<_> = ui
            .lines()
            .iter()
            .skip_while(|l| !l.starts_with("🧩"))
            .skip(1)
            .take_while(|l| !l.is_empty())
            .cloned()
            .collect();
        assert_eq!(
            extension_lines,
            ["⚠️ VS Code CLI not found. Run `Shell Command: Install 'code' command in PATH` from VS Code."]
        );
        assert_eq!(summary.ok, 0);
        assert_eq!(summary.warnings, 1);
        assert_eq!(summary.missing, 5);
    }
}
