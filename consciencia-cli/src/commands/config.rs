use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::{ConfigLoader, ConscienciaConfig};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration (merged)
    Show {
        /// Include the effective scoring tables, built-in ones if not overridden
        #[arg(long)]
        tables: bool,
    },
    /// Show configuration files and the questionnaire/report locations they resolve to
    Path,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let mut stdout = io::stdout().lock();
    match args.command {
        ConfigCommands::Show { tables } => write_config(&mut stdout, &config, tables),
        ConfigCommands::Path => write_paths(
            &mut stdout,
            &config,
            &ConfigLoader::user_config_path(),
            &ConfigLoader::project_config_path(),
        ),
    }
}

fn write_config(w: &mut impl Write, config: &ConscienciaConfig, tables: bool) -> Result<()> {
    let mut shown = config.clone();
    if tables {
        shown.scoring = Some(ConfigLoader::scorer(config)?.tables().clone());
    }
    writeln!(w, "{}", toml::to_string_pretty(&shown)?)?;
    Ok(())
}

fn write_paths(
    w: &mut impl Write,
    config: &ConscienciaConfig,
    user: &Path,
    project: &Path,
) -> Result<()> {
    let marker = |path: &Path| if path.exists() { "" } else { " (not found)" };

    writeln!(w, "User config:    {}{}", user.display(), marker(user))?;
    writeln!(w, "Project config: {}{}", project.display(), marker(project))?;
    writeln!(w)?;
    let questions = &config.questionnaire.questions;
    let segments = &config.questionnaire.segments;
    writeln!(w, "Questions:      {}{}", questions.display(), marker(questions))?;
    writeln!(w, "Segments:       {}{}", segments.display(), marker(segments))?;
    writeln!(w, "Reports:        {}", config.reports.dir.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn show_omits_tables_unless_asked() {
        let config = ConscienciaConfig::default();

        let plain = render(|w| write_config(w, &config, false));
        assert!(plain.contains("[questionnaire]"));
        assert!(!plain.contains("[scoring]"));

        let with_tables = render(|w| write_config(w, &config, true));
        assert!(with_tables.contains("default_multiplier = 1.0"));
        assert!(with_tables.contains("Implementar do zero"));
    }

    #[test]
    fn paths_mark_missing_files() {
        let temp = TempDir::new().unwrap();
        let user = temp.path().join("config.toml");
        std::fs::write(&user, "").unwrap();
        let project = temp.path().join("missing.toml");

        let mut config = ConscienciaConfig::default();
        config.questionnaire.questions = temp.path().join("perguntas.json");
        config.reports.dir = temp.path().join("relatorios");

        let out = render(|w| write_paths(w, &config, &user, &project));
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("User config:"));
        assert!(!lines[0].contains("(not found)"));
        assert!(lines[1].ends_with("missing.toml (not found)"));
        assert!(out.contains("perguntas.json (not found)"));
        assert!(out.contains("relatorios"));
    }
}
