//! Browse saved assessment reports.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use consciencia_core::{JsonFileReportStore, ReportStore, StoredReport, Tier};
use std::io;
use std::path::PathBuf;

use super::summary::write_summary;
use crate::config::ConfigLoader;

#[derive(Args, Debug)]
pub struct ReportsArgs {
    /// Directory for saved reports (defaults to the configured one)
    #[arg(long, global = true)]
    pub reports_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: ReportsCommands,
}

#[derive(Subcommand, Debug)]
pub enum ReportsCommands {
    /// List saved reports, oldest first
    List,
    /// Show the summary of one saved report
    Show {
        /// Report file; bare names are looked up in the reports directory
        file: PathBuf,
    },
}

pub fn run(args: ReportsArgs) -> Result<()> {
    let dir = match args.reports_dir {
        Some(dir) => dir,
        None => ConfigLoader::load()?.reports.dir,
    };
    let store = JsonFileReportStore::new(dir);

    match args.command {
        ReportsCommands::List => list_reports(&store),
        ReportsCommands::Show { file } => show_report(&store, file),
    }
}

fn list_reports(store: &JsonFileReportStore) -> Result<()> {
    let reports = store.list()?;

    if reports.is_empty() {
        println!("No reports found in {}", store.dir().display());
        return Ok(());
    }

    println!("{}", build_table(&reports));
    Ok(())
}

fn build_table(reports: &[StoredReport]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Arquivo").fg(Color::Cyan),
        Cell::new("Data").fg(Color::Cyan),
        Cell::new("Segmento").fg(Color::Cyan),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Nível").fg(Color::Cyan),
    ]);

    for stored in reports {
        let report = &stored.report;
        let file = stored
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        table.add_row(vec![
            Cell::new(file),
            Cell::new(report.generated_at().format("%Y-%m-%d %H:%M:%S")),
            Cell::new(report.segment()),
            Cell::new(format!("{}%", report.percentual_score())),
            Cell::new(report.tier()).fg(tier_color(report.tier())),
        ]);
    }

    table
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Inexistente => Color::Red,
        Tier::Inicial => Color::DarkYellow,
        Tier::Parcial => Color::Yellow,
        Tier::Consistente => Color::Green,
        Tier::Otimizado => Color::DarkGreen,
    }
}

/// Resolve a bare file name against the reports directory.
fn resolve_path(store: &JsonFileReportStore, file: PathBuf) -> PathBuf {
    if file.exists() || file.components().count() > 1 {
        file
    } else {
        store.dir().join(file)
    }
}

fn show_report(store: &JsonFileReportStore, file: PathBuf) -> Result<()> {
    let path = resolve_path(store, file);
    let report = store
        .load(&path)
        .with_context(|| format!("Could not read report {}", path.display()))?;

    write_summary(&mut io::stdout(), &report, Some(&path))?;
    Ok(())
}
