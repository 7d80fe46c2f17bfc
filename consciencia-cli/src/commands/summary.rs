//! Human-readable rendering of an assessment report.

use consciencia_core::AssessmentReport;
use std::io::{self, Write};
use std::path::Path;

/// Format a multiplier the way it appears in saved reports (`1.0`, `1.2`).
pub fn format_multiplier(multiplier: f64) -> String {
    if multiplier.fract() == 0.0 {
        format!("{multiplier:.1}")
    } else {
        multiplier.to_string()
    }
}

/// Write the result summary shown at the end of an assessment.
pub fn write_summary<W: Write>(
    w: &mut W,
    report: &AssessmentReport,
    saved_to: Option<&Path>,
) -> io::Result<()> {
    writeln!(w, "Segmento: {}", report.segment())?;
    writeln!(w, "Multiplicador: {}", format_multiplier(report.multiplier()))?;
    writeln!(w, "Score de Segurança: {}%", report.percentual_score())?;
    writeln!(w, "Nível: {}", report.tier())?;
    writeln!(w)?;
    writeln!(w, "Recomendações:")?;
    for recommendation in report.recommendations() {
        writeln!(w, "- {recommendation}")?;
    }

    if let Some(path) = saved_to {
        writeln!(w)?;
        writeln!(w, "Relatório salvo em:")?;
        writeln!(w, "{}", path.display())?;
    }
    Ok(())
}
