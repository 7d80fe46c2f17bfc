//! Run a security maturity assessment.
//!
//! Interactive by default: pick a segment, answer each question in turn
//! (with a way back to the previous one), then the report is scored,
//! saved, and summarized. `--segment` with `--answers` runs the same flow
//! without prompts.

use anyhow::{Context, Result, bail};
use clap::Args;
use consciencia_core::{JsonFileReportStore, Question, Questionnaire, ReportStore};
use dialoguer::{Select, theme::ColorfulTheme};
use std::io;
use std::path::PathBuf;
use tracing::warn;

use super::prompts::{print_header, print_success};
use super::summary::write_summary;
use crate::config::{ConfigLoader, ConscienciaConfig};

const YES: &str = "Sim";
const NO: &str = "Não";
const BACK: &str = "← Anterior";

#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Question definitions file (JSON)
    #[arg(long)]
    pub questions: Option<PathBuf>,

    /// Segment list file (JSON)
    #[arg(long)]
    pub segments: Option<PathBuf>,

    /// Directory for saved reports
    #[arg(long)]
    pub reports_dir: Option<PathBuf>,

    /// Business segment; with --answers, skips all prompts
    #[arg(long, requires = "answers")]
    pub segment: Option<String>,

    /// Comma-separated answers in question order (s/n, sim/não, yes/no, 1/0)
    #[arg(long, requires = "segment", value_delimiter = ',', value_parser = parse_answer)]
    pub answers: Option<Vec<bool>>,
}

/// Parse one scripted answer.
pub fn parse_answer(value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "s" | "sim" | "y" | "yes" | "true" | "1" => Ok(true),
        "n" | "não" | "nao" | "no" | "false" | "0" => Ok(false),
        other => Err(format!("invalid answer '{other}', expected s/n")),
    }
}

pub fn run(args: AssessArgs) -> Result<()> {
    let config: ConscienciaConfig = ConfigLoader::load()?;
    let scorer = ConfigLoader::scorer(&config)?;

    let questions_path = args.questions.unwrap_or(config.questionnaire.questions);
    let segments_path = args.segments.unwrap_or(config.questionnaire.segments);
    let questionnaire = Questionnaire::load(&questions_path, &segments_path)
        .context("Could not load the questionnaire")?;

    let (segment, answers) = match (args.segment, args.answers) {
        (Some(segment), Some(answers)) => {
            if !questionnaire.segments().contains(&segment) {
                warn!(segment = %segment, "Segment is not in the configured list");
            }
            (segment, answers)
        }
        _ => run_wizard(&questionnaire)?,
    };

    let report = scorer
        .generate_report(&answers, questionnaire.questions(), &segment)
        .context("Could not score the assessment")?;

    let store = JsonFileReportStore::new(args.reports_dir.unwrap_or(config.reports.dir));
    let path = store.save(&report).context("Could not save the report")?;

    print_success("Avaliação concluída")?;
    println!();
    write_summary(&mut io::stdout(), &report, Some(&path))?;
    Ok(())
}

/// One move through the question steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Answer(bool),
    Back,
}

/// Options offered on question `index`. The first question has no way back.
pub fn step_options(index: usize) -> Vec<&'static str> {
    if index == 0 {
        vec![YES, NO]
    } else {
        vec![YES, NO, BACK]
    }
}

/// Translate a selected option into a step.
pub fn step_for(selection: usize) -> Step {
    match selection {
        0 => Step::Answer(true),
        1 => Step::Answer(false),
        _ => Step::Back,
    }
}

fn run_wizard(questionnaire: &Questionnaire) -> Result<(String, Vec<bool>)> {
    let questions = questionnaire.questions();
    if questions.is_empty() {
        bail!("The questionnaire has no questions");
    }

    print_header("CONSCIÊNCIA SEGURA")?;
    let theme = ColorfulTheme::default();

    let segment_index = Select::with_theme(&theme)
        .with_prompt("Selecione o Segmento da Empresa")
        .items(questionnaire.segments())
        .default(0)
        .interact()?;
    let segment = questionnaire.segments()[segment_index].clone();

    // Unanswered questions count as "Não", same as the default selection
    let mut answers = vec![false; questions.len()];
    let mut index = 0;
    while index < questions.len() {
        match ask(&theme, index, questions.len(), &questions[index], answers[index])? {
            Step::Answer(value) => {
                answers[index] = value;
                index += 1;
            }
            Step::Back => index -= 1,
        }
    }

    Ok((segment, answers))
}

fn ask(
    theme: &ColorfulTheme,
    index: usize,
    total: usize,
    question: &Question,
    current: bool,
) -> Result<Step> {
    println!();
    println!("Pergunta {} de {}", index + 1, total);
    let selection = Select::with_theme(theme)
        .with_prompt(question.text())
        .items(step_options(index).as_slice())
        .default(if current { 0 } else { 1 })
        .interact()?;
    Ok(step_for(selection))
}
