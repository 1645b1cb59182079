//! Search command - random search for a balanced lineup
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_configuration(), run_search(), report_results()
//! - Level 3: stream_search(), print_progress(), print_json_results()
//! - Level 4: formatting utilities

use std::io::{self, BufWriter, Write};
use std::ops::ControlFlow;

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lineup_core::{americano_roster, americano_template, render_report, Assignment, Roster, Template};
use lineup_search::{search_with_control, Improvement, SearchConfig, SearchResult, TrialReport, DEFAULT_TRIALS};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Number of random assignments to try
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    pub trials: u64,

    /// Print every Nth trial line (0 = no per-trial output)
    #[arg(long, default_value_t = 1)]
    pub progress_every: u64,

    /// Also print the best result as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run search command
///
/// This function reads like a table of contents:
/// 1. Build and validate roster and template
/// 2. Run the search, printing progress
/// 3. Print the best candidate and its lineup
pub fn run(args: SearchArgs, seed: Option<u64>) -> Result<()> {
    let (roster, template) = load_configuration()?;

    tracing::info!(
        "Starting search: players={}, rounds={}, matches={}, trials={}, seed={:?}",
        roster.len(),
        template.rounds().len(),
        template.match_count(),
        args.trials,
        seed
    );

    let mut rng = create_rng(seed);
    let result = run_search(&roster, &template, &args, &mut rng)?;

    tracing::info!(
        "Search complete: best max={:.3} at trial {} ({} improvements)",
        result.best.score.worst_case,
        result.best.trial,
        result.improvements.len()
    );

    report_results(&result, &template, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Build the compiled-in roster and template; any error here is fatal
fn load_configuration() -> Result<(Roster, Template)> {
    let roster = americano_roster().context("Invalid compiled-in roster")?;
    let template = americano_template().context("Invalid compiled-in lineup template")?;
    Ok((roster, template))
}

/// Run the search loop, streaming progress lines to stdout
fn run_search<'a>(
    roster: &'a Roster,
    template: &Template,
    args: &SearchArgs,
    rng: &mut ChaCha8Rng,
) -> Result<SearchResult<'a>> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = stream_search(&mut out, roster, template, args, rng)?;
    out.flush().context("Failed to write progress output")?;

    Ok(result)
}

/// Print summary line, lineup report and optional JSON
fn report_results(result: &SearchResult, template: &Template, args: &SearchArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", format_summary_line(result))?;
    let report = render_report(template, &result.best.assignment).context("Failed to render lineup report")?;
    write!(out, "{}", report)?;

    if args.json {
        print_json_results(&mut out, result)?;
    }

    out.flush()?;
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Search while writing progress lines to `out`.
///
/// A failed write stops the search at that trial and is returned as the
/// error.
fn stream_search<'a, W: Write>(
    out: &mut W,
    roster: &'a Roster,
    template: &Template,
    args: &SearchArgs,
    rng: &mut ChaCha8Rng,
) -> Result<SearchResult<'a>> {
    let config = SearchConfig::new(args.trials);
    let mut write_error: Option<io::Error> = None;

    let result = search_with_control(roster, template, &config, rng, |report| {
        match print_progress(&mut *out, report, args.progress_every) {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => {
                write_error = Some(e);
                ControlFlow::Break(())
            }
        }
    })
    .context("Search could not start")?;

    if let Some(e) = write_error {
        return Err(e).context(format!("Failed to write progress output after {} trials", result.trials));
    }

    Ok(result)
}

/// Write the trial line if this trial falls on the progress interval
fn print_progress<W: Write>(out: &mut W, report: &TrialReport, every: u64) -> io::Result<()> {
    if every == 0 || report.trial % every != 0 {
        return Ok(());
    }
    writeln!(out, "{}", format_trial_line(report))
}

/// Print the best result as pretty JSON
fn print_json_results<W: Write>(out: &mut W, result: &SearchResult) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonOutput<'r, 'a> {
        trials: u64,
        best_trial: u64,
        worst_case: f64,
        average: f64,
        assignment: &'r Assignment<'a>,
        improvements: &'r [Improvement],
    }

    let output = JsonOutput {
        trials: result.trials,
        best_trial: result.best.trial,
        worst_case: result.best.score.worst_case,
        average: result.best.score.average,
        assignment: &result.best.assignment,
        improvements: &result.improvements,
    };

    let json = serde_json::to_string_pretty(&output)?;
    writeln!(out, "{}", json)?;

    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn format_trial_line(report: &TrialReport) -> String {
    format!(
        "[{}] max: {:.3}, avg: {:.3}, list: {}",
        report.trial, report.score.worst_case, report.score.average, report.assignment
    )
}

fn format_summary_line(result: &SearchResult) -> String {
    format!(
        "Best - max: {:.3}, avg: {:.3}, list: {}",
        result.best.score.worst_case, result.best.score.average, result.best.assignment
    )
}

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
