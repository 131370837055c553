//! `tk progress <id>` — how far through a project's steps the user is.
//!
//! Distinct from `tk show` (full detail): this is a focused view of
//! completion, with a bar and one line per step.

use std::io::Write;

use clap::Args;
use tinker_core::query::{ProgressReport, progress};
use tinker_core::store::Store;

use crate::output::{CliError, OutputMode, render, render_error};

#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Project id to report on.
    pub id: String,
}

const BAR_WIDTH: usize = 16;

/// Execute `tk progress`.
pub fn run_progress(args: &ProgressArgs, output: OutputMode, store: &Store) -> anyhow::Result<()> {
    let state = store.state();
    let Some(report) = progress(&state, &args.id) else {
        render_error(
            output,
            &CliError::with_details(
                format!("project '{}' not found", args.id),
                "use `tk list` to see available project ids",
                "project_not_found",
            ),
        )?;
        anyhow::bail!("project '{}' not found", args.id);
    };

    render(output, &report, |report, w| render_progress_human(report, w))
}

fn render_progress_human(report: &ProgressReport, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{} [{}]", report.title, report.project_id)?;

    let fraction = f64::from(report.percent) / 100.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
    writeln!(
        w,
        "  Progress: {}/{} ({}%) {bar}",
        report.completed_steps, report.total_steps, report.percent
    )?;

    for (index, step) in report.steps.iter().enumerate() {
        let marker = if step.done { "done " } else { "todo " };
        let pointer = if step.current { " <- current" } else { "" };
        writeln!(w, "  {marker} {}. {}{pointer}", index + 1, step.title)?;
    }
    Ok(())
}
