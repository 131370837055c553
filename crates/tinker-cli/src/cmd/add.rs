//! `tk add` — submit a new project to the catalog.
//!
//! Step flags take the form `--step "Title: description"`. Ids are minted
//! as the next numeric id after the highest one in the catalog, matching
//! the seeded "1".."4" scheme; `--id` overrides for scripted use.

use std::io::Write;
use std::str::FromStr;

use clap::Args;
use serde::Serialize;
use tinker_core::model::{Difficulty, Project, ProjectStep};
use tinker_core::store::{Action, AppState, Store};

use crate::output::{CliError, OutputMode, render, render_error};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Project title.
    #[arg(long)]
    pub title: String,

    /// Short description of the project.
    #[arg(long)]
    pub description: String,

    /// Category to file the project under.
    #[arg(long)]
    pub category: String,

    /// Difficulty: easy, medium, hard.
    #[arg(long, default_value = "easy")]
    pub difficulty: String,

    /// Author display name.
    #[arg(long, default_value = "Anonymous")]
    pub author: String,

    /// Estimated time, free-form (e.g. "2-3 hours").
    #[arg(long = "time", default_value = "unknown")]
    pub estimated_time: String,

    /// Image reference for the project card.
    #[arg(long, default_value = "assets/placeholder.jpg")]
    pub image: String,

    /// Materials needed (repeatable).
    #[arg(long = "material")]
    pub materials: Vec<String>,

    /// Tools needed (repeatable).
    #[arg(long = "tool")]
    pub tools: Vec<String>,

    /// Tags (repeatable).
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Steps as "Title: description" (repeatable, at least one).
    #[arg(long = "step", required = true)]
    pub steps: Vec<String>,

    /// Explicit project id (defaults to the next numeric id).
    #[arg(long)]
    pub id: Option<String>,
}

/// Confirmation payload for a stored project.
#[derive(Debug, Serialize)]
pub struct AddOutcome {
    pub id: String,
    pub title: String,
    pub category: String,
    pub steps: usize,
    pub catalog_size: usize,
}

/// Mint the next numeric id after the largest one in the catalog.
fn next_project_id(state: &AppState) -> String {
    let max = state
        .projects
        .iter()
        .filter_map(|p| p.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

fn parse_step(index: usize, raw: &str) -> ProjectStep {
    let (title, description) = raw
        .split_once(':')
        .map_or((raw.trim(), ""), |(t, d)| (t.trim(), d.trim()));
    ProjectStep::new(format!("step-{}", index + 1), title, description)
}

fn build_project(args: &AddArgs, state: &AppState) -> Result<Project, CliError> {
    let difficulty = Difficulty::from_str(&args.difficulty).map_err(|err| {
        CliError::with_details(
            err.to_string(),
            "valid difficulties: easy, medium, hard",
            "invalid_difficulty",
        )
    })?;

    let steps = args
        .steps
        .iter()
        .enumerate()
        .map(|(i, raw)| parse_step(i, raw))
        .collect();

    Ok(Project {
        id: args.id.clone().unwrap_or_else(|| next_project_id(state)),
        title: args.title.clone(),
        description: args.description.clone(),
        image: args.image.clone(),
        author: args.author.clone(),
        difficulty,
        estimated_time: args.estimated_time.clone(),
        rating: 0.0,
        category: args.category.clone(),
        tags: args.tags.clone(),
        materials: args.materials.clone(),
        tools: args.tools.clone(),
        steps,
        views: 0,
        likes: 0,
        completions: 0,
        created_at: chrono::Local::now().format("%Y-%m-%d").to_string(),
    })
}

/// Execute `tk add`.
pub fn run_add(args: &AddArgs, output: OutputMode, store: &mut Store) -> anyhow::Result<()> {
    let project = match build_project(args, &store.state()) {
        Ok(project) => project,
        Err(err) => {
            render_error(output, &err)?;
            anyhow::bail!("{}", err.message);
        }
    };

    let id = project.id.clone();
    let state = match store.dispatch(&Action::AddProject {
        project: Box::new(project),
    }) {
        Ok(state) => state,
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("{err}");
        }
    };

    let stored = state
        .project(&id)
        .map_or_else(
            || AddOutcome {
                id: id.clone(),
                title: args.title.clone(),
                category: args.category.clone(),
                steps: args.steps.len(),
                catalog_size: state.projects.len(),
            },
            |p| AddOutcome {
                id: p.id.clone(),
                title: p.title.clone(),
                category: p.category.clone(),
                steps: p.steps.len(),
                catalog_size: state.projects.len(),
            },
        );

    render(output, &stored, |outcome, w: &mut dyn Write| {
        writeln!(
            w,
            "added '{}' as project {} ({} steps)",
            outcome.title, outcome.id, outcome.steps
        )
    })
}
