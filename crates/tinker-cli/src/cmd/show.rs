//! `tk show` — full detail for one project.
//!
//! Viewing a project is itself an operation: the view counter is bumped
//! before rendering, so the displayed count includes this visit.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use tinker_core::model::Project;
use tinker_core::store::{Action, AppState, Store};

use crate::output::{
    CliError, OutputMode, pretty_kv, pretty_rule, pretty_section, render, render_error,
};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Project id to display.
    pub id: String,
}

/// One step in the `show` payload, with its tracking status.
#[derive(Debug, Serialize)]
pub struct ShowStep {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
    pub done: bool,
    pub current: bool,
}

/// Full project detail as returned in JSON output.
#[derive(Debug, Serialize)]
pub struct ShowProject {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub category: String,
    pub difficulty: String,
    pub estimated_time: String,
    pub rating: f64,
    pub tags: Vec<String>,
    pub materials: Vec<String>,
    pub tools: Vec<String>,
    pub views: u64,
    pub likes: u64,
    pub completions: u64,
    pub created_at: String,
    pub saved: bool,
    pub steps: Vec<ShowStep>,
}

fn build_show(state: &AppState, project: &Project) -> ShowProject {
    let done = state.completed(&project.id);
    let current = state.current_step_index(&project.id);
    let steps = project
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| ShowStep {
            id: step.id.clone(),
            title: step.title.clone(),
            description: step.description.clone(),
            materials: step.materials.clone(),
            tips: step.tips.clone(),
            done: done.contains(&step.id),
            current: index == current,
        })
        .collect();

    ShowProject {
        id: project.id.clone(),
        title: project.title.clone(),
        description: project.description.clone(),
        author: project.author.clone(),
        category: project.category.clone(),
        difficulty: project.difficulty.to_string(),
        estimated_time: project.estimated_time.clone(),
        rating: project.rating,
        tags: project.tags.clone(),
        materials: project.materials.clone(),
        tools: project.tools.clone(),
        views: project.views,
        likes: project.likes,
        completions: project.completions,
        created_at: project.created_at.clone(),
        saved: state.is_saved(&project.id),
        steps,
    }
}

/// Execute `tk show <id>`.
pub fn run_show(args: &ShowArgs, output: OutputMode, store: &mut Store) -> anyhow::Result<()> {
    let state = match store.dispatch(&Action::RecordView {
        project_id: args.id.clone(),
    }) {
        Ok(state) => state,
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("{err}");
        }
    };

    // The dispatch succeeded, so the project exists in the new snapshot.
    let Some(project) = state.project(&args.id) else {
        anyhow::bail!("project '{}' vanished between dispatch and read", args.id);
    };

    let detail = build_show(&state, project);
    render(output, &detail, |detail, w| render_show_human(detail, w))
}

fn render_show_human(detail: &ShowProject, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("Project {}", detail.id))?;
    writeln!(w, "{}", detail.title)?;
    pretty_rule(w)?;
    pretty_kv(w, "author", &detail.author)?;
    pretty_kv(w, "category", &detail.category)?;
    pretty_kv(w, "difficulty", &detail.difficulty)?;
    pretty_kv(w, "time", &detail.estimated_time)?;
    pretty_kv(w, "rating", format!("{:.1}", detail.rating))?;
    pretty_kv(
        w,
        "engagement",
        format!(
            "{} views · {} likes · {} completions",
            detail.views, detail.likes, detail.completions
        ),
    )?;
    pretty_kv(w, "created", &detail.created_at)?;
    if detail.saved {
        pretty_kv(w, "saved", "yes")?;
    }
    if !detail.tags.is_empty() {
        pretty_kv(w, "tags", detail.tags.join(", "))?;
    }

    writeln!(w)?;
    pretty_section(w, "Description")?;
    writeln!(w, "{}", detail.description)?;

    if !detail.materials.is_empty() {
        writeln!(w)?;
        pretty_section(w, "Materials")?;
        for material in &detail.materials {
            writeln!(w, "- {material}")?;
        }
    }

    if !detail.tools.is_empty() {
        writeln!(w)?;
        pretty_section(w, "Tools")?;
        for tool in &detail.tools {
            writeln!(w, "- {tool}")?;
        }
    }

    writeln!(w)?;
    pretty_section(w, &format!("Steps ({})", detail.steps.len()))?;
    for (index, step) in detail.steps.iter().enumerate() {
        let marker = if step.done { "[x]" } else { "[ ]" };
        let pointer = if step.current { " <- current" } else { "" };
        writeln!(w, "{marker} {}. {}{pointer}", index + 1, step.title)?;
        writeln!(w, "    {}", step.description)?;
        for tip in &step.tips {
            writeln!(w, "    tip: {tip}")?;
        }
    }
    Ok(())
}
