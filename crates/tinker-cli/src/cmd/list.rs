//! `tk list` — browse the project catalog with filtering and sorting.

use std::io::Write;
use std::str::FromStr;

use clap::Args;
use serde::Serialize;
use tinker_core::model::{Difficulty, Project};
use tinker_core::query::{Filter, SortKey, select};
use tinker_core::store::Store;

use crate::output::{CliError, OutputMode, Renderable, render_error, render_list};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by category (exact match).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter by difficulty: easy, medium, hard.
    #[arg(short, long)]
    pub difficulty: Option<String>,

    /// Filter by substring over title and description.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order: catalog, recent, rating, popular, likes, title.
    #[arg(long)]
    pub sort: Option<String>,

    /// Maximum projects to show.
    #[arg(short = 'n', long, default_value = "50")]
    pub limit: usize,
}

/// One catalog row in `list` and `search` output.
#[derive(Debug, Serialize)]
pub struct ProjectRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: String,
    pub rating: f64,
    pub estimated_time: String,
    pub views: u64,
    pub likes: u64,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            category: project.category.clone(),
            difficulty: project.difficulty.to_string(),
            rating: project.rating,
            estimated_time: project.estimated_time.clone(),
            views: project.views,
            likes: project.likes,
        }
    }
}

impl Renderable for ProjectRow {
    fn render_human(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            w,
            "{:<4} {} [{}] — {}",
            self.id, self.title, self.difficulty, self.category
        )?;
        writeln!(
            w,
            "     {:.1}★ · {} · {} views · {} likes",
            self.rating, self.estimated_time, self.views, self.likes
        )
    }

    fn render_table(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{:.1}\t{}\t{}\t{}",
            self.id,
            self.title,
            self.category,
            self.difficulty,
            self.rating,
            self.estimated_time,
            self.views,
            self.likes
        )
    }

    fn table_headers() -> &'static [&'static str] {
        &[
            "ID", "TITLE", "CATEGORY", "DIFFICULTY", "RATING", "TIME", "VIEWS", "LIKES",
        ]
    }
}

/// Resolve the sort key from the flag, falling back to the config default.
fn resolve_sort(flag: Option<&str>, config_sort: Option<&str>) -> Result<SortKey, CliError> {
    let Some(name) = flag.or(config_sort) else {
        return Ok(SortKey::default());
    };
    SortKey::from_str(name).map_err(|err| {
        CliError::with_details(
            err.to_string(),
            "valid sort keys: catalog, recent, rating, popular, likes, title",
            "invalid_sort_key",
        )
    })
}

/// Execute `tk list`.
pub fn run_list(
    args: &ListArgs,
    config_sort: Option<&str>,
    output: OutputMode,
    store: &Store,
) -> anyhow::Result<()> {
    let sort = match resolve_sort(args.sort.as_deref(), config_sort) {
        Ok(sort) => sort,
        Err(err) => {
            render_error(output, &err)?;
            anyhow::bail!("{}", err.message);
        }
    };

    let difficulty = match args.difficulty.as_deref().map(Difficulty::from_str) {
        None => None,
        Some(Ok(d)) => Some(d),
        Some(Err(err)) => {
            let cli_err = CliError::with_details(
                err.to_string(),
                "valid difficulties: easy, medium, hard",
                "invalid_difficulty",
            );
            render_error(output, &cli_err)?;
            anyhow::bail!("{err}");
        }
    };

    let filter = Filter {
        category: args.category.clone(),
        difficulty,
        search: args.search.clone(),
    };

    let state = store.state();
    let rows: Vec<ProjectRow> = select(&state, &filter, sort)
        .into_iter()
        .take(args.limit)
        .map(ProjectRow::from)
        .collect();

    render_list(&rows, output)?;
    Ok(())
}
