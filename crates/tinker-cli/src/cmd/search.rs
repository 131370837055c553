//! `tk search` — substring search over titles and descriptions.

use clap::Args;
use tinker_core::query::{Filter, SortKey, select};
use tinker_core::store::Store;

use crate::cmd::list::ProjectRow;
use crate::output::{OutputMode, render_list};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search text, matched case-insensitively.
    pub query: String,

    /// Maximum projects to show.
    #[arg(short = 'n', long, default_value = "50")]
    pub limit: usize,
}

/// Execute `tk search`.
pub fn run_search(args: &SearchArgs, output: OutputMode, store: &Store) -> anyhow::Result<()> {
    let filter = Filter {
        search: Some(args.query.clone()),
        ..Filter::default()
    };

    let state = store.state();
    let rows: Vec<ProjectRow> = select(&state, &filter, SortKey::Catalog)
        .into_iter()
        .take(args.limit)
        .map(ProjectRow::from)
        .collect();

    render_list(&rows, output)?;
    Ok(())
}
