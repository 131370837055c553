//! `tk categories` — category names with project counts.

use std::io::Write;

use clap::Args;
use tinker_core::query::{CategorySummary, categories};
use tinker_core::store::Store;

use crate::output::{OutputMode, Renderable, render_list};

#[derive(Args, Debug)]
pub struct CategoriesArgs {}

impl Renderable for CategorySummary {
    fn render_human(&self, w: &mut dyn Write) -> std::io::Result<()> {
        let noun = if self.count == 1 { "project" } else { "projects" };
        writeln!(w, "{} ({} {noun})", self.name, self.count)
    }

    fn render_table(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "{}\t{}", self.name, self.count)
    }

    fn table_headers() -> &'static [&'static str] {
        &["CATEGORY", "COUNT"]
    }
}

/// Execute `tk categories`.
pub fn run_categories(
    _args: &CategoriesArgs,
    output: OutputMode,
    store: &Store,
) -> anyhow::Result<()> {
    let state = store.state();
    let summary = categories(&state);
    render_list(&summary, output)?;
    Ok(())
}
