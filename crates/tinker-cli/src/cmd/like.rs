//! `tk like` — bump a project's like counter.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use tinker_core::store::{Action, Store};

use crate::output::{CliError, OutputMode, render, render_error};

#[derive(Args, Debug)]
pub struct LikeArgs {
    /// Project id to like.
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct LikeOutcome {
    pub project_id: String,
    pub title: String,
    pub likes: u64,
}

/// Execute `tk like <id>`.
pub fn run_like(args: &LikeArgs, output: OutputMode, store: &mut Store) -> anyhow::Result<()> {
    let state = match store.dispatch(&Action::Like {
        project_id: args.id.clone(),
    }) {
        Ok(state) => state,
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("{err}");
        }
    };

    let (title, likes) = state
        .project(&args.id)
        .map_or_else(|| (String::new(), 0), |p| (p.title.clone(), p.likes));
    let outcome = LikeOutcome {
        project_id: args.id.clone(),
        title,
        likes,
    };

    render(output, &outcome, |outcome, w: &mut dyn Write| {
        writeln!(w, "'{}' now has {} likes", outcome.title, outcome.likes)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_increments_by_one() {
        let mut store = Store::seeded();
        let args = LikeArgs {
            id: "1".to_string(),
        };
        run_like(&args, OutputMode::Json, &mut store).expect("like");
        assert_eq!(store.state().project("1").map(|p| p.likes), Some(90));
    }

    #[test]
    fn like_unknown_project_fails() {
        let mut store = Store::seeded();
        let args = LikeArgs {
            id: "nope".to_string(),
        };
        assert!(run_like(&args, OutputMode::Json, &mut store).is_err());
    }
}
