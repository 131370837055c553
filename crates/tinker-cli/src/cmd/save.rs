//! `tk save` — toggle a project's membership in the saved set.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use tinker_core::store::{Action, Store};

use crate::output::{CliError, OutputMode, render, render_error};

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Project id to save or unsave.
    pub id: String,
}

/// Result of a toggle: the membership after the operation.
#[derive(Debug, Serialize)]
pub struct SaveOutcome {
    pub project_id: String,
    pub title: String,
    pub saved: bool,
    pub saved_count: usize,
}

/// Execute `tk save <id>`.
pub fn run_save(args: &SaveArgs, output: OutputMode, store: &mut Store) -> anyhow::Result<()> {
    let state = match store.dispatch(&Action::ToggleSave {
        project_id: args.id.clone(),
    }) {
        Ok(state) => state,
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("{err}");
        }
    };

    let title = state
        .project(&args.id)
        .map_or_else(String::new, |p| p.title.clone());
    let outcome = SaveOutcome {
        project_id: args.id.clone(),
        title,
        saved: state.is_saved(&args.id),
        saved_count: state.saved.len(),
    };

    render(output, &outcome, |outcome, w: &mut dyn Write| {
        if outcome.saved {
            writeln!(w, "saved '{}' for later", outcome.title)
        } else {
            writeln!(w, "removed '{}' from saved projects", outcome.title)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_toggles_membership() {
        let mut store = Store::seeded();
        let args = SaveArgs {
            id: "2".to_string(),
        };
        run_save(&args, OutputMode::Json, &mut store).expect("save");
        assert!(store.state().is_saved("2"));

        run_save(&args, OutputMode::Json, &mut store).expect("unsave");
        assert!(!store.state().is_saved("2"));
    }

    #[test]
    fn save_unknown_project_fails() {
        let mut store = Store::seeded();
        let args = SaveArgs {
            id: "99".to_string(),
        };
        assert!(run_save(&args, OutputMode::Json, &mut store).is_err());
        assert!(store.state().saved.is_empty());
    }
}
