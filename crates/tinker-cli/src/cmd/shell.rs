//! `tk shell` — an interactive session over one process-lifetime store.
//!
//! This is the stateful surface of the CLI: one `Store` lives for the whole
//! session, so saves, likes, and step completions accumulate across
//! commands exactly as they would in a long-running UI. Nothing is
//! persisted; quitting the shell discards the session state.

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use clap::Args;
use tinker_core::query::{Filter, SortKey, saved_projects, select};
use tinker_core::store::{Action, Store};

use crate::cmd::list::ProjectRow;
use crate::cmd::{list, progress, show};
use crate::output::{CliError, OutputMode, render_error, render_list};

#[derive(Args, Debug)]
pub struct ShellArgs {}

const HELP: &str = "\
commands:
  list                 show the catalog
  search <text>        search titles and descriptions
  show <id>            project detail (counts as a view)
  save <id>            toggle save-for-later
  like <id>            like a project
  done <id> <step-id>  mark a step complete
  goto <id> <index>    move the step tracker (zero-based)
  progress <id>        completion report
  saved                list saved projects
  help                 this text
  quit                 end the session";

/// Execute `tk shell`, reading commands from stdin until EOF or `quit`.
pub fn run_shell(
    _args: &ShellArgs,
    output: OutputMode,
    quiet: bool,
    store: &mut Store,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let ops = Rc::new(Cell::new(0u64));
    let ops_in_listener = Rc::clone(&ops);
    let subscription = store.subscribe(move |_| ops_in_listener.set(ops_in_listener.get() + 1));

    if !quiet {
        println!("tinker shell — type 'help' for commands, 'quit' to leave");
    }

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "list" => {
                let args = list::ListArgs {
                    category: None,
                    difficulty: None,
                    search: None,
                    sort: None,
                    limit: 50,
                };
                let _ = list::run_list(&args, None, output, store);
            }
            "search" => {
                if rest.is_empty() {
                    println!("usage: search <text>");
                    continue;
                }
                let state = store.state();
                let filter = Filter {
                    search: Some(rest.to_string()),
                    ..Filter::default()
                };
                let rows: Vec<ProjectRow> = select(&state, &filter, SortKey::Catalog)
                    .into_iter()
                    .map(ProjectRow::from)
                    .collect();
                render_list(&rows, output)?;
            }
            "show" => {
                let args = show::ShowArgs {
                    id: rest.to_string(),
                };
                // Errors are already rendered; the session continues.
                let _ = show::run_show(&args, output, store);
            }
            "save" => {
                if let Some(state) = dispatch_or_report(
                    store,
                    &Action::ToggleSave {
                        project_id: rest.to_string(),
                    },
                    output,
                ) {
                    let verb = if state.is_saved(rest) { "saved" } else { "unsaved" };
                    println!("{verb} project {rest}");
                }
            }
            "like" => {
                if let Some(state) = dispatch_or_report(
                    store,
                    &Action::Like {
                        project_id: rest.to_string(),
                    },
                    output,
                ) {
                    let likes = state.project(rest).map_or(0, |p| p.likes);
                    println!("project {rest} now has {likes} likes");
                }
            }
            "done" => {
                let Some((project_id, step_id)) = rest.split_once(' ') else {
                    println!("usage: done <id> <step-id>");
                    continue;
                };
                if dispatch_or_report(
                    store,
                    &Action::CompleteStep {
                        project_id: project_id.to_string(),
                        step_id: step_id.trim().to_string(),
                    },
                    output,
                )
                .is_some()
                {
                    let state = store.state();
                    let done = state.completed(project_id).len();
                    let total = state.project(project_id).map_or(0, |p| p.steps.len());
                    println!("step {step_id} complete ({done}/{total})");
                }
            }
            "goto" => {
                let Some((project_id, index)) = rest.split_once(' ') else {
                    println!("usage: goto <id> <index>");
                    continue;
                };
                let Ok(step_index) = index.trim().parse::<usize>() else {
                    println!("step index must be a number");
                    continue;
                };
                if dispatch_or_report(
                    store,
                    &Action::SetCurrentStep {
                        project_id: project_id.to_string(),
                        step_index,
                    },
                    output,
                )
                .is_some()
                {
                    println!("project {project_id} now at step {step_index}");
                }
            }
            "progress" => {
                let args = progress::ProgressArgs {
                    id: rest.to_string(),
                };
                let _ = progress::run_progress(&args, output, store);
            }
            "saved" => {
                let state = store.state();
                let rows: Vec<ProjectRow> = saved_projects(&state)
                    .into_iter()
                    .map(ProjectRow::from)
                    .collect();
                if rows.is_empty() && !output.is_json() {
                    println!("no saved projects");
                } else {
                    render_list(&rows, output)?;
                }
            }
            other => println!("unknown command '{other}' (try 'help')"),
        }
        io::stdout().flush()?;
    }

    store.unsubscribe(subscription);
    if !quiet {
        println!("session: {} operations applied", ops.get());
    }
    Ok(())
}

fn dispatch_or_report(
    store: &mut Store,
    action: &Action,
    output: OutputMode,
) -> Option<std::sync::Arc<tinker_core::store::AppState>> {
    match store.dispatch(action) {
        Ok(state) => Some(state),
        Err(err) => {
            // Rendered, not fatal: the session keeps its state.
            let _ = render_error(output, &CliError::from(&err));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_or_report_returns_state_on_success() {
        let mut store = Store::seeded();
        let state = dispatch_or_report(
            &mut store,
            &Action::Like {
                project_id: "1".to_string(),
            },
            OutputMode::Text,
        );
        assert_eq!(
            state.and_then(|s| s.project("1").map(|p| p.likes)),
            Some(90)
        );
    }

    #[test]
    fn dispatch_or_report_swallows_store_errors() {
        let mut store = Store::seeded();
        let state = dispatch_or_report(
            &mut store,
            &Action::Like {
                project_id: "ghost".to_string(),
            },
            OutputMode::Text,
        );
        assert!(state.is_none());
        // The session state is untouched.
        assert_eq!(store.state().project("1").map(|p| p.likes), Some(89));
    }
}
