//! The application state snapshot and the pure reducer over it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::model::Project;
use crate::store::Action;

/// One immutable snapshot of everything the application tracks.
///
/// `projects` insertion order is the display order for "all projects" views.
/// `saved` is an ordered, duplicate-free list of project ids. The two maps
/// key tracking data by project id; absence of a key means "never touched"
/// (zero completed steps, current step 0).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub projects: Vec<Project>,
    pub saved: Vec<String>,
    pub completed_steps: BTreeMap<String, Vec<String>>,
    pub current_step: BTreeMap<String, usize>,
}

impl AppState {
    /// Look up a project by id.
    #[must_use]
    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// Whether the project is in the saved set.
    #[must_use]
    pub fn is_saved(&self, project_id: &str) -> bool {
        self.saved.iter().any(|id| id == project_id)
    }

    /// Step ids marked complete for a project, in completion order.
    #[must_use]
    pub fn completed(&self, project_id: &str) -> &[String] {
        self.completed_steps
            .get(project_id)
            .map_or(&[], Vec::as_slice)
    }

    /// The tracked step index for a project; 0 when never visited.
    #[must_use]
    pub fn current_step_index(&self, project_id: &str) -> usize {
        self.current_step.get(project_id).copied().unwrap_or(0)
    }

    fn project_mut(&mut self, project_id: &str) -> Result<&mut Project, StoreError> {
        self.projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| StoreError::ProjectNotFound(project_id.to_string()))
    }
}

/// Apply one action to a snapshot, producing the next snapshot.
///
/// Pure: the input snapshot is never touched, and on error no partial
/// effect exists anywhere. Every referenced project and step must exist;
/// dangling references are rejected rather than silently creating entries
/// for ids nothing else knows about.
///
/// # Errors
///
/// Returns a [`StoreError`] when a reference is unknown, a step index is
/// out of range, or an added project is invalid or reuses an id.
pub fn apply(state: &AppState, action: &Action) -> Result<AppState, StoreError> {
    let mut next = state.clone();
    match action {
        Action::ToggleSave { project_id } => {
            next.project_mut(project_id)?;
            if let Some(pos) = next.saved.iter().position(|id| id == project_id) {
                next.saved.remove(pos);
            } else {
                next.saved.push(project_id.clone());
            }
        }
        Action::CompleteStep {
            project_id,
            step_id,
        } => {
            let project = next.project_mut(project_id)?;
            if project.step(step_id).is_none() {
                return Err(StoreError::StepNotFound {
                    project_id: project_id.clone(),
                    step_id: step_id.clone(),
                });
            }
            let done = next.completed_steps.entry(project_id.clone()).or_default();
            if !done.contains(step_id) {
                done.push(step_id.clone());
            }
        }
        Action::SetCurrentStep {
            project_id,
            step_index,
        } => {
            let len = next.project_mut(project_id)?.steps.len();
            if *step_index >= len {
                return Err(StoreError::StepIndexOutOfRange {
                    project_id: project_id.clone(),
                    index: *step_index,
                    len,
                });
            }
            next.current_step.insert(project_id.clone(), *step_index);
        }
        Action::AddProject { project } => {
            project.validate()?;
            if next.project(&project.id).is_some() {
                return Err(StoreError::DuplicateProjectId(project.id.clone()));
            }
            next.projects.push((**project).clone());
        }
        Action::Like { project_id } => {
            next.project_mut(project_id)?.likes += 1;
        }
        Action::RecordView { project_id } => {
            next.project_mut(project_id)?.views += 1;
        }
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::{AppState, apply};
    use crate::error::StoreError;
    use crate::seed::seed_state;
    use crate::store::Action;

    fn toggle(id: &str) -> Action {
        Action::ToggleSave {
            project_id: id.to_string(),
        }
    }

    fn complete(project: &str, step: &str) -> Action {
        Action::CompleteStep {
            project_id: project.to_string(),
            step_id: step.to_string(),
        }
    }

    #[test]
    fn toggle_save_adds_then_removes() {
        let s0 = seed_state();
        let s1 = apply(&s0, &toggle("2")).expect("toggle on");
        assert_eq!(s1.saved, vec!["2".to_string()]);

        let s2 = apply(&s1, &toggle("2")).expect("toggle off");
        assert!(s2.saved.is_empty());
    }

    #[test]
    fn toggle_save_preserves_order_of_others() {
        let s0 = seed_state();
        let s1 = apply(&s0, &toggle("3")).expect("save 3");
        let s2 = apply(&s1, &toggle("1")).expect("save 1");
        let s3 = apply(&s2, &toggle("3")).expect("unsave 3");
        assert_eq!(s3.saved, vec!["1".to_string()]);
    }

    #[test]
    fn toggle_save_rejects_unknown_project() {
        let s0 = seed_state();
        assert_eq!(
            apply(&s0, &toggle("99")),
            Err(StoreError::ProjectNotFound("99".to_string()))
        );
    }

    #[test]
    fn complete_step_is_idempotent() {
        let s0 = seed_state();
        let s1 = apply(&s0, &complete("1", "step-1")).expect("first completion");
        assert_eq!(s1.completed("1"), ["step-1".to_string()]);

        let s2 = apply(&s1, &complete("1", "step-1")).expect("repeat completion");
        assert_eq!(s2.completed("1"), ["step-1".to_string()]);
    }

    #[test]
    fn complete_step_keeps_completion_order() {
        let s0 = seed_state();
        let s1 = apply(&s0, &complete("1", "step-2")).expect("step-2");
        let s2 = apply(&s1, &complete("1", "step-1")).expect("step-1");
        assert_eq!(
            s2.completed("1"),
            ["step-2".to_string(), "step-1".to_string()]
        );
    }

    #[test]
    fn complete_step_rejects_unknown_step() {
        let s0 = seed_state();
        assert_eq!(
            apply(&s0, &complete("1", "step-99")),
            Err(StoreError::StepNotFound {
                project_id: "1".to_string(),
                step_id: "step-99".to_string(),
            })
        );
    }

    #[test]
    fn set_current_step_is_last_write_wins() {
        let s0 = seed_state();
        let goto = |i| Action::SetCurrentStep {
            project_id: "1".to_string(),
            step_index: i,
        };
        let s1 = apply(&s0, &goto(1)).expect("goto 1");
        let s2 = apply(&s1, &goto(2)).expect("goto 2");
        assert_eq!(s2.current_step_index("1"), 2);
    }

    #[test]
    fn set_current_step_rejects_out_of_range() {
        let s0 = seed_state();
        // Project "1" has 3 steps; index 3 is one past the end.
        let err = apply(
            &s0,
            &Action::SetCurrentStep {
                project_id: "1".to_string(),
                step_index: 3,
            },
        )
        .expect_err("out of range");
        assert_eq!(
            err,
            StoreError::StepIndexOutOfRange {
                project_id: "1".to_string(),
                index: 3,
                len: 3,
            }
        );
    }

    #[test]
    fn current_step_defaults_to_zero() {
        let s0 = seed_state();
        assert_eq!(s0.current_step_index("1"), 0);
    }

    #[test]
    fn completion_and_current_step_are_independent() {
        let s0 = seed_state();
        let s1 = apply(&s0, &complete("1", "step-3")).expect("complete");
        // Marking step-3 complete does not move the tracker.
        assert_eq!(s1.current_step_index("1"), 0);

        let s2 = apply(
            &s1,
            &Action::SetCurrentStep {
                project_id: "1".to_string(),
                step_index: 1,
            },
        )
        .expect("goto");
        // Moving the tracker does not touch completions.
        assert_eq!(s2.completed("1"), ["step-3".to_string()]);
    }

    #[test]
    fn add_project_appends_in_order() {
        let s0 = seed_state();
        let mut project = s0.projects[0].clone();
        project.id = "5".to_string();
        project.title = "Concrete Planter".to_string();

        let before: Vec<String> = s0.projects.iter().map(|p| p.id.clone()).collect();
        let s1 = apply(
            &s0,
            &Action::AddProject {
                project: Box::new(project),
            },
        )
        .expect("add");

        let after: Vec<String> = s1.projects.iter().map(|p| p.id.clone()).collect();
        assert_eq!(after[..before.len()], before[..]);
        assert_eq!(after.last().map(String::as_str), Some("5"));
    }

    #[test]
    fn add_project_rejects_duplicate_id() {
        let s0 = seed_state();
        let duplicate = s0.projects[0].clone();
        assert_eq!(
            apply(
                &s0,
                &Action::AddProject {
                    project: Box::new(duplicate),
                },
            ),
            Err(StoreError::DuplicateProjectId("1".to_string()))
        );
    }

    #[test]
    fn like_and_view_increment_seeded_counters() {
        let s0 = seed_state();
        assert_eq!(s0.project("1").map(|p| p.views), Some(1247));
        assert_eq!(s0.project("1").map(|p| p.likes), Some(89));

        let s1 = apply(
            &s0,
            &Action::RecordView {
                project_id: "1".to_string(),
            },
        )
        .expect("view");
        assert_eq!(s1.project("1").map(|p| p.views), Some(1248));

        let s2 = apply(
            &s1,
            &Action::Like {
                project_id: "1".to_string(),
            },
        )
        .expect("like");
        assert_eq!(s2.project("1").map(|p| p.likes), Some(90));
        // Untouched projects keep their counters.
        assert_eq!(s2.project("2").map(|p| p.views), Some(892));
    }

    #[test]
    fn failed_apply_leaves_input_untouched() {
        let s0 = seed_state();
        let before = s0.clone();
        let _ = apply(&s0, &toggle("nope"));
        assert_eq!(s0, before);
    }

    #[test]
    fn default_state_is_empty() {
        let state = AppState::default();
        assert!(state.projects.is_empty());
        assert!(state.saved.is_empty());
        assert!(state.completed("anything").is_empty());
    }
}
