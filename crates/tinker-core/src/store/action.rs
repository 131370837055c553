//! The closed set of state transitions.

use serde::{Deserialize, Serialize};

use crate::model::Project;

/// One of the six operations the state container applies.
///
/// This is the whole operation surface: the reducer matches exhaustively,
/// so adding a variant is a compile-time checklist of every apply site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Bookmark the project if it is not saved, unbookmark it if it is.
    ToggleSave { project_id: String },
    /// Mark one step of a project complete. Idempotent.
    CompleteStep { project_id: String, step_id: String },
    /// Move the tracker to a step index. Last write wins.
    SetCurrentStep { project_id: String, step_index: usize },
    /// Append a new project to the catalog.
    AddProject { project: Box<Project> },
    /// Bump the project's like counter.
    Like { project_id: String },
    /// Bump the project's view counter.
    RecordView { project_id: String },
}

impl Action {
    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ToggleSave { .. } => "toggle_save",
            Self::CompleteStep { .. } => "complete_step",
            Self::SetCurrentStep { .. } => "set_current_step",
            Self::AddProject { .. } => "add_project",
            Self::Like { .. } => "like",
            Self::RecordView { .. } => "record_view",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Action;

    #[test]
    fn actions_tag_by_type_in_json() {
        let action = Action::CompleteStep {
            project_id: "1".to_string(),
            step_id: "step-1".to_string(),
        };
        let json = serde_json::to_string(&action).expect("serialize");
        assert!(json.contains("\"type\":\"complete_step\""));
        assert!(json.contains("\"step_id\":\"step-1\""));

        let parsed: Action = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, action);
    }

    #[test]
    fn kind_matches_serde_tag() {
        let action = Action::RecordView {
            project_id: "2".to_string(),
        };
        let json = serde_json::to_string(&action).expect("serialize");
        assert!(json.contains(action.kind()));
    }
}
