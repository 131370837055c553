//! Typed errors for operations the state container refuses to apply.

/// An operation referenced something that does not exist, went out of range,
/// or would corrupt an invariant. A failed operation has no effect on state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("project '{0}' not found")]
    ProjectNotFound(String),

    #[error("step '{step_id}' not found in project '{project_id}'")]
    StepNotFound { project_id: String, step_id: String },

    #[error("step index {index} out of range for project '{project_id}' ({len} steps)")]
    StepIndexOutOfRange {
        project_id: String,
        index: usize,
        len: usize,
    },

    #[error("project id '{0}' already exists")]
    DuplicateProjectId(String),

    #[error("invalid project: {reason}")]
    InvalidProject { reason: &'static str },
}

impl StoreError {
    /// Stable machine-readable code for CLI output and log parsing.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ProjectNotFound(_) => "project_not_found",
            Self::StepNotFound { .. } => "step_not_found",
            Self::StepIndexOutOfRange { .. } => "step_index_out_of_range",
            Self::DuplicateProjectId(_) => "duplicate_project_id",
            Self::InvalidProject { .. } => "invalid_project",
        }
    }

    /// Optional remediation hint that can be surfaced to the user.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ProjectNotFound(_) => Some("use `tk list` to see available project ids"),
            Self::StepNotFound { .. } => {
                Some("use `tk show <project>` to see the project's step ids")
            }
            Self::StepIndexOutOfRange { .. } => Some("step indices are zero-based"),
            Self::DuplicateProjectId(_) => Some("pick an id not already in the catalog"),
            Self::InvalidProject { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StoreError;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_and_snake_case() {
        let all = [
            StoreError::ProjectNotFound("x".to_string()),
            StoreError::StepNotFound {
                project_id: "x".to_string(),
                step_id: "y".to_string(),
            },
            StoreError::StepIndexOutOfRange {
                project_id: "x".to_string(),
                index: 9,
                len: 3,
            },
            StoreError::DuplicateProjectId("x".to_string()),
            StoreError::InvalidProject { reason: "nope" },
        ];

        let mut seen = HashSet::new();
        for err in &all {
            assert!(seen.insert(err.code()), "duplicate code {}", err.code());
            assert!(
                err.code()
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '_'),
                "code {} is not snake_case",
                err.code()
            );
        }
    }

    #[test]
    fn display_includes_the_offending_reference() {
        let err = StoreError::StepIndexOutOfRange {
            project_id: "1".to_string(),
            index: 7,
            len: 3,
        };
        let rendered = err.to_string();
        assert!(rendered.contains('7'));
        assert!(rendered.contains("3 steps"));
    }
}
