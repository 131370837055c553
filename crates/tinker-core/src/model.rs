//! Data model for projects and their tutorial steps.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::{fmt, str::FromStr};

use crate::error::StoreError;

/// The three difficulty tiers a project can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an enum value from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {expected}: '{got}'")]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub got: String,
}

impl FromStr for Difficulty {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseEnumError {
                expected: "difficulty",
                got: s.to_string(),
            }),
        }
    }
}

/// One instruction unit within a project's step sequence.
///
/// Step order is semantically meaningful: step N assumes the work done in
/// step N-1. `materials` and `tips` are optional extras; an empty list means
/// the step has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStep {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
}

impl ProjectStep {
    /// Build a bare step with no materials or tips.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            materials: Vec::new(),
            tips: Vec::new(),
        }
    }
}

/// A single DIY tutorial entity: display metadata, an ordered step list,
/// and engagement counters.
///
/// Identity (`id`) is immutable once assigned; `views` and `likes` move
/// under user actions. `completions` is seeded content only — no operation
/// increments it. `rating` is a display score and is never recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub author: String,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    pub rating: f64,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    pub steps: Vec<ProjectStep>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub completions: u64,
    pub created_at: String,
}

impl Project {
    /// Check the structural invariants a project must satisfy before it can
    /// enter the catalog: non-empty id and title, at least one step, and
    /// step ids unique within the project.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidProject`] naming the violated invariant.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.id.trim().is_empty() {
            return Err(StoreError::InvalidProject {
                reason: "project id must not be empty",
            });
        }
        if self.title.trim().is_empty() {
            return Err(StoreError::InvalidProject {
                reason: "project title must not be empty",
            });
        }
        if self.steps.is_empty() {
            return Err(StoreError::InvalidProject {
                reason: "project must have at least one step",
            });
        }
        let mut seen = HashSet::new();
        for step in &self.steps {
            if !seen.insert(step.id.as_str()) {
                return Err(StoreError::InvalidProject {
                    reason: "step ids must be unique within a project",
                });
            }
        }
        Ok(())
    }

    /// Look up a step by id.
    #[must_use]
    pub fn step(&self, step_id: &str) -> Option<&ProjectStep> {
        self.steps.iter().find(|s| s.id == step_id)
    }
}
