//! Pure read projections over a state snapshot.
//!
//! Everything here is a function of one `&AppState`: callers recompute from
//! the latest snapshot instead of caching results across dispatches.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::{fmt, str::FromStr};

use crate::model::{Difficulty, ParseEnumError, Project};
use crate::store::AppState;

/// Catalog filter. Empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    /// Exact category match.
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Case-insensitive substring over title and description.
    pub search: Option<String>,
}

impl Filter {
    fn matches(&self, project: &Project) -> bool {
        if let Some(ref category) = self.category
            && project.category != *category
        {
            return false;
        }
        if let Some(difficulty) = self.difficulty
            && project.difficulty != difficulty
        {
            return false;
        }
        if let Some(ref needle) = self.search {
            let needle = needle.to_lowercase();
            let hit = project.title.to_lowercase().contains(&needle)
                || project.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Sort orders for catalog listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Newest `created_at` first; unparseable dates sort last.
    Recent,
    Rating,
    /// Most viewed first.
    Popular,
    Likes,
    Title,
    /// Catalog insertion order, which is the display order.
    #[default]
    Catalog,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Rating => "rating",
            Self::Popular => "popular",
            Self::Likes => "likes",
            Self::Title => "title",
            Self::Catalog => "catalog",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recent" => Ok(Self::Recent),
            "rating" => Ok(Self::Rating),
            "popular" => Ok(Self::Popular),
            "likes" => Ok(Self::Likes),
            "title" => Ok(Self::Title),
            "catalog" => Ok(Self::Catalog),
            _ => Err(ParseEnumError {
                expected: "sort key",
                got: s.to_string(),
            }),
        }
    }
}

fn created_date(project: &Project) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&project.created_at, "%Y-%m-%d").ok()
}

/// Filter and sort the catalog. Ties keep catalog order (stable sort).
#[must_use]
pub fn select<'a>(state: &'a AppState, filter: &Filter, sort: SortKey) -> Vec<&'a Project> {
    let mut projects: Vec<&Project> = state.projects.iter().filter(|p| filter.matches(p)).collect();
    match sort {
        SortKey::Recent => {
            projects.sort_by(|a, b| created_date(b).cmp(&created_date(a)));
        }
        SortKey::Rating => projects.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Popular => projects.sort_by(|a, b| b.views.cmp(&a.views)),
        SortKey::Likes => projects.sort_by(|a, b| b.likes.cmp(&a.likes)),
        SortKey::Title => projects.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Catalog => {}
    }
    projects
}

/// A category with its project count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
}

/// Distinct categories in alphabetical order, with counts.
#[must_use]
pub fn categories(state: &AppState) -> Vec<CategorySummary> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for project in &state.projects {
        *counts.entry(project.category.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(name, count)| CategorySummary {
            name: name.to_string(),
            count,
        })
        .collect()
}

/// Completion status of one step inside a [`ProgressReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepStatus {
    pub id: String,
    pub title: String,
    pub done: bool,
    /// Whether the tracker currently points at this step.
    pub current: bool,
}

/// How far through a project's steps the user is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub project_id: String,
    pub title: String,
    pub total_steps: usize,
    pub completed_steps: usize,
    pub percent: u8,
    pub current_step: usize,
    pub steps: Vec<StepStatus>,
}

/// Build the progress report for one project, or `None` if the id is unknown.
#[must_use]
pub fn progress(state: &AppState, project_id: &str) -> Option<ProgressReport> {
    let project = state.project(project_id)?;
    let done = state.completed(project_id);
    let current = state.current_step_index(project_id);

    let steps: Vec<StepStatus> = project
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| StepStatus {
            id: step.id.clone(),
            title: step.title.clone(),
            done: done.contains(&step.id),
            current: index == current,
        })
        .collect();

    let total = steps.len();
    let completed = steps.iter().filter(|s| s.done).count();
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    let percent = if total == 0 {
        0
    } else {
        (completed as f64 / total as f64 * 100.0).round() as u8
    };

    Some(ProgressReport {
        project_id: project.id.clone(),
        title: project.title.clone(),
        total_steps: total,
        completed_steps: completed,
        percent,
        current_step: current,
        steps,
    })
}

/// Resolve the saved set to projects, preserving save order.
///
/// Saved ids without a matching project resolve to nothing (the saved set is
/// a soft reference, not a foreign key).
#[must_use]
pub fn saved_projects(state: &AppState) -> Vec<&Project> {
    state
        .saved
        .iter()
        .filter_map(|id| state.project(id))
        .collect()
}
