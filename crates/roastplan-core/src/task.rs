//! Task records, the priority scale, and the in-memory task store.
//!
//! Tasks are validated once on construction and immutable afterwards. The
//! store is append-only for a single session: tasks leave it only when the
//! whole list is cleared.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidPriorityError, InvalidTaskError};

/// Task priority on a closed three-level scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank for plan ordering: high before medium before low.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Upper-cased label used in rendered plan output.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = InvalidPriorityError;

    /// Parse a priority name. Case-insensitive, surrounding whitespace
    /// ignored; anything outside the three known names is an error rather
    /// than a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(InvalidPriorityError(s.trim().to_string())),
        }
    }
}

/// A single unit of work: a name, the user's duration estimate in hours,
/// and a priority.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub name: String,
    pub estimated_hours: f64,
    pub priority: Priority,
}

impl Task {
    /// Validate and create a task.
    ///
    /// The name is trimmed and must be non-empty; the estimate must be a
    /// finite positive number. This is the only validation boundary, so
    /// downstream consumers can assume every stored task is well-formed.
    pub fn new(
        name: impl Into<String>,
        estimated_hours: f64,
        priority: Priority,
    ) -> Result<Self, InvalidTaskError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(InvalidTaskError::EmptyName);
        }
        if !estimated_hours.is_finite() {
            return Err(InvalidTaskError::NonFiniteHours);
        }
        if estimated_hours <= 0.0 {
            return Err(InvalidTaskError::NonPositiveHours {
                hours: estimated_hours,
            });
        }

        Ok(Self {
            name: trimmed.to_string(),
            estimated_hours,
            priority,
        })
    }
}

/// Append-only list of tasks for one planning session.
///
/// Insertion order is preserved and is the order the chart series uses;
/// the plan composer applies its own priority ordering on top.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Append a task. Tasks are never edited or removed individually.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drop every task, returning the store to its initial state.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_new_trims_name() {
        let task = Task::new("  Write report  ", 2.0, Priority::High).unwrap();
        assert_eq!(task.name, "Write report");
        assert_eq!(task.estimated_hours, 2.0);
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn task_new_rejects_empty_name() {
        assert_eq!(
            Task::new("", 1.0, Priority::Low),
            Err(InvalidTaskError::EmptyName)
        );
        assert_eq!(
            Task::new("   ", 1.0, Priority::Low),
            Err(InvalidTaskError::EmptyName)
        );
    }

    #[test]
    fn task_new_rejects_non_positive_hours() {
        assert_eq!(
            Task::new("a", 0.0, Priority::Medium),
            Err(InvalidTaskError::NonPositiveHours { hours: 0.0 })
        );
        assert_eq!(
            Task::new("a", -3.5, Priority::Medium),
            Err(InvalidTaskError::NonPositiveHours { hours: -3.5 })
        );
    }

    #[test]
    fn task_new_rejects_non_finite_hours() {
        assert_eq!(
            Task::new("a", f64::NAN, Priority::Medium),
            Err(InvalidTaskError::NonFiniteHours)
        );
        assert_eq!(
            Task::new("a", f64::INFINITY, Priority::Medium),
            Err(InvalidTaskError::NonFiniteHours)
        );
    }

    #[test]
    fn priority_rank_orders_high_first() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("MEDIUM".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("  Low ".parse::<Priority>().unwrap(), Priority::Low);
    }

    #[test]
    fn priority_rejects_unknown_values() {
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(err, InvalidPriorityError("urgent".to_string()));
        assert!("".parse::<Priority>().is_err());
    }

    #[test]
    fn priority_default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn priority_serde_uses_lowercase() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");
        let parsed: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, Priority::Low);
    }

    #[test]
    fn store_preserves_insertion_order() {
        let mut store = TaskStore::new();
        store.add(Task::new("first", 1.0, Priority::Low).unwrap());
        store.add(Task::new("second", 2.0, Priority::High).unwrap());

        let names: Vec<&str> = store.tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn store_clear_empties_it() {
        let mut store = TaskStore::new();
        store.add(Task::new("a", 1.0, Priority::Medium).unwrap());
        assert!(!store.is_empty());

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
