//! Tasks, their owners and marks.
//!
//! ## Ownership
//!
//! A task is owned by exactly one student (personal task) or one team (team
//! task), or by nobody yet. The owner is write-once: after it is set it can be
//! neither replaced nor cleared.
//!
//! ## Marks
//!
//! A mark is an integer grade in `0..=5`. It can be recorded once, and
//! recording it also marks the task as done.

use std::fmt;

use crate::error::{CohortError, Result};
use crate::types::{StudentId, TeamId};

// ============================================================================
// TaskType enum
// ============================================================================

/// Task classification derived from its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskType {
    /// Owned by a student
    Personal,
    /// Owned by a team
    Team,
    /// Not owned yet
    #[default]
    Unknown,
}

impl TaskType {
    /// Stable lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::Personal => "personal",
            TaskType::Team => "team",
            TaskType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Ownership
// ============================================================================

/// The entity responsible for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskOwner {
    Student(StudentId),
    Team(TeamId),
}

impl TaskOwner {
    /// Task type implied by this owner
    pub fn task_type(self) -> TaskType {
        match self {
            TaskOwner::Student(_) => TaskType::Personal,
            TaskOwner::Team(_) => TaskType::Team,
        }
    }
}

impl fmt::Display for TaskOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskOwner::Student(id) => write!(f, "{id}"),
            TaskOwner::Team(id) => write!(f, "{id}"),
        }
    }
}

/// Capability of owning a task.
///
/// Implemented by the ids of entities that keep a task list, so
/// [`Cohort::assign_task`](crate::Cohort::assign_task) dispatches on the
/// declared owner kind rather than inspecting values at runtime.
pub trait Ownable: Copy {
    fn as_owner(self) -> TaskOwner;
}

impl Ownable for StudentId {
    #[inline]
    fn as_owner(self) -> TaskOwner {
        TaskOwner::Student(self)
    }
}

impl Ownable for TeamId {
    #[inline]
    fn as_owner(self) -> TaskOwner {
        TaskOwner::Team(self)
    }
}

impl Ownable for TaskOwner {
    #[inline]
    fn as_owner(self) -> TaskOwner {
        self
    }
}

// ============================================================================
// Mark
// ============================================================================

/// A validated grade in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mark(u8);

impl Mark {
    /// Highest legal mark
    pub const MAX: u8 = 5;

    /// Validate a raw mark.
    ///
    /// ```
    /// use mentor_match::types::Mark;
    ///
    /// assert_eq!(Mark::new(0).unwrap().value(), 0);
    /// assert_eq!(Mark::new(5).unwrap().value(), 5);
    /// assert!(Mark::new(6).is_err());
    /// assert!(Mark::new(-1).is_err());
    /// ```
    pub fn new(raw: i64) -> Result<Self> {
        u8::try_from(raw)
            .ok()
            .filter(|value| *value <= Self::MAX)
            .map(Mark)
            .ok_or(CohortError::InvalidMark(raw))
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Task struct
// ============================================================================

/// A unit of work owned by a student or a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    done: bool,
    owner: Option<TaskOwner>,
    mark: Option<Mark>,
}

impl Task {
    /// Unowned, unmarked task. The title is validated by the registry.
    pub(crate) fn new(title: String) -> Self {
        Self {
            title,
            done: false,
            owner: None,
            mark: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn owner(&self) -> Option<TaskOwner> {
        self.owner
    }

    pub fn has_owner(&self) -> bool {
        self.owner.is_some()
    }

    pub fn mark(&self) -> Option<Mark> {
        self.mark
    }

    /// Personal, team, or unknown when unowned.
    pub fn task_type(&self) -> TaskType {
        self.owner.map_or(TaskType::Unknown, TaskOwner::task_type)
    }

    /// Bind the owner. Fails if one is already set.
    pub(crate) fn set_owner(&mut self, owner: TaskOwner) -> Result<()> {
        if let Some(current) = self.owner {
            return Err(CohortError::OwnershipConflict(format!(
                "task `{}` is already owned by {}",
                self.title, current
            )));
        }
        self.owner = Some(owner);
        Ok(())
    }

    /// Record a mark and complete the task.
    ///
    /// The mark range is checked before the already-marked state, so an
    /// out-of-range value always reports [`CohortError::InvalidMark`].
    pub(crate) fn set_mark(&mut self, raw: i64) -> Result<Mark> {
        let mark = Mark::new(raw)?;
        if let Some(current) = self.mark {
            return Err(CohortError::OwnershipConflict(format!(
                "task `{}` has already been marked {}",
                self.title, current
            )));
        }
        self.mark = Some(mark);
        self.done = true;
        Ok(mark)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new() {
        let task = Task::new("Write parser".to_string());
        assert_eq!(task.title(), "Write parser");
        assert!(!task.is_done());
        assert!(!task.has_owner());
        assert_eq!(task.mark(), None);
        assert_eq!(task.task_type(), TaskType::Unknown);
    }

    #[test]
    fn test_task_type_follows_owner() {
        let mut personal = Task::new("a".to_string());
        personal.set_owner(StudentId::new(0).as_owner()).unwrap();
        assert_eq!(personal.task_type(), TaskType::Personal);

        let mut team = Task::new("b".to_string());
        team.set_owner(TeamId::new(0).as_owner()).unwrap();
        assert_eq!(team.task_type(), TaskType::Team);
    }

    #[test]
    fn test_owner_is_write_once() {
        let mut task = Task::new("a".to_string());
        task.set_owner(TaskOwner::Student(StudentId::new(1))).unwrap();

        let err = task.set_owner(TaskOwner::Team(TeamId::new(2))).unwrap_err();
        assert!(matches!(err, CohortError::OwnershipConflict(_)));
        assert_eq!(task.owner(), Some(TaskOwner::Student(StudentId::new(1))));
    }

    #[test]
    fn test_set_mark_completes_task() {
        let mut task = Task::new("a".to_string());
        let mark = task.set_mark(4).unwrap();
        assert_eq!(mark.value(), 4);
        assert!(task.is_done());
        assert_eq!(task.mark().map(Mark::value), Some(4));
    }

    #[test]
    fn test_zero_is_a_legal_mark() {
        let mut task = Task::new("a".to_string());
        task.set_mark(0).unwrap();
        assert!(task.is_done());

        // A zero mark still blocks a second one
        let err = task.set_mark(3).unwrap_err();
        assert!(matches!(err, CohortError::OwnershipConflict(_)));
        assert_eq!(task.mark().map(Mark::value), Some(0));
    }

    #[test]
    fn test_mark_range() {
        for raw in [-1, 6, 100, i64::MIN, i64::MAX] {
            let mut task = Task::new("a".to_string());
            assert_eq!(task.set_mark(raw), Err(CohortError::InvalidMark(raw)));
            assert!(!task.is_done());
        }
    }

    #[test]
    fn test_invalid_mark_reported_before_conflict() {
        let mut task = Task::new("a".to_string());
        task.set_mark(5).unwrap();
        assert_eq!(task.set_mark(9), Err(CohortError::InvalidMark(9)));
    }

    #[test]
    fn test_task_type_names() {
        assert_eq!(TaskType::Personal.as_str(), "personal");
        assert_eq!(TaskType::Team.to_string(), "team");
        assert_eq!(TaskType::Unknown.as_str(), "unknown");
    }
}
