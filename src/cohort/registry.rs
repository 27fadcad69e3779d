//! The cohort: caller-owned registries for all four entity kinds.
//!
//! ## Memory Model
//!
//! Each entity kind lives in its own `Slab`. Entities are only ever
//! inserted, never removed, so slab keys are dense and iteration order is
//! creation order. The matching engine relies on that order.
//!
//! ## Example
//!
//! ```
//! use mentor_match::Cohort;
//!
//! let mut cohort = Cohort::with_capacity(16);
//! let team = cohort.add_team("Compilers", &[]).unwrap();
//! let ada = cohort.add_student("Ada", Some(team)).unwrap();
//! cohort.add_mentor("Grace").unwrap();
//!
//! assert_eq!(cohort.student_count(), 1);
//! assert_eq!(cohort.mentor_count(), 1);
//! assert_eq!(cohort.team(team).unwrap().students(), &[ada]);
//! ```

use log::trace;
use slab::Slab;

use crate::config::CohortConfig;
use crate::error::{CohortError, Result};
use crate::types::score::to_micros;
use crate::types::{
    Assignment, AssignmentRecord, MatchReceipt, Mentor, MentorId, Student, StudentId, Task, TaskId, Team,
    TeamId,
};

/// Registries plus configuration for one independent simulation.
#[derive(Debug, Clone, Default)]
pub struct Cohort {
    pub(super) config: CohortConfig,
    pub(super) students: Slab<Student>,
    pub(super) mentors: Slab<Mentor>,
    pub(super) teams: Slab<Team>,
    pub(super) tasks: Slab<Task>,
}

/// `InvalidArgument` for an id this cohort never issued.
pub(super) fn unknown(id: impl std::fmt::Display) -> CohortError {
    CohortError::InvalidArgument(format!("unknown {id}"))
}

/// Reject empty required text.
fn require_text(field: &str, value: impl Into<String>) -> Result<String> {
    let value = value.into();
    if value.is_empty() {
        return Err(CohortError::InvalidArgument(format!(
            "expected {field} to be a non-empty string"
        )));
    }
    Ok(value)
}

impl Cohort {
    /// Create an empty cohort with default configuration
    pub fn new() -> Self {
        Self::with_config(CohortConfig::default())
    }

    /// Create a cohort pre-allocating `capacity` slots per registry
    ///
    /// # Example
    ///
    /// ```
    /// use mentor_match::Cohort;
    ///
    /// let cohort = Cohort::with_capacity(1_000);
    /// assert!(cohort.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(CohortConfig::with_capacity(capacity))
    }

    pub fn with_config(config: CohortConfig) -> Self {
        Self {
            config,
            students: Slab::with_capacity(config.student_capacity),
            mentors: Slab::with_capacity(config.mentor_capacity),
            teams: Slab::with_capacity(config.team_capacity),
            tasks: Slab::with_capacity(config.task_capacity),
        }
    }

    #[inline]
    pub fn config(&self) -> &CohortConfig {
        &self.config
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a student, optionally joining `team` straight away.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - empty name or unknown team
    pub fn add_student(&mut self, name: impl Into<String>, team: Option<TeamId>) -> Result<StudentId> {
        let name = require_text("name", name)?;
        if let Some(team) = team {
            self.team(team)?;
        }

        let id = StudentId::new(self.students.insert(Student::new(name)));
        trace!("registered {id}");
        if let Some(team) = team {
            self.link_member(team, id);
        }
        Ok(id)
    }

    /// Register a mentor.
    pub fn add_mentor(&mut self, name: impl Into<String>) -> Result<MentorId> {
        let name = require_text("name", name)?;
        let id = MentorId::new(self.mentors.insert(Mentor::new(name)));
        trace!("registered {id}");
        Ok(id)
    }

    /// Register a team and add `students` to it in order.
    ///
    /// Every student is checked before the team is created, so a failure
    /// registers nothing.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - empty name or unknown student
    /// * `AlreadyMember` - a student already has a team (exclusive policy),
    ///   or is listed twice
    pub fn add_team(&mut self, name: impl Into<String>, students: &[StudentId]) -> Result<TeamId> {
        let name = require_text("name", name)?;
        let id = TeamId::new(self.teams.vacant_key());
        for (index, &student) in students.iter().enumerate() {
            self.check_can_join(student)?;
            if self.config.membership.is_exclusive() && students[..index].contains(&student) {
                return Err(CohortError::AlreadyMember { student, team: id });
            }
        }

        let key = self.teams.insert(Team::new(name));
        debug_assert_eq!(key, id.key());
        trace!("registered {id}");
        for &student in students {
            self.link_member(id, student);
        }
        Ok(id)
    }

    /// Register an unowned task.
    pub fn add_task(&mut self, title: impl Into<String>) -> Result<TaskId> {
        let title = require_text("title", title)?;
        let id = TaskId::new(self.tasks.insert(Task::new(title)));
        trace!("registered {id}");
        Ok(id)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn student(&self, id: StudentId) -> Result<&Student> {
        self.students.get(id.key()).ok_or_else(|| unknown(id))
    }

    pub fn mentor(&self, id: MentorId) -> Result<&Mentor> {
        self.mentors.get(id.key()).ok_or_else(|| unknown(id))
    }

    pub fn team(&self, id: TeamId) -> Result<&Team> {
        self.teams.get(id.key()).ok_or_else(|| unknown(id))
    }

    pub fn task(&self, id: TaskId) -> Result<&Task> {
        self.tasks.get(id.key()).ok_or_else(|| unknown(id))
    }

    // ========================================================================
    // Enumeration (registry order)
    // ========================================================================

    pub fn students(&self) -> impl Iterator<Item = (StudentId, &Student)> + '_ {
        self.students.iter().map(|(key, s)| (StudentId::new(key), s))
    }

    pub fn mentors(&self) -> impl Iterator<Item = (MentorId, &Mentor)> + '_ {
        self.mentors.iter().map(|(key, m)| (MentorId::new(key), m))
    }

    pub fn teams(&self) -> impl Iterator<Item = (TeamId, &Team)> + '_ {
        self.teams.iter().map(|(key, t)| (TeamId::new(key), t))
    }

    pub fn tasks(&self) -> impl Iterator<Item = (TaskId, &Task)> + '_ {
        self.tasks.iter().map(|(key, t)| (TaskId::new(key), t))
    }

    #[inline]
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    #[inline]
    pub fn mentor_count(&self) -> usize {
        self.mentors.len()
    }

    #[inline]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    #[inline]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// No entity of any kind registered
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
            && self.mentors.is_empty()
            && self.teams.is_empty()
            && self.tasks.is_empty()
    }

    // ========================================================================
    // Assignment results
    // ========================================================================

    /// Clear every mentor's assignment list.
    ///
    /// The matching engine appends to whatever is already there; call this
    /// between runs when a fresh result is wanted.
    pub fn reset_assignments(&mut self) {
        for (_, mentor) in self.mentors.iter_mut() {
            mentor.clear_assignments();
        }
    }

    /// Record an engine decision on `mentor`.
    pub(crate) fn assign_to_mentor(&mut self, mentor: MentorId, assignment: Assignment) -> Result<()> {
        self.mentors
            .get_mut(mentor.key())
            .ok_or_else(|| unknown(mentor))?
            .push_assignment(assignment);
        Ok(())
    }

    /// Total assignments held across all mentors
    pub fn assignment_count(&self) -> usize {
        self.mentors.iter().map(|(_, m)| m.students().len()).sum()
    }

    /// All assignments as fixed-point records, mentor order then append order.
    pub fn assignment_records(&self) -> Result<Vec<AssignmentRecord>> {
        let mut records = Vec::with_capacity(self.assignment_count());
        for (key, mentor) in self.mentors.iter() {
            for assignment in mentor.students() {
                let score_micros = to_micros(assignment.score).ok_or_else(|| {
                    CohortError::Encoding(format!("score {} out of range", assignment.score))
                })?;
                records.push(AssignmentRecord::new(
                    key as u64,
                    assignment.student.key() as u64,
                    score_micros,
                ));
            }
        }
        Ok(records)
    }

    /// SHA-256 over the SSZ encoding of [`assignment_records`](Self::assignment_records).
    ///
    /// Identical snapshots matched the same number of times produce
    /// identical roots.
    pub fn compute_state_root(&self) -> Result<[u8; 32]> {
        let mut bytes = Vec::new();
        for record in self.assignment_records()? {
            let encoded = ssz_rs::serialize(&record)
                .map_err(|err| CohortError::Encoding(format!("{err:?}")))?;
            bytes.extend_from_slice(&encoded);
        }
        Ok(MatchReceipt::compute_hash(&bytes))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
