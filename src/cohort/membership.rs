//! Team membership.
//!
//! `team_add_student` and `student_join_team` are two entry points with the
//! same effect: the student is appended to the team's member list and the
//! student's team reference is set.
//!
//! What happens when the student already has a team depends on
//! [`MembershipPolicy`](crate::MembershipPolicy). The permissive default
//! overwrites the reference and leaves the student listed on the old team;
//! the exclusive policy refuses with `AlreadyMember`.

use log::warn;

use crate::cohort::Cohort;
use crate::error::{CohortError, Result};
use crate::types::{StudentId, TeamId};

impl Cohort {
    /// Add `student` to `team`.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - unknown team or student
    /// * `AlreadyMember` - the student has a team and the policy is exclusive
    ///
    /// # Example
    ///
    /// ```
    /// use mentor_match::Cohort;
    ///
    /// let mut cohort = Cohort::new();
    /// let team = cohort.add_team("Compilers", &[]).unwrap();
    /// let ada = cohort.add_student("Ada", None).unwrap();
    ///
    /// cohort.team_add_student(team, ada).unwrap();
    /// assert_eq!(cohort.student(ada).unwrap().team(), Some(team));
    /// ```
    pub fn team_add_student(&mut self, team: TeamId, student: StudentId) -> Result<()> {
        self.team(team)?;
        self.check_can_join(student)?;
        self.link_member(team, student);
        Ok(())
    }

    /// Same as [`team_add_student`](Self::team_add_student), student side.
    pub fn student_join_team(&mut self, student: StudentId, team: TeamId) -> Result<()> {
        self.team_add_student(team, student)
    }

    /// Fails for an unknown student, or one who already has a team under
    /// the exclusive policy.
    pub(super) fn check_can_join(&self, student: StudentId) -> Result<()> {
        let current = self.student(student)?.team();
        match current {
            Some(team) if self.config.membership.is_exclusive() => {
                Err(CohortError::AlreadyMember { student, team })
            }
            _ => Ok(()),
        }
    }

    /// Update both sides. Callers have validated both ids.
    pub(super) fn link_member(&mut self, team: TeamId, student: StudentId) {
        if let Some(entry) = self.students.get_mut(student.key()) {
            if let Some(previous) = entry.set_team(team) {
                warn!("{student} moved from {previous} to {team}; {previous} still lists it");
            }
        }
        if let Some(members) = self.teams.get_mut(team.key()) {
            members.push_student(student);
        }
    }
}
