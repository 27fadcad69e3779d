//! Task ownership, marking and task queries.
//!
//! A student's effective task set is its own tasks followed by its team's
//! tasks, each in assignment order.

use crate::cohort::registry::unknown;
use crate::cohort::Cohort;
use crate::error::{CohortError, Result};
use crate::types::{Mark, Ownable, StudentId, TaskId, TaskOwner, TaskType, TeamId};

impl Cohort {
    /// Give `task` to `owner` (a student or a team).
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - unknown task or owner
    /// * `OwnershipConflict` - the task already has an owner; it keeps it
    ///
    /// # Example
    ///
    /// ```
    /// use mentor_match::{Cohort, CohortError};
    /// use mentor_match::types::TaskType;
    ///
    /// let mut cohort = Cohort::new();
    /// let ada = cohort.add_student("Ada", None).unwrap();
    /// let team = cohort.add_team("Compilers", &[]).unwrap();
    /// let task = cohort.add_task("Lexer").unwrap();
    ///
    /// cohort.assign_task(ada, task).unwrap();
    /// assert_eq!(cohort.task_type(task).unwrap(), TaskType::Personal);
    ///
    /// let err = cohort.assign_task(team, task).unwrap_err();
    /// assert!(matches!(err, CohortError::OwnershipConflict(_)));
    /// ```
    pub fn assign_task<O: Ownable>(&mut self, owner: O, task: TaskId) -> Result<()> {
        let owner = owner.as_owner();
        let entry = self.tasks.get_mut(task.key()).ok_or_else(|| unknown(task))?;
        match owner {
            TaskOwner::Student(id) => {
                let student = self.students.get_mut(id.key()).ok_or_else(|| unknown(id))?;
                entry.set_owner(owner)?;
                student.push_task(task);
            }
            TaskOwner::Team(id) => {
                let team = self.teams.get_mut(id.key()).ok_or_else(|| unknown(id))?;
                entry.set_owner(owner)?;
                team.push_task(task);
            }
        }
        Ok(())
    }

    /// Personal task assignment.
    pub fn student_add_task(&mut self, student: StudentId, task: TaskId) -> Result<()> {
        self.assign_task(student, task)
    }

    /// Team task assignment.
    pub fn team_add_task(&mut self, team: TeamId, task: TaskId) -> Result<()> {
        self.assign_task(team, task)
    }

    /// Grade a task and mark it done.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - unknown task
    /// * `InvalidMark` - outside `0..=5`
    /// * `OwnershipConflict` - the task has already been marked; the first
    ///   mark is kept
    pub fn set_mark(&mut self, task: TaskId, mark: i64) -> Result<Mark> {
        self.tasks
            .get_mut(task.key())
            .ok_or_else(|| unknown(task))?
            .set_mark(mark)
    }

    pub fn task_type(&self, task: TaskId) -> Result<TaskType> {
        Ok(self.task(task)?.task_type())
    }

    pub fn own_tasks(&self, student: StudentId) -> Result<&[TaskId]> {
        Ok(self.student(student)?.own_tasks())
    }

    /// Tasks of the student's team.
    ///
    /// # Errors
    ///
    /// * `MembershipRequired` - the student has no team
    pub fn team_tasks(&self, student: StudentId) -> Result<&[TaskId]> {
        let team = self
            .student(student)?
            .team()
            .ok_or(CohortError::MembershipRequired(student))?;
        Ok(self.team(team)?.tasks())
    }

    /// Own tasks followed by team tasks (if any).
    pub fn all_tasks(&self, student: StudentId) -> Result<Vec<TaskId>> {
        let entry = self.student(student)?;
        let mut tasks = entry.own_tasks().to_vec();
        if entry.has_team() {
            tasks.extend_from_slice(self.team_tasks(student)?);
        }
        Ok(tasks)
    }

    /// Effective tasks that are done.
    pub fn completed_tasks(&self, student: StudentId) -> Result<Vec<TaskId>> {
        let mut done = Vec::new();
        for task in self.all_tasks(student)? {
            if self.task(task)?.is_done() {
                done.push(task);
            }
        }
        Ok(done)
    }
}
