//! Student entity.

use crate::types::{HasWishList, MentorId, TaskId, TeamId};

/// A student: optional team membership, personal tasks, and a ranked wish
/// list of mentors.
///
/// Relations are changed through [`Cohort`](crate::Cohort) so that both
/// sides of a relation stay in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    team: Option<TeamId>,
    tasks: Vec<TaskId>,
    wish_list: Vec<MentorId>,
}

impl Student {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            team: None,
            tasks: Vec::new(),
            wish_list: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team(&self) -> Option<TeamId> {
        self.team
    }

    pub fn has_team(&self) -> bool {
        self.team.is_some()
    }

    /// Personally owned tasks, in assignment order.
    pub fn own_tasks(&self) -> &[TaskId] {
        &self.tasks
    }

    pub(crate) fn set_team(&mut self, team: TeamId) -> Option<TeamId> {
        self.team.replace(team)
    }

    pub(crate) fn push_task(&mut self, task: TaskId) {
        self.tasks.push(task);
    }

    pub(crate) fn push_wish(&mut self, mentor: MentorId) {
        self.wish_list.push(mentor);
    }

    pub(crate) fn replace_wish_list(&mut self, mentors: Vec<MentorId>) {
        self.wish_list = mentors;
    }
}

impl HasWishList for Student {
    type Target = MentorId;

    fn wish_list(&self) -> &[MentorId] {
        &self.wish_list
    }
}
