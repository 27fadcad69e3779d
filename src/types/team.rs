//! Team entity.

use crate::types::{StudentId, TaskId};

/// A named group of students sharing team-owned tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    name: String,
    students: Vec<StudentId>,
    tasks: Vec<TaskId>,
}

impl Team {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            students: Vec::new(),
            tasks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in join order.
    ///
    /// Under the permissive membership policy a student who later moved to
    /// another team is still listed here.
    pub fn students(&self) -> &[StudentId] {
        &self.students
    }

    /// Team-owned tasks in assignment order.
    pub fn tasks(&self) -> &[TaskId] {
        &self.tasks
    }

    pub(crate) fn push_student(&mut self, student: StudentId) {
        self.students.push(student);
    }

    pub(crate) fn push_task(&mut self, task: TaskId) {
        self.tasks.push(task);
    }
}
