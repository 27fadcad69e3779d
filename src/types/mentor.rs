//! Mentor entity and the assignments the matching engine writes onto it.

use rust_decimal::Decimal;

use crate::types::{HasWishList, StudentId};

/// A student matched to a mentor, with the combined score of the pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub student: StudentId,
    pub score: Decimal,
}

/// A mentor: a ranked wish list of students and the assignment results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mentor {
    name: String,
    wish_list: Vec<StudentId>,
    students: Vec<Assignment>,
}

impl Mentor {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            wish_list: Vec::new(),
            students: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Students assigned by the matching engine, in assignment order.
    ///
    /// Every engine run appends; nothing is cleared until
    /// [`Cohort::reset_assignments`](crate::Cohort::reset_assignments).
    pub fn students(&self) -> &[Assignment] {
        &self.students
    }

    pub(crate) fn push_assignment(&mut self, assignment: Assignment) {
        self.students.push(assignment);
    }

    pub(crate) fn clear_assignments(&mut self) {
        self.students.clear();
    }

    pub(crate) fn push_wish(&mut self, student: StudentId) {
        self.wish_list.push(student);
    }

    pub(crate) fn replace_wish_list(&mut self, students: Vec<StudentId>) {
        self.wish_list = students;
    }
}

impl HasWishList for Mentor {
    type Target = StudentId;

    fn wish_list(&self) -> &[StudentId] {
        &self.wish_list
    }
}
