//! Wish-list population.
//!
//! Entries must name entities of this cohort. Duplicates are accepted and
//! count toward the list length; rank is the first occurrence.

use crate::cohort::registry::unknown;
use crate::cohort::Cohort;
use crate::error::Result;
use crate::types::{MentorId, StudentId};

impl Cohort {
    /// Append `mentor` to the student's wish list.
    pub fn add_student_wish(&mut self, student: StudentId, mentor: MentorId) -> Result<()> {
        self.mentor(mentor)?;
        self.students
            .get_mut(student.key())
            .ok_or_else(|| unknown(student))?
            .push_wish(mentor);
        Ok(())
    }

    /// Append `student` to the mentor's wish list.
    pub fn add_mentor_wish(&mut self, mentor: MentorId, student: StudentId) -> Result<()> {
        self.student(student)?;
        self.mentors
            .get_mut(mentor.key())
            .ok_or_else(|| unknown(mentor))?
            .push_wish(student);
        Ok(())
    }

    /// Replace the student's wish list, most wanted first.
    ///
    /// ```
    /// use mentor_match::Cohort;
    /// use mentor_match::types::HasWishList;
    ///
    /// let mut cohort = Cohort::new();
    /// let ada = cohort.add_student("Ada", None).unwrap();
    /// let x = cohort.add_mentor("X").unwrap();
    /// let y = cohort.add_mentor("Y").unwrap();
    ///
    /// cohort.set_student_wish_list(ada, [y, x]).unwrap();
    /// assert_eq!(cohort.student(ada).unwrap().rank_of(x), Some(1));
    /// ```
    pub fn set_student_wish_list(
        &mut self,
        student: StudentId,
        mentors: impl IntoIterator<Item = MentorId>,
    ) -> Result<()> {
        let mentors: Vec<MentorId> = mentors.into_iter().collect();
        for &mentor in &mentors {
            self.mentor(mentor)?;
        }
        self.students
            .get_mut(student.key())
            .ok_or_else(|| unknown(student))?
            .replace_wish_list(mentors);
        Ok(())
    }

    /// Replace the mentor's wish list, most wanted first.
    pub fn set_mentor_wish_list(
        &mut self,
        mentor: MentorId,
        students: impl IntoIterator<Item = StudentId>,
    ) -> Result<()> {
        let students: Vec<StudentId> = students.into_iter().collect();
        for &student in &students {
            self.student(student)?;
        }
        self.mentors
            .get_mut(mentor.key())
            .ok_or_else(|| unknown(mentor))?
            .replace_wish_list(students);
        Ok(())
    }
}
