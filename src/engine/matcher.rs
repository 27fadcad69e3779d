//! Per-student greedy matcher.
//!
//! ## Algorithm
//!
//! For each student (registry order), every mentor (registry order) is
//! scored from both sides:
//!
//! ```text
//! mentor_score  = score of the mentor in the student's wish list
//! student_score = score of the student in the mentor's wish list
//! total         = round((mentor_score + student_score) / 2, 6)
//! ```
//!
//! A pair where either side scores 0 is skipped. A candidate replaces the
//! current best when its total is strictly greater. On an equal total it
//! replaces the best only if its `student_score` exceeds the highest
//! `student_score` recorded by an earlier tie for this student. That record
//! starts at 0 and is left alone by strict improvements, so the first tie
//! against a best always takes over. The winner receives the student.
//!
//! Students are handled independently: a mentor may collect any number of
//! students, and nothing already assigned is revisited or cleared.

use log::{debug, info};
use rust_decimal::Decimal;

use crate::cohort::Cohort;
use crate::error::Result;
use crate::types::score::combined_score;
use crate::types::{Assignment, HasWishList, MatchReceipt, MentorId, StudentId};

/// A scored mentor for one student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub mentor: MentorId,
    /// How much the student wants the mentor
    pub mentor_score: Decimal,
    /// How much the mentor wants the student
    pub student_score: Decimal,
    pub total: Decimal,
}

/// Best-so-far tracking for one student's scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    best: Option<Candidate>,
    /// Highest `student_score` that won a tie; 0 until a tie is taken
    tie_student_score: Decimal,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current best, if any candidate was accepted
    #[inline]
    pub fn best(&self) -> Option<Candidate> {
        self.best
    }

    /// Offer a candidate. Returns `true` if it became the best.
    pub fn offer(&mut self, candidate: Candidate) -> bool {
        let best_total = self.best.map_or(Decimal::ZERO, |best| best.total);
        if candidate.total > best_total {
            self.best = Some(candidate);
            true
        } else if candidate.total == best_total && candidate.student_score > self.tie_student_score {
            self.tie_student_score = candidate.student_score;
            self.best = Some(candidate);
            true
        } else {
            false
        }
    }
}

/// Outcome of scanning all mentors for one student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentScan {
    pub best: Option<Candidate>,
    /// Mentors that passed the mutual-interest gate
    pub pairs_scored: u64,
}

/// Batch matcher. Holds only a run counter; all state lives in the cohort.
#[derive(Debug, Default)]
pub struct MatchingEngine {
    runs: u64,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed runs
    #[inline]
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Score every mentor for `student` and pick the best.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - unknown student
    pub fn scan(cohort: &Cohort, student: StudentId) -> Result<StudentScan> {
        let entry = cohort.student(student)?;
        let mut selection = Selection::new();
        let mut pairs_scored = 0;

        for (mentor, mentor_entry) in cohort.mentors() {
            let mentor_score = entry.score_for(mentor);
            let student_score = mentor_entry.score_for(student);
            if mentor_score.is_zero() || student_score.is_zero() {
                continue;
            }
            pairs_scored += 1;

            selection.offer(Candidate {
                mentor,
                mentor_score,
                student_score,
                total: combined_score(mentor_score, student_score),
            });
        }

        Ok(StudentScan {
            best: selection.best(),
            pairs_scored,
        })
    }

    /// Assign every student to its best mutually interested mentor.
    ///
    /// Results are appended to each mentor's `students`. Running again
    /// without [`Cohort::reset_assignments`] appends duplicates.
    ///
    /// # Example
    ///
    /// ```
    /// use mentor_match::{Cohort, MatchingEngine};
    ///
    /// let mut cohort = Cohort::new();
    /// let ada = cohort.add_student("Ada", None).unwrap();
    /// let x = cohort.add_mentor("X").unwrap();
    /// let y = cohort.add_mentor("Y").unwrap();
    /// cohort.set_student_wish_list(ada, [x, y]).unwrap();
    /// cohort.set_mentor_wish_list(x, [ada]).unwrap();
    ///
    /// let mut engine = MatchingEngine::new();
    /// let receipt = engine.run(&mut cohort).unwrap();
    ///
    /// assert_eq!(receipt.students_assigned, 1);
    /// assert_eq!(cohort.mentor(x).unwrap().students()[0].student, ada);
    /// assert!(cohort.mentor(y).unwrap().students().is_empty());
    /// ```
    pub fn run(&mut self, cohort: &mut Cohort) -> Result<MatchReceipt> {
        let mut decisions: Vec<(MentorId, Assignment)> = Vec::with_capacity(cohort.student_count());
        let mut pairs_scored = 0;

        // Scoring reads wish lists only, so decide first and write after.
        let students: Vec<StudentId> = cohort.students().map(|(id, _)| id).collect();
        for &student in &students {
            let scan = Self::scan(cohort, student)?;
            pairs_scored += scan.pairs_scored;
            match scan.best {
                Some(best) => {
                    debug!("{student} -> {} (score {})", best.mentor, best.total);
                    decisions.push((
                        best.mentor,
                        Assignment {
                            student,
                            score: best.total,
                        },
                    ));
                }
                None => debug!("{student} has no mutually interested mentor"),
            }
        }

        for &(mentor, assignment) in &decisions {
            cohort.assign_to_mentor(mentor, assignment)?;
        }

        self.runs += 1;
        let receipt = MatchReceipt::new(
            self.runs,
            students.len() as u64,
            decisions.len() as u64,
            pairs_scored,
            cohort.compute_state_root()?,
        );
        info!(
            "matching run {}: {}/{} students assigned, {} pairs scored, root {}",
            receipt.run_id,
            receipt.students_assigned,
            receipt.students_considered,
            receipt.pairs_scored,
            receipt.state_root_hex()
        );
        Ok(receipt)
    }
}

/// One-shot entry point: run a fresh engine over `cohort`.
pub fn run_matching(cohort: &mut Cohort) -> Result<MatchReceipt> {
    MatchingEngine::new().run(cohort)
}

// ============================================================================
// Unit Tests
// ============================================================================
