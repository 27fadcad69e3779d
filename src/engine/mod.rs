//! Matching engine.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: same cohort snapshot, same assignments
//! 2. **Exact scores**: decimal arithmetic, no floating point
//! 3. **Synchronous batch**: one pass over S students x M mentors
//! 4. **Mutual interest**: both sides must list each other
//!
//! ## Matching Rules
//!
//! - Highest combined score wins
//! - On a tied total, a candidate wins if its `student_score` beats the
//!   highest one recorded by an earlier tie (initially 0)
//! - Students are matched independently; mentors have no capacity limit
//!
//! ## Example
//!
//! ```
//! use mentor_match::{Cohort, run_matching};
//!
//! let mut cohort = Cohort::new();
//! let ada = cohort.add_student("Ada", None).unwrap();
//! let grace = cohort.add_mentor("Grace").unwrap();
//! cohort.add_student_wish(ada, grace).unwrap();
//! cohort.add_mentor_wish(grace, ada).unwrap();
//!
//! let receipt = run_matching(&mut cohort).unwrap();
//! assert_eq!(receipt.students_assigned, 1);
//! assert_eq!(cohort.mentor(grace).unwrap().students().len(), 1);
//! ```

pub mod matcher;

pub use matcher::{run_matching, Candidate, MatchingEngine, Selection, StudentScan};
