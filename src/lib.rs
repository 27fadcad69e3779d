//! # Mentor Match
//!
//! Cohort model of students, mentors, teams and tasks, and a one-round
//! assignment of students to mentors from mutually ranked wish lists.
//!
//! ## Architecture
//!
//! - **Types**: entities, typed ids, scoring, receipts
//! - **Cohort**: caller-owned registries and relationship operations
//! - **Engine**: deterministic batch matcher
//!
//! ## Design Principles
//!
//! 1. **Determinism**: identical cohorts produce identical assignments and
//!    state roots
//! 2. **No Floating Point**: scores are exact decimals
//! 3. **No Global State**: every simulation owns its [`Cohort`]
//! 4. **Synchronous Execution**: single pass, no I/O
//!
//! ## Example
//!
//! ```
//! use mentor_match::{Cohort, MatchingEngine};
//!
//! let mut cohort = Cohort::new();
//! let ada = cohort.add_student("Ada", None).unwrap();
//! let alan = cohort.add_student("Alan", None).unwrap();
//! let grace = cohort.add_mentor("Grace").unwrap();
//! let edsger = cohort.add_mentor("Edsger").unwrap();
//!
//! cohort.set_student_wish_list(ada, [grace, edsger]).unwrap();
//! cohort.set_student_wish_list(alan, [edsger]).unwrap();
//! cohort.set_mentor_wish_list(grace, [ada]).unwrap();
//! cohort.set_mentor_wish_list(edsger, [alan, ada]).unwrap();
//!
//! MatchingEngine::new().run(&mut cohort).unwrap();
//!
//! assert_eq!(cohort.mentor(grace).unwrap().students()[0].student, ada);
//! assert_eq!(cohort.mentor(edsger).unwrap().students()[0].student, alan);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Entities, ids, scoring and receipts
pub mod types;

/// Registries and relationship operations
pub mod cohort;

/// Matching engine
pub mod engine;

/// Cohort configuration
pub mod config;

/// Error type
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use cohort::Cohort;
pub use config::{CohortConfig, MembershipPolicy};
pub use engine::{run_matching, MatchingEngine};
pub use error::{CohortError, Result};
pub use types::{
    Assignment, MatchReceipt, Mentor, MentorId, Student, StudentId, Task, TaskId, TaskType, Team,
    TeamId,
};
