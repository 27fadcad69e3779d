//! Error type shared by every cohort operation.
//!
//! All errors are raised synchronously by the operation that detected them.
//! Operations validate before mutating, so a returned error means nothing
//! was changed by that call.

use thiserror::Error;

use crate::types::{StudentId, TeamId};

/// Errors produced by the entity model and the matching engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CohortError {
    /// Empty required text, or an id this cohort never issued.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The task already has an owner, or already carries a mark.
    #[error("ownership conflict: {0}")]
    OwnershipConflict(String),

    /// Team-scoped data was requested for a student without a team.
    #[error("{0} is not a team member")]
    MembershipRequired(StudentId),

    /// Mark outside the inclusive range 0..=5.
    #[error("expected mark to be an integer from 0 to 5, got {0}")]
    InvalidMark(i64),

    /// Raised under [`MembershipPolicy::Exclusive`](crate::config::MembershipPolicy)
    /// when the student already belongs to a team.
    #[error("{student} already belongs to {team}")]
    AlreadyMember { student: StudentId, team: TeamId },

    /// SSZ encoding failed while computing a state root.
    #[error("failed to encode assignment record: {0}")]
    Encoding(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, CohortError>;
