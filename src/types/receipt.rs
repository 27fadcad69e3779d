//! Matching receipts and the assignment records they commit to.
//!
//! A [`MatchReceipt`] summarises one matching run. Its state root is a
//! SHA-256 hash over the SSZ encoding of every [`AssignmentRecord`] held by
//! the cohort after the run, so two runs over the same snapshot can be
//! compared byte for byte.

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

/// One mentor/student pairing in fixed-point form.
///
/// ## SSZ Layout
///
/// Fixed-size container of three `u64`: 24 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct AssignmentRecord {
    /// Mentor registry key
    pub mentor: u64,

    /// Student registry key
    pub student: u64,

    /// Combined score scaled by 10^6
    /// Example: 0.75 = 750_000
    pub score_micros: u64,
}

impl AssignmentRecord {
    pub fn new(mentor: u64, student: u64, score_micros: u64) -> Self {
        Self {
            mentor,
            student,
            score_micros,
        }
    }
}

/// Summary of one matching run.
///
/// ## Example
///
/// ```
/// use mentor_match::types::MatchReceipt;
///
/// let receipt = MatchReceipt::new(
///     1,          // run_id
///     10,         // students_considered
///     7,          // students_assigned
///     40,         // pairs_scored
///     [0u8; 32],  // state_root
/// );
/// assert_eq!(receipt.unassigned(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchReceipt {
    /// Sequence number of the run on its engine
    pub run_id: u64,

    /// Students scanned
    pub students_considered: u64,

    /// Students that received a mentor in this run
    pub students_assigned: u64,

    /// Student/mentor pairs that passed the mutual-interest gate
    pub pairs_scored: u64,

    /// SHA-256 over all assignment records after the run (32 bytes)
    pub state_root: [u8; 32],
}

impl MatchReceipt {
    pub fn new(
        run_id: u64,
        students_considered: u64,
        students_assigned: u64,
        pairs_scored: u64,
        state_root: [u8; 32],
    ) -> Self {
        Self {
            run_id,
            students_considered,
            students_assigned,
            pairs_scored,
            state_root,
        }
    }

    /// SHA-256 of `data`.
    pub fn compute_hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }

    /// Get the state root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }

    /// Students left without a mentor
    pub fn unassigned(&self) -> u64 {
        self.students_considered.saturating_sub(self.students_assigned)
    }

    /// Share of considered students that were assigned.
    ///
    /// Returns None if no students were considered.
    pub fn assignment_rate(&self) -> Option<f64> {
        if self.students_considered == 0 {
            None
        } else {
            Some(self.students_assigned as f64 / self.students_considered as f64)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
