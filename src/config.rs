//! Cohort configuration.
//!
//! Capacity hints pre-allocate the four registries (the same knob the
//! registries' slabs expose through `Slab::with_capacity`), and the
//! membership policy decides what happens when a student who already has a
//! team joins another one.

/// What to do when a student who already has a team joins a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MembershipPolicy {
    /// Overwrite the student's team reference. The previous team keeps the
    /// student in its member list.
    #[default]
    Permissive,
    /// Refuse with [`CohortError::AlreadyMember`](crate::CohortError::AlreadyMember).
    Exclusive,
}

impl MembershipPolicy {
    #[inline]
    pub fn is_exclusive(self) -> bool {
        matches!(self, MembershipPolicy::Exclusive)
    }
}

/// Construction-time settings for a [`Cohort`](crate::Cohort).
///
/// ## Example
///
/// ```
/// use mentor_match::{Cohort, CohortConfig, MembershipPolicy};
///
/// let config = CohortConfig {
///     membership: MembershipPolicy::Exclusive,
///     ..CohortConfig::with_capacity(64)
/// };
/// let cohort = Cohort::with_config(config);
/// assert_eq!(cohort.config().membership, MembershipPolicy::Exclusive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CohortConfig {
    /// Pre-allocated student slots
    pub student_capacity: usize,
    /// Pre-allocated mentor slots
    pub mentor_capacity: usize,
    /// Pre-allocated team slots
    pub team_capacity: usize,
    /// Pre-allocated task slots
    pub task_capacity: usize,
    /// Team re-parenting behaviour
    pub membership: MembershipPolicy,
}

impl CohortConfig {
    /// Same capacity hint for every registry, default policy.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            student_capacity: capacity,
            mentor_capacity: capacity,
            team_capacity: capacity,
            task_capacity: capacity,
            membership: MembershipPolicy::default(),
        }
    }
}
