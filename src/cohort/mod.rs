//! Cohort: entity registries and relationship operations.
//!
//! ## Architecture
//!
//! A [`Cohort`] is a caller-owned value holding one append-only registry per
//! entity kind. Independent cohorts never share state, so several
//! simulations (or tests) can run side by side.
//!
//! ## Components
//!
//! - `registry`: construction, lookup, enumeration, assignment results
//! - `membership`: team membership under the configured policy
//! - `tasks`: task ownership, marks and task queries
//! - `wishes`: wish-list population
//!
//! ## Invariants
//!
//! | Relation | Rule |
//! |----------|------|
//! | Task owner | write-once, student or team |
//! | Task mark | write-once, `0..=5`, sets done |
//! | Membership | both sides updated together |
//! | Registries | insert only, creation order |
//!
//! Every operation validates before mutating; an error leaves the cohort
//! unchanged.

mod membership;
mod registry;
mod tasks;
mod wishes;

pub use registry::Cohort;
