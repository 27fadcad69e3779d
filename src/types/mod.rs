//! Entity and value types.
//!
//! ## Types
//!
//! - [`Student`], [`Mentor`], [`Team`], [`Task`]: the four entity kinds
//! - [`StudentId`], [`MentorId`], [`TeamId`], [`TaskId`]: typed registry keys
//! - [`TaskOwner`] / [`Ownable`]: who may own a task
//! - [`HasWishList`]: ranked preferences over the opposite entity kind
//! - [`Assignment`]: a matched student on a mentor
//! - [`MatchReceipt`] / [`AssignmentRecord`]: deterministic run summary
//!
//! Entities reference each other by id only; the [`Cohort`](crate::Cohort)
//! owns the data and keeps both sides of every relation consistent.

mod ids;
mod mentor;
mod receipt;
mod student;
mod task;
mod team;
mod wish;
pub mod score;

pub use ids::{MentorId, StudentId, TaskId, TeamId};
pub use mentor::{Assignment, Mentor};
pub use receipt::{AssignmentRecord, MatchReceipt};
pub use student::Student;
pub use task::{Mark, Ownable, Task, TaskOwner, TaskType};
pub use team::Team;
pub use wish::HasWishList;
