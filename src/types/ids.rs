//! Typed entity identifiers.
//!
//! Each id wraps the slab key its entity was registered under. Registries
//! never remove entries, so keys are dense and ordered by creation.

use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            /// Wrap a raw registry key
            #[inline]
            pub const fn new(key: usize) -> Self {
                Self(key)
            }

            /// The raw registry key
            #[inline]
            pub const fn key(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`Student`](crate::types::Student)
    StudentId,
    "student"
);
entity_id!(
    /// Identifier of a [`Mentor`](crate::types::Mentor)
    MentorId,
    "mentor"
);
entity_id!(
    /// Identifier of a [`Team`](crate::types::Team)
    TeamId,
    "team"
);
entity_id!(
    /// Identifier of a [`Task`](crate::types::Task)
    TaskId,
    "task"
);
