//! Wish-list capability shared by students and mentors.

use rust_decimal::Decimal;

use crate::types::score::score_by_rank;

/// An entity holding a ranked preference list over entities of the
/// opposite kind.
///
/// Rank is the position of the first occurrence. Duplicates are kept and
/// count toward the list length.
pub trait HasWishList {
    /// Id type of the wished-for entities
    type Target: Copy + PartialEq;

    fn wish_list(&self) -> &[Self::Target];

    /// Zero-based position of `target`, `None` when not listed.
    fn rank_of(&self, target: Self::Target) -> Option<usize> {
        self.wish_list().iter().position(|wished| *wished == target)
    }

    /// Desirability of `target` for this entity, see [`score_by_rank`].
    fn score_for(&self, target: Self::Target) -> Decimal {
        score_by_rank(self.wish_list().len(), self.rank_of(target))
    }
}
