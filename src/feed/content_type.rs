use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Content visibility flag attached to every feed item.
///
/// A feed carries a *set* of these; the persistence codec stores the set as
/// a compact bitmask via [`ContentType::combine`] and restores it via
/// [`ContentType::decompose`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ContentType {
    Sfw,
    Nsfw,
    Nsfl,
    Nsfp,
    Pol,
}

impl ContentType {
    /// All known flags, in bit order.
    pub const ALL: [ContentType; 5] = [
        ContentType::Sfw,
        ContentType::Nsfw,
        ContentType::Nsfl,
        ContentType::Nsfp,
        ContentType::Pol,
    ];

    /// The bit this flag occupies in a combined mask.
    pub fn flag(self) -> u32 {
        match self {
            ContentType::Sfw => 1,
            ContentType::Nsfw => 2,
            ContentType::Nsfl => 4,
            ContentType::Nsfp => 8,
            ContentType::Pol => 16,
        }
    }

    /// Combines a set of flags into a single bitmask.
    pub fn combine<'a, I>(types: I) -> u32
    where
        I: IntoIterator<Item = &'a ContentType>,
    {
        types.into_iter().fold(0, |bits, t| bits | t.flag())
    }

    /// Splits a bitmask back into the set of known flags.
    ///
    /// Unknown bits are ignored, so `decompose` is total over any `u32`.
    pub fn decompose(bits: u32) -> BTreeSet<ContentType> {
        Self::ALL
            .iter()
            .copied()
            .filter(|t| bits & t.flag() != 0)
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
