//! Pattern identifiers.
//!
//! Patterns are identified by their position in the input sequence handed
//! to the automaton builder. Callers map an id back to the original bytes
//! through that same sequence.

/// A lightweight handle to an input pattern.
///
/// Ordering is by insertion position, so sorting a match result yields
/// ascending pattern indices.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
#[serde(transparent)]
pub struct PatternId(u32);

impl PatternId {
    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Index into the caller's pattern sequence.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Create a PatternId from a position in the pattern sequence.
    ///
    /// # Panics
    /// Panics if `index` exceeds `u32::MAX`.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self(crate::invariants::ensure_u32_index(index, "PatternId"))
    }
}

impl PartialOrd for PatternId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PatternId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl std::fmt::Display for PatternId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}
