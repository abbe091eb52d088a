//! Automaton construction options.

use dictscan_core::PatternId;

use crate::automaton::Automaton;
use crate::links;
use crate::trie::Trie;

/// What a node reports when several input patterns are byte-identical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Only the last duplicate's id is kept; earlier ids are never reported.
    #[default]
    LastWins,
    /// Every duplicate's id is kept and reported.
    KeepAll,
}

/// Builder for `Automaton` instances.
///
/// ```
/// use dictscan_automaton::{Automaton, DuplicatePolicy};
///
/// let ac = Automaton::builder()
///     .duplicates(DuplicatePolicy::KeepAll)
///     .build(["ab", "ab"]);
/// let ids: Vec<_> = ac.matches("xab").iter().map(|p| p.as_usize()).collect();
/// assert_eq!(ids, vec![0, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct AutomatonBuilder {
    duplicates: DuplicatePolicy,
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate-pattern policy.
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn get_duplicates(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Build the automaton: insert every pattern, then compute fail links,
    /// then output links.
    ///
    /// Pattern ids are positions in `patterns`. Empty patterns and
    /// duplicates are accepted.
    ///
    /// # Panics
    /// Panics if the patterns or the trie nodes outnumber `u32::MAX`.
    pub fn build<I, P>(&self, patterns: I) -> Automaton
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let mut trie = Trie::new();
        let mut pattern_count = 0;
        for pattern in patterns {
            trie.insert(
                PatternId::from_index(pattern_count),
                pattern.as_ref(),
                self.duplicates,
            );
            pattern_count += 1;
        }

        let links = links::compute(&trie);
        let automaton = Automaton::from_parts(trie, links, pattern_count);

        #[cfg(debug_assertions)]
        automaton.debug_verify();

        automaton
    }
}
