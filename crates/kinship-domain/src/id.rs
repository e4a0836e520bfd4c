//! Node identifiers and their allocation
//!
//! Individuals and pairings share one identifier space. Parity is the kind
//! tag: odd identifiers name individuals, even identifiers name pairings.
//! This lets a serialized relationship record be interpreted without a
//! stored type field.

use crate::GraphError;
use std::fmt;
use std::str::FromStr;

/// Identifier of a node in the family graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Wrap a raw identifier value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Kind of node this identifier names, derived from its parity
    pub fn kind(&self) -> NodeKind {
        IdAllocator::classify(*self)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| format!("Invalid node id '{}': {}", s, e))
    }
}

/// The two kinds of node in the family graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A person
    Individual,

    /// A union of exactly two individuals
    Pairing,
}

impl NodeKind {
    /// Lowercase name for messages
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Individual => "individual",
            NodeKind::Pairing => "pairing",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issues kind-partitioned, monotonically increasing identifiers
///
/// Individual ids run 1, 3, 5, ... and pairing ids run 2, 4, 6, ...; the two
/// counters are independent. One allocator is owned by each
/// [`FamilyGraph`](crate::FamilyGraph).
///
/// # Examples
///
/// ```
/// use kinship_domain::IdAllocator;
///
/// let mut ids = IdAllocator::new();
/// assert_eq!(ids.next_individual().unwrap().value(), 1);
/// assert_eq!(ids.next_individual().unwrap().value(), 3);
/// assert_eq!(ids.next_pairing().unwrap().value(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last_individual: Option<u64>,
    last_pairing: Option<u64>,
}

impl IdAllocator {
    /// Create an allocator that has issued nothing yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Next individual identifier (always odd)
    ///
    /// # Errors
    /// `IdSpaceExhausted` once the largest odd `u64` has been issued or observed.
    pub fn next_individual(&mut self) -> crate::Result<NodeId> {
        let id = Self::step(self.last_individual, 1, NodeKind::Individual)?;
        self.last_individual = Some(id);
        Ok(NodeId(id))
    }

    /// Next pairing identifier (always even)
    ///
    /// # Errors
    /// `IdSpaceExhausted` once the largest even `u64` has been issued or observed.
    pub fn next_pairing(&mut self) -> crate::Result<NodeId> {
        let id = Self::step(self.last_pairing, 2, NodeKind::Pairing)?;
        self.last_pairing = Some(id);
        Ok(NodeId(id))
    }

    fn step(last: Option<u64>, first: u64, kind: NodeKind) -> crate::Result<u64> {
        match last {
            None => Ok(first),
            Some(last) => last.checked_add(2).ok_or(GraphError::IdSpaceExhausted(kind)),
        }
    }

    /// Classify an identifier by parity
    pub fn classify(id: NodeId) -> NodeKind {
        if id.0 % 2 == 0 {
            NodeKind::Pairing
        } else {
            NodeKind::Individual
        }
    }

    /// Record an identifier issued elsewhere (e.g. read from disk)
    ///
    /// Advances the matching counter so that later allocations never reissue
    /// `id` or anything below it.
    pub fn observe(&mut self, id: NodeId) {
        let last = match Self::classify(id) {
            NodeKind::Individual => &mut self.last_individual,
            NodeKind::Pairing => &mut self.last_pairing,
        };
        if last.map_or(true, |current| id.0 > current) {
            *last = Some(id.0);
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: individual ids are odd and step by exactly 2
        #[test]
        fn test_individual_ids_odd_and_increasing(n in 1usize..200) {
            let mut ids = IdAllocator::new();
            let issued: Vec<u64> = (0..n).map(|_| ids.next_individual().unwrap().value()).collect();

            prop_assert_eq!(issued[0], 1);
            for pair in issued.windows(2) {
                prop_assert_eq!(pair[1], pair[0] + 2);
            }
            prop_assert!(issued.iter().all(|id| id % 2 == 1));
        }

        /// Property: pairing ids are even and step by exactly 2
        #[test]
        fn test_pairing_ids_even_and_increasing(n in 1usize..200) {
            let mut ids = IdAllocator::new();
            let issued: Vec<u64> = (0..n).map(|_| ids.next_pairing().unwrap().value()).collect();

            prop_assert_eq!(issued[0], 2);
            for pair in issued.windows(2) {
                prop_assert_eq!(pair[1], pair[0] + 2);
            }
            prop_assert!(issued.iter().all(|id| id % 2 == 0));
        }

        /// Property: after observing an id, no later allocation reuses it
        #[test]
        fn test_observe_never_reissues(seen in prop::collection::vec(1u64..10_000, 1..50)) {
            let mut ids = IdAllocator::new();
            for value in &seen {
                ids.observe(NodeId(*value));
            }
            let fresh_person = ids.next_individual().unwrap().value();
            let fresh_pairing = ids.next_pairing().unwrap().value();

            prop_assert!(!seen.contains(&fresh_person));
            prop_assert!(!seen.contains(&fresh_pairing));
        }
    }
}
