//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{FamilyGraph, NodeId};
use std::collections::BTreeSet;

/// Nodes that children can descend from
pub trait HasChildren {
    /// Direct children, in id order
    fn children(&self) -> &BTreeSet<NodeId>;
}

/// Trait for persisting and restoring a whole family graph
///
/// Implemented by the infrastructure layer (kinship-store)
pub trait FamilyStore {
    /// Error type for store operations
    type Error;

    /// Write the graph, replacing whatever was stored before
    fn save(&self, graph: &FamilyGraph) -> Result<(), Self::Error>;

    /// Read a graph back
    fn load(&self) -> Result<FamilyGraph, Self::Error>;
}
