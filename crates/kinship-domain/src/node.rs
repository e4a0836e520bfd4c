//! Graph nodes
//!
//! Nodes hold identifiers of their neighbours, never the neighbours
//! themselves. All navigation goes through [`FamilyGraph`](crate::FamilyGraph).

use crate::traits::HasChildren;
use crate::{NodeId, NodeKind, PersonInfo};
use std::collections::BTreeSet;

static NO_CHILDREN: BTreeSet<NodeId> = BTreeSet::new();

/// A person in the family graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub(crate) info: PersonInfo,
    pub(crate) parent: Option<NodeId>,
    pub(crate) pairings: BTreeSet<NodeId>,
}

impl Individual {
    pub(crate) fn new(info: PersonInfo) -> Self {
        Self {
            info,
            parent: None,
            pairings: BTreeSet::new(),
        }
    }

    /// Identifier (same as `info().id`)
    pub fn id(&self) -> NodeId {
        self.info.id
    }

    /// Biographical record
    pub fn info(&self) -> &PersonInfo {
        &self.info
    }

    /// Pairing this individual descends from, if recorded
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Pairings this individual is a member of
    pub fn pairings(&self) -> &BTreeSet<NodeId> {
        &self.pairings
    }

    /// "First Last"
    pub fn display_name(&self) -> String {
        self.info.full_name()
    }
}

/// A union of exactly two individuals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub(crate) id: NodeId,
    pub(crate) members: [NodeId; 2],
    pub(crate) children: BTreeSet<NodeId>,
}

impl Pairing {
    pub(crate) fn new(id: NodeId, members: [NodeId; 2]) -> Self {
        Self {
            id,
            members,
            children: BTreeSet::new(),
        }
    }

    /// Identifier
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The two members, in the order the pairing was created with
    pub fn members(&self) -> [NodeId; 2] {
        self.members
    }

    /// True if `id` is one of the two members
    pub fn has_member(&self, id: NodeId) -> bool {
        self.members.contains(&id)
    }
}

impl HasChildren for Pairing {
    fn children(&self) -> &BTreeSet<NodeId> {
        &self.children
    }
}

/// A node of either kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A person
    Individual(Individual),

    /// A union of two persons
    Pairing(Pairing),
}

impl Node {
    /// Identifier of the wrapped node
    pub fn id(&self) -> NodeId {
        match self {
            Node::Individual(person) => person.id(),
            Node::Pairing(pairing) => pairing.id(),
        }
    }

    /// Kind tag, fixed when the node was constructed
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Individual(_) => NodeKind::Individual,
            Node::Pairing(_) => NodeKind::Pairing,
        }
    }

    /// The wrapped individual, if this is one
    pub fn as_individual(&self) -> Option<&Individual> {
        match self {
            Node::Individual(person) => Some(person),
            Node::Pairing(_) => None,
        }
    }

    /// The wrapped pairing, if this is one
    pub fn as_pairing(&self) -> Option<&Pairing> {
        match self {
            Node::Pairing(pairing) => Some(pairing),
            Node::Individual(_) => None,
        }
    }

    /// Every node joined to this one by a parent, child or membership edge,
    /// ignoring direction
    pub fn neighbors(&self) -> Vec<NodeId> {
        match self {
            Node::Individual(person) => person
                .parent
                .into_iter()
                .chain(person.pairings.iter().copied())
                .collect(),
            Node::Pairing(pairing) => pairing
                .members
                .iter()
                .chain(pairing.children.iter())
                .copied()
                .collect(),
        }
    }
}

impl HasChildren for Node {
    fn children(&self) -> &BTreeSet<NodeId> {
        match self {
            Node::Pairing(pairing) => pairing.children(),
            Node::Individual(_) => &NO_CHILDREN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: u64) -> Individual {
        Individual::new(PersonInfo::new(NodeId::new(id), "Ada", "Byron", None, None))
    }

    #[test]
    fn test_individual_neighbors() {
        let mut ada = person(1);
        ada.parent = Some(NodeId::new(4));
        ada.pairings.insert(NodeId::new(2));

        let node = Node::Individual(ada);
        assert_eq!(node.kind(), NodeKind::Individual);
        assert_eq!(node.neighbors(), vec![NodeId::new(4), NodeId::new(2)]);
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_pairing_neighbors() {
        let mut pairing = Pairing::new(NodeId::new(2), [NodeId::new(3), NodeId::new(1)]);
        pairing.children.insert(NodeId::new(5));

        assert!(pairing.has_member(NodeId::new(3)));
        assert!(!pairing.has_member(NodeId::new(5)));

        let node = Node::Pairing(pairing);
        assert_eq!(
            node.neighbors(),
            vec![NodeId::new(3), NodeId::new(1), NodeId::new(5)]
        );
        assert_eq!(node.children().len(), 1);
    }
}
