//! The family graph: node registry, mutation and queries

use crate::traits::HasChildren;
use crate::{
    GraphError, IdAllocator, Individual, Node, NodeId, NodeKind, Pairing, PartialDate, PersonInfo,
    Result,
};
use std::collections::{BTreeMap, BTreeSet};

/// Individuals and pairings joined by parent/child and membership edges
///
/// The id → node map is the only owner of nodes. Nodes are created only
/// through this type and are never removed. `root` is the first individual
/// ever registered.
///
/// # Examples
///
/// ```
/// use kinship_domain::{FamilyGraph, HasChildren};
///
/// let mut graph = FamilyGraph::new();
/// let tom = graph.create_individual("Tom", "Jones", None, None).unwrap().id();
/// let linda = graph.create_individual("Linda", "Adams", None, None).unwrap().id();
/// let couple = graph.create_pairing(&[tom, linda], None).unwrap().id();
/// let suzan = graph.create_individual("Suzan", "Jones", None, None).unwrap().id();
///
/// graph.add_child(couple, suzan).unwrap();
/// assert_eq!(graph.display_name(couple).unwrap(), "Tom Jones and Linda Adams");
/// assert!(graph.pairing(couple).unwrap().children().contains(&suzan));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FamilyGraph {
    nodes: BTreeMap<NodeId, Node>,
    ids: IdAllocator,
    root: Option<NodeId>,
}

impl FamilyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a person with a freshly allocated (odd) id
    ///
    /// # Errors
    /// `IdSpaceExhausted` if no odd id above every known one is left.
    pub fn create_individual(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth: Option<PartialDate>,
        death: Option<PartialDate>,
    ) -> Result<&Individual> {
        let id = self.ids.next_individual()?;
        Ok(self.register_individual(PersonInfo::new(id, first_name, last_name, birth, death)))
    }

    /// Register a person whose id was issued elsewhere (used when loading)
    ///
    /// # Errors
    /// `KindMismatch` if the id is not odd, `DuplicateId` if it is taken.
    pub fn add_individual(&mut self, info: PersonInfo) -> Result<&Individual> {
        if info.id.kind() != NodeKind::Individual {
            return Err(GraphError::KindMismatch {
                id: info.id,
                expected: NodeKind::Individual,
            });
        }
        if self.nodes.contains_key(&info.id) {
            return Err(GraphError::DuplicateId(info.id));
        }
        self.ids.observe(info.id);
        Ok(self.register_individual(info))
    }

    fn register_individual(&mut self, info: PersonInfo) -> &Individual {
        let id = info.id;
        if self.root.is_none() {
            self.root = Some(id);
        }
        match self
            .nodes
            .entry(id)
            .or_insert(Node::Individual(Individual::new(info)))
        {
            Node::Individual(person) => &*person,
            // Callers have already checked that `id` is odd and unregistered.
            Node::Pairing(_) => unreachable!("odd ids never name pairings"),
        }
    }

    /// Join two individuals in a pairing
    ///
    /// Allocates an even id unless `id` is supplied. Each member gains the
    /// pairing in its `pairings` set.
    ///
    /// # Errors
    /// `InvalidCardinality` unless `members` holds exactly two distinct ids;
    /// `NotFound` / `KindMismatch` if a member is not a registered individual;
    /// `KindMismatch` / `DuplicateId` for a bad supplied id;
    /// `IdSpaceExhausted` if no even id is left to allocate.
    pub fn create_pairing(&mut self, members: &[NodeId], id: Option<NodeId>) -> Result<&Pairing> {
        let distinct: BTreeSet<NodeId> = members.iter().copied().collect();
        if members.len() != 2 || distinct.len() != 2 {
            return Err(GraphError::InvalidCardinality {
                expected: 2,
                actual: distinct.len(),
            });
        }
        let members = [members[0], members[1]];
        for member in members {
            self.individual(member)?;
        }

        let id = match id {
            Some(id) => {
                if id.kind() != NodeKind::Pairing || id.value() == 0 {
                    return Err(GraphError::KindMismatch {
                        id,
                        expected: NodeKind::Pairing,
                    });
                }
                if self.nodes.contains_key(&id) {
                    return Err(GraphError::DuplicateId(id));
                }
                self.ids.observe(id);
                id
            }
            None => self.ids.next_pairing()?,
        };

        for member in members {
            if let Some(Node::Individual(person)) = self.nodes.get_mut(&member) {
                person.pairings.insert(id);
            }
        }
        match self
            .nodes
            .entry(id)
            .or_insert(Node::Pairing(Pairing::new(id, members)))
        {
            Node::Pairing(pairing) => Ok(&*pairing),
            Node::Individual(_) => unreachable!("even ids never name individuals"),
        }
    }

    /// Record that `child` descends from the pairing `parent`
    ///
    /// Repeating an existing edge is a no-op.
    ///
    /// # Errors
    /// `NotFound` for unknown ids, `KindMismatch` unless `parent` is a pairing
    /// and `child` an individual, `ParentConflict` if the child already
    /// descends from a different pairing.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check_child_edge(parent, child)?;
        self.link(parent, child);
        Ok(())
    }

    /// Attach several children to one pairing, all or nothing
    ///
    /// Every edge is validated before any is applied, so on error the graph
    /// is unchanged.
    pub fn add_children(&mut self, parent: NodeId, children: &[NodeId]) -> Result<()> {
        for child in children {
            self.check_child_edge(parent, *child)?;
        }
        for child in children {
            self.link(parent, *child);
        }
        Ok(())
    }

    fn check_child_edge(&self, parent: NodeId, child: NodeId) -> Result<()> {
        self.pairing(parent)?;
        let person = self.individual(child)?;
        match person.parent {
            Some(existing) if existing != parent => Err(GraphError::ParentConflict {
                child,
                existing,
                requested: parent,
            }),
            _ => Ok(()),
        }
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        if let Some(Node::Individual(person)) = self.nodes.get_mut(&child) {
            person.parent = Some(parent);
        }
        if let Some(Node::Pairing(pairing)) = self.nodes.get_mut(&parent) {
            pairing.children.insert(child);
        }
    }

    /// Look up a node of either kind
    pub fn lookup(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(&id).ok_or(GraphError::NotFound(id))
    }

    /// Look up a node that must be an individual
    pub fn individual(&self, id: NodeId) -> Result<&Individual> {
        self.lookup(id)?
            .as_individual()
            .ok_or(GraphError::KindMismatch {
                id,
                expected: NodeKind::Individual,
            })
    }

    /// Look up a node that must be a pairing
    pub fn pairing(&self, id: NodeId) -> Result<&Pairing> {
        self.lookup(id)?.as_pairing().ok_or(GraphError::KindMismatch {
            id,
            expected: NodeKind::Pairing,
        })
    }

    /// The two members of the pairing an individual descends from
    pub fn parents_of(&self, id: NodeId) -> Result<Option<[NodeId; 2]>> {
        match self.individual(id)?.parent {
            Some(parent) => Ok(Some(self.pairing(parent)?.members())),
            None => Ok(None),
        }
    }

    /// Human-facing name: "First Last" or "First Last and First Last"
    pub fn display_name(&self, id: NodeId) -> Result<String> {
        match self.lookup(id)? {
            Node::Individual(person) => Ok(person.display_name()),
            Node::Pairing(pairing) => {
                let [a, b] = pairing.members();
                Ok(format!(
                    "{} and {}",
                    self.individual(a)?.display_name(),
                    self.individual(b)?.display_name()
                ))
            }
        }
    }

    /// Every node id mapped to its display name
    pub fn basic_index(&self) -> Result<BTreeMap<NodeId, String>> {
        self.nodes
            .keys()
            .map(|id| -> Result<(NodeId, String)> { Ok((*id, self.display_name(*id)?)) })
            .collect()
    }

    /// First individual ever registered
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// True if a node is registered under `id`
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of nodes of both kinds
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All individuals in id order
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.nodes.values().filter_map(Node::as_individual)
    }

    /// All pairings in id order
    pub fn pairings(&self) -> impl Iterator<Item = &Pairing> {
        self.nodes.values().filter_map(Node::as_pairing)
    }

    /// Children of any node (empty for individuals)
    pub fn children_of(&self, id: NodeId) -> Result<&BTreeSet<NodeId>> {
        Ok(self.lookup(id)?.children())
    }
}
