//! An open family tree: the graph plus the store it came from.

use crate::config::TreeProfile;
use crate::error::Result;
use kinship_domain::traits::FamilyStore;
use kinship_domain::{FamilyGraph, Result as GraphResult};
use kinship_store::JsonStore;
use tracing::info;

/// The tree being edited.
///
/// Tracks whether the graph changed since it was loaded or last saved.
pub struct Session {
    store: JsonStore,
    graph: FamilyGraph,
    dirty: bool,
}

impl Session {
    /// Open the tree described by `profile`, starting empty if it was never saved.
    pub fn open(profile: &TreeProfile) -> Result<Self> {
        let store = JsonStore::new(&profile.info_path, &profile.relationships_path);
        let graph = store.load_or_default()?;
        info!(nodes = graph.len(), "Opened family tree");
        Ok(Self {
            store,
            graph,
            dirty: false,
        })
    }

    /// The graph, read-only.
    pub fn graph(&self) -> &FamilyGraph {
        &self.graph
    }

    /// Apply a change to the graph.
    ///
    /// The session is marked as changed only if `change` succeeds. Graph
    /// operations validate before mutating, so a rejected change leaves both
    /// the graph and the dirty flag as they were.
    pub fn edit<T>(&mut self, change: impl FnOnce(&mut FamilyGraph) -> GraphResult<T>) -> Result<T> {
        let value = change(&mut self.graph)?;
        self.dirty = true;
        Ok(value)
    }

    /// True if there are unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Where the tree is stored.
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Write the tree to its files.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.graph)?;
        self.dirty = false;
        Ok(())
    }
}
