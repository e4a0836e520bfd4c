//! Kinship Storage Layer
//!
//! Implements the FamilyStore trait over two linked JSON documents:
//!
//! - **info**: an array of person records (`person_id`, names, `birth`, `death`)
//! - **relationships**: an object keyed by stringified node id. Odd keys hold
//!   `{direct_children, pairings_or_couples, parent}`, even keys hold
//!   `{direct_children, members}`. There is no type field; the key's parity
//!   says which shape to expect.
//!
//! # Examples
//!
//! ```no_run
//! use kinship_domain::traits::FamilyStore;
//! use kinship_store::JsonStore;
//!
//! let store = JsonStore::new("family_info.json", "family_relationships.json");
//! let graph = store.load().unwrap();
//! store.save(&graph).unwrap();
//! ```

#![warn(missing_docs)]

pub mod error;
mod records;

pub use error::{Result, StoreError};

use kinship_domain::traits::FamilyStore;
use kinship_domain::{FamilyGraph, NodeId, NodeKind, PersonInfo};
use records::{IndividualRecord, PairingRecord, PersonRecord, RelationshipRecord};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// File-backed store for one family tree
///
/// Whole-file reads and writes. Each save goes to a temporary file beside
/// the target and is renamed into place, so a crash never leaves a truncated
/// document behind.
#[derive(Debug, Clone)]
pub struct JsonStore {
    info_path: PathBuf,
    relationships_path: PathBuf,
}

impl JsonStore {
    /// Create a store over the given pair of documents
    pub fn new(info_path: impl Into<PathBuf>, relationships_path: impl Into<PathBuf>) -> Self {
        Self {
            info_path: info_path.into(),
            relationships_path: relationships_path.into(),
        }
    }

    /// Path of the info document
    pub fn info_path(&self) -> &Path {
        &self.info_path
    }

    /// Path of the relationships document
    pub fn relationships_path(&self) -> &Path {
        &self.relationships_path
    }

    /// True if the info document exists (a tree has been saved before)
    pub fn exists(&self) -> bool {
        self.info_path.exists()
    }

    /// Load the tree if it has been saved before, otherwise start empty
    pub fn load_or_default(&self) -> Result<FamilyGraph> {
        if self.exists() {
            self.load()
        } else {
            info!(path = %self.info_path.display(), "No saved tree; starting empty");
            Ok(FamilyGraph::new())
        }
    }

    fn write_info(&self, graph: &FamilyGraph) -> Result<usize> {
        let records: Vec<PersonRecord> = graph
            .individuals()
            .map(|person| PersonRecord::from(person.info()))
            .collect();
        write_json(&self.info_path, &records)?;
        Ok(records.len())
    }

    fn write_relationships(&self, graph: &FamilyGraph) -> Result<usize> {
        let mut records: BTreeMap<u64, RelationshipRecord> = BTreeMap::new();
        for person in graph.individuals() {
            debug!(id = %person.id(), "Writing individual record");
            records.insert(
                person.id().value(),
                RelationshipRecord::Individual(IndividualRecord::from(person)),
            );
        }
        for pairing in graph.pairings() {
            debug!(id = %pairing.id(), "Writing pairing record");
            records.insert(
                pairing.id().value(),
                RelationshipRecord::Pairing(PairingRecord::from(pairing)),
            );
        }
        write_json(&self.relationships_path, &records)?;
        Ok(records.len())
    }

    fn read_info(&self) -> Result<BTreeMap<NodeId, PersonInfo>> {
        let records: Vec<PersonRecord> = serde_json::from_str(&fs::read_to_string(&self.info_path)?)?;
        info!(path = %self.info_path.display(), count = records.len(), "Read family info");

        let mut infos = BTreeMap::new();
        for record in records {
            let id = NodeId::new(record.person_id);
            if id.kind() != NodeKind::Individual {
                return Err(StoreError::invalid(id, "person_id must be odd"));
            }
            if infos.insert(id, PersonInfo::from(record)).is_some() {
                return Err(StoreError::invalid(id, "person_id appears more than once"));
            }
        }
        Ok(infos)
    }

    fn read_relationships(&self) -> Result<Relationships> {
        let raw: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(&fs::read_to_string(&self.relationships_path)?)?;
        info!(
            path = %self.relationships_path.display(),
            count = raw.len(),
            "Read family relationships"
        );

        let mut relationships = Relationships::default();
        for (key, value) in raw {
            let id = parse_key(&key)?;
            match id.kind() {
                NodeKind::Individual => {
                    let record: IndividualRecord = serde_json::from_value(value)
                        .map_err(|e| StoreError::invalid(&key, format!("not an individual record: {}", e)))?;
                    if !record.direct_children.is_empty() {
                        return Err(StoreError::invalid(
                            &key,
                            "individuals cannot hold direct children; attach them to a pairing",
                        ));
                    }
                    relationships.individuals.insert(id, record);
                }
                NodeKind::Pairing => {
                    let record: PairingRecord = serde_json::from_value(value)
                        .map_err(|e| StoreError::invalid(&key, format!("not a pairing record: {}", e)))?;
                    relationships.pairings.insert(id, record);
                }
            }
        }
        Ok(relationships)
    }
}

/// Relationship records split by kind, each in ascending id order
#[derive(Default)]
struct Relationships {
    individuals: BTreeMap<NodeId, IndividualRecord>,
    pairings: BTreeMap<NodeId, PairingRecord>,
}

impl FamilyStore for JsonStore {
    type Error = StoreError;

    fn save(&self, graph: &FamilyGraph) -> Result<()> {
        let people = self.write_info(graph)?;
        info!(path = %self.info_path.display(), count = people, "Wrote family info");

        let records = self.write_relationships(graph)?;
        info!(
            path = %self.relationships_path.display(),
            count = records,
            "Wrote family relationships"
        );
        Ok(())
    }

    /// Rebuild the graph in three passes: every individual (ascending id, so
    /// the lowest id becomes root), then every pairing with its children,
    /// then each individual's own `parent` edge.
    fn load(&self) -> Result<FamilyGraph> {
        let mut infos = self.read_info()?;
        let relationships = self.read_relationships()?;
        let mut graph = FamilyGraph::new();

        let ids: BTreeSet<NodeId> = relationships
            .individuals
            .keys()
            .chain(infos.keys())
            .copied()
            .collect();
        for id in ids {
            let info = infos.remove(&id).ok_or(kinship_domain::GraphError::NotFound(id))?;
            if !relationships.individuals.contains_key(&id) {
                warn!(%id, "Person has no relationships record; loading without edges");
            }
            debug!(%id, "Registering individual");
            graph.add_individual(info)?;
        }

        for (id, record) in &relationships.pairings {
            let members: Vec<NodeId> = record.members.iter().copied().map(NodeId::new).collect();
            debug!(%id, ?members, "Registering pairing");
            graph.create_pairing(&members, Some(*id))?;

            let children: Vec<NodeId> = record.direct_children.iter().copied().map(NodeId::new).collect();
            graph.add_children(*id, &children)?;
        }

        for (id, record) in &relationships.individuals {
            if let Some(parent) = record.parent {
                graph.add_child(NodeId::new(parent), *id)?;
            }
            for pairing in &record.pairings_or_couples {
                let pairing = NodeId::new(*pairing);
                if !graph.pairing(pairing)?.has_member(*id) {
                    return Err(StoreError::invalid(
                        id,
                        format!("lists pairing {} but is not one of its members", pairing),
                    ));
                }
            }
        }

        info!(nodes = graph.len(), "Loaded family tree");
        Ok(graph)
    }
}

fn parse_key(key: &str) -> Result<NodeId> {
    match key.parse::<u64>() {
        Ok(0) => Err(StoreError::invalid(key, "0 is not a valid node id")),
        Ok(value) => Ok(NodeId::new(value)),
        Err(e) => Err(StoreError::invalid(key, format!("key is not a node id: {}", e))),
    }
}

/// Pretty-print `value` to a temp file next to `path`, then rename it over `path`
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("17").unwrap(), NodeId::new(17));
        assert!(matches!(parse_key("0"), Err(StoreError::InvalidFormat { .. })));
        assert!(matches!(parse_key("abc"), Err(StoreError::InvalidFormat { .. })));
        assert!(matches!(parse_key("-3"), Err(StoreError::InvalidFormat { .. })));
    }

    #[test]
    fn test_write_json_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&path, &vec![1, 2, 3]).unwrap();

        let back: Vec<u32> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, vec![1, 2, 3]);
    }
}
