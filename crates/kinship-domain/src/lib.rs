//! Kinship Domain Layer
//!
//! This crate contains the in-memory family graph and the value types it is
//! built from. It knows nothing about files, terminals or logging; those live
//! in `kinship-store` and `kinship-cli`.
//!
//! ## Key Concepts
//!
//! - **Individual**: a node wrapping one person's biographical facts
//! - **Pairing**: a node joining exactly two individuals; children descend from it
//! - **NodeId**: one identifier space for both kinds, partitioned by parity
//!   (odd = individual, even = pairing)
//! - **PartialDate**: a date whose year, month or day may each be unknown
//!
//! ## Architecture
//!
//! - Nodes reference each other only by [`NodeId`]
//! - [`FamilyGraph`] owns every node and the identifier allocator
//! - Persistence is expressed through the [`traits::FamilyStore`] trait

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod date;
pub mod error;
pub mod graph;
pub mod id;
pub mod node;
pub mod person;
pub mod traits;
pub mod traversal;

// Re-exports for convenience
pub use date::PartialDate;
pub use error::{GraphError, Result};
pub use graph::FamilyGraph;
pub use id::{IdAllocator, NodeId, NodeKind};
pub use node::{Individual, Node, Pairing};
pub use person::PersonInfo;
pub use traits::HasChildren;
pub use traversal::connected_component;
