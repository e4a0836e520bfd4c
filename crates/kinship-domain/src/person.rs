//! Biographical records

use crate::{NodeId, PartialDate};

/// Biographical facts about one person
///
/// `death == None` means the end-of-life date is unrecorded. Whether the
/// person is alive or the date is simply unknown is decided at the input
/// layer and not preserved here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonInfo {
    /// Identifier of the individual node this record belongs to
    pub id: NodeId,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Date of birth, if recorded
    pub birth: Option<PartialDate>,

    /// Date of death, if recorded
    pub death: Option<PartialDate>,
}

impl PersonInfo {
    /// Create a new person record
    pub fn new(
        id: NodeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth: Option<PartialDate>,
        death: Option<PartialDate>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth,
            death,
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
