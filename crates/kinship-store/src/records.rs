//! On-disk record shapes and their conversions to domain types

use kinship_domain::{Individual, NodeId, Pairing, PartialDate, PersonInfo};
use kinship_domain::HasChildren;
use serde::{Deserialize, Serialize};

/// One entry of the info document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonRecord {
    pub person_id: u64,
    pub first_name: String,
    pub last_name: String,
    pub birth: Option<DateRecord>,
    pub death: Option<DateRecord>,
}

/// A partial date; each component may be null
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateRecord {
    pub year: Option<u16>,
    pub month: Option<u8>,
    pub day: Option<u8>,
}

/// Relationships entry for an odd (individual) id
///
/// `direct_children` is kept for format compatibility; individuals never
/// hold children directly, so it is always empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndividualRecord {
    pub direct_children: Vec<u64>,
    pub pairings_or_couples: Vec<u64>,
    pub parent: Option<u64>,
}

/// Relationships entry for an even (pairing) id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PairingRecord {
    pub direct_children: Vec<u64>,
    pub members: Vec<u64>,
}

/// Either relationships entry; the key's parity says which one to expect
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RelationshipRecord {
    Individual(IndividualRecord),
    Pairing(PairingRecord),
}

impl From<PartialDate> for DateRecord {
    fn from(date: PartialDate) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}

impl From<DateRecord> for PartialDate {
    fn from(record: DateRecord) -> Self {
        PartialDate::new(record.year, record.month, record.day)
    }
}

impl From<&PersonInfo> for PersonRecord {
    fn from(info: &PersonInfo) -> Self {
        Self {
            person_id: info.id.value(),
            first_name: info.first_name.clone(),
            last_name: info.last_name.clone(),
            birth: info.birth.map(Into::into),
            death: info.death.map(Into::into),
        }
    }
}

impl From<PersonRecord> for PersonInfo {
    fn from(record: PersonRecord) -> Self {
        PersonInfo::new(
            NodeId::new(record.person_id),
            record.first_name,
            record.last_name,
            record.birth.map(Into::into),
            record.death.map(Into::into),
        )
    }
}

impl From<&Individual> for IndividualRecord {
    fn from(person: &Individual) -> Self {
        Self {
            direct_children: Vec::new(),
            pairings_or_couples: person.pairings().iter().map(NodeId::value).collect(),
            parent: person.parent().map(|id| id.value()),
        }
    }
}

impl From<&Pairing> for PairingRecord {
    fn from(pairing: &Pairing) -> Self {
        Self {
            direct_children: pairing.children().iter().map(NodeId::value).collect(),
            members: pairing.members().iter().map(NodeId::value).collect(),
        }
    }
}
