//! Property tests for the save/load cycle
//!
//! Random trees (partial dates, overlapping pairings, children) must come
//! back from disk with the same nodes, records and edges.

use kinship_domain::traits::FamilyStore;
use kinship_domain::{FamilyGraph, HasChildren, NodeId, PartialDate};
use kinship_store::JsonStore;
use proptest::prelude::*;
use std::collections::BTreeSet;
use tempfile::TempDir;

type Person = (String, String, Option<PartialDate>, Option<PartialDate>);

fn partial_date() -> impl Strategy<Value = PartialDate> {
    (
        prop::option::of(1000u16..=9999),
        prop::option::of(1u8..=12),
        prop::option::of(1u8..=31),
    )
        .prop_map(|(year, month, day)| PartialDate::new(year, month, day))
}

fn person() -> impl Strategy<Value = Person> {
    (
        "[A-Z][a-z]{0,8}",
        "[A-Z][a-z]{0,8}",
        prop::option::of(partial_date()),
        prop::option::of(partial_date()),
    )
}

/// Register `people`, then pair each (x, y) and try to attach the listed
/// children. Rejected pairings or edges are skipped.
fn build(people: &[Person], unions: &[(usize, usize, Vec<usize>)]) -> FamilyGraph {
    let mut graph = FamilyGraph::new();
    let ids: Vec<NodeId> = people
        .iter()
        .map(|(first, last, birth, death)| {
            graph
                .create_individual(first.as_str(), last.as_str(), *birth, *death)
                .unwrap()
                .id()
        })
        .collect();

    for (x, y, children) in unions {
        let members = [ids[x % ids.len()], ids[y % ids.len()]];
        let Ok(pairing) = graph.create_pairing(&members, None).map(|p| p.id()) else {
            continue;
        };
        for child in children {
            let _ = graph.add_child(pairing, ids[child % ids.len()]);
        }
    }
    graph
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: load(save(G)) has the same nodes, records and edges as G
    #[test]
    fn test_round_trip_any_graph(
        people in prop::collection::vec(person(), 1..15),
        unions in prop::collection::vec(
            (0usize..15, 0usize..15, prop::collection::vec(0usize..15, 0..4)),
            0..10,
        ),
    ) {
        let original = build(&people, &unions);
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("info.json"), dir.path().join("relationships.json"));

        store.save(&original).unwrap();
        let loaded = store.load().unwrap();

        let ids = |g: &FamilyGraph| g.nodes().map(|n| n.id()).collect::<BTreeSet<_>>();
        prop_assert_eq!(ids(&loaded), ids(&original));
        prop_assert_eq!(loaded.root(), original.root());

        for person in original.individuals() {
            let reloaded = loaded.individual(person.id()).unwrap();
            prop_assert_eq!(reloaded.info(), person.info());
            prop_assert_eq!(reloaded.parent(), person.parent());
            prop_assert_eq!(reloaded.pairings(), person.pairings());
        }
        for pairing in original.pairings() {
            let reloaded = loaded.pairing(pairing.id()).unwrap();
            prop_assert_eq!(reloaded.members(), pairing.members());
            prop_assert_eq!(reloaded.children(), pairing.children());
        }
        prop_assert_eq!(loaded.basic_index().unwrap(), original.basic_index().unwrap());
    }
}
