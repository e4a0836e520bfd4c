//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kinship_domain::{FamilyGraph, HasChildren, Node, NodeId, NodeKind, PartialDate};
use std::collections::BTreeSet;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the whole tree as id → name.
    pub fn format_index(&self, graph: &FamilyGraph) -> Result<String> {
        if graph.is_empty() {
            return Ok(self.colorize("The tree is empty.", "yellow"));
        }
        let ids: BTreeSet<NodeId> = graph.nodes().map(Node::id).collect();
        self.format_entries(graph, &ids)
    }

    /// Format a set of related nodes, e.g. a connected component.
    pub fn format_relatives(&self, graph: &FamilyGraph, relatives: &BTreeSet<NodeId>) -> Result<String> {
        self.format_entries(graph, relatives)
    }

    /// Format a single node in detail.
    pub fn format_node(&self, graph: &FamilyGraph, id: NodeId) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_node_json(graph, id),
            OutputFormat::Table => self.format_node_table(graph, id),
            OutputFormat::Quiet => Ok(graph.lookup(id)?.id().to_string()),
        }
    }

    fn format_entries(&self, graph: &FamilyGraph, ids: &BTreeSet<NodeId>) -> Result<String> {
        let mut entries = Vec::with_capacity(ids.len());
        for id in ids {
            entries.push((*id, graph.lookup(*id)?.kind(), graph.display_name(*id)?));
        }

        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = entries
                    .iter()
                    .map(|(id, kind, name)| {
                        serde_json::json!({
                            "id": id.value(),
                            "kind": kind.as_str(),
                            "name": name,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(entries
                .iter()
                .map(|(id, _, _)| id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["ID", "Kind", "Name"]);
                for (id, kind, name) in &entries {
                    builder.push_record([id.to_string(), kind.to_string(), name.clone()]);
                }
                Ok(self.render(builder))
            }
        }
    }

    fn format_node_table(&self, graph: &FamilyGraph, id: NodeId) -> Result<String> {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["ID".to_string(), id.to_string()]);

        match graph.lookup(id)? {
            Node::Individual(person) => {
                let info = person.info();
                builder.push_record(["Name".to_string(), person.display_name()]);
                builder.push_record(["Born".to_string(), format_date(info.birth)]);
                builder.push_record(["Died".to_string(), format_date(info.death)]);
                let parents = match person.parent() {
                    Some(parent) => graph.display_name(parent)?,
                    None => "-".to_string(),
                };
                builder.push_record(["Parents".to_string(), parents]);
                builder.push_record(["Pairings".to_string(), names(graph, person.pairings())?]);
            }
            Node::Pairing(pairing) => {
                let members: BTreeSet<NodeId> = pairing.members().into_iter().collect();
                builder.push_record(["Members".to_string(), names(graph, &members)?]);
                builder.push_record(["Children".to_string(), names(graph, pairing.children())?]);
            }
        }

        Ok(self.render(builder))
    }

    fn format_node_json(&self, graph: &FamilyGraph, id: NodeId) -> Result<String> {
        let value = match graph.lookup(id)? {
            Node::Individual(person) => {
                let info = person.info();
                serde_json::json!({
                    "id": id.value(),
                    "kind": NodeKind::Individual.as_str(),
                    "first_name": info.first_name,
                    "last_name": info.last_name,
                    "birth": info.birth.map(|d| d.to_string()),
                    "death": info.death.map(|d| d.to_string()),
                    "parent": person.parent().map(|p| p.value()),
                    "pairings": person.pairings().iter().map(NodeId::value).collect::<Vec<_>>(),
                })
            }
            Node::Pairing(pairing) => serde_json::json!({
                "id": id.value(),
                "kind": NodeKind::Pairing.as_str(),
                "members": pairing.members().iter().map(NodeId::value).collect::<Vec<_>>(),
                "children": pairing.children().iter().map(NodeId::value).collect::<Vec<_>>(),
            }),
        };
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a node creation result.
    pub fn node_created(&self, kind: NodeKind, id: NodeId, name: &str) -> String {
        match self.format {
            OutputFormat::Quiet => id.to_string(),
            _ => self.success(&format!("Added {} {}: {}", kind, id, name)),
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Unrecorded dates print as "-".
fn format_date(date: Option<PartialDate>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.to_string())
}

fn names(graph: &FamilyGraph, ids: &BTreeSet<NodeId>) -> Result<String> {
    if ids.is_empty() {
        return Ok("-".to_string());
    }
    let names = ids
        .iter()
        .map(|id| -> Result<String> { Ok(format!("{} ({})", graph.display_name(*id)?, id)) })
        .collect::<Result<Vec<_>>>()?;
    Ok(names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family() -> FamilyGraph {
        let mut graph = FamilyGraph::new();
        let tom = graph
            .create_individual("Tom", "Jones", Some(PartialDate::ymd(1950, 4, 12)), None).unwrap()
            .id();
        let linda = graph.create_individual("Linda", "Adams", None, None).unwrap().id();
        let suzan = graph.create_individual("Suzan", "Jones", None, None).unwrap().id();
        let couple = graph.create_pairing(&[tom, linda], None).unwrap().id();
        graph.add_child(couple, suzan).unwrap();
        graph
    }

    #[test]
    fn test_index_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_index(&family()).unwrap();
        assert!(output.contains("Name"));
        assert!(output.contains("Tom Jones and Linda Adams"));
        assert!(output.contains("pairing"));
    }

    #[test]
    fn test_index_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_index(&family()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 4);
        assert_eq!(parsed[0]["name"], "Tom Jones");
    }

    #[test]
    fn test_index_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_index(&family()).unwrap();
        assert_eq!(output, "1\n2\n3\n5");
    }

    #[test]
    fn test_empty_tree() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_index(&FamilyGraph::new()).unwrap();
        assert!(output.contains("empty"));
    }

    #[test]
    fn test_show_individual() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_node(&family(), NodeId::new(5)).unwrap();
        assert!(output.contains("Suzan Jones"));
        assert!(output.contains("Tom Jones and Linda Adams"));

        let output = formatter.format_node(&family(), NodeId::new(1)).unwrap();
        assert!(output.contains("1950-04-12"));
    }

    #[test]
    fn test_show_pairing_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_node(&family(), NodeId::new(2)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["members"], serde_json::json!([1, 3]));
        assert_eq!(parsed["children"], serde_json::json!([5]));
    }

    #[test]
    fn test_show_unknown_node() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert!(formatter.format_node(&family(), NodeId::new(99)).is_err());
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
