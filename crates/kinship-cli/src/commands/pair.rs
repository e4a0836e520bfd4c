//! Pair command implementation.

use crate::cli::PairArgs;
use crate::error::{CliError, Result};
use crate::input::parse_node_id;
use crate::output::Formatter;
use crate::session::Session;
use kinship_domain::{NodeId, NodeKind};
use tracing::debug;

/// Execute the pair command.
///
/// Children are checked before the pairing is created, so a bad child id
/// leaves the tree untouched.
pub fn execute_pair(args: PairArgs, session: &mut Session, formatter: &Formatter) -> Result<()> {
    let members = args
        .members
        .iter()
        .map(|raw| parse_node_id(raw))
        .collect::<Result<Vec<NodeId>>>()?;
    let children = args
        .children
        .iter()
        .map(|raw| parse_node_id(raw))
        .collect::<Result<Vec<NodeId>>>()?;

    for child in &children {
        let person = session.graph().individual(*child)?;
        if let Some(existing) = person.parent() {
            return Err(CliError::InvalidInput(format!(
                "{} already descends from pairing {}",
                person.display_name(),
                existing
            )));
        }
    }

    let pairing = session.edit(|graph| graph.create_pairing(&members, None).map(|p| p.id()))?;
    debug!(id = %pairing, ?members, "Created pairing");
    session.edit(|graph| graph.add_children(pairing, &children))?;

    let name = session.graph().display_name(pairing)?;
    println!("{}", formatter.node_created(NodeKind::Pairing, pairing, &name));
    if !children.is_empty() {
        println!(
            "{}",
            formatter.success(&format!("Attached {} child(ren) to {}", children.len(), pairing))
        );
    }
    Ok(())
}
