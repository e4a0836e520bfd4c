//! Child command implementation.

use crate::cli::ChildArgs;
use crate::error::Result;
use crate::input::parse_node_id;
use crate::output::Formatter;
use crate::session::Session;
use kinship_domain::NodeId;

/// Execute the child command.
pub fn execute_child(args: ChildArgs, session: &mut Session, formatter: &Formatter) -> Result<()> {
    let pairing = parse_node_id(&args.pairing)?;
    let children = args
        .children
        .iter()
        .map(|raw| parse_node_id(raw))
        .collect::<Result<Vec<NodeId>>>()?;

    session.edit(|graph| graph.add_children(pairing, &children))?;

    let parents = session.graph().display_name(pairing)?;
    for child in &children {
        let name = session.graph().display_name(*child)?;
        println!(
            "{}",
            formatter.success(&format!("{} is now a child of {}", name, parents))
        );
    }
    Ok(())
}
