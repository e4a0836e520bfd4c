//! Relatives command implementation.

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::input::parse_node_id;
use crate::output::Formatter;
use crate::session::Session;
use kinship_domain::connected_component;

/// Execute the relatives command.
///
/// Lists every node reachable from the given one, the node itself included.
pub fn execute_relatives(args: ShowArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let id = parse_node_id(&args.id)?;
    let relatives = connected_component(session.graph(), id)?;

    let name = session.graph().display_name(id)?;
    println!(
        "{}",
        formatter.info(&format!("{} known relative node(s) of {}", relatives.len() - 1, name))
    );
    println!("{}", formatter.format_relatives(session.graph(), &relatives)?);
    Ok(())
}
