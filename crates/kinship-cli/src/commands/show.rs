//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::input::parse_node_id;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let id = parse_node_id(&args.id)?;
    println!("{}", formatter.format_node(session.graph(), id)?);
    Ok(())
}
