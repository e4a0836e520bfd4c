//! Add command implementation.

use crate::cli::AddArgs;
use crate::error::{CliError, Result};
use crate::input::{parse_date, parse_death};
use crate::output::Formatter;
use crate::session::Session;
use kinship_domain::NodeKind;
use tracing::debug;

/// Execute the add command.
pub fn execute_add(args: AddArgs, session: &mut Session, formatter: &Formatter) -> Result<()> {
    let first_name = required_name(&args.first_name, "first name")?;
    let last_name = required_name(&args.last_name, "last name")?;
    let birth = args.born.as_deref().map(parse_date).transpose()?;
    let death = match args.died.as_deref() {
        Some(raw) => parse_death(raw)?,
        None => None,
    };

    let id = session.edit(|graph| {
        graph
            .create_individual(first_name, last_name, birth, death)
            .map(|person| person.id())
    })?;
    debug!(%id, "Created individual");

    let name = session.graph().display_name(id)?;
    println!("{}", formatter.node_created(NodeKind::Individual, id, &name));
    Ok(())
}

fn required_name(raw: &str, field: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CliError::InvalidInput(format!("{} cannot be empty", field)));
    }
    Ok(name.to_string())
}
