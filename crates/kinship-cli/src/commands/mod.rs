//! Command implementations.

pub mod add;
pub mod child;
pub mod list;
pub mod pair;
pub mod relatives;
pub mod show;
pub mod tree;

pub use self::add::execute_add;
pub use self::child::execute_child;
pub use self::list::execute_list;
pub use self::pair::execute_pair;
pub use self::relatives::execute_relatives;
pub use self::show::execute_show;
pub use self::tree::execute_tree;

use crate::cli::Command;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;

/// Execute a command that works on an open tree.
///
/// `tree` and `repl` are handled by the caller.
pub fn execute(cmd: Command, session: &mut Session, formatter: &Formatter) -> Result<()> {
    match cmd {
        Command::Add(args) => execute_add(args, session, formatter),
        Command::Pair(args) => execute_pair(args, session, formatter),
        Command::Child(args) => execute_child(args, session, formatter),
        Command::List => execute_list(session, formatter),
        Command::Show(args) => execute_show(args, session, formatter),
        Command::Relatives(args) => execute_relatives(args, session, formatter),
        Command::Tree(_) | Command::Repl => Err(CliError::NotPermitted(
            "this command cannot run against an open tree".to_string(),
        )),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::{OutputFormat, TreeProfile};
    use tempfile::TempDir;

    /// An empty tree backed by a temp directory (keep the dir alive).
    pub fn session() -> (TempDir, Session) {
        let dir = TempDir::new().unwrap();
        let profile = TreeProfile {
            info_path: dir.path().join("info.json"),
            relationships_path: dir.path().join("relationships.json"),
        };
        let session = Session::open(&profile).unwrap();
        (dir, session)
    }

    pub fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    /// Tom (1) + Linda (3) as pairing 2, Suzan (5) unattached
    pub fn family_session() -> (TempDir, Session) {
        let (dir, mut session) = session();
        let tom = add_person(&mut session, "Tom", "Jones");
        let linda = add_person(&mut session, "Linda", "Adams");
        add_person(&mut session, "Suzan", "Jones");
        session
            .edit(|graph| graph.create_pairing(&[tom, linda], None).map(|p| p.id()))
            .unwrap();
        (dir, session)
    }

    /// Add a person with no dates and return their id
    pub fn add_person(session: &mut Session, first: &str, last: &str) -> kinship_domain::NodeId {
        session
            .edit(|graph| graph.create_individual(first, last, None, None).map(|p| p.id()))
            .unwrap()
    }

    #[test]
    fn test_execute_dispatch() {
        let (_dir, mut session) = family_session();
        execute(Command::List, &mut session, &formatter()).unwrap();
        assert!(execute(Command::Repl, &mut session, &formatter()).is_err());
    }
}
