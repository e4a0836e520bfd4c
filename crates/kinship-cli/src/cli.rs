//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kinship CLI - Record individuals, pairings and their children.
#[derive(Debug, Parser)]
#[command(name = "kinship")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Tree to use
    #[arg(short, long, global = true, env = "KINSHIP_TREE")]
    pub tree: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a person to the tree
    Add(AddArgs),

    /// Pair two people
    Pair(PairArgs),

    /// Attach children to a pairing
    Child(ChildArgs),

    /// List every node with its name
    List,

    /// Show one person or pairing
    Show(ShowArgs),

    /// Show everyone connected to a node
    Relatives(ShowArgs),

    /// Manage configured trees
    Tree(TreeArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the add command.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Date of birth, YYYY-MM-DD (use N for unknown digits, e.g. 19NN-05-NN)
    #[arg(short, long)]
    pub born: Option<String>,

    /// Date of death, YYYY-MM-DD, or 'alive'
    #[arg(short, long)]
    pub died: Option<String>,
}

/// Arguments for the pair command.
#[derive(Debug, Parser)]
pub struct PairArgs {
    /// Ids of the two people, e.g. `pair 3 7`
    #[arg(num_args = 2, required = true)]
    pub members: Vec<String>,

    /// Children to attach to the new pairing
    #[arg(short, long, num_args = 1..)]
    pub children: Vec<String>,
}

/// Arguments for the child command.
#[derive(Debug, Parser)]
pub struct ChildArgs {
    /// Pairing id
    pub pairing: String,

    /// Ids of the children
    #[arg(required = true)]
    pub children: Vec<String>,
}

/// Arguments for commands that take a single node id.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Node id
    pub id: String,
}

/// Arguments for tree management.
#[derive(Debug, Parser)]
pub struct TreeArgs {
    #[command(subcommand)]
    pub action: TreeAction,
}

/// Tree management actions.
#[derive(Debug, Subcommand)]
pub enum TreeAction {
    /// List all trees
    List,

    /// Show active tree
    Show,

    /// Switch to a different tree
    Switch {
        /// Tree name
        name: String,
    },

    /// Create or update a tree
    Set {
        /// Tree name
        name: String,
        /// Info document path
        #[arg(short, long)]
        info: PathBuf,
        /// Relationships document path
        #[arg(short, long)]
        relationships: PathBuf,
    },

    /// Forget a tree (its files are kept)
    Delete {
        /// Tree name
        name: String,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command() {
        let cli = Cli::parse_from(["kinship"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_add_command() {
        let cli = Cli::parse_from([
            "kinship", "add", "Tom", "Jones", "--born", "1950-04-12", "--died", "2015-03-16",
        ]);
        match cli.command {
            Some(Command::Add(args)) => {
                assert_eq!(args.first_name, "Tom");
                assert_eq!(args.born.as_deref(), Some("1950-04-12"));
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_pair_command() {
        let cli = Cli::parse_from(["kinship", "pair", "1", "3", "--children", "5", "7"]);
        match cli.command {
            Some(Command::Pair(args)) => {
                assert_eq!(args.members, vec!["1", "3"]);
                assert_eq!(args.children, vec!["5", "7"]);
            }
            _ => panic!("Expected Pair command"),
        }
    }

    #[test]
    fn test_pair_needs_two_members() {
        assert!(Cli::try_parse_from(["kinship", "pair", "1"]).is_err());
    }

    #[test]
    fn test_global_tree_flag() {
        let cli = Cli::parse_from(["kinship", "list", "--tree", "smiths"]);
        assert_eq!(cli.tree.as_deref(), Some("smiths"));
    }
}
