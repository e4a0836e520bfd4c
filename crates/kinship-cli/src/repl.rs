//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{AddArgs, ChildArgs, Command, PairArgs, ShowArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL against an open tree.
pub fn run_repl(session: &mut Session, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Kinship REPL - Type 'help' for commands, 'exit' to quit"));
    println!(
        "{}",
        formatter.info(&format!(
            "Tree '{}' ({} node(s))",
            config.active_tree,
            session.graph().len()
        ))
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        let prompt = if session.is_dirty() {
            "kinship*> "
        } else {
            "kinship> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => break,
                    Ok(ReplCommand::Help) => print_help(formatter),
                    Ok(ReplCommand::Save) => match session.save() {
                        Ok(()) => println!("{}", formatter.success("Tree saved")),
                        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                    },
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = commands::execute(cmd, session, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    if session.is_dirty() {
        if config.settings.autosave {
            session.save()?;
            println!("{}", formatter.success("Tree saved"));
        } else {
            println!("{}", formatter.warning("Unsaved changes discarded (autosave is off)"));
        }
    }
    println!("{}", formatter.info("Goodbye!"));

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Save,
    Command(Command),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "save" | "s" => Ok(ReplCommand::Save),
        "list" | "ls" | "v" => Ok(ReplCommand::Command(Command::List)),
        "add" | "a" => parse_add_command(&parts[1..]),
        "pair" => parse_pair_command(&parts[1..]),
        "child" => parse_child_command(&parts[1..]),
        "show" => parse_id_command(&parts[1..], "show").map(|args| ReplCommand::Command(Command::Show(args))),
        "relatives" => {
            parse_id_command(&parts[1..], "relatives").map(|args| ReplCommand::Command(Command::Relatives(args)))
        }
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

// Simple command parsers for REPL (positional arguments only)

fn parse_add_command(args: &[&str]) -> Result<ReplCommand> {
    if args.len() < 2 || args.len() > 4 {
        return Err(CliError::InvalidInput(
            "Usage: add <first> <last> [born YYYY-MM-DD] [died YYYY-MM-DD|alive]".to_string(),
        ));
    }

    Ok(ReplCommand::Command(Command::Add(AddArgs {
        first_name: args[0].to_string(),
        last_name: args[1].to_string(),
        born: args.get(2).map(|s| s.to_string()),
        died: args.get(3).map(|s| s.to_string()),
    })))
}

fn parse_pair_command(args: &[&str]) -> Result<ReplCommand> {
    if args.len() < 2 {
        return Err(CliError::InvalidInput(
            "Usage: pair <id> <id> [child_id ...]".to_string(),
        ));
    }

    Ok(ReplCommand::Command(Command::Pair(PairArgs {
        members: args[..2].iter().map(|s| s.to_string()).collect(),
        children: args[2..].iter().map(|s| s.to_string()).collect(),
    })))
}

fn parse_child_command(args: &[&str]) -> Result<ReplCommand> {
    if args.len() < 2 {
        return Err(CliError::InvalidInput(
            "Usage: child <pairing_id> <child_id> [child_id ...]".to_string(),
        ));
    }

    Ok(ReplCommand::Command(Command::Child(ChildArgs {
        pairing: args[0].to_string(),
        children: args[1..].iter().map(|s| s.to_string()).collect(),
    })))
}

fn parse_id_command(args: &[&str], name: &str) -> Result<ShowArgs> {
    match args {
        [id] => Ok(ShowArgs { id: id.to_string() }),
        _ => Err(CliError::InvalidInput(format!("Usage: {} <id>", name))),
    }
}

fn editor_error(err: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!(
        "Failed to initialize editor: {}",
        err
    )))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  add <first> <last> [born] [died] - Add a person");
    println!("    born/died: YYYY-MM-DD, N for unknown digits (e.g. 19NN-05-NN)");
    println!("    died: 'alive' if the person is living");
    println!("  pair <id> <id> [child ...]       - Pair two people");
    println!("  child <pairing> <id> [id ...]    - Attach children to a pairing");
    println!("  list, ls, v                      - List the tree");
    println!("  show <id>                        - Show a person or pairing");
    println!("  relatives <id>                   - Show everyone connected to a node");
    println!("  save, s                          - Save the tree");
    println!("  help, ?                          - Show this help");
    println!("  exit, quit, q                    - Exit REPL (saves if autosave is on)");
    println!();
}
