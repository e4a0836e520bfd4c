//! Tree command implementation.

use crate::cli::{TreeAction, TreeArgs};
use crate::config::{Config, TreeProfile};
use crate::error::Result;
use crate::output::Formatter;
use std::path::PathBuf;

/// Execute the tree command.
pub fn execute_tree(args: TreeArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    match args.action {
        TreeAction::List => list_trees(config, formatter),
        TreeAction::Show => show_active_tree(config, formatter),
        TreeAction::Switch { name } => {
            switch_tree(config, name, formatter)?;
            config.save()
        }
        TreeAction::Set {
            name,
            info,
            relationships,
        } => {
            set_tree(config, name, info, relationships, formatter);
            config.save()
        }
        TreeAction::Delete { name } => {
            if delete_tree(config, name, formatter)? {
                config.save()?;
            }
            Ok(())
        }
    }
}

/// List all trees.
fn list_trees(config: &Config, formatter: &Formatter) -> Result<()> {
    if config.trees.is_empty() {
        println!("{}", formatter.info("No trees configured"));
        return Ok(());
    }

    println!("Available trees:");
    for (name, tree) in &config.trees {
        if name == &config.active_tree {
            println!("* {}", formatter.success(name));
        } else {
            println!("  {}", name);
        }
        println!("    Info: {}", tree.info_path.display());
        println!("    Relationships: {}", tree.relationships_path.display());
    }

    Ok(())
}

/// Show the active tree.
fn show_active_tree(config: &Config, formatter: &Formatter) -> Result<()> {
    let tree = config.active_tree()?;

    println!("Active tree: {}", formatter.success(&config.active_tree));
    println!("  Info: {}", tree.info_path.display());
    println!("  Relationships: {}", tree.relationships_path.display());

    Ok(())
}

/// Switch to a different tree.
fn switch_tree(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    config.switch_tree(name.clone())?;
    println!("{}", formatter.success(&format!("Switched to tree '{}'", name)));
    Ok(())
}

/// Create or update a tree.
fn set_tree(
    config: &mut Config,
    name: String,
    info_path: PathBuf,
    relationships_path: PathBuf,
    formatter: &Formatter,
) {
    let replaced = config.set_tree(name.clone(), TreeProfile::new(info_path, relationships_path));
    let action = if replaced.is_some() { "Updated" } else { "Created" };

    println!("{}", formatter.success(&format!("{} tree '{}'", action, name)));
}

/// Forget a tree. Returns true if one was removed.
fn delete_tree(config: &mut Config, name: String, formatter: &Formatter) -> Result<bool> {
    if config.remove_tree(&name)?.is_some() {
        println!("{}", formatter.success(&format!("Deleted tree '{}'", name)));
        Ok(true)
    } else {
        println!("{}", formatter.warning(&format!("Tree '{}' does not exist", name)));
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_set_and_switch_tree() {
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        set_tree(
            &mut config,
            "smiths".to_string(),
            PathBuf::from("smiths_info.json"),
            PathBuf::from("smiths_connections.json"),
            &formatter,
        );
        assert!(config.trees.contains_key("smiths"));

        switch_tree(&mut config, "smiths".to_string(), &formatter).unwrap();
        assert_eq!(config.active_tree, "smiths");
        assert_eq!(
            config.active_tree().unwrap().info_path,
            PathBuf::from("smiths_info.json")
        );
    }

    #[test]
    fn test_delete_active_tree() {
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = delete_tree(&mut config, "default".to_string(), &formatter);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_unknown_tree() {
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        assert!(!delete_tree(&mut config, "nobody".to_string(), &formatter).unwrap());
    }
}
