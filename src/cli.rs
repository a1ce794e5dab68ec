use crate::items::{ItemRegistry, MenuItem};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "pie-items")]
#[command(about = "Inspect and create pie menu items")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// List the available item types
    Types,
    /// Print a new item of the given type as JSON
    New {
        kind: String,
        /// Replace the default name
        #[arg(long)]
        name: Option<String>,
    },
    /// Summarize every item of a JSON menu tree
    Describe { file: PathBuf },
}

pub fn run(cli: Cli, registry: &ItemRegistry) -> Result<String> {
    match cli.command {
        CliCommand::Types => Ok(list_types(registry)),
        CliCommand::New { kind, name } => new_item(registry, &kind, name),
        CliCommand::Describe { file } => describe_file(registry, &file),
    }
}

pub fn list_types(registry: &ItemRegistry) -> String {
    let mut out = String::new();
    for (name, item_type) in registry.list_all() {
        let marker = if item_type.has_children() { " (container)" } else { "" };
        let _ = writeln!(out, "{}{}: {}", name, marker, item_type.generic_description());
    }
    out
}

pub fn new_item(registry: &ItemRegistry, kind: &str, name: Option<String>) -> Result<String> {
    let mut item = registry.create(kind)?;
    if let Some(name) = name {
        item.name = name;
    }
    Ok(serde_json::to_string_pretty(&item)?)
}

pub fn describe_file(registry: &ItemRegistry, path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read menu file: {}", path.display()))?;
    let item: MenuItem = serde_json::from_str(&content)
        .with_context(|| format!("Invalid menu item JSON: {}", path.display()))?;

    if !registry.is_well_formed(&item) {
        log::warn!("Menu tree in {} is not well-formed", path.display());
    }

    let mut out = String::new();
    describe_tree(registry, &item, 0, &mut out);
    Ok(out)
}

fn describe_tree(registry: &ItemRegistry, item: &MenuItem, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let description = registry
        .describe(item)
        .unwrap_or_else(|| format!("Unknown item type: {}", item.kind));
    let _ = writeln!(out, "{}{} [{}] {}", indent, item.name, item.kind, description);

    for child in item.children.iter().flatten() {
        describe_tree(registry, child, depth + 1, out);
    }
}
