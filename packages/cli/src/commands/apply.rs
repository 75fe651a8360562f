use super::show::print_document;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use folio_editor::Command;
use folio_storage::EditorSession;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Portfolio id
    pub id: String,

    /// JSON file holding an array of editor commands
    pub script: PathBuf,

    /// Apply without saving
    #[arg(long)]
    pub dry_run: bool,
}

pub fn parse_script(source: &str) -> Result<Vec<Command>> {
    serde_json::from_str(source).context("script must be a JSON array of commands")
}

pub async fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let source = std::fs::read_to_string(&args.script)
        .with_context(|| format!("cannot read {}", args.script.display()))?;
    let commands = parse_script(&source)?;

    let config = Config::load(cwd)?;
    let mut session = EditorSession::new(config.repository(cwd), config.editor_config());
    session.open(&args.id).await?;

    let mut changed = 0;
    for command in commands.iter().cloned() {
        let name = command.name();
        if session.dispatch(command).changed {
            changed += 1;
        } else {
            println!("  {} {} had no effect", "·".dimmed(), name);
        }
    }

    println!(
        "{} Applied {} of {} commands",
        "✓".green(),
        changed,
        commands.len()
    );

    if !args.dry_run && session.document().has_unsaved_changes() {
        session.save().await?;
        println!("{} Saved", "✓".green());
    }

    println!();
    print_document(session.document());
    Ok(())
}
