use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use folio_editor::Command;
use folio_storage::{EditorSession, SaveOutcome};

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Start from a built-in template (see `folio templates`)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Portfolio title
    #[arg(long)]
    pub title: Option<String>,
}

pub async fn new_portfolio(args: NewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut session = EditorSession::new(config.repository(cwd), config.editor_config());

    match &args.template {
        Some(template) => session.create_from_template(template, args.title.clone())?,
        None => {
            if let Some(title) = &args.title {
                session.dispatch(Command::UpdateTitle {
                    title: title.clone(),
                });
            }
        }
    }

    let id = match session.save().await? {
        SaveOutcome::Saved { document_id, .. } => document_id,
        SaveOutcome::Queued => return Err(anyhow!("a save was already running")),
    };

    println!(
        "{} Created {} ({} sections)",
        "✓".green(),
        session.document().title().bright_white().bold(),
        session.document().sections().len()
    );
    println!("  id: {}", id);
    Ok(())
}
