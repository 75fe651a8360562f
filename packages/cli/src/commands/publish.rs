use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_storage::{EditorSession, PublishOptions};

#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Portfolio id
    pub id: String,

    /// Custom URL slug (3-50 lowercase letters, digits and hyphens)
    #[arg(short, long, conflicts_with = "unpublish")]
    pub slug: Option<String>,

    /// Take the portfolio offline
    #[arg(long)]
    pub unpublish: bool,
}

pub async fn publish(args: PublishArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut session = EditorSession::new(config.repository(cwd), config.editor_config());
    session.open(&args.id).await?;

    let options = PublishOptions {
        is_public: !args.unpublish,
        custom_slug: args.slug,
    };
    let result = session.publish(&options).await?;

    match result.public_url {
        Some(url) => println!("{} Published at {}", "✓".green(), url.bright_white().bold()),
        None => println!("{} {} is no longer public", "✓".green(), args.id),
    }
    Ok(())
}
