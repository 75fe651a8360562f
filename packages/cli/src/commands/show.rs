use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_editor::EditorDocument;
use folio_storage::EditorSession;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Portfolio id
    pub id: String,

    /// Print the stored content as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn show(args: ShowArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut session = EditorSession::new(config.repository(cwd), config.editor_config());
    session.open(&args.id).await?;

    if args.json {
        println!("{}", session.document().content().to_json()?);
    } else {
        print_document(session.document());
    }
    Ok(())
}

pub fn print_document(doc: &EditorDocument) {
    println!("{}", doc.title().bright_blue().bold());

    if doc.sections().is_empty() {
        println!("  {}", "(no sections)".dimmed());
        return;
    }

    for section in doc.sections() {
        println!(
            "  {:>2}. {:<10} {}",
            section.order,
            section.kind().label().bright_white(),
            section.id.as_str().dimmed()
        );
    }
}
