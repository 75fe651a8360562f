use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_editor::{TemplateCatalog, TemplateMode};

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn templates(args: TemplatesArgs) -> Result<()> {
    let catalog = TemplateCatalog::builtin();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog.summaries())?);
        return Ok(());
    }

    println!("{}", "Built-in templates".bright_blue().bold());
    println!();
    for template in catalog.iter() {
        let mode = match template.mode {
            TemplateMode::Whole => "single form",
            TemplateMode::Decomposed => "sections",
        };
        println!(
            "  {:<22} {} {}",
            template.id.bright_white().bold(),
            template.name,
            format!("({}, {})", template.category, mode).dimmed()
        );
        println!("  {:<22} {}", "", template.description.dimmed());
    }

    Ok(())
}
