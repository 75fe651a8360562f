use crate::config::Config;
use anyhow::Result;
use colored::Colorize;
use folio_storage::PortfolioRepository;

pub async fn list(cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let portfolios = config.repository(cwd).list().await?;

    if portfolios.is_empty() {
        println!("No portfolios yet. Run: folio new");
        return Ok(());
    }

    for portfolio in portfolios {
        println!(
            "  {:<20} {} {}",
            portfolio.id.bright_white(),
            portfolio.title,
            format!(
                "({} sections, updated {})",
                portfolio.section_count,
                portfolio.updated_at.format("%Y-%m-%d %H:%M")
            )
            .dimmed()
        );
    }
    Ok(())
}
