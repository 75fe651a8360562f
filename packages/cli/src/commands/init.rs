use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory for saved portfolios
    #[arg(short, long, default_value = ".folio")]
    pub storage_dir: String,

    /// Prefix of published portfolio URLs
    #[arg(short, long, default_value = "http://localhost:8080/p")]
    pub public_base_url: String,

    /// Undo levels kept per document (0 = unlimited)
    #[arg(long, default_value_t = 100)]
    pub history_limit: usize,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Folio workspace...".bright_blue().bold());

    let config = Config {
        storage_dir: args.storage_dir,
        public_base_url: args.public_base_url,
        history_limit: args.history_limit,
    };

    let storage_dir = config.get_storage_dir(cwd);
    if !storage_dir.exists() {
        fs::create_dir_all(&storage_dir)?;
        println!("  {} Created {}/", "✓".green(), config.storage_dir);
    }

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Workspace initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: folio templates");
    println!("  2. Run: folio new --template classic --title \"My Portfolio\"");
    println!("  3. Run: folio show <id>");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(force: bool, history_limit: usize) -> InitArgs {
        InitArgs {
            storage_dir: "data".to_string(),
            public_base_url: "https://folio.example/p".to_string(),
            history_limit,
            force,
        }
    }

    #[test]
    fn test_init_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        init(args(false, 25), &cwd).unwrap();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.storage_dir, "data");
        assert_eq!(config.history_limit, 25);
        assert!(dir.path().join("data").is_dir());
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        init(args(false, 25), &cwd).unwrap();
        init(args(false, 5), &cwd).unwrap();
        assert_eq!(Config::load(&cwd).unwrap().history_limit, 25);

        init(args(true, 5), &cwd).unwrap();
        assert_eq!(Config::load(&cwd).unwrap().history_limit, 5);
    }
}
