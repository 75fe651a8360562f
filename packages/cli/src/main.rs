mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    apply, init, list, new_portfolio, publish, show, templates, ApplyArgs, InitArgs, NewArgs,
    PublishArgs, ShowArgs, TemplatesArgs,
};

/// Folio CLI - build and publish portfolio pages from the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a Folio workspace
    Init(InitArgs),

    /// List built-in templates
    Templates(TemplatesArgs),

    /// Create a portfolio, empty or from a template
    New(NewArgs),

    /// List saved portfolios
    List,

    /// Print a portfolio's sections
    Show(ShowArgs),

    /// Run a JSON script of editor commands against a portfolio
    Apply(ApplyArgs),

    /// Publish or unpublish a portfolio
    Publish(PublishArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Templates(args) => templates(args),
        Command::New(args) => new_portfolio(args, &cwd).await,
        Command::List => list(&cwd).await,
        Command::Show(args) => show(args, &cwd).await,
        Command::Apply(args) => apply(args, &cwd).await,
        Command::Publish(args) => publish(args, &cwd).await,
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
