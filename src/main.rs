//! colorpair - CLI entry point

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

use colorpair::{Styler, ATTRIBUTES, FOREGROUNDS, NORMAL};

#[derive(Parser)]
#[command(name = "colorpair")]
#[command(about = "Print terminal text styled by color-pair identifiers")]
#[command(version)]
struct Cli {
    /// Disable escape sequences in the output (NO_COLOR is honored too)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a styled message without a trailing newline
    Print {
        /// Color pair, e.g. red-black-bold
        pair: String,
        /// Message to style
        message: String,
    },

    /// Print a styled message with a trailing newline
    Println {
        /// Color pair, e.g. red-black-bold
        pair: String,
        /// Message to style
        message: String,
    },

    /// List the known color and attribute names
    List,

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    let styler = if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        Styler::plain()
    } else {
        Styler::new()
    };

    match cli.command {
        Commands::Print { pair, message } => cmd_print(&styler, &pair, &message),
        Commands::Println { pair, message } => cmd_println(&styler, &pair, &message),
        Commands::List => cmd_list(&styler),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}

fn cmd_print(styler: &Styler, pair: &str, message: &str) -> Result<()> {
    styler.print(pair, message)?;
    Ok(())
}

fn cmd_println(styler: &Styler, pair: &str, message: &str) -> Result<()> {
    styler.println(pair, message)?;
    Ok(())
}

/// Print every known name, each styled with itself.
fn cmd_list(styler: &Styler) -> Result<()> {
    println!("Colors (usable as foreground, or background after `-`):");
    styler.println(NORMAL, &format!("  {NORMAL}"))?;
    for (name, _) in FOREGROUNDS {
        styler.println(name, &format!("  {name}"))?;
    }
    println!();
    println!("Attributes:");
    for (name, _) in ATTRIBUTES {
        let pair = format!("normal-normal-{name}");
        styler.println(&pair, &format!("  {name}"))?;
    }
    Ok(())
}

fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "colorpair", &mut io::stdout());
    Ok(())
}
