//! intentforge CLI - Android factory boilerplate generator
//!
//! Commands:
//! - `intentforge generate` - Generate the IntentFactory and InstanceFactory sources
//! - `intentforge check` - Validate a compilation model without writing output

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod check;
mod generate;
mod model;

#[derive(Parser)]
#[command(name = "intentforge")]
#[command(author, version, about = "Factory-method generator for annotated screens and fragment views", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate factory sources from a compilation model
    Generate {
        /// Path to the compilation-model JSON exported by the host build
        #[arg(short, long)]
        model: String,

        /// Output directory for generated sources
        #[arg(short, long)]
        output: String,

        /// Target package for the generated classes
        /// (default: the model's package, else com.example.generated)
        #[arg(short, long)]
        package: Option<String>,
    },

    /// Validate a compilation model without writing output
    Check {
        /// Path to the compilation-model JSON
        #[arg(short, long)]
        model: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            model,
            output,
            package,
        } => {
            generate::run(&model, &output, package)?;
        }
        Commands::Check { model } => {
            check::run(&model)?;
        }
    }

    Ok(())
}
