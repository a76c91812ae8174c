//! quizdeck CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizdeck", version, about = "Self-graded multiple-choice quizzes")]
struct Cli {
    #[command(flatten)]
    locations: Locations,

    #[command(subcommand)]
    command: Commands,
}

/// Where to find quiz data and keep progress. Flags override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct Locations {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding index.json and topic files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Directory the progress record is kept in
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List topics with their scores
    Topics,

    /// Show a topic's questions, selections, and feedback
    Show {
        /// Topic slug
        slug: String,
    },

    /// Select an answer for one question
    Answer {
        /// Topic slug
        slug: String,

        /// Question id
        question: u32,

        /// Option label (e.g. "B")
        label: String,
    },

    /// Check all answers of a topic
    Check {
        /// Topic slug
        slug: String,
    },

    /// Clear all answers of a topic
    Reset {
        /// Topic slug
        slug: String,

        /// Confirm without prompting
        #[arg(long)]
        yes: bool,
    },

    /// Show the global score
    Stats,

    /// Validate the catalog and every topic file
    Validate,

    /// Create starter config and example quiz data
    Init,
}

#[tokio::main]
async fn main() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in ["quizdeck_core=warn", "quizdeck_store=warn"] {
        if let Ok(d) = directive.parse() {
            filter = filter.add_directive(d);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let locations = cli.locations;

    let result = match cli.command {
        Commands::Topics => commands::topics::execute(&locations).await,
        Commands::Show { slug } => commands::show::execute(&locations, &slug).await,
        Commands::Answer {
            slug,
            question,
            label,
        } => commands::answer::execute(&locations, &slug, question, &label).await,
        Commands::Check { slug } => commands::check::execute(&locations, &slug).await,
        Commands::Reset { slug, yes } => commands::reset::execute(&locations, &slug, yes).await,
        Commands::Stats => commands::stats::execute(&locations).await,
        Commands::Validate => commands::validate::execute(&locations).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
