//! quizforge CLI — turn a text question bank into a quiz page.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "quizforge",
    version,
    about = "Convert a text question bank into a self-contained HTML quiz"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a quiz page from a question bank
    Convert {
        /// Path to the .txt question bank
        #[arg(long)]
        input: PathBuf,

        /// Quiz title shown on the page
        #[arg(long)]
        test_name: Option<String>,

        /// Time limit in minutes
        #[arg(long)]
        duration: Option<u32>,

        /// Category label
        #[arg(long)]
        category: Option<String>,

        /// Output HTML file (default: <output_dir>/<input stem>.html)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Process a JSON conversion request and print the JSON response
    Payload {
        /// Request JSON file (reads stdin when omitted)
        #[arg(long)]
        request: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a question bank and list what would be generated
    Validate {
        /// Path to the .txt question bank
        #[arg(long)]
        input: PathBuf,
    },

    /// List the questions embedded in a generated quiz page
    Inspect {
        /// Path to a page produced by `quizforge convert`
        #[arg(long)]
        page: PathBuf,
    },

    /// Create a starter config and sample question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizforge=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            test_name,
            duration,
            category,
            output,
            config,
        } => commands::convert::execute(input, test_name, duration, category, output, config),
        Commands::Payload { request, config } => commands::payload::execute(request, config),
        Commands::Validate { input } => commands::validate::execute(input),
        Commands::Inspect { page } => commands::inspect::execute(page),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
