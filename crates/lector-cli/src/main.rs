mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "lector",
    version,
    about = "Select and copy OCR text from scanned images"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the tokens come from and how they are built.
#[derive(Args)]
pub struct InputArgs {
    /// Image file, or a tesseract .tsv file produced earlier
    pub input_file: PathBuf,

    /// Keep tokens whose text is empty or whitespace
    #[arg(long)]
    pub include_empty: bool,

    /// OCR language(s), e.g. --lang eng --lang heb (default: eng, heb)
    #[arg(short, long = "lang", value_name = "LANG")]
    pub lang: Vec<String>,

    /// Path to the tesseract executable
    #[arg(long, env = "LECTOR_TESSERACT", value_name = "PATH")]
    pub tesseract: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normalized token sequence
    Tokens {
        #[command(flatten)]
        input: InputArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Copy the text between two token indices (inclusive, either order)
    Text {
        #[command(flatten)]
        input: InputArgs,

        /// Index of the token where the selection starts (default: first token)
        #[arg(long)]
        from: Option<usize>,

        /// Index of the token where the selection ends (default: last token)
        #[arg(long)]
        to: Option<usize>,
    },
    /// Print one row per visual line with its unified bounds
    Lines {
        #[command(flatten)]
        input: InputArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show general information about an input file
    Info {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() {
    // stdout carries command output only
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tokens { input, output } => commands::tokens::run(&input, &output),
        Commands::Text { input, from, to } => commands::text::run(&input, from, to),
        Commands::Lines { input, output } => commands::lines::run(&input, &output),
        Commands::Info { input } => commands::info::run(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
