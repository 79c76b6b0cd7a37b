mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tableparse",
    version,
    about = "Parse HTML tables into JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse every table in one HTML document
    Parse {
        /// Path to an HTML file, or "-" to read stdin
        input_file: PathBuf,

        /// Keep the first row as data instead of using it as field names
        #[arg(long)]
        no_header: bool,

        /// Output shape: separateTables, singleOutput, listFormat or rawArray
        #[arg(short, long, default_value = "separateTables")]
        format: String,

        /// Keep leading/trailing whitespace in cell text
        #[arg(long)]
        keep_whitespace: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write output items to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Run a batch of requests from a JSON file
    Run {
        /// JSON file holding one request object or an array of them
        requests_file: PathBuf,

        /// Turn a failing request into an error item instead of stopping
        #[arg(long)]
        continue_on_fail: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write output items to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// List the available output shapes
    Formats,
}

fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tableparse=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            no_header,
            format,
            keep_whitespace,
            output,
            out,
        } => commands::parse::run(
            input_file,
            commands::parse::Flags {
                no_header,
                format,
                keep_whitespace,
            },
            &output,
            out,
        ),
        Commands::Run {
            requests_file,
            continue_on_fail,
            output,
            out,
        } => commands::run::run(requests_file, continue_on_fail, &output, out),
        Commands::Formats => commands::formats::list(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
