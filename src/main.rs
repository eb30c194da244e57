use anyhow::Context;
use carer_rank::config::Config;
use carer_rank::scoring::{score_breakdown, LogReporter, NullReporter};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank carers and write the sorted roster (default if no subcommand)
    Rank,
    /// Print the ranking without writing a file
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Show how a carer's score is built up
    Explain {
        /// Position of the carer in the ranking (1-based, as shown in list)
        index: usize,
    },
}

#[derive(Parser, Debug)]
#[command(name = "carer-rank")]
#[command(about = "Rank carers by score and write the sorted roster", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/carer-rank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Carer roster CSV (overrides config)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Ranked roster destination (overrides config)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Rank);

    let mut config = match carer_rank::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if cli.input.is_some() {
        config.input = cli.input;
    }
    if cli.output.is_some() {
        config.output = cli.output;
    }

    if let Err(errors) = carer_rank::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if let Err(e) = carer_rank::telemetry::init(config.log_level(), cli.verbose) {
        eprintln!("Logging setup failed: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    if let Err(e) = run(command, &config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_INPUT);
    }

    std::process::exit(EXIT_SUCCESS);
}

fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    let input = config.input_path();

    match command {
        Commands::Rank => {
            let output = config.output_path();
            let ranked = carer_rank::rank_file(&input, &output, &LogReporter)
                .with_context(|| format!("Failed to rank {}", input.display()))?;
            println!("Ranked {} carers into {}", ranked.len(), output.display());
        }
        Commands::List { format } => {
            let ranked = carer_rank::rank_roster(&input, &LogReporter)
                .with_context(|| format!("Failed to rank {}", input.display()))?;
            let rendered = match format {
                OutputFormat::Table => carer_rank::output::format_ranked_table(
                    &ranked,
                    carer_rank::output::should_use_colors(),
                ),
                OutputFormat::Tsv => carer_rank::output::format_tsv(&ranked),
                OutputFormat::Json => carer_rank::output::format_json(&ranked)
                    .context("Failed to serialize ranking")?,
            };
            println!("{}", rendered);
        }
        Commands::Explain { index } => {
            let ranked = carer_rank::rank_roster(&input, &NullReporter)
                .with_context(|| format!("Failed to rank {}", input.display()))?;

            // Validate index bounds (1-based)
            if index < 1 || index > ranked.len() {
                anyhow::bail!(
                    "Invalid index {}. Must be between 1 and {}.",
                    index,
                    ranked.len()
                );
            }

            let entry = &ranked[index - 1];
            let breakdown = score_breakdown(&entry.carer);
            println!(
                "{}",
                carer_rank::output::format_breakdown(
                    entry,
                    &breakdown,
                    carer_rank::output::should_use_colors()
                )
            );
        }
    }

    Ok(())
}

