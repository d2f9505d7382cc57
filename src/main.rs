use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cmp::Ordering;
use std::path::PathBuf;
use std::time::Instant;

use socialscore::analyze::{score_users, Summary};
use socialscore::generate::generate_users;
use socialscore::output;

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 1;
const EXIT_CONFIG: i32 = 4;

const DEFAULT_USER_COUNT: usize = 100;
const DEFAULT_EXPORT_PATH: &str = "social_score_analysis.csv";

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a sample batch, score it, and report (default if no subcommand)
    Analyze,
    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "socialscore")]
#[command(about = "Composite social-score calculator for user metric batches", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of users to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// RNG seed for a reproducible batch (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Export path (defaults to social_score_analysis.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export format
    #[arg(long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Number of histogram bins
    #[arg(long, default_value_t = 20)]
    bins: usize,

    /// Skip writing the export artifact
    #[arg(long)]
    no_export: bool,

    /// Only print the summary (no table or charts)
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/socialscore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Analyze);
    let start_time = Instant::now();

    let config_path = cli.config.clone().map(PathBuf::from);

    if let Commands::Init { force } = command {
        match socialscore::config::write_starter_config(config_path, force) {
            Ok(path) => {
                println!("Wrote starter config to {}", path.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Init error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Load config
    let config = match socialscore::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring weights at startup
    let weights = config.scoring.unwrap_or_default();
    if let Err(errors) = socialscore::scoring::validate_weights(&weights) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let count = cli.count.or(config.users).unwrap_or(DEFAULT_USER_COUNT);
    let seed = cli.seed.or(config.seed);

    if cli.verbose {
        match seed {
            Some(s) => eprintln!("Generating {} users (seed {})", count, s),
            None => eprintln!("Generating {} users", count),
        }
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let users = generate_users(count, &mut rng);
    let rows = score_users(&users, &weights);
    let summary = Summary::from_rows(&rows);

    let use_colors = output::should_use_colors();

    if !cli.quiet {
        // Table view is ranked by score; ties keep generation order (stable sort)
        let mut ranked = rows.clone();
        ranked.sort_by(|a, b| {
            b.breakdown
                .social_score
                .partial_cmp(&a.breakdown.social_score)
                .unwrap_or(Ordering::Equal)
        });
        println!("{}", output::format_score_table(&ranked, use_colors));
        println!();

        let scores: Vec<f64> = rows.iter().map(|r| r.breakdown.social_score).collect();
        println!("{}", output::format_histogram(&scores, cli.bins, use_colors));
        println!();
        println!(
            "{}",
            output::format_component_bars(&summary.component_means, use_colors)
        );
        println!();
    }

    println!("{}", output::format_summary(&summary, use_colors));

    if !cli.no_export {
        // Artifact rows stay in generation order, matching the input contract
        let path = cli
            .output
            .or_else(|| config.output.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH));

        let result = match cli.format {
            ExportFormat::Csv => output::write_csv(&path, &rows),
            ExportFormat::Json => output::write_json(&path, &rows),
        };
        if let Err(e) = result {
            eprintln!("Export error: {:#}", e);
            std::process::exit(EXIT_IO);
        }

        println!();
        println!("Results exported to '{}'", path.display());
    }

    if cli.verbose {
        eprintln!();
        eprintln!("Total: {} users in {:?}", rows.len(), start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}
