//! metricgen CLI - registration-statement to metric-table code generation
//!
//! Converts a listing of `fields["..."]=&m.ops...` registration statements
//! into `metricAttr` table entries for the jcmd native-memory exporter.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use metricgen::{GenConfig, LineTransformer};

#[derive(Parser)]
#[command(name = "metricgen")]
#[command(version, about = "Registration-statement to metric-table code generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate metric-table entries from a registration listing
    Generate {
        /// Path to the registration source listing
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the generated table listing
        #[arg(short, long)]
        output: PathBuf,

        /// Subsystem variable name spliced into each map-key expression
        #[arg(short, long)]
        subsystem: Option<String>,

        /// Optional YAML config overriding banner and record template
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Count the registration statements a listing contains, without writing
    Check {
        /// Path to the registration source listing
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            output,
            subsystem,
            config,
        } => generate_table(input, output, subsystem, config),
        Commands::Check { input } => check_listing(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Resolve config with precedence: CLI flag > config file > defaults.
fn resolve_config(
    subsystem: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<GenConfig, String> {
    let mut config = match config_path {
        Some(path) => {
            let loaded = GenConfig::from_file(&path)?;
            println!("  ℹ Loaded config from {}", path.display());
            loaded
        }
        None => GenConfig::default(),
    };

    if let Some(subsystem_var) = subsystem {
        config.subsystem_var = subsystem_var;
    }

    config.validate()?;
    Ok(config)
}

/// Generate metric-table entries from a registration listing
fn generate_table(
    input: PathBuf,
    output: PathBuf,
    subsystem: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<(), String> {
    println!("🔧 Generating metric table from {}...", input.display());

    let config = resolve_config(subsystem, config_path)?;
    let summary = metricgen::generate(&input, &output, &config)?;

    println!(
        "  ✓ Processed {} lines, emitted {} table entries",
        summary.lines, summary.records
    );
    println!("✨ Wrote {}", output.display());

    Ok(())
}

/// Count registration statements without writing anything
fn check_listing(input: PathBuf) -> Result<(), String> {
    println!("🔍 Checking {}...", input.display());

    let source = std::fs::read_to_string(&input)
        .map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;

    let transformer = LineTransformer::new(&GenConfig::default())?;
    let total = source.split('\n').count();
    let matched = source
        .split('\n')
        .filter(|line| transformer.recognize(line).is_some())
        .count();

    println!(
        "  ✓ {} of {} lines are registration statements",
        matched, total
    );

    Ok(())
}
