//! hotel-enrich CLI - normalize provider hotel payloads and analyze queries

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

use hotel_enrich::config::AppConfig;
use hotel_enrich::core::logging::{self, print_success, print_warning, CliError};
use hotel_enrich::ingestion::{read_payload, split_lines, IngestionPipeline, Provider};

type CliResult<T> = std::result::Result<T, CliError>;

/// Hotel record normalization and search enrichment
#[derive(Parser, Debug)]
#[command(name = "hotel-enrich")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: <config dir>/hotel-enrich/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract and enrich a provider payload, printing JSON
    Extract {
        /// Provider schema: elong or agoda
        #[arg(short, long)]
        provider: Option<String>,

        /// Payload file, or - for stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Treat each input line as a separate payload
        #[arg(long)]
        batch: bool,
    },

    /// Correct, tokenize and extract keywords from a search query
    Query {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Inspect the spelling rule set
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },

    /// Resolve a country by code, Chinese name or English name
    Geo { name: String },
}

#[derive(Subcommand, Debug)]
enum RulesAction {
    /// Write the active rules as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print rule statistics
    Stats,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    run(cli).map_err(Into::into)
}

fn run(cli: Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let _log_guard = logging::init(level, &config.data_dir(), config.logging.json_file);
    log::debug!("hotel-enrich v{} starting", hotel_enrich::VERSION);

    let pipeline = IngestionPipeline::from_config(&config)?;

    match cli.command {
        Commands::Extract {
            provider,
            input,
            batch,
        } => {
            let provider = match provider {
                Some(name) => name.parse().unwrap_or_else(|e| {
                    print_warning(&format!("{}; using agoda", e));
                    Provider::Agoda
                }),
                None => config.ingestion.default_provider,
            };
            let payload = read_payload(input.as_deref())?;
            if batch {
                let items = split_lines(&payload, provider);
                for hotel in pipeline.process_batch(&items) {
                    println!("{}", serde_json::to_string(&hotel)?);
                }
            } else {
                print_json(&pipeline.process(provider, &payload))?;
            }
        }
        Commands::Query { text } => {
            let analysis = pipeline.enrichment().analyze_query(&text.join(" "));
            print_json(&analysis)?;
        }
        Commands::Rules { action } => {
            let spellcheck = pipeline.enrichment().spellcheck();
            match action {
                RulesAction::Export { output } => {
                    let exported = spellcheck.export_rules()?;
                    match output {
                        Some(path) => {
                            std::fs::write(&path, exported).map_err(|e| {
                                CliError::new(format!("Failed to write {}: {}", path.display(), e))
                            })?;
                            print_success(&format!(
                                "Exported {} rules to {}",
                                spellcheck.len(),
                                path.display()
                            ));
                        }
                        None => println!("{}", exported),
                    }
                }
                RulesAction::Stats => print_json(&spellcheck.statistics())?,
            }
        }
        Commands::Geo { name } => {
            let resolver = config.normalizer.resolver();
            let country = resolver
                .resolve_by_code(&name)
                .or_else(|| resolver.resolve_country(Some(&name), Some(&name)))
                .ok_or_else(|| {
                    CliError::new(format!("No country matches {:?}", name))
                        .with_help("Try an ISO code, the Chinese name, or a common English alias")
                })?;
            let continent = resolver.continent_of(country);
            print_json(&json!({
                "code": country.code,
                "name_cn": country.name_cn,
                "name_en": country.name_en,
                "continent": continent.map(|c| json!({
                    "name_cn": c.name_cn,
                    "name_en": c.name_en,
                })),
                "aliases": country.aliases,
            }))?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
