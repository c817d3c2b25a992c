use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use bala_cli::ChartInput;
use bala_cli::report::{bhava_table, drishti_table, shadbala_detail, shadbala_table, varga_table};
use bala_config::{BalaConfig, OutputFormat};
use bala_vedic_base::{
    BalaError, Chart, Graha, Varga, calculate_house_strength_with_mode, calculate_shadbala_with,
    dignity, dignity_at_longitude, divisional_chart, graha_drishti_matrix, rashi_from_longitude,
    rashi_lord, relationship,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bala", about = "Vedic planetary strength and divisional chart CLI")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Emit JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute Shadbala (six-fold planetary strength) for a chart
    Shadbala {
        /// Chart JSON file
        #[arg(long)]
        chart: PathBuf,
        /// Optional graha filter (Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu)
        #[arg(long)]
        graha: Option<String>,
    },
    /// Compute Bhava (house) strength for a chart
    Bhava {
        /// Chart JSON file
        #[arg(long)]
        chart: PathBuf,
    },
    /// Derive a divisional chart
    Varga {
        /// Chart JSON file
        #[arg(long)]
        chart: PathBuf,
        /// Division code (D1..D60, D150, D249)
        #[arg(long, default_value = "D9")]
        division: String,
    },
    /// Dignity of a graha at a sidereal longitude
    Dignity {
        /// Graha name (Sanskrit or English)
        #[arg(long)]
        graha: String,
        /// Sidereal ecliptic longitude in degrees
        #[arg(long)]
        lon: f64,
    },
    /// Graha-to-graha aspect matrix for a chart
    Drishti {
        /// Chart JSON file
        #[arg(long)]
        chart: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => BalaConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => BalaConfig::default(),
    };
    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    init_tracing(&config.logging.filter);
    debug!(?config, "configuration loaded");

    run(cli.command, &config)
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_chart(path: &Path) -> Result<Chart> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading chart {}", path.display()))?;
    let input = ChartInput::from_json(&text)
        .with_context(|| format!("parsing chart {}", path.display()))?;
    let chart = input
        .into_chart()
        .with_context(|| format!("building chart {}", path.display()))?;
    info!(
        timestamp = %chart.timestamp(),
        grahas = chart.planets().len(),
        "chart loaded"
    );
    Ok(chart)
}

fn parse_graha(name: &str) -> Result<Graha> {
    Graha::from_name(name).ok_or_else(|| anyhow!("unknown graha: {name}"))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(command: Commands, config: &BalaConfig) -> Result<()> {
    let json = config.output.format == OutputFormat::Json;
    let p = config.output.precision;

    match command {
        Commands::Shadbala { chart, graha } => {
            let chart = load_chart(&chart)?;
            let results = calculate_shadbala_with(&chart, &config.shadbala);
            if let Some(name) = graha {
                let g = parse_graha(&name)?;
                let entry = results.get(&g).ok_or(BalaError::MissingPlanet(g))?;
                if json {
                    print_json(entry)?;
                } else {
                    println!("Shadbala for {} at {}\n", g.english_name(), chart.timestamp());
                    print!("{}", shadbala_detail(entry, p));
                }
            } else if json {
                print_json(&results)?;
            } else {
                let loc = chart.location();
                println!(
                    "Shadbala for {} at {:.4}°N, {:.4}°E\n",
                    chart.timestamp(),
                    loc.latitude_deg,
                    loc.longitude_deg
                );
                print!("{}", shadbala_table(&results, p));
            }
        }

        Commands::Bhava { chart } => {
            let chart = load_chart(&chart)?;
            let shadbala = calculate_shadbala_with(&chart, &config.shadbala);
            let houses =
                calculate_house_strength_with_mode(&chart, &shadbala, config.shadbala.drishti_mode);
            if json {
                print_json(&houses)?;
            } else {
                println!("Bhava Bala for {}\n", chart.timestamp());
                print!("{}", bhava_table(&houses, p));
            }
        }

        Commands::Varga { chart, division } => {
            let varga = Varga::from_code(&division)?;
            let chart = load_chart(&chart)?;
            let derived = divisional_chart(&chart, varga);
            if json {
                print_json(&derived)?;
            } else {
                print!("{}", varga_table(&derived, varga, p));
            }
        }

        Commands::Dignity { graha, lon } => {
            let g = parse_graha(&graha)?;
            let info = rashi_from_longitude(lon);
            let lord = rashi_lord(info.rashi);
            let by_sign = dignity(g, info.rashi);
            let by_degree = dignity_at_longitude(g, lon);
            if json {
                print_json(&serde_json::json!({
                    "graha": g,
                    "rashi": info.rashi,
                    "degrees_in_rashi": info.degrees_in_rashi,
                    "lord": lord,
                    "relationship_to_lord": relationship(g, lord),
                    "dignity": by_sign,
                    "dignity_degree_aware": by_degree,
                }))?;
            } else {
                println!(
                    "{} in {} {:.4}° (lord {}, {:?})",
                    g.english_name(),
                    info.rashi.name(),
                    info.degrees_in_rashi,
                    lord.english_name(),
                    relationship(g, lord)
                );
                println!("  Sign-only:    {}", by_sign.name());
                println!("  Degree-aware: {}", by_degree.name());
            }
        }

        Commands::Drishti { chart } => {
            let chart = load_chart(&chart)?;
            let matrix = graha_drishti_matrix(&chart, config.shadbala.drishti_mode);
            if json {
                print_json(&matrix)?;
            } else {
                println!("Graha drishti (virupas), source rows → target columns\n");
                print!("{}", drishti_table(&matrix, p));
            }
        }
    }
    Ok(())
}
