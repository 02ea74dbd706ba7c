use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use kundali_base::{
    DashaConfig, DashaLevel, DashaSystem, Locale, Rashi, dasha_tree, detect_all,
    nakshatra_position, sign_of_house, whole_sign_house,
};
use kundali_facts::{
    AstroPatch, BirthProfile, CoreConfig, FactSheet, FetchPlanner, RawPlanet, coverage_of,
    merge_all, normalize,
};
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(name = "kundali", about = "Deterministic jyotish facts and fetch planning")]
struct Cli {
    /// Config file (JSON); falls back to $KUNDALI_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Nakshatra, pada and traversed fraction from a sidereal longitude
    Nakshatra {
        /// Sidereal longitude in degrees
        lon: f64,
    },
    /// Whole-sign house of a sign, or the sign on a house
    House {
        /// Ascendant sign id (1 = Mesha .. 12 = Meena)
        #[arg(long)]
        asc: i64,
        /// Sign id to place
        #[arg(long, conflicts_with = "house")]
        sign: Option<i64>,
        /// House number to resolve
        #[arg(long)]
        house: Option<i64>,
    },
    /// Dasha tree, or the active periods at an instant
    Dasha {
        /// Birth profile JSON file
        #[arg(long)]
        profile: PathBuf,
        /// Sidereal Moon longitude at birth
        #[arg(long)]
        moon: f64,
        /// vimshottari or yogini
        #[arg(long, default_value = "vimshottari")]
        system: DashaSystem,
        /// Deepest level (maha, antar, pratyantar, sookshma, pran)
        #[arg(long)]
        depth: Option<DashaLevel>,
        /// Print only the periods active at this instant (RFC 3339)
        #[arg(long)]
        at: Option<String>,
    },
    /// Yogas and doshas of a raw planet feed
    Yogas {
        /// JSON array of planet rows
        #[arg(long)]
        chart: PathBuf,
        /// Ascendant sign id when the feed has no ascendant row
        #[arg(long)]
        asc: Option<i64>,
    },
    /// Coverage of a fact sheet
    Coverage {
        #[arg(long)]
        sheet: PathBuf,
    },
    /// Fetch plans for a question or DataNeeded keys
    Plan {
        #[arg(long)]
        sheet: Option<PathBuf>,
        #[arg(long, required_unless_present = "keys")]
        question: Option<String>,
        /// Comma-separated keys, e.g. D9,vimshottari:antar
        #[arg(long, value_delimiter = ',')]
        keys: Vec<String>,
    },
    /// Merge patches into a fact sheet
    Merge {
        #[arg(long)]
        sheet: PathBuf,
        /// Patch JSON files, merged in order
        #[arg(long, required = true)]
        patch: Vec<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn sign(id: i64) -> Result<Rashi> {
    if !(1..=12).contains(&id) {
        bail!("sign id {id} outside 1..=12");
    }
    Ok(Rashi::from_sign_id(id))
}

#[derive(Serialize)]
struct HouseRow {
    ascendant: Rashi,
    sign: Rashi,
    sign_label: &'static str,
    house: u8,
}

#[derive(Serialize)]
struct ActiveRow {
    level: DashaLevel,
    lord: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    years: f64,
}

fn run(cli: Cli) -> Result<()> {
    let config = CoreConfig::load(cli.config.as_deref()).context("loading config")?;
    debug!(?config, "config loaded");
    let locale: Locale = config.locale;

    match cli.command {
        Commands::Nakshatra { lon } => {
            if !lon.is_finite() {
                bail!("longitude must be finite");
            }
            print_json(&nakshatra_position(lon))
        }

        Commands::House { asc, sign: sign_id, house } => {
            let ascendant = sign(asc)?;
            let (placed, house) = match (sign_id, house) {
                (Some(id), None) => {
                    let s = sign(id)?;
                    (s, whole_sign_house(ascendant, s))
                }
                (None, Some(h)) if (1..=12).contains(&h) => {
                    (sign_of_house(ascendant, h as u8), h as u8)
                }
                (None, Some(h)) => bail!("house {h} outside 1..=12"),
                _ => bail!("one of --sign or --house is required"),
            };
            print_json(&HouseRow {
                ascendant,
                sign: placed,
                sign_label: placed.label(locale),
                house,
            })
        }

        Commands::Dasha {
            profile,
            moon,
            system,
            depth,
            at,
        } => {
            if !moon.is_finite() {
                bail!("moon longitude must be finite");
            }
            let profile: BirthProfile = read_json(&profile)?;
            let dasha_config = DashaConfig {
                depth: depth.unwrap_or(config.dasha_depth),
                yogini_start: config.yogini_start,
            };
            let nakshatra = nakshatra_position(moon);
            let tree = dasha_tree(system, profile.birth_utc(), &nakshatra, &dasha_config)?;
            match at {
                None => print_json(&tree),
                Some(at) => {
                    let at = DateTime::parse_from_rfc3339(&at)
                        .with_context(|| format!("parsing --at {at}"))?
                        .with_timezone(&Utc);
                    let rows: Vec<ActiveRow> = tree
                        .active_stack(at)
                        .into_iter()
                        .map(|p| ActiveRow {
                            level: p.level,
                            lord: p.lord.label(locale).to_string(),
                            start: p.start,
                            end: p.end,
                            years: p.years,
                        })
                        .collect();
                    print_json(&rows)
                }
            }
        }

        Commands::Yogas { chart, asc } => {
            let raw: Vec<RawPlanet> = read_json(&chart)?;
            let hint = asc.map(sign).transpose()?;
            let normalized = normalize(&raw, hint, locale);
            print_json(&detect_all(normalized.ascendant, &normalized.planets, locale))
        }

        Commands::Coverage { sheet } => {
            let sheet: FactSheet = read_json(&sheet)?;
            print_json(&coverage_of(&sheet))
        }

        Commands::Plan {
            sheet,
            question,
            keys,
        } => {
            let sheet: FactSheet = match sheet {
                Some(path) => read_json(&path)?,
                None => FactSheet::default(),
            };
            let planner = FetchPlanner::from_config(&config);
            let plans = match question {
                Some(q) => planner.plan_fetches(&q, &sheet),
                None => planner.plans_for_keys(&keys, &sheet),
            };
            print_json(&plans)
        }

        Commands::Merge { sheet, patch } => {
            let sheet: FactSheet = read_json(&sheet)?;
            let patches = patch
                .iter()
                .map(|p| read_json::<AstroPatch>(p))
                .collect::<Result<Vec<_>>>()?;
            print_json(&merge_all(&sheet, &patches))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}
