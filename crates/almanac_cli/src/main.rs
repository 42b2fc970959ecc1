mod calendar;
mod render;

use std::path::PathBuf;

use almanac_config::AlmanacConfig;
use almanac_core::Ephemeris;
use almanac_summary::{DayReport, EngineObserver, ObserverContext, build_day_report};
use almanac_time::DisplayZone;
use chrono::{Datelike, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "almanac", about = "Sun, Moon and planet timings for an observing site")]
struct Cli {
    /// TOML configuration file (default: ./almanac.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Current date and time in the display zone, and the site
    Now,
    /// Month calendar with today and the selected day marked
    Calendar {
        #[arg(long, value_parser = clap::value_parser!(i32).range(1900..=2100))]
        year: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Day of month to select
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=31))]
        day: Option<u32>,
        /// Also print the astronomy report for the selected day
        #[arg(long)]
        report: bool,
    },
    /// Sun, Moon and planet report for a day
    Day {
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },
    /// Planet rise/set/zenith table for a day
    Planets {
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> AlmanacConfig {
    AlmanacConfig::load(path.map(PathBuf::as_path)).unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    })
}

fn require_zone(cfg: &AlmanacConfig) -> DisplayZone {
    cfg.zone().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|e| {
        eprintln!("Invalid date '{s}': {e} (expected YYYY-MM-DD)");
        std::process::exit(1);
    })
}

fn observer(cfg: &AlmanacConfig) -> EngineObserver {
    EngineObserver::new(Ephemeris::default(), cfg.riseset_config())
}

fn day_report(cfg: &AlmanacConfig, zone: DisplayZone, date: NaiveDate) -> DayReport {
    let ctx = ObserverContext::new(cfg.location(), date, zone).with_midnight_basis(cfg.midnight);
    let obs = observer(cfg);
    build_day_report(&obs, &obs, &ctx).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_ref());
    let zone = require_zone(&cfg);
    tracing::debug!(site = %cfg.site.name, zone = zone.name(), midnight = ?cfg.midnight, "configuration loaded");

    match cli.command {
        Commands::Now => {
            let now = Utc::now();
            println!("Current date: {}", zone.to_local(&now).format("%d-%m-%Y"));
            println!("Current time: {}", zone.format_clock_seconds(&now));
            println!();
            print!("{}", render::format_site(&cfg.site));
        }

        Commands::Calendar {
            year,
            month,
            day,
            report,
        } => {
            let today = zone.today();
            let year = year.unwrap_or(today.year());
            let month = month.unwrap_or(today.month());
            let selected = match day {
                Some(d) => NaiveDate::from_ymd_opt(year, month, d).unwrap_or_else(|| {
                    eprintln!("Invalid day: {year}-{month:02}-{d:02} does not exist");
                    std::process::exit(1);
                }),
                None => calendar::default_selection(year, month, today).unwrap_or_else(|| {
                    eprintln!("Invalid month: {year}-{month:02}");
                    std::process::exit(1);
                }),
            };
            let Some(grid) = calendar::render_month(year, month, today, selected) else {
                eprintln!("Invalid month: {year}-{month:02}");
                std::process::exit(1);
            };
            print!("{grid}");
            println!("Legend: N* today, [N] selected");
            println!("Selected: {}", selected.format("%A, %d %B %Y"));
            if report {
                println!();
                print!("{}", render::format_day_report(&day_report(&cfg, zone, selected)));
            }
        }

        Commands::Day { date } => {
            let date = date.as_deref().map_or_else(|| zone.today(), parse_date);
            print!("{}", render::format_day_report(&day_report(&cfg, zone, date)));
        }

        Commands::Planets { date } => {
            let date = date.as_deref().map_or_else(|| zone.today(), parse_date);
            print!("{}", render::format_planet_table(&day_report(&cfg, zone, date)));
        }
    }
}
