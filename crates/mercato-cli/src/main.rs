use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mercato_core::{format_distance, AppConfig, Coordinate, RankedShopRecord};
use mercato_db::PoolConfig;
use mercato_discovery::{Discovery, PgShopStore};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mercato-cli")]
#[command(about = "Find marketplace shops near a location")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List shops within a radius, nearest first.
    Nearby {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Search radius in km (defaults to MERCATO_DEFAULT_RADIUS_KM).
        #[arg(long)]
        radius: Option<f64>,
        /// Keep only the nearest N shops.
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// List the N closest shops regardless of distance.
    Nearest {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long)]
        json: bool,
    },
    /// Database utilities.
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Check connectivity to DATABASE_URL.
    Ping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = mercato_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Nearby {
            lat,
            lng,
            radius,
            limit,
            json,
        }) => {
            let origin = parse_origin(lat, lng)?;
            let radius = radius.unwrap_or(config.default_radius_km);
            let discovery = build_discovery(&config);
            let ranked = discovery
                .find_nearby_shops(origin, Some(radius), limit)
                .await?;
            print_ranked(&ranked, json)?;
        }
        Some(Commands::Nearest {
            lat,
            lng,
            count,
            json,
        }) => {
            let origin = parse_origin(lat, lng)?;
            let discovery = build_discovery(&config);
            let ranked = discovery.nearest_shops(origin, count).await?;
            print_ranked(&ranked, json)?;
        }
        Some(Commands::Db {
            command: DbCommands::Ping,
        }) => {
            let pool = mercato_db::connect_pool_from_app_config(&config).await?;
            mercato_db::ping(&pool).await?;
            println!("database ok");
        }
        None => println!("mercato-cli ready; see --help"),
    }

    Ok(())
}

fn parse_origin(lat: f64, lng: f64) -> anyhow::Result<Coordinate> {
    Coordinate::try_new(lat, lng).context("origin must be a valid latitude/longitude")
}

fn build_discovery(config: &AppConfig) -> Discovery {
    Discovery::from_app_config(config, Arc::new(build_store(config)))
}

/// Build the remote store over a lazily connected pool.
///
/// A missing, blank, or unparseable `DATABASE_URL` leaves the remote tier
/// unconfigured, so queries run on the fallback dataset.
fn build_store(config: &AppConfig) -> PgShopStore {
    if !config.is_remote_configured() {
        return PgShopStore::unconfigured();
    }

    let url = config.database_url.as_deref().unwrap_or_default();
    match mercato_db::connect_pool_lazy(url, PoolConfig::from_app_config(config)) {
        Ok(pool) => PgShopStore::new(pool),
        Err(e) => {
            tracing::warn!(error = %e, "invalid DATABASE_URL; using fallback shops only");
            PgShopStore::unconfigured()
        }
    }
}

fn print_ranked(ranked: &[RankedShopRecord], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("no shops found");
        return Ok(());
    }

    for line in ranked.iter().map(format_line) {
        println!("{line}");
    }
    Ok(())
}

fn format_line(ranked: &RankedShopRecord) -> String {
    format!(
        "{:>9}  {}  {}",
        format_distance(ranked.distance_km),
        ranked.shop.name,
        ranked.shop.address
    )
}
