use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courtscope::api::state::AppState;
use courtscope::calculate::{summarize, Comparison, ShootingTendencies, ShotInsights};
use courtscope::config::AppConfig;
use courtscope::models::Archetype;
use courtscope::provider::{HttpStatsProvider, StatProvider, StaticProvider};
use courtscope::retrieve::{ProfileService, ShotService};
use courtscope::storage::StorageConfig;

#[derive(Parser)]
#[command(name = "courtscope")]
#[command(about = "NBA player evaluator: similarity scoring and shot-zone analytics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides config)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Season to evaluate, e.g. "2023-24" (overrides config)
    #[arg(long)]
    season: Option<String>,

    /// Use the built-in static catalog instead of the HTTP provider
    #[arg(long)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },

    /// Compare a player against another player or an archetype
    Compare {
        /// Subject player name
        subject: String,

        /// Target player name
        #[arg(long, conflicts_with = "archetype")]
        target: Option<String>,

        /// Target archetype name (e.g. "Elite Scorer")
        #[arg(long)]
        archetype: Option<String>,
    },

    /// Shot-zone efficiency report for a player
    Zones {
        /// Player name
        player: String,
    },

    /// List players known to the provider
    Players {
        /// Filter by substring
        #[arg(long)]
        search: Option<String>,
    },

    /// Inspect or clear the local cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Show cache entry counts
    Status,
    /// Remove all cached entries
    Clear,
}

struct Services {
    config: Arc<AppConfig>,
    provider: Arc<dyn StatProvider>,
    profiles: Arc<ProfileService>,
    shots: Arc<ShotService>,
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let path = PathBuf::from(&cli.config);
    let mut config = if path.exists() {
        AppConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path.display()))?
    } else {
        AppConfig::default()
    };

    if let Some(dir) = &cli.data_dir {
        config.data_dir = PathBuf::from(dir);
    }
    if let Some(season) = &cli.season {
        config.provider.season = season.clone();
    }
    Ok(config)
}

fn build_services(config: AppConfig, offline: bool) -> Result<Services> {
    let provider: Arc<dyn StatProvider> = if offline {
        tracing::info!("Using static catalog provider (offline)");
        Arc::new(StaticProvider::with_fallback_catalog())
    } else {
        Arc::new(HttpStatsProvider::new(&config.provider)?)
    };

    let storage = StorageConfig::new(config.data_dir.clone());
    let ttl = config
        .cache
        .ttl_duration()
        .unwrap_or(Duration::from_secs(6 * 3600));
    let season = config.provider.season.clone();

    let config = Arc::new(config);
    Ok(Services {
        config,
        provider: provider.clone(),
        profiles: Arc::new(ProfileService::new(
            provider.clone(),
            &storage,
            ttl,
            season.clone(),
        )),
        shots: Arc::new(ShotService::new(provider, &storage, ttl, season)),
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting courtscope v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    let services = build_services(config, cli.offline)?;

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| services.config.server.host.clone());
            let port = port.unwrap_or(services.config.server.port);

            let state = AppState {
                config: services.config.clone(),
                provider: services.provider.clone(),
                profiles: services.profiles.clone(),
                shots: services.shots.clone(),
            };

            let app = courtscope::api::build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }

        Commands::Compare {
            subject,
            target,
            archetype,
        } => {
            let subject_profile = services.profiles.profile_for(&subject).await?;

            let comparison = match (target, archetype) {
                (Some(target), None) => {
                    let target_profile = services.profiles.profile_for(&target).await?;
                    Comparison::between(&subject, &target, &subject_profile, &target_profile)
                }
                (None, Some(name)) => {
                    let Some(archetype) = Archetype::from_name(&name) else {
                        bail!("unknown archetype: {name}");
                    };
                    Comparison::between(
                        &subject,
                        format!("{archetype} Archetype"),
                        &subject_profile,
                        &archetype.profile(),
                    )
                }
                _ => bail!("supply exactly one of --target or --archetype"),
            };

            print_json(&comparison)?;
        }

        Commands::Zones { player } => {
            let events = services.shots.shots_for(&player).await?;
            let report = summarize(&events);
            let insights = ShotInsights::from_events(&events, &report);
            let tendencies = ShootingTendencies::from_insights(&insights);

            print_json(&serde_json::json!({
                "name": player,
                "season": services.config.provider.season,
                "report": report,
                "insights": insights,
                "tendencies": tendencies,
            }))?;
        }

        Commands::Players { search } => {
            let mut players = services.provider.list_players().await?;
            if let Some(term) = search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
                let needle = term.to_lowercase();
                players.retain(|p| p.full_name.to_lowercase().contains(&needle));
            }
            print_json(&players)?;
        }

        Commands::Cache { action } => match action {
            CacheAction::Status => {
                print_json(&serde_json::json!({
                    "profiles": services.profiles.cached_entries(),
                    "shot_batches": services.shots.cached_entries(),
                }))?;
            }
            CacheAction::Clear => {
                let profiles = services.profiles.clear_cache()?;
                let shots = services.shots.clear_cache()?;
                tracing::info!("Cleared {} profile and {} shot entries", profiles, shots);
                print_json(&serde_json::json!({
                    "removed_profiles": profiles,
                    "removed_shot_batches": shots,
                }))?;
            }
        },
    }

    Ok(())
}
