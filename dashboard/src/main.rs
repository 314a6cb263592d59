use clap::{Parser, Subcommand};
use dashboard::config::{DbTarget, ServerConfig, Settings};
use dashboard::model::StateFilter;
use dashboard::service::DashboardService;
use dashboard::source::SqlSource;
use dashboard::web::{AppState, dashboard_router};
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "dashboard", about = "Olist e-commerce intelligence dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server (default)
    Serve,
    /// Render the dashboard once and print its JSON to stdout
    Report {
        /// Comma-separated customer states, e.g. SP,RJ (default: all)
        #[arg(long)]
        states: Option<String>,
    },
    /// Create the Olist tables on the configured database (development only)
    Migrate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Init structured logging (respects RUST_LOG; defaults to info)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = Settings::from_process()?;
    let target = DbTarget::resolve(&settings)?;
    let server = ServerConfig::resolve(&settings)?;

    tracing::info!(database = %target.redacted(), "using Olist store");

    match cli.command {
        None | Some(Commands::Serve) => serve(&target, server).await?,
        Some(Commands::Report { states }) => report(&target, server, states.as_deref()).await?,
        Some(Commands::Migrate) => migrate(&target).await?,
    }

    Ok(())
}

fn build_service(
    target: &DbTarget,
    server: &ServerConfig,
) -> Result<Arc<DashboardService>, Box<dyn std::error::Error>> {
    let source = SqlSource::new(target)?;
    Ok(DashboardService::new(
        Arc::new(source),
        server.cache_ttl,
        server.sample_cap,
    ))
}

async fn serve(target: &DbTarget, server: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let service = build_service(target, &server)?;

    let listener = TcpListener::bind(server.bind_addr).await?;
    tracing::info!(
        addr = %server.bind_addr,
        cache_ttl_secs = server.cache_ttl.as_secs(),
        sample_cap = server.sample_cap,
        "Dashboard online"
    );

    axum::serve(listener, dashboard_router(AppState { service })).await?;
    Ok(())
}

async fn report(
    target: &DbTarget,
    server: ServerConfig,
    states: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let service = build_service(target, &server)?;
    let filter = states.map(StateFilter::parse).unwrap_or_default();

    let page = service.page(&filter).await?;
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

async fn migrate(target: &DbTarget) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(target.migrate_url()?).await?;
    Migrator::up(&db, None).await?;
    tracing::info!(database = %target.redacted(), "Olist schema created");
    db.close().await?;
    Ok(())
}
