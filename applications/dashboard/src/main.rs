/// Userboard - users dashboard
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userboard::{api, output, AppState, DashboardConfig, DashboardError, Pipeline};
use userboard_report::{ChartId, Renderer};

#[derive(Parser)]
#[command(name = "userboard")]
#[command(about = "Users dashboard: fetch, store, chart", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./userboard.toml when present)
    #[arg(short, long, global = true, env = "USERBOARD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run once and write the dashboard and chart exports to disk
    Build {
        /// Output directory (overrides output.dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Serve the dashboard, rebuilding it on every page load
    Serve,
    /// Run once and write a single chart as standalone HTML
    Export {
        /// Chart id (domain-bar, name-vs-username, domain-pie, name-length, company-bar, city-bar)
        chart: String,
        /// Output file (defaults to <output.dir>/charts/<chart>.html)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = DashboardConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Build { out } => {
            build(&config, out).await?;
        }
        Commands::Serve => {
            serve(&config).await?;
        }
        Commands::Export { chart, out } => {
            export(&config, &chart, out).await?;
        }
    }

    Ok(())
}

async fn build(config: &DashboardConfig, out: Option<PathBuf>) -> anyhow::Result<()> {
    let dir = out.unwrap_or_else(|| config.output.dir.clone());
    let pipeline = Pipeline::from_config(config).await?;
    let renderer = Renderer::new()?;

    match pipeline.run().await {
        Ok(dashboard) => {
            let index = output::write_bundle(&renderer, &dashboard, &dir).await?;
            println!("Dashboard written to {}", index.display());
            Ok(())
        }
        Err(DashboardError::Fetch(err)) => {
            let message = err.to_string();
            let index = output::write_failure(
                &renderer,
                pipeline.title(),
                pipeline.source_url(),
                &message,
                &dir,
            )
            .await?;
            tracing::error!(page = %index.display(), "Users fetch failed");
            anyhow::bail!("Error fetching data: {}", message)
        }
        Err(err) => Err(err.into()),
    }
}

async fn serve(config: &DashboardConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Userboard");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let pipeline = Arc::new(Pipeline::from_config(config).await?);
    let renderer = Arc::new(Renderer::new()?);
    let app = api::create_router(AppState::new(pipeline, renderer));

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .with_context(|| format!("invalid server.host {:?}", config.server.host))?,
        config.server.port,
    ));

    tracing::info!("Dashboard available at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn export(config: &DashboardConfig, chart: &str, out: Option<PathBuf>) -> anyhow::Result<()> {
    let id: ChartId = chart.parse()?;

    // Only build the requested chart
    let mut config = config.clone();
    config.report.charts = vec![id];

    let pipeline = Pipeline::from_config(&config).await?;
    let dashboard = pipeline.run().await?;
    let renderer = Renderer::new()?;

    let path = out.unwrap_or_else(|| {
        config
            .output
            .dir
            .join(output::CHARTS_DIR)
            .join(id.export_file_name())
    });
    let chart = dashboard
        .chart(id)
        .context("requested chart missing from the run")?;
    output::write_chart(&renderer, &dashboard, chart, &path).await?;

    println!("Chart {} written to {}", id, path.display());
    Ok(())
}
