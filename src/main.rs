//! gdpscope CLI
//!
//! Command-line interface for the GDP per capita dashboard:
//! - List the filter enumerations
//! - Render a static HTML report or a CSV export of a selection
//! - Run the dev server for the browser front end

use anyhow::{bail, Context};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

use gdpscope::client::{DashboardApi, HttpApi};
use gdpscope::config::{self, Config};
use gdpscope::dashboard::{Dashboard, RefreshOutcome, DEFAULT_SELECTED_COUNTRIES};
use gdpscope::model::{display_name, FilterState, IndicatorKey, YearBounds};
use gdpscope::server::{self, ServeOptions};
use gdpscope::{export, logging, report};

#[derive(Parser)]
#[command(name = "gdpscope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "GDP per capita dashboard over an economic time-series API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend API URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

/// The selection a report or export is built from.
///
/// Omitted values default to what the dashboard starts with.
#[derive(Args, Debug)]
pub struct SelectionArgs {
    /// Countries, comma-separated (default: the first two listed by the API)
    #[arg(long, value_delimiter = ',')]
    pub countries: Vec<String>,

    /// First year (default: start of the dataset)
    #[arg(long)]
    pub min_year: Option<i32>,

    /// Last year (default: end of the dataset)
    #[arg(long)]
    pub max_year: Option<i32>,

    /// Additional indicator key
    #[arg(long)]
    pub indicator: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List selectable countries
    Countries,

    /// List additional indicators
    Indicators,

    /// Show the dataset's year range
    Years,

    /// Render a standalone HTML report of a selection
    Report {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Output HTML file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Export the records of a selection as CSV
    Export {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Output file, `-` for stdout
        #[arg(short, long, default_value = "-")]
        output: String,
    },

    /// Serve the built front end and proxy the API
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
        /// Directory with the built front end
        #[arg(long)]
        dist: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    tracing::debug!("gdpscope v{}", env!("CARGO_PKG_VERSION"));

    let api = HttpApi::new(config.api.http_config()).context("Failed to build HTTP client")?;

    match cli.command {
        Commands::Countries => {
            let countries = api.countries().await?;
            if countries.is_empty() {
                println!("No countries available.");
            }
            for country in countries {
                println!("{}", country);
            }
        }

        Commands::Indicators => {
            let indicators = api.indicators().await?;
            if indicators.is_empty() {
                println!("No additional indicators available.");
            } else {
                println!("{:<30} {}", "Key", "Name");
                println!("{}", "-".repeat(60));
                for key in indicators {
                    println!("{:<30} {}", key, display_name(&key));
                }
            }
        }

        Commands::Years => {
            let range = api.year_range().await?;
            let bounds = range.bounds()?;
            println!("{} - {}", bounds.min(), bounds.max());
        }

        Commands::Report { selection, output } => {
            let filter = resolve_selection(&api, &selection).await?;
            let dashboard = Dashboard::new(api).with_locale(config.display.locale);

            let view = match dashboard.refresh(&filter).await {
                RefreshOutcome::Rendered(view) => view,
                RefreshOutcome::Failed(err) => return Err(err.into()),
                RefreshOutcome::Superseded => bail!("Refresh was superseded"),
            };

            let html = report::render_html(&view, &filter, Utc::now())?;
            write_file(&output, html.as_bytes())?;
            println!("Report written to {:?}", output);
        }

        Commands::Export { selection, output } => {
            let filter = resolve_selection(&api, &selection).await?;
            let records = api.filtered_records(&filter).await?;

            if output == "-" {
                let stdout = std::io::stdout();
                export::write_records_csv(&records, stdout.lock())?;
            } else {
                let mut buffer = Vec::new();
                let rows = export::write_records_csv(&records, &mut buffer)?;
                write_file(Path::new(&output), &buffer)?;
                println!("Exported {} rows to {:?}", rows, output);
            }
        }

        Commands::Serve { host, port, dist } => {
            let mut options = ServeOptions::from(&config);
            if let Some(host) = host {
                options.host = host;
            }
            if let Some(port) = port {
                options.port = port;
            }
            if let Some(dist) = dist {
                options.dist_dir = dist;
            }
            server::serve(&options).await?;
        }

        Commands::Config { output } => {
            let config = config::generate_default_config();

            match output {
                Some(path) => {
                    write_file(&path, config.as_bytes())?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Fill the omitted parts of a selection from the API
async fn resolve_selection(
    api: &impl DashboardApi,
    selection: &SelectionArgs,
) -> anyhow::Result<FilterState> {
    let countries = if selection.countries.is_empty() {
        let mut countries = api.countries().await?;
        countries.truncate(DEFAULT_SELECTED_COUNTRIES);
        countries
    } else {
        selection.countries.clone()
    };

    let years = match (selection.min_year, selection.max_year) {
        (Some(min), Some(max)) => YearBounds::new(min, max)?,
        (min, max) => {
            let full = api.year_range().await?.bounds()?;
            YearBounds::new(min.unwrap_or(full.min()), max.unwrap_or(full.max()))?
        }
    };

    let indicator = selection.indicator.as_deref().and_then(IndicatorKey::parse);
    let filter = FilterState::new(countries, years, indicator);
    tracing::info!(
        countries = ?filter.countries(),
        years = %filter.years().label(),
        "Resolved selection"
    );
    Ok(filter)
}

fn write_file(path: &Path, contents: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {:?}", path))?;
    file.write_all(contents)?;
    Ok(())
}
