mod render;
mod replay;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vidscout_pipeline::{PipelineError, QueryOptions, TrendOptions};

use crate::replay::Replay;

#[derive(Debug, Parser)]
#[command(name = "vidscout")]
#[command(about = "Find, annotate and rank videos for a free-text query")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a query: search or trending chart, annotate, rank
    Query {
        /// Free-text request, e.g. "best RTX 4070 build include shorts"
        text: String,

        /// Catalog of recorded source and annotator responses (YAML or JSON)
        #[arg(long)]
        catalog: PathBuf,

        /// Print results as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Rank recent uploads by views per hour since publication
    Trends {
        /// Catalog with `recent` videos and their `stats` (YAML or JSON)
        #[arg(long)]
        catalog: PathBuf,

        /// Topic to score; defaults to VIDSCOUT_TREND_QUERY
        #[arg(long)]
        query: Option<String>,

        /// Number of recent videos to score; defaults to VIDSCOUT_TREND_MAX_RESULTS
        #[arg(long)]
        limit: Option<u32>,

        /// Print trend records as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = vidscout_core::load_app_config()?;
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Query {
            text,
            catalog,
            json,
        } => run_query_command(&config, &text, &catalog, json).await,
        Commands::Trends {
            catalog,
            query,
            limit,
            json,
        } => {
            let query = query.unwrap_or_else(|| config.trend_query.clone());
            let mut options = TrendOptions::from_app_config(&config);
            if let Some(limit) = limit {
                options.limit = limit;
            }
            run_trends_command(&query, &options, &catalog, json).await
        }
    }
}

async fn run_query_command(
    config: &vidscout_core::AppConfig,
    text: &str,
    catalog: &std::path::Path,
    json: bool,
) -> anyhow::Result<()> {
    let replay = Replay::new(replay::load_catalog(catalog)?);
    let options = QueryOptions::from_app_config(config);

    if !json {
        println!(
            "{}",
            render::acknowledgement(vidscout_core::QueryIntent::classify(text))
        );
    }

    match vidscout_pipeline::run_query(&replay, &replay, &options, text).await {
        Ok(results) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("{}", render::query_results(&results));
            }
            Ok(())
        }
        Err(PipelineError::NoResults { .. }) => {
            println!("No videos found. Try another query.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn run_trends_command(
    query: &str,
    options: &TrendOptions,
    catalog: &std::path::Path,
    json: bool,
) -> anyhow::Result<()> {
    let replay = Replay::new(replay::load_catalog(catalog)?);
    let records =
        vidscout_pipeline::detect_trends(&replay, query, options, chrono::Utc::now()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("{}", render::trend_records(&records));
    }
    Ok(())
}
