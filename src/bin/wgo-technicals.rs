//! WGO technicals CLI
//!
//! Loads market data for one symbol, runs the technical analysis core and
//! prints the report as JSON on stdout.

use chrono::Utc;
use dotenvy::dotenv;
use std::env;
use tracing::{error, info};
use wgo_technicals::analysis::{load_analysis_input, TechnicalAnalyzer};
use wgo_technicals::config::Config;
use wgo_technicals::logging;
use wgo_technicals::services::PolygonMarketDataProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let symbol = match env::args().nth(1) {
        Some(symbol) => symbol.to_uppercase(),
        None => return Err("usage: wgo-technicals <SYMBOL>".into()),
    };

    let config = Config::from_env();
    info!(environment = %config.environment, symbol = %symbol, "Starting WGO technicals");

    if config.provider.polygon_api_key.is_empty() {
        error!("POLYGON_API_KEY is not set; indicator fetches will fail");
    }

    let provider = PolygonMarketDataProvider::new(&config.provider)?;
    let now = Utc::now();
    let input =
        load_analysis_input(&provider, &symbol, &config.analysis, now.date_naive()).await?;

    let analyzer = TechnicalAnalyzer::new(config.analysis);
    let report = analyzer.analyze_at(&input, now);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
