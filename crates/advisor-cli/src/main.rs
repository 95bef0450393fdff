mod fallback;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use advisor_common::api::{
    HealthStatus, LeafAnalysis, MarketQuote, RecommendRequest, RecommendResponse, WeatherReport,
};
use advisor_common::fetch::{fetch_with_fallback, ApiClient, ApiClientConfig};

#[derive(Parser)]
#[command(name = "agri", about = "Farm advisory client", version)]
struct Cli {
    /// Emit raw JSON instead of formatted text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask for crop recommendations for the coming season.
    Recommend {
        /// Soil type (clay, loam, black, sandy); omit for any.
        #[arg(long)]
        soil: Option<String>,
        /// Season (rabi, kharif, zaid); omit for any.
        #[arg(long)]
        season: Option<String>,
        /// Available budget in rupees.
        #[arg(long, default_value_t = 0.0)]
        budget: f64,
        /// Farm location, used for regional advice.
        #[arg(long)]
        location: Option<String>,
        /// Crop grown last season, used for rotation advice.
        #[arg(long)]
        prev_crop: Option<String>,
    },
    /// Show the current weather snapshot.
    Weather,
    /// Show market prices.
    Market,
    /// Upload a leaf photo for a health check.
    Diagnose {
        /// Path to the leaf image.
        image: PathBuf,
    },
    /// Weather and market prices side by side.
    Dashboard,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(ApiClientConfig::from_env())?;

    match cli.command {
        Command::Recommend {
            soil,
            season,
            budget,
            location,
            prev_crop,
        } => {
            let request = RecommendRequest {
                soil,
                season,
                budget,
                location,
                prev_crop,
            };
            let local = fallback::fallback_recommend(&request);
            let response =
                fetch_with_fallback("recommend", client.recommend(&request), local).await;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_recommendations(&response);
            }
        }
        Command::Weather => {
            let report =
                fetch_with_fallback("weather", client.weather(), fallback::fallback_weather())
                    .await;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_weather(&report);
            }
        }
        Command::Market => {
            let quotes =
                fetch_with_fallback("market", client.market(), fallback::fallback_market()).await;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&quotes)?);
            } else {
                print_market(&quotes);
            }
        }
        Command::Diagnose { image } => {
            let bytes = tokio::fs::read(&image).await?;
            let file_name = image
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("leaf.jpg")
                .to_string();
            let analysis = fetch_with_fallback(
                "analyze-image",
                client.analyze_image(&file_name, bytes),
                fallback::fallback_analysis(),
            )
            .await;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_analysis(&analysis);
            }
        }
        Command::Dashboard => {
            let (report, quotes) = futures::join!(
                fetch_with_fallback("weather", client.weather(), fallback::fallback_weather()),
                fetch_with_fallback("market", client.market(), fallback::fallback_market()),
            );
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "weather": report,
                        "market": quotes,
                    }))?
                );
            } else {
                print_weather(&report);
                println!();
                print_market(&quotes);
            }
        }
    }

    Ok(())
}

fn print_recommendations(response: &RecommendResponse) {
    println!("Recommended crops:");
    for advice in &response.recommendations {
        println!("  {}: {}", advice.name, advice.details);
    }
}

fn print_weather(report: &WeatherReport) {
    println!(
        "Weather: {}°C, humidity {}%, rainfall {}, {}",
        report.temp, report.humidity, report.rainfall, report.condition
    );
}

fn print_market(quotes: &[MarketQuote]) {
    println!("Market prices:");
    for quote in quotes {
        println!("  {:<12} ₹ {:<14} {}", quote.crop, quote.price, quote.change);
    }
}

fn print_analysis(analysis: &LeafAnalysis) {
    match analysis.status {
        HealthStatus::Healthy => println!("Healthy. {}", analysis.remedy),
        HealthStatus::Diseased => println!(
            "Detected: {}. Remedy: {}",
            analysis.disease, analysis.remedy
        ),
    }
}
