//! Viewtrix Analyzer
//!
//! Demo entry point: seeds an in-memory store with a couple of channels
//! (one carrying a synthetic single-day spike), runs anomaly detection,
//! then prints the merged indicator analysis per channel.

use chrono::NaiveDate;
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;
use viewtrix::analysis::IndicatorOrchestrator;
use viewtrix::anomaly::{AnomalyDetector, DetectorConfig};
use viewtrix::config;
use viewtrix::logging;
use viewtrix::models::Channel;
use viewtrix::services::InMemoryMetricsStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    info!("Starting Viewtrix Analyzer demo");

    let store = Arc::new(InMemoryMetricsStore::new());
    seed_demo_data(&store).await?;

    let detector = AnomalyDetector::new(store.clone(), DetectorConfig::default());
    let batch = detector.detect_for_all_channels(None, None).await?;
    println!(
        "Detection: checked {}, anomalies {}, excluded {}",
        batch.total_checked, batch.total_anomalies, batch.total_excluded
    );
    for result in &batch.channels {
        for anomaly in &result.anomalies {
            println!(
                "  {} on {}: {} views ({:.2}% above {} on {}, ratio {:.2}x)",
                result.channel.handle,
                anomaly.date,
                anomaly.views,
                anomaly.percentage_increase,
                anomaly.previous_views,
                anomaly.previous_date,
                anomaly.ratio
            );
        }
    }

    let orchestrator = IndicatorOrchestrator::new(store.clone(), config::get_rsi_period());
    let analysis = orchestrator.analyze_all_channels(None, None).await?;

    for channel_analysis in &analysis.channels {
        println!("\nChannel: {}", channel_analysis.channel.handle);
        for point in &channel_analysis.points {
            println!(
                "  {}  views={:<8} ma7={:<10} vsi={:<4} {:<20} rsi={:<8} {}",
                point.date,
                point.value,
                point.ma7.map_or("-".to_string(), |v| format!("{:.2}", v)),
                point.vsi.map_or("-".to_string(), |v| v.to_string()),
                point.vsi_label.map_or("", |l| l.as_str()),
                point.rsi.map_or("-".to_string(), |v| format!("{:.2}", v)),
                point.rsi_label.map_or("", |l| l.as_str()),
            );
        }
        if let Some(trend) = &channel_analysis.trend {
            println!(
                "  Trend: {:?} {:.2}% (first half avg {:.2}, second half avg {:.2})",
                trend.direction,
                trend.percentage,
                trend.first_period_avg,
                trend.second_period_avg
            );
        }
        println!(
            "  {}",
            serde_json::to_string_pretty(&channel_analysis.exclusions)?
        );
    }

    Ok(())
}

async fn seed_demo_data(
    store: &InMemoryMetricsStore,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    store.add_channel(Channel::new(1, "@steadycaster", "Steady Caster")).await;
    store.add_channel(Channel::new(2, "@spikycaster", "Spiky Caster")).await;

    let start = NaiveDate::from_ymd_opt(2026, 8, 1).ok_or("bad seed date")?;

    // A gently rising channel.
    let steady = [
        1000.0, 1200.0, 900.0, 1100.0, 1050.0, 1300.0, 1250.0, 1400.0, 1150.0, 1500.0,
        1350.0, 1600.0, 1450.0, 1700.0, 1550.0, 1800.0, 1650.0, 1900.0,
    ];
    for (i, views) in steady.iter().enumerate() {
        store.add_metric(1, start + chrono::Days::new(i as u64), *views).await;
    }

    // Flat viewership with a 12x spike on day 8.
    let spiky = [
        1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 12000.0, 1000.0, 1000.0,
        1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1000.0,
    ];
    for (i, views) in spiky.iter().enumerate() {
        store.add_metric(2, start + chrono::Days::new(i as u64), *views).await;
    }

    Ok(())
}
