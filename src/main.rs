use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use ge_tracker::config::Config;
use ge_tracker::error::Result;
use ge_tracker::fetcher::Catalogue;
use ge_tracker::wire::price_text::format_change;
use ge_tracker::{ItemSnapshot, PriceChange};

#[tokio::main]
async fn main() -> ExitCode {
    // Logging depends on LOG_LEVEL, so a bad environment can only go to stderr.
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ge-tracker: {e}");
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_new(&cfg.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(&cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "ge-tracker stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: &Config) -> Result<()> {
    if cfg.item_ids.is_empty() {
        warn!("ITEM_IDS is empty, nothing to fetch");
        return Ok(());
    }

    let catalogue = Catalogue::new(cfg)?;
    info!("Fetching {} items from {}", cfg.item_ids.len(), cfg.ge_api_url);

    let mut fetched = 0usize;
    for &id in &cfg.item_ids {
        // A bad item only skips that item.
        match catalogue.fetch_item(id).await {
            Ok(snapshot) => {
                log_snapshot(&snapshot);
                fetched += 1;
            }
            Err(e) => warn!(id, "skipping item: {e}"),
        }
    }

    info!("Done: {fetched}/{} items fetched", cfg.item_ids.len());
    Ok(())
}

/// "n/a" marks a window the catalogue did not report.
fn window_label(change: Option<&PriceChange>) -> String {
    change
        .map(|c| format_change(&c.change()))
        .unwrap_or_else(|| "n/a".to_string())
}

fn log_snapshot(s: &ItemSnapshot) {
    info!(
        event = "SNAPSHOT",
        id = s.id(),
        members = s.is_members_only(),
        current = s.current_price().price(),
        trend = %s.current_price().trend(),
        "{s} | today: {} | 30d: {} | 90d: {} | 180d: {}",
        s.todays_price().price(),
        window_label(s.day30()),
        window_label(s.day90()),
        window_label(s.day180()),
    );
}
