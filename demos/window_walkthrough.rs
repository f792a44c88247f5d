/// Example demonstrating calendar-aware windows
///
/// This example shows how to:
/// 1. Build a window from "now" and a calendar span
/// 2. Shift and expand it by months and days
/// 3. Intersect it with another window
/// 4. Attach a default zone to naive wall-clock input
///
/// Run with:
/// ```bash
/// RUST_LOG=datetime_window=trace \
/// DAY=2024-01-31 \
/// cargo run --example window_walkthrough
/// ```
use anyhow::{Context, Result};
use chrono::{NaiveDate, TimeZone, Utc};
use datetime_window::{
    Bound, CalendarSpan, FixedClock, NowSampling, Window, WindowConfigBuilder, WindowFactory,
};
use std::env;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let day_str = env::var("DAY").unwrap_or_else(|_| "2024-01-31".to_string());
    let day = NaiveDate::parse_from_str(&day_str, "%Y-%m-%d")
        .context("Failed to parse DAY (expected format: YYYY-MM-DD)")?;
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .context("Midnight is always a valid time")?;
    let now = Utc.from_utc_datetime(&midnight);

    info!(day = %day, "Starting window walkthrough");

    // Freeze the clock at DAY so every run is reproducible
    let config = WindowConfigBuilder::new()
        .now_sampling(NowSampling::Shared)
        .build();
    let factory = WindowFactory::new(config, FixedClock::new(now));

    // The month leading up to DAY
    let last_month = factory.create(Bound::Span(CalendarSpan::new().months(-1)), None)?;
    info!(window = %last_month, days = last_month.duration_days(), "Previous month");

    // The month starting at DAY: Jan 31 + 1 month clamps to the end of February
    let next_month = Window::from_span(now, CalendarSpan::new().months(1))?;
    info!(window = %next_month, days = next_month.duration_days(), "Next month");

    let shifted = last_month.shift_window(CalendarSpan::new().months(1))?;
    info!(window = %shifted, "Previous month shifted forward by one month");

    let padded = next_month.expand(CalendarSpan::new().days(7))?;
    info!(window = %padded, "Next month padded by a week on both sides");

    match last_month.overlap(&padded) {
        Some(shared) => info!(window = %shared, "Previous month overlaps the padded window"),
        None => info!("Previous month and the padded window are disjoint"),
    }

    // Naive wall-clock input gets the factory's default zone
    let noon = day
        .and_hms_opt(12, 0, 0)
        .context("Noon is always a valid time")?;
    let until_noon = factory.create_explicit(None, Some(noon.into()))?;
    info!(
        window = %until_noon,
        contains_now = until_noon.contains(now)?,
        "From now until noon"
    );

    println!("\n=== Window Walkthrough ===");
    println!("Previous month: {last_month}");
    println!("Next month:     {next_month}");
    println!("Shifted:        {shifted}");
    println!("Padded:         {padded}");
    println!("Until noon:     {until_noon}");

    Ok(())
}
