//! Place a limit order far from the market, inspect it, then cancel it.
//!
//! Runs against the demo environment unless `TRADING212_ENV=live` is set.
//!
//! ```sh
//! RUST_LOG=info cargo run --example trading -- AAPL_US_EQ
//! ```

use std::time::Duration;

use chrono::Utc;
use tracing_subscriber::EnvFilter;
use trading212_sdk::prelude::*;

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ticker: Ticker = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "AAPL_US_EQ".to_string())
        .into();

    let client = Trading212ClientBuilder::from_env()?
        .timeout(Duration::from_secs(10))
        .build()?;

    // Price the order well below the current position price so it rests.
    let reference_price = client
        .positions()
        .list(&PositionsOptions {
            ticker: Some(ticker.clone()),
        })
        .await?
        .first()
        .map(|p| p.current_price)
        .unwrap_or(100.0);
    let limit_price = (reference_price * 0.5 * 100.0).round() / 100.0;

    let request = LimitOrderRequest::new(ticker.clone(), 1.0, limit_price, TimeValidity::Day);
    let order = client.orders().place_limit(&request).await?;
    println!(
        "Placed {} order #{} for {} @ {:.2} ({:?})",
        order.order_type, order.id, order.ticker, limit_price, order.status
    );

    let fetched = client.orders().get(order.id).await?;
    println!("Order #{} is {:?}", fetched.id, fetched.status);

    match client.orders().cancel(order.id).await {
        Ok(()) => println!("Cancelled order #{}", order.id),
        Err(e) if e.status() == Some(404) => println!("Order #{} already gone", order.id),
        Err(e) => return Err(e),
    }

    let pending = client.orders().list().await?;
    println!("{} orders still pending", pending.len());

    // Queue a CSV export of the last 30 days.
    let now = Utc::now();
    let export = client
        .reports()
        .request(&ReportRequest::new(now - chrono::Duration::days(30), now))
        .await?;
    println!("Requested report #{}", export.report_id);

    for report in client.reports().list().await? {
        println!(
            "  report #{} {:?} {}",
            report.report_id,
            report.status,
            report.download_link.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
