//! Read-only tour of the API: account, positions, instruments and history.
//!
//! Credentials come from `TRADING212_API_KEY` / `TRADING212_API_SECRET` (a `.env`
//! file is honoured). Defaults to the demo environment.
//!
//! ```sh
//! RUST_LOG=trading212_sdk=debug cargo run --example basic_usage
//! ```

use futures_util::{StreamExt, pin_mut};
use tracing_subscriber::EnvFilter;
use trading212_sdk::prelude::*;

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Trading212Client::from_env()?;
    println!("Connected to {}", client.base_url());

    // ── Account ──────────────────────────────────────────────────────────
    let info = client.account().info().await?;
    let cash = client.account().cash().await?;
    println!("Account {} ({})", info.id, info.currency_code);
    println!("  free: {:.2}  invested: {:.2}  total: {:.2}", cash.free, cash.invested, cash.total);

    // ── Positions ────────────────────────────────────────────────────────
    let positions = client.positions().all().await?;
    println!("\n{} open positions", positions.len());
    for p in &positions {
        println!(
            "  {:<14} qty {:>10.4}  avg {:>10.2}  now {:>10.2}  ppl {:>8.2}",
            p.ticker, p.quantity, p.average_price, p.current_price, p.ppl
        );
    }

    // ── Instruments ──────────────────────────────────────────────────────
    let instruments = client.instruments().list().await?;
    let exchanges = client.instruments().exchanges().await?;
    println!(
        "\n{} tradable instruments on {} exchanges",
        instruments.len(),
        exchanges.len()
    );

    // ── History ──────────────────────────────────────────────────────────
    let first_page = client
        .history()
        .orders(&HistoryOrdersOptions {
            limit: Some(10),
            ..Default::default()
        })
        .await?;
    println!("\nLast {} filled orders:", first_page.len());
    for item in &first_page.items {
        let price = item.fill.as_ref().map(|f| f.price).unwrap_or_default();
        println!("  #{} {} @ {:.2}", item.order.id, item.order.ticker, price);
    }

    let dividends = client
        .history()
        .dividends_stream(&HistoryDividendsOptions::default());
    pin_mut!(dividends);
    let mut total = 0.0;
    while let Some(dividend) = dividends.next().await {
        total += dividend?.amount;
    }
    println!("\nDividends received: {total:.2}");

    Ok(())
}
