//! Demo 1: Market Snapshot
//!
//! Showcases: Public endpoints, no API key needed
//!
//! Run: cargo run --bin market_snapshot

use coinbase_rest::CoinbaseClient;
use colored::*;
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(65).cyan());
    println!("{}", "  MARKET SNAPSHOT".cyan().bold());
    println!("{}", "  Coinbase REST Demo - Public Endpoints".cyan());
    println!("{}", "═".repeat(65).cyan());
    println!();

    let client = CoinbaseClient::new()?;

    println!("{}", "  EXCHANGE RATES".white().bold());
    println!("  {}", "─".repeat(55));
    let pairs = ["btc_to_usd", "btc_to_eur", "usd_to_btc"];
    match client.get_exchange_rates(&pairs).await {
        Ok(rates) => {
            for pair in pairs {
                match rates.get(pair) {
                    Some(rate) => println!("  {} {:<12} {}", "•".yellow(), pair, rate),
                    None => println!("  {} {:<12} {}", "•".yellow(), pair, "n/a".dimmed()),
                }
            }
        }
        Err(e) => println!("  {} {}", "✗".red(), e),
    }
    println!();

    println!("{}", "  PRICE QUOTES".white().bold());
    println!("  {}", "─".repeat(55));
    for qty in [dec!(0.1), dec!(1), dec!(10)] {
        let buy = client.get_buy_price(qty).await;
        let sell = client.get_sell_price(qty).await;
        match (buy, sell) {
            (Ok(buy), Ok(sell)) => println!(
                "  {:>6} BTC  buy {} {}  sell {} {}",
                qty,
                buy.amount.green(),
                buy.currency,
                sell.amount.red(),
                sell.currency
            ),
            (Err(e), _) | (_, Err(e)) => println!("  {} {}", "✗".red(), e),
        }
    }
    println!();

    println!("{}", "  CURRENCIES".white().bold());
    println!("  {}", "─".repeat(55));
    match client.get_currencies().await {
        Ok(currencies) => {
            let mut codes: Vec<_> = currencies.iter().collect();
            codes.sort();
            for (code, name) in codes.iter().take(10) {
                println!("  {} {:<5} {}", "•".yellow(), code, name);
            }
            println!("  {} supported in total", currencies.len().to_string().bold());
        }
        Err(e) => println!("  {} {}", "✗".red(), e),
    }

    Ok(())
}
