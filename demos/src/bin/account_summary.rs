//! Demo 2: Account Summary
//!
//! Showcases: Private endpoints with an API key from CB_API_KEY
//!
//! Run: CB_API_KEY=... cargo run --bin account_summary

use coinbase_rest::{CoinbaseClient, RestError};
use colored::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(65).cyan());
    println!("{}", "  ACCOUNT SUMMARY".cyan().bold());
    println!("{}", "  Coinbase REST Demo - Private Endpoints".cyan());
    println!("{}", "═".repeat(65).cyan());
    println!();

    let client = match CoinbaseClient::from_env() {
        Ok(client) => client,
        Err(RestError::Auth(e)) => {
            println!("  {} {}", "✗".red(), e);
            println!("  Set CB_API_KEY to run this demo.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let user = client.get_user().await?;
    println!("  {} {} <{}>", "User:".white().bold(), user.name, user.email);
    println!("  {} {}", "Time zone:".white().bold(), user.time_zone);
    println!();

    let balance = client.get_balance().await?;
    println!(
        "  {} {} {}",
        "Balance:".white().bold(),
        balance.numeric()?.to_string().green(),
        balance.currency
    );

    let address = client.get_receive_address().await?;
    println!("  {} {}", "Receive address:".white().bold(), address.address);
    println!();

    println!("{}", "  RECENT TRANSACTIONS".white().bold());
    println!("  {}", "─".repeat(55));
    let list = client.get_transactions(None).await?;
    for tx in &list.transactions {
        let when = tx
            .created_at_time()
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!(
            "  {} {:<16} {:>14} {:<4} {}",
            "•".yellow(),
            when.dimmed(),
            tx.amount.amount,
            tx.amount.currency,
            tx.status
        );
    }
    println!(
        "  page {} of {}, {} transactions in total",
        list.current_page, list.num_pages, list.total_count
    );

    Ok(())
}
