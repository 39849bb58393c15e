//! Basic authentication example.
//!
//! This example demonstrates how to authenticate with the Mondo API
//! and retrieve account information.
//!
//! Run with: cargo run --example basic_auth

use mondo_rs::MondoClient;

#[tokio::main]
async fn main() -> mondo_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Get credentials from environment variables
    let client_id = std::env::var("MONDO_CLIENT_ID")
        .expect("MONDO_CLIENT_ID environment variable required");
    let client_secret = std::env::var("MONDO_CLIENT_SECRET")
        .expect("MONDO_CLIENT_SECRET environment variable required");
    let username = std::env::var("MONDO_USERNAME")
        .expect("MONDO_USERNAME environment variable required");
    let password = std::env::var("MONDO_PASSWORD")
        .expect("MONDO_PASSWORD environment variable required");

    let client = MondoClient::new(client_id, client_secret)?;

    println!("Authenticating against {}...", client.base_url());
    let token = client.authenticate(&username, &password).await?;
    println!("Successfully authenticated! Token expires at {:?}", token.expires_at());

    // List all accounts
    let accounts = client.accounts().list().await?;
    println!("\nFound {} account(s):", accounts.len());

    for account in &accounts {
        println!("  - {} ({})", account.id, account.description);

        // Get balance for this account
        let balance = client.balances().get(&account.id).await?;
        println!("    Balance: {} {}", balance.balance_major(), balance.currency);
        println!("    Spent today: {} {}", balance.spend_today_major(), balance.currency);
    }

    println!("\nDone!");
    Ok(())
}
