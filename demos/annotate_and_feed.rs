//! Annotation and feed example.
//!
//! Tags the most recent transaction of the first account and posts a
//! summary item to that account's feed.
//!
//! Run with: cargo run --example annotate_and_feed

use mondo_rs::models::FeedItemBuilder;
use mondo_rs::MondoClient;

#[tokio::main]
async fn main() -> mondo_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client = MondoClient::new(
        std::env::var("MONDO_CLIENT_ID").expect("MONDO_CLIENT_ID required"),
        std::env::var("MONDO_CLIENT_SECRET").expect("MONDO_CLIENT_SECRET required"),
    )?;
    client
        .authenticate(
            &std::env::var("MONDO_USERNAME").expect("MONDO_USERNAME required"),
            &std::env::var("MONDO_PASSWORD").expect("MONDO_PASSWORD required"),
        )
        .await?;

    if client.is_expired().await? {
        client.refresh().await?;
    }

    let accounts = client.accounts().list().await?;
    let Some(account) = accounts.first() else {
        println!("No accounts found");
        return Ok(());
    };

    let transactions = client.transactions().list(&account.id).await?;
    if let Some(latest) = transactions.last() {
        let annotated = client
            .transactions()
            .annotate(&latest.id, [("reviewed_by", "mondo-rs")])
            .await?;
        println!("Annotated {}: {:?}", annotated.id, annotated.metadata);
    }

    let item = FeedItemBuilder::new()
        .title(format!("{} transactions reviewed", transactions.len()))
        .image_url("https://www.rust-lang.org/logos/rust-logo-256x256.png")
        .body("Posted from the mondo-rs annotate_and_feed example")
        .build()?;
    client.feed().post(&account.id, &item).await?;
    println!("Posted feed item to {}", account.id);

    Ok(())
}
