//! Basic ATM ledger usage example

use atm_core::{summarize, Ledger, MemoryStore};
use bigdecimal::BigDecimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏧 ATM Core - Basic Ledger Example\n");

    // Create a new ledger backed by in-memory storage
    let mut ledger = Ledger::new(MemoryStore::new());

    // 1. Open two accounts
    println!("📂 Opening Accounts...");
    let ana = ledger
        .open_account("Ana Santos", "1234", BigDecimal::from(5000))
        .await?;
    println!(
        "  ✓ Opened account {} for {} with ₱{}",
        ana.account_number, ana.holder_name, ana.balance
    );

    let ben = ledger
        .open_account("Ben Reyes", "5678", BigDecimal::from(1500))
        .await?;
    println!(
        "  ✓ Opened account {} for {} with ₱{}",
        ben.account_number, ben.holder_name, ben.balance
    );
    println!();

    // 2. Ana logs in and transacts
    println!("🔐 Logging in as {}...", ana.holder_name);
    let session = ledger.authenticate(&ana.account_number, "1234").await?;
    println!("  ✓ Welcome, {}!\n", ana.holder_name);

    println!("💰 Running Transactions...");
    let balance = ledger.deposit(&session, BigDecimal::from(2000)).await?;
    println!("  ✓ Deposited ₱2000, new balance ₱{balance}");

    let balance = ledger.withdraw(&session, BigDecimal::from(500)).await?;
    println!("  ✓ Withdrew ₱500, new balance ₱{balance}");

    let balance = ledger
        .transfer(&session, &ben.account_number, BigDecimal::from(1000))
        .await?;
    println!(
        "  ✓ Transferred ₱1000 to account {}, new balance ₱{balance}",
        ben.account_number
    );

    // A withdrawal that would overdraw is rejected without changing state
    match ledger.withdraw(&session, BigDecimal::from(1_000_000)).await {
        Err(error) => println!("  ✗ Oversized withdrawal rejected: {error}"),
        Ok(_) => unreachable!("overdraw must fail"),
    }
    println!();

    // 3. Change the PIN
    println!("🔑 Changing PIN...");
    ledger.change_pin(&session, "1234", "4321", "4321").await?;
    println!("  ✓ PIN changed\n");

    // 4. Print the statement
    println!("📜 Transaction History for {}:", ana.holder_name);
    let history = ledger.history_of(&session).await?;
    for record in &history {
        let counterparty = record
            .counterparty
            .as_deref()
            .map(|n| format!(" (account {n})"))
            .unwrap_or_default();
        println!(
            "  {} | {:<17} | ₱{:>10} | balance after ₱{}{}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.kind.label(),
            record.amount,
            record.balance_after,
            counterparty
        );
    }

    let summary = summarize(&history);
    println!(
        "\n  {} records — deposited ₱{}, withdrawn ₱{}, sent ₱{}",
        summary.record_count,
        summary.total_deposited,
        summary.total_withdrawn,
        summary.total_sent
    );

    ledger.logout(&session);
    println!("\n👋 Logged out. Thank you for banking with us!");

    Ok(())
}
