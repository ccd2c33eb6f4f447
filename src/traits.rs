//! Traits for storage abstraction and identifier minting

use async_trait::async_trait;
use rand::Rng;
use std::ops::RangeInclusive;

use crate::types::*;

/// Storage abstraction for the account ledger
///
/// This trait lets the ledger core work with any backing collection
/// (in-memory, embedded database, etc.) by implementing these methods.
/// Accounts carry their own transaction history, so there is no separate
/// transaction table.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Save a newly opened account
    async fn save_account(&mut self, account: &Account) -> LedgerResult<()>;

    /// Get an account by number
    async fn get_account(&self, account_number: &str) -> LedgerResult<Option<Account>>;

    /// List all accounts in the ledger
    async fn list_accounts(&self) -> LedgerResult<Vec<Account>>;

    /// Write back a mutated account
    async fn update_account(&mut self, account: &Account) -> LedgerResult<()>;

    /// Number of accounts currently held
    async fn account_count(&self) -> LedgerResult<usize>;
}

/// Source of candidate account numbers.
///
/// The ledger treats the random source as an injected collaborator so tests
/// can substitute a deterministic generator. Implementations draw from a
/// bounded identifier space; the ledger handles collisions and exhaustion.
pub trait AccountNumberGenerator: Send + Sync {
    /// One candidate account number, not guaranteed to be free
    fn draw(&mut self) -> String;

    /// Total number of distinct identifiers this generator can produce
    fn space_size(&self) -> usize;

    /// Deterministic enumeration of the full identifier space, used as a
    /// fallback when random drawing keeps colliding
    fn enumerate(&self) -> Vec<String>;
}

/// Default generator: uniform random draw from a small numeric range.
///
/// The demo-scale identifier space (two digits by default) keeps account
/// numbers short enough to type at a prompt. Callers needing large
/// populations should construct one with a wider range.
pub struct RandomAccountNumbers {
    range: RangeInclusive<u32>,
}

impl RandomAccountNumbers {
    /// Create a generator over an inclusive numeric range
    pub fn new(range: RangeInclusive<u32>) -> Self {
        Self { range }
    }
}

impl Default for RandomAccountNumbers {
    fn default() -> Self {
        Self::new(1..=99)
    }
}

impl AccountNumberGenerator for RandomAccountNumbers {
    fn draw(&mut self) -> String {
        rand::thread_rng().gen_range(self.range.clone()).to_string()
    }

    fn space_size(&self) -> usize {
        (self.range.end() - self.range.start() + 1) as usize
    }

    fn enumerate(&self) -> Vec<String> {
        self.range.clone().map(|n| n.to_string()).collect()
    }
}

/// Deterministic generator for tests: hands out numbers in ascending order
pub struct SequentialAccountNumbers {
    range: RangeInclusive<u32>,
    next: u32,
}

impl SequentialAccountNumbers {
    /// Create a generator that walks the range from its start
    pub fn new(range: RangeInclusive<u32>) -> Self {
        let next = *range.start();
        Self { range, next }
    }
}

impl AccountNumberGenerator for SequentialAccountNumbers {
    fn draw(&mut self) -> String {
        let candidate = self.next;
        // Wrap around so draws keep coming after the space is walked once
        self.next = if candidate >= *self.range.end() {
            *self.range.start()
        } else {
            candidate + 1
        };
        candidate.to_string()
    }

    fn space_size(&self) -> usize {
        (self.range.end() - self.range.start() + 1) as usize
    }

    fn enumerate(&self) -> Vec<String> {
        self.range.clone().map(|n| n.to_string()).collect()
    }
}
