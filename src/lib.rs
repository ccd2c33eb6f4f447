//! # ATM Core
//!
//! The core account ledger behind an ATM banking system: accounts, PIN
//! authentication, session-scoped transactions, and an append-only audit
//! history. Presentation (console prompts, TUI panels, GUI dialogs, receipt
//! rendering) lives outside this crate and consumes the typed operation
//! surface exposed here.
//!
//! ## Features
//!
//! - **Account management**: open accounts with randomly minted short numbers
//! - **Authentication**: PIN login establishing an explicit session token
//! - **Transactions**: deposit, withdraw, and atomic transfers between accounts
//! - **Audit history**: an append-only record per balance- or PIN-affecting event
//! - **Storage abstraction**: trait-based store with an in-memory implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use atm_core::{Ledger, MemoryStore};
//! use bigdecimal::BigDecimal;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), atm_core::LedgerError> {
//! let mut ledger = Ledger::new(MemoryStore::new());
//! let account = ledger.open_account("Ana", "1234", BigDecimal::from(1000)).await?;
//! let session = ledger.authenticate(&account.account_number, "1234").await?;
//! let balance = ledger.deposit(&session, BigDecimal::from(500)).await?;
//! assert_eq!(balance, BigDecimal::from(1500));
//! # Ok(())
//! # }
//! ```

pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use ledger::*;
pub use traits::*;
pub use types::*;
pub use utils::memory_storage::MemoryStore;
