//! Core types and data structures for the ATM banking ledger

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kinds of audit records appended to an account's history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Account opened with an initial deposit
    AccountCreation,
    /// Funds added to the account
    Deposit,
    /// Funds removed from the account
    Withdrawal,
    /// Funds sent to another account
    TransferSent,
    /// Funds received from another account
    TransferReceived,
    /// PIN replaced after re-verification
    PinChange,
    /// Balance read, recorded only when the ledger is configured to log inquiries
    BalanceInquiry,
}

impl TransactionKind {
    /// Human-readable label used by receipt renderers
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::AccountCreation => "ACCOUNT CREATION",
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
            TransactionKind::TransferSent => "TRANSFER SENT",
            TransactionKind::TransferReceived => "TRANSFER RECEIVED",
            TransactionKind::PinChange => "PIN CHANGE",
            TransactionKind::BalanceInquiry => "BALANCE INQUIRY",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable audit record of one balance- or credential-affecting event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for the record
    pub id: Uuid,
    /// What happened
    pub kind: TransactionKind,
    /// Amount moved; zero for PIN changes and balance inquiries
    pub amount: BigDecimal,
    /// When the ledger recorded the event
    pub timestamp: NaiveDateTime,
    /// The other account involved in a transfer, absent otherwise
    pub counterparty: Option<String>,
    /// Snapshot of the owning account's balance immediately after the event
    pub balance_after: BigDecimal,
}

impl Transaction {
    /// Create a new audit record stamped with the current time
    pub fn new(
        kind: TransactionKind,
        amount: BigDecimal,
        counterparty: Option<String>,
        balance_after: BigDecimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            timestamp: chrono::Utc::now().naive_utc(),
            counterparty,
            balance_after,
        }
    }
}

/// One holder's funds and audit history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Short numeric identifier, unique among all accounts, immutable
    pub account_number: String,
    /// Holder's full name, set at creation
    pub holder_name: String,
    /// 4-digit numeric PIN; mutable only through the PIN-change operation
    pin: String,
    /// Current balance, never negative
    pub balance: BigDecimal,
    /// Append-only audit log in insertion order
    history: Vec<Transaction>,
    /// When the account was opened
    pub created_at: NaiveDateTime,
    /// When the account was last mutated
    pub updated_at: NaiveDateTime,
}

impl Account {
    /// Create a new account holding the initial deposit.
    ///
    /// The caller is responsible for validating the PIN shape and deposit
    /// amount first; the `AccountCreation` record is appended here so the
    /// history is never empty.
    pub fn new(
        account_number: String,
        holder_name: String,
        pin: String,
        initial_deposit: BigDecimal,
    ) -> Self {
        let now = chrono::Utc::now().naive_utc();
        let mut account = Self {
            account_number,
            holder_name,
            pin,
            balance: initial_deposit.clone(),
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        account.record(TransactionKind::AccountCreation, initial_deposit, None);
        account
    }

    /// Check a candidate PIN against the stored one
    pub fn verify_pin(&self, pin: &str) -> bool {
        self.pin == pin
    }

    /// Replace the stored PIN. Only the PIN-change operation calls this,
    /// after re-verifying the current PIN.
    pub(crate) fn set_pin(&mut self, new_pin: String) {
        self.pin = new_pin;
        self.updated_at = chrono::Utc::now().naive_utc();
    }

    /// Append an audit record snapshotting the current balance
    pub(crate) fn record(
        &mut self,
        kind: TransactionKind,
        amount: BigDecimal,
        counterparty: Option<String>,
    ) {
        self.history.push(Transaction::new(
            kind,
            amount,
            counterparty,
            self.balance.clone(),
        ));
        self.updated_at = chrono::Utc::now().naive_utc();
    }

    /// The full audit log in insertion order
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }
}

/// Authenticated-account context established by a successful login.
///
/// The ledger keeps track of the single active session; operations presented
/// with a stale token fail with [`LedgerError::NotAuthenticated`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this login
    pub id: Uuid,
    /// The account this session is scoped to
    pub account_number: String,
    /// When the login succeeded
    pub authenticated_at: NaiveDateTime,
}

impl Session {
    pub(crate) fn new(account_number: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_number,
            authenticated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Policy knobs the observed front-ends disagree on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Reject a zero or negative initial deposit at account creation.
    /// The stricter of the observed behaviors, so on by default.
    pub require_positive_initial_deposit: bool,
    /// Append a `BalanceInquiry` record on every balance read
    pub record_balance_inquiries: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            require_positive_initial_deposit: true,
            record_balance_inquiries: false,
        }
    }
}

/// Errors that can occur in the ledger system
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid amount: must be a positive value")]
    InvalidAmount,
    #[error("Invalid PIN: please enter exactly 4 digits")]
    InvalidPin,
    #[error("PINs do not match")]
    PinMismatch,
    #[error("Incorrect current PIN")]
    IncorrectPin,
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("Recipient account not found")]
    RecipientNotFound,
    #[error("You are not logged in")]
    NotAuthenticated,
    #[error("Invalid account number or PIN")]
    AuthFailure,
    #[error("No free account numbers remain in the identifier space")]
    IdentifierSpaceExhausted,
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_starts_with_creation_record() {
        let account = Account::new(
            "42".to_string(),
            "Ana".to_string(),
            "1234".to_string(),
            BigDecimal::from(1000),
        );

        assert_eq!(account.balance, BigDecimal::from(1000));
        assert_eq!(account.history().len(), 1);

        let record = &account.history()[0];
        assert_eq!(record.kind, TransactionKind::AccountCreation);
        assert_eq!(record.amount, BigDecimal::from(1000));
        assert_eq!(record.balance_after, BigDecimal::from(1000));
        assert!(record.counterparty.is_none());
    }

    #[test]
    fn pin_verification_is_exact() {
        let account = Account::new(
            "42".to_string(),
            "Ana".to_string(),
            "1234".to_string(),
            BigDecimal::from(100),
        );

        assert!(account.verify_pin("1234"));
        assert!(!account.verify_pin("4321"));
        assert!(!account.verify_pin("123"));
    }

    #[test]
    fn records_snapshot_balance_at_append_time() {
        let mut account = Account::new(
            "42".to_string(),
            "Ana".to_string(),
            "1234".to_string(),
            BigDecimal::from(100),
        );

        account.balance += BigDecimal::from(50);
        account.record(TransactionKind::Deposit, BigDecimal::from(50), None);

        account.balance -= BigDecimal::from(30);
        account.record(TransactionKind::Withdrawal, BigDecimal::from(30), None);

        let history = account.history();
        assert_eq!(history[1].balance_after, BigDecimal::from(150));
        assert_eq!(history[2].balance_after, BigDecimal::from(120));
    }

    #[test]
    fn kind_labels_match_receipt_wording() {
        assert_eq!(TransactionKind::Deposit.label(), "DEPOSIT");
        assert_eq!(
            TransactionKind::TransferReceived.label(),
            "TRANSFER RECEIVED"
        );
        assert_eq!(TransactionKind::PinChange.to_string(), "PIN CHANGE");
    }
}
