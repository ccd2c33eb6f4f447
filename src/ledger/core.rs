//! Main ledger orchestrator exposing the ATM operation surface

use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::ledger::AccountManager;
use crate::traits::*;
use crate::types::*;
use crate::utils::validation::{validate_pin, validate_positive_amount};

/// The ledger: owns all accounts, enforces balance and authentication
/// invariants, and produces audit records.
///
/// Sessions are explicit tokens returned by [`Ledger::authenticate`]. The
/// ledger tracks the single active session, matching the one-user-at-a-time
/// ATM model: a failed login always clears it, and operations presented with
/// a stale token fail with [`LedgerError::NotAuthenticated`].
pub struct Ledger<S: AccountStore> {
    accounts: AccountManager<S>,
    config: LedgerConfig,
    active_session: Option<Uuid>,
}

impl<S: AccountStore> Ledger<S> {
    /// Create a new ledger over the given store with default policy
    pub fn new(store: S) -> Self {
        Self::with_config(store, LedgerConfig::default())
    }

    /// Create a new ledger with explicit policy settings
    pub fn with_config(store: S, config: LedgerConfig) -> Self {
        Self {
            accounts: AccountManager::new(store, config.clone()),
            config,
            active_session: None,
        }
    }

    /// Create a new ledger with a custom account-number generator
    pub fn with_generator(
        store: S,
        config: LedgerConfig,
        generator: Box<dyn AccountNumberGenerator>,
    ) -> Self {
        Self {
            accounts: AccountManager::with_generator(store, config.clone(), generator),
            config,
            active_session: None,
        }
    }

    /// Open a new account. Does not log the holder in.
    pub async fn open_account(
        &mut self,
        holder_name: &str,
        pin: &str,
        initial_deposit: BigDecimal,
    ) -> LedgerResult<Account> {
        self.accounts
            .open_account(holder_name, pin, initial_deposit)
            .await
    }

    /// Authenticate against an account number and PIN.
    ///
    /// A linear scan over the accounts, as an ATM keypad would drive it.
    /// Success establishes the active session; failure clears any previous
    /// session before reporting [`LedgerError::AuthFailure`].
    pub async fn authenticate(&mut self, account_number: &str, pin: &str) -> LedgerResult<Session> {
        for account in self.accounts.list_accounts().await? {
            if account.account_number == account_number && account.verify_pin(pin) {
                let session = Session::new(account.account_number.clone());
                self.active_session = Some(session.id);
                return Ok(session);
            }
        }

        // Failed login always de-authenticates
        self.active_session = None;
        Err(LedgerError::AuthFailure)
    }

    /// End the given session. A stale token is a no-op.
    pub fn logout(&mut self, session: &Session) {
        if self.active_session == Some(session.id) {
            self.active_session = None;
        }
    }

    /// Current balance of the session's account.
    ///
    /// Appends a `BalanceInquiry` record when the ledger is configured to
    /// log inquiries.
    pub async fn balance_of(&mut self, session: &Session) -> LedgerResult<BigDecimal> {
        self.require_active(session)?;
        let mut account = self
            .accounts
            .get_account_required(&session.account_number)
            .await?;

        if self.config.record_balance_inquiries {
            account.record(TransactionKind::BalanceInquiry, BigDecimal::from(0), None);
            self.accounts.update_account(&account).await?;
        }

        Ok(account.balance)
    }

    /// Add funds to the session's account and return the new balance
    pub async fn deposit(
        &mut self,
        session: &Session,
        amount: BigDecimal,
    ) -> LedgerResult<BigDecimal> {
        self.require_active(session)?;
        validate_positive_amount(&amount)?;

        let mut account = self
            .accounts
            .get_account_required(&session.account_number)
            .await?;
        account.balance += &amount;
        account.record(TransactionKind::Deposit, amount, None);
        self.accounts.update_account(&account).await?;

        Ok(account.balance)
    }

    /// Remove funds from the session's account and return the new balance.
    ///
    /// The balance is untouched when the withdrawal would overdraw it.
    pub async fn withdraw(
        &mut self,
        session: &Session,
        amount: BigDecimal,
    ) -> LedgerResult<BigDecimal> {
        self.require_active(session)?;
        validate_positive_amount(&amount)?;

        let mut account = self
            .accounts
            .get_account_required(&session.account_number)
            .await?;
        if amount > account.balance {
            return Err(LedgerError::InsufficientFunds);
        }

        account.balance -= &amount;
        account.record(TransactionKind::Withdrawal, amount, None);
        self.accounts.update_account(&account).await?;

        Ok(account.balance)
    }

    /// Move funds from the session's account to the recipient.
    ///
    /// Every check runs before any state changes, so a failure leaves both
    /// balances untouched and no partial transfer is ever observable. On
    /// success the sender gains a `TransferSent` record carrying the
    /// recipient's number and the recipient a `TransferReceived` record
    /// carrying the sender's, in that order. Returns the sender's new
    /// balance.
    pub async fn transfer(
        &mut self,
        session: &Session,
        recipient_account_number: &str,
        amount: BigDecimal,
    ) -> LedgerResult<BigDecimal> {
        self.require_active(session)?;

        let mut recipient = self
            .accounts
            .get_account(recipient_account_number)
            .await?
            .ok_or(LedgerError::RecipientNotFound)?;
        validate_positive_amount(&amount)?;

        let mut sender = self
            .accounts
            .get_account_required(&session.account_number)
            .await?;
        if amount > sender.balance {
            return Err(LedgerError::InsufficientFunds);
        }

        if sender.account_number == recipient.account_number {
            // Self-transfer: one account, two records, net balance unchanged
            sender.balance -= &amount;
            sender.record(
                TransactionKind::TransferSent,
                amount.clone(),
                Some(sender.account_number.clone()),
            );
            sender.balance += &amount;
            sender.record(
                TransactionKind::TransferReceived,
                amount,
                Some(sender.account_number.clone()),
            );
            self.accounts.update_account(&sender).await?;
            return Ok(sender.balance);
        }

        sender.balance -= &amount;
        sender.record(
            TransactionKind::TransferSent,
            amount.clone(),
            Some(recipient.account_number.clone()),
        );

        recipient.balance += &amount;
        recipient.record(
            TransactionKind::TransferReceived,
            amount,
            Some(sender.account_number.clone()),
        );

        self.accounts.update_account(&sender).await?;
        self.accounts.update_account(&recipient).await?;

        Ok(sender.balance)
    }

    /// Replace the session account's PIN after re-verifying the current one.
    ///
    /// Checks run in the order the ATM prompts: current PIN, confirmation,
    /// then the new PIN's shape. Appends a `PinChange` record with a zero
    /// amount.
    pub async fn change_pin(
        &mut self,
        session: &Session,
        current_pin: &str,
        new_pin: &str,
        confirm_pin: &str,
    ) -> LedgerResult<()> {
        self.require_active(session)?;

        let mut account = self
            .accounts
            .get_account_required(&session.account_number)
            .await?;
        if !account.verify_pin(current_pin) {
            return Err(LedgerError::IncorrectPin);
        }
        if new_pin != confirm_pin {
            return Err(LedgerError::PinMismatch);
        }
        validate_pin(new_pin)?;

        account.set_pin(new_pin.to_string());
        account.record(TransactionKind::PinChange, BigDecimal::from(0), None);
        self.accounts.update_account(&account).await?;

        Ok(())
    }

    /// Full audit history of the session's account, in insertion order
    pub async fn history_of(&self, session: &Session) -> LedgerResult<Vec<Transaction>> {
        self.require_active(session)?;
        let account = self
            .accounts
            .get_account_required(&session.account_number)
            .await?;
        Ok(account.history().to_vec())
    }

    /// Read-only snapshot of the session's account, for receipts and
    /// greetings rendered by front-ends
    pub async fn account_snapshot(&self, session: &Session) -> LedgerResult<Account> {
        self.require_active(session)?;
        self.accounts
            .get_account_required(&session.account_number)
            .await
    }

    fn require_active(&self, session: &Session) -> LedgerResult<()> {
        if self.active_session == Some(session.id) {
            Ok(())
        } else {
            Err(LedgerError::NotAuthenticated)
        }
    }
}
