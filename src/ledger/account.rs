//! Account management: opening accounts and minting account numbers

use bigdecimal::BigDecimal;

use crate::traits::*;
use crate::types::*;
use crate::utils::validation::{validate_holder_name, validate_pin, validate_positive_amount};

/// How many random draws to attempt per free slot before falling back to a
/// deterministic scan of the identifier space.
const DRAW_ATTEMPTS_PER_SLOT: usize = 8;

/// Account manager handling creation, lookup, and identifier minting
pub struct AccountManager<S: AccountStore> {
    pub(crate) store: S,
    generator: Box<dyn AccountNumberGenerator>,
    config: LedgerConfig,
}

impl<S: AccountStore> AccountManager<S> {
    /// Create a new account manager with the default random generator
    pub fn new(store: S, config: LedgerConfig) -> Self {
        Self {
            store,
            generator: Box::new(RandomAccountNumbers::default()),
            config,
        }
    }

    /// Create a new account manager with a custom number generator
    pub fn with_generator(
        store: S,
        config: LedgerConfig,
        generator: Box<dyn AccountNumberGenerator>,
    ) -> Self {
        Self {
            store,
            generator,
            config,
        }
    }

    /// Open a new account holding the initial deposit.
    ///
    /// Validates the holder name, PIN shape, and deposit amount (per the
    /// configured policy), then mints a unique account number. The returned
    /// account already carries its `AccountCreation` record.
    pub async fn open_account(
        &mut self,
        holder_name: &str,
        pin: &str,
        initial_deposit: BigDecimal,
    ) -> LedgerResult<Account> {
        validate_holder_name(holder_name)?;
        validate_pin(pin)?;
        if self.config.require_positive_initial_deposit {
            validate_positive_amount(&initial_deposit)?;
        }

        let account_number = self.mint_account_number().await?;
        let account = Account::new(
            account_number,
            holder_name.trim().to_string(),
            pin.to_string(),
            initial_deposit,
        );

        self.store.save_account(&account).await?;
        Ok(account)
    }

    /// Get an account by number
    pub async fn get_account(&self, account_number: &str) -> LedgerResult<Option<Account>> {
        self.store.get_account(account_number).await
    }

    /// Get an account by number, returning an error if not found
    pub async fn get_account_required(&self, account_number: &str) -> LedgerResult<Account> {
        self.store
            .get_account(account_number)
            .await?
            .ok_or_else(|| LedgerError::AccountNotFound(account_number.to_string()))
    }

    /// List all accounts in creation order
    pub async fn list_accounts(&self) -> LedgerResult<Vec<Account>> {
        self.store.list_accounts().await
    }

    /// Write back a mutated account
    pub async fn update_account(&mut self, account: &Account) -> LedgerResult<()> {
        self.store.update_account(account).await
    }

    /// Mint a unique account number.
    ///
    /// The generator draws uniformly from a bounded space, so collisions are
    /// expected as the ledger fills up. Random drawing is bounded; if every
    /// draw collides, a deterministic scan of the space finds the first free
    /// number. A full space is reported as `IdentifierSpaceExhausted` rather
    /// than looping forever.
    async fn mint_account_number(&mut self) -> LedgerResult<String> {
        let space_size = self.generator.space_size();
        if self.store.account_count().await? >= space_size {
            return Err(LedgerError::IdentifierSpaceExhausted);
        }

        for _ in 0..space_size.saturating_mul(DRAW_ATTEMPTS_PER_SLOT) {
            let candidate = self.generator.draw();
            if self.store.get_account(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }

        for candidate in self.generator.enumerate() {
            if self.store.get_account(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }

        // Unreachable while the occupancy check above holds
        Err(LedgerError::IdentifierSpaceExhausted)
    }
}
