//! In-memory storage implementation for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory account store backing the ledger for demo and test use.
///
/// Accounts live for the duration of the process; there is no persistence
/// across restarts.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    /// Account numbers in creation order, so listings are stable
    order: Arc<RwLock<Vec<String>>>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            order: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.accounts.write().unwrap().clear();
        self.order.write().unwrap().clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn save_account(&mut self, account: &Account) -> LedgerResult<()> {
        let mut accounts = self.accounts.write().unwrap();
        if accounts.contains_key(&account.account_number) {
            return Err(LedgerError::Validation(format!(
                "Account number '{}' is already taken",
                account.account_number
            )));
        }
        accounts.insert(account.account_number.clone(), account.clone());
        self.order
            .write()
            .unwrap()
            .push(account.account_number.clone());
        Ok(())
    }

    async fn get_account(&self, account_number: &str) -> LedgerResult<Option<Account>> {
        Ok(self.accounts.read().unwrap().get(account_number).cloned())
    }

    async fn list_accounts(&self) -> LedgerResult<Vec<Account>> {
        let accounts = self.accounts.read().unwrap();
        let order = self.order.read().unwrap();
        Ok(order
            .iter()
            .filter_map(|number| accounts.get(number).cloned())
            .collect())
    }

    async fn update_account(&mut self, account: &Account) -> LedgerResult<()> {
        let mut accounts = self.accounts.write().unwrap();
        if accounts.contains_key(&account.account_number) {
            accounts.insert(account.account_number.clone(), account.clone());
            Ok(())
        } else {
            Err(LedgerError::AccountNotFound(
                account.account_number.clone(),
            ))
        }
    }

    async fn account_count(&self) -> LedgerResult<usize> {
        Ok(self.accounts.read().unwrap().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn sample_account(number: &str) -> Account {
        Account::new(
            number.to_string(),
            "Test Holder".to_string(),
            "1234".to_string(),
            BigDecimal::from(500),
        )
    }

    #[tokio::test]
    async fn save_and_get_round_trip() {
        let mut store = MemoryStore::new();
        store.save_account(&sample_account("7")).await.unwrap();

        let fetched = store.get_account("7").await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().holder_name, "Test Holder");

        assert!(store.get_account("8").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_save_is_rejected() {
        let mut store = MemoryStore::new();
        store.save_account(&sample_account("7")).await.unwrap();

        let err = store.save_account(&sample_account("7")).await.unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
        assert_eq!(store.account_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn listing_preserves_creation_order() {
        let mut store = MemoryStore::new();
        for number in ["30", "4", "17"] {
            store.save_account(&sample_account(number)).await.unwrap();
        }

        let numbers: Vec<String> = store
            .list_accounts()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.account_number)
            .collect();
        assert_eq!(numbers, vec!["30", "4", "17"]);
    }

    #[tokio::test]
    async fn update_requires_existing_account() {
        let mut store = MemoryStore::new();
        let mut account = sample_account("7");

        let err = store.update_account(&account).await.unwrap_err();
        assert!(matches!(err, LedgerError::AccountNotFound(_)));

        store.save_account(&account).await.unwrap();
        account.balance += BigDecimal::from(100);
        store.update_account(&account).await.unwrap();

        let fetched = store.get_account("7").await.unwrap().unwrap();
        assert_eq!(fetched.balance, BigDecimal::from(600));
    }
}
