//! Currency repository and service traits.

use async_trait::async_trait;

use super::currencies_model::{Currency, NewCurrency};
use crate::errors::Result;
use crate::ids::{CurrencyId, UserId};

/// Trait defining the contract for Currency repository operations.
#[async_trait]
pub trait CurrencyRepositoryTrait: Send + Sync {
    async fn create(&self, new_currency: NewCurrency) -> Result<Currency>;

    async fn update(&self, currency: Currency) -> Result<Currency>;

    async fn delete(&self, currency_id: CurrencyId) -> Result<usize>;

    fn find_by_id(&self, currency_id: CurrencyId) -> Result<Option<Currency>>;

    /// Currencies owned by `user_id`. Defaults are not included.
    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Currency>>;

    fn find_default_currencies(&self) -> Result<Vec<Currency>>;

    /// True when `user_id` already owns a currency with this (normalized) code.
    fn exists_by_code_and_user_id(&self, code: &str, user_id: UserId) -> Result<bool>;

    /// Records `currency_id` as the user's preferred currency, replacing any
    /// previous choice.
    async fn set_user_default_currency(
        &self,
        user_id: UserId,
        currency_id: CurrencyId,
    ) -> Result<()>;

    fn get_user_default_currency(&self, user_id: UserId) -> Result<Option<Currency>>;
}

/// Trait defining the contract for Currency service operations.
#[async_trait]
pub trait CurrencyServiceTrait: Send + Sync {
    /// First system-default currency. Ignores per-user preferences.
    fn get_primary_currency(&self, user_id: UserId) -> Result<Currency>;

    /// The user's preferred currency, falling back to the primary currency.
    fn get_default_currency(&self, user_id: UserId) -> Result<Currency>;

    async fn set_default_currency(&self, user_id: UserId, currency_id: CurrencyId) -> Result<()>;

    async fn create_currency(
        &self,
        user_id: UserId,
        code: &str,
        name: &str,
        symbol: &str,
    ) -> Result<Currency>;

    fn get_currency(&self, currency_id: CurrencyId, user_id: UserId) -> Result<Currency>;

    /// Defaults first, then the user's own currencies.
    fn get_currencies_by_user(&self, user_id: UserId) -> Result<Vec<Currency>>;

    async fn update_currency(
        &self,
        currency_id: CurrencyId,
        user_id: UserId,
        code: &str,
        name: &str,
        symbol: &str,
    ) -> Result<Currency>;

    async fn delete_currency(&self, currency_id: CurrencyId, user_id: UserId) -> Result<()>;
}
