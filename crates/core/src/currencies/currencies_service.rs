use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::currencies_model::{normalize_code, Currency, NewCurrency};
use super::currencies_traits::{CurrencyRepositoryTrait, CurrencyServiceTrait};
use crate::errors::{Error, Result};
use crate::ids::{CurrencyId, UserId};

/// Service for managing currencies, default resolution and ownership rules.
pub struct CurrencyService {
    repository: Arc<dyn CurrencyRepositoryTrait>,
}

impl CurrencyService {
    pub fn new(repository: Arc<dyn CurrencyRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn load(&self, currency_id: CurrencyId) -> Result<Currency> {
        find_currency(self.repository.as_ref(), currency_id)
    }
}

fn find_currency(
    repository: &dyn CurrencyRepositoryTrait,
    currency_id: CurrencyId,
) -> Result<Currency> {
    repository
        .find_by_id(currency_id)?
        .ok_or_else(|| Error::not_found(format!("Currency {currency_id}")))
}

/// Loads a currency that `user_id` may reference: a default or one they own.
pub fn load_accessible_currency(
    repository: &dyn CurrencyRepositoryTrait,
    currency_id: CurrencyId,
    user_id: UserId,
) -> Result<Currency> {
    let currency = find_currency(repository, currency_id)?;
    currency.ownership.ensure_accessible(user_id, "currency")?;
    Ok(currency)
}

#[async_trait]
impl CurrencyServiceTrait for CurrencyService {
    fn get_primary_currency(&self, _user_id: UserId) -> Result<Currency> {
        self.repository
            .find_default_currencies()?
            .into_iter()
            .next()
            .ok_or_else(|| Error::not_found("Default currency"))
    }

    fn get_default_currency(&self, user_id: UserId) -> Result<Currency> {
        if let Some(currency) = self.repository.get_user_default_currency(user_id)? {
            return Ok(currency);
        }
        self.get_primary_currency(user_id)
    }

    async fn set_default_currency(&self, user_id: UserId, currency_id: CurrencyId) -> Result<()> {
        let currency = load_accessible_currency(self.repository.as_ref(), currency_id, user_id)?;
        debug!(
            "Setting default currency {} ({}) for user {}",
            currency.code, currency_id, user_id
        );
        self.repository
            .set_user_default_currency(user_id, currency_id)
            .await
    }

    async fn create_currency(
        &self,
        user_id: UserId,
        code: &str,
        name: &str,
        symbol: &str,
    ) -> Result<Currency> {
        let new_currency = NewCurrency::owned_by(user_id, code, name, symbol)?;
        if self
            .repository
            .exists_by_code_and_user_id(&new_currency.code, user_id)?
        {
            return Err(Error::Conflict(format!(
                "Currency with code {} already exists",
                new_currency.code
            )));
        }
        self.repository.create(new_currency).await
    }

    fn get_currency(&self, currency_id: CurrencyId, user_id: UserId) -> Result<Currency> {
        load_accessible_currency(self.repository.as_ref(), currency_id, user_id)
    }

    fn get_currencies_by_user(&self, user_id: UserId) -> Result<Vec<Currency>> {
        let mut currencies = self.repository.find_default_currencies()?;
        currencies.extend(self.repository.find_by_user_id(user_id)?);
        Ok(currencies)
    }

    async fn update_currency(
        &self,
        currency_id: CurrencyId,
        user_id: UserId,
        code: &str,
        name: &str,
        symbol: &str,
    ) -> Result<Currency> {
        let mut currency = self.load(currency_id)?;
        currency.ownership.ensure_mutable(user_id, "currency")?;

        // Renaming onto a code the user already owns would break uniqueness.
        let new_code = normalize_code(code);
        if new_code != currency.code
            && self
                .repository
                .exists_by_code_and_user_id(&new_code, user_id)?
        {
            return Err(Error::Conflict(format!(
                "Currency with code {new_code} already exists"
            )));
        }

        currency.apply(code, name, symbol)?;
        self.repository.update(currency).await
    }

    async fn delete_currency(&self, currency_id: CurrencyId, user_id: UserId) -> Result<()> {
        let currency = self.load(currency_id)?;
        currency.ownership.ensure_mutable(user_id, "currency")?;
        self.repository.delete(currency_id).await?;
        Ok(())
    }
}
