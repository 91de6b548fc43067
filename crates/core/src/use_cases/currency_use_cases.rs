use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::responses::CurrencyResponse;
use super::UseCase;
use crate::currencies::CurrencyServiceTrait;
use crate::errors::Result;
use crate::ids::{CurrencyId, UserId};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCurrencyRequest {
    #[serde(skip)]
    pub user_id: i64,
    pub code: String,
    pub name: String,
    pub symbol: String,
}

pub struct CreateCurrency {
    currencies: Arc<dyn CurrencyServiceTrait>,
}

impl CreateCurrency {
    pub fn new(currencies: Arc<dyn CurrencyServiceTrait>) -> Self {
        Self { currencies }
    }
}

#[async_trait]
impl UseCase for CreateCurrency {
    type Request = CreateCurrencyRequest;
    type Response = CurrencyResponse;

    async fn execute(&self, request: CreateCurrencyRequest) -> Result<CurrencyResponse> {
        let currency = self
            .currencies
            .create_currency(
                UserId::new(request.user_id),
                &request.code,
                &request.name,
                &request.symbol,
            )
            .await?;
        Ok(currency.into())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCurrenciesRequest {
    #[serde(skip)]
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListCurrenciesResponse {
    pub currencies: Vec<CurrencyResponse>,
}

pub struct ListCurrencies {
    currencies: Arc<dyn CurrencyServiceTrait>,
}

impl ListCurrencies {
    pub fn new(currencies: Arc<dyn CurrencyServiceTrait>) -> Self {
        Self { currencies }
    }
}

#[async_trait]
impl UseCase for ListCurrencies {
    type Request = ListCurrenciesRequest;
    type Response = ListCurrenciesResponse;

    async fn execute(&self, request: ListCurrenciesRequest) -> Result<ListCurrenciesResponse> {
        let currencies = self
            .currencies
            .get_currencies_by_user(UserId::new(request.user_id))?;
        Ok(ListCurrenciesResponse {
            currencies: currencies.into_iter().map(CurrencyResponse::from).collect(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCurrencyRequest {
    #[serde(skip)]
    pub user_id: i64,
    #[serde(default)]
    pub id: i64,
    pub code: String,
    pub name: String,
    pub symbol: String,
}

pub struct UpdateCurrency {
    currencies: Arc<dyn CurrencyServiceTrait>,
}

impl UpdateCurrency {
    pub fn new(currencies: Arc<dyn CurrencyServiceTrait>) -> Self {
        Self { currencies }
    }
}

#[async_trait]
impl UseCase for UpdateCurrency {
    type Request = UpdateCurrencyRequest;
    type Response = CurrencyResponse;

    async fn execute(&self, request: UpdateCurrencyRequest) -> Result<CurrencyResponse> {
        let currency = self
            .currencies
            .update_currency(
                CurrencyId::new(request.id),
                UserId::new(request.user_id),
                &request.code,
                &request.name,
                &request.symbol,
            )
            .await?;
        Ok(currency.into())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCurrencyRequest {
    #[serde(skip)]
    pub user_id: i64,
    pub id: i64,
}

pub struct DeleteCurrency {
    currencies: Arc<dyn CurrencyServiceTrait>,
}

impl DeleteCurrency {
    pub fn new(currencies: Arc<dyn CurrencyServiceTrait>) -> Self {
        Self { currencies }
    }
}

#[async_trait]
impl UseCase for DeleteCurrency {
    type Request = DeleteCurrencyRequest;
    type Response = ();

    async fn execute(&self, request: DeleteCurrencyRequest) -> Result<()> {
        self.currencies
            .delete_currency(CurrencyId::new(request.id), UserId::new(request.user_id))
            .await
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDefaultCurrencyRequest {
    #[serde(skip)]
    pub user_id: i64,
    pub currency_id: i64,
}

pub struct SetDefaultCurrency {
    currencies: Arc<dyn CurrencyServiceTrait>,
}

impl SetDefaultCurrency {
    pub fn new(currencies: Arc<dyn CurrencyServiceTrait>) -> Self {
        Self { currencies }
    }
}

#[async_trait]
impl UseCase for SetDefaultCurrency {
    type Request = SetDefaultCurrencyRequest;
    type Response = CurrencyResponse;

    /// Returns the currency now in effect as the user's default.
    async fn execute(&self, request: SetDefaultCurrencyRequest) -> Result<CurrencyResponse> {
        let user_id = UserId::new(request.user_id);
        self.currencies
            .set_default_currency(user_id, CurrencyId::new(request.currency_id))
            .await?;
        Ok(self.currencies.get_default_currency(user_id)?.into())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetDefaultCurrencyRequest {
    #[serde(skip)]
    pub user_id: i64,
}

pub struct GetDefaultCurrency {
    currencies: Arc<dyn CurrencyServiceTrait>,
}

impl GetDefaultCurrency {
    pub fn new(currencies: Arc<dyn CurrencyServiceTrait>) -> Self {
        Self { currencies }
    }
}

#[async_trait]
impl UseCase for GetDefaultCurrency {
    type Request = GetDefaultCurrencyRequest;
    type Response = CurrencyResponse;

    async fn execute(&self, request: GetDefaultCurrencyRequest) -> Result<CurrencyResponse> {
        Ok(self
            .currencies
            .get_default_currency(UserId::new(request.user_id))?
            .into())
    }
}
