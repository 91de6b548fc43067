use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::responses::RecurringTransactionResponse;
use super::UseCase;
use crate::currencies::CurrencyServiceTrait;
use crate::entry_type::EntryType;
use crate::errors::Result;
use crate::ids::{CategoryId, CurrencyId, RecurringTransactionId, UserId};
use crate::money::Money;
use crate::recurring::{Frequency, RecurringTransactionServiceTrait};
use crate::utils::time_utils::{self, parse_date};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecurringTransactionRequest {
    #[serde(skip)]
    pub user_id: i64,
    pub category_id: i64,
    /// Falls back to the user's default currency.
    pub currency_id: Option<i64>,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub frequency: String,
    pub next_due_date: String,
}

pub struct CreateRecurringTransaction {
    recurring: Arc<dyn RecurringTransactionServiceTrait>,
    currencies: Arc<dyn CurrencyServiceTrait>,
    today: fn() -> NaiveDate,
}

impl CreateRecurringTransaction {
    pub fn new(
        recurring: Arc<dyn RecurringTransactionServiceTrait>,
        currencies: Arc<dyn CurrencyServiceTrait>,
    ) -> Self {
        Self {
            recurring,
            currencies,
            today: time_utils::today,
        }
    }
}

#[async_trait]
impl UseCase for CreateRecurringTransaction {
    type Request = CreateRecurringTransactionRequest;
    type Response = RecurringTransactionResponse;

    async fn execute(
        &self,
        request: CreateRecurringTransactionRequest,
    ) -> Result<RecurringTransactionResponse> {
        let user_id = UserId::new(request.user_id);
        let transaction_type: EntryType = request.transaction_type.parse()?;
        let frequency: Frequency = request.frequency.parse()?;
        let next_due_date = parse_date("nextDueDate", &request.next_due_date)?;
        let currency_id = match request.currency_id {
            Some(id) => CurrencyId::new(id),
            None => self.currencies.get_default_currency(user_id)?.id,
        };
        let money = Money::new(request.amount, currency_id)?;

        let recurring = self
            .recurring
            .create_recurring_transaction(
                user_id,
                CategoryId::new(request.category_id),
                currency_id,
                money,
                &request.description,
                transaction_type,
                frequency,
                next_due_date,
            )
            .await?;
        Ok(RecurringTransactionResponse::new(recurring, (self.today)()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecurringTransactionsRequest {
    #[serde(skip)]
    pub user_id: i64,
    /// Only active templates due today or earlier.
    #[serde(default)]
    pub due_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecurringTransactionsResponse {
    pub recurring_transactions: Vec<RecurringTransactionResponse>,
}

pub struct ListRecurringTransactions {
    recurring: Arc<dyn RecurringTransactionServiceTrait>,
    today: fn() -> NaiveDate,
}

impl ListRecurringTransactions {
    pub fn new(recurring: Arc<dyn RecurringTransactionServiceTrait>) -> Self {
        Self {
            recurring,
            today: time_utils::today,
        }
    }

    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }
}

#[async_trait]
impl UseCase for ListRecurringTransactions {
    type Request = ListRecurringTransactionsRequest;
    type Response = ListRecurringTransactionsResponse;

    async fn execute(
        &self,
        request: ListRecurringTransactionsRequest,
    ) -> Result<ListRecurringTransactionsResponse> {
        let user_id = UserId::new(request.user_id);
        let today = (self.today)();
        let templates = if request.due_only {
            self.recurring.get_due_recurring_transactions(user_id, today)?
        } else {
            self.recurring.get_recurring_transactions_by_user(user_id)?
        };
        Ok(ListRecurringTransactionsResponse {
            recurring_transactions: templates
                .into_iter()
                .map(|t| RecurringTransactionResponse::new(t, today))
                .collect(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRecurringTransactionActiveRequest {
    #[serde(skip)]
    pub user_id: i64,
    #[serde(default)]
    pub id: i64,
    pub is_active: bool,
}

pub struct SetRecurringTransactionActive {
    recurring: Arc<dyn RecurringTransactionServiceTrait>,
    today: fn() -> NaiveDate,
}

impl SetRecurringTransactionActive {
    pub fn new(recurring: Arc<dyn RecurringTransactionServiceTrait>) -> Self {
        Self {
            recurring,
            today: time_utils::today,
        }
    }
}

#[async_trait]
impl UseCase for SetRecurringTransactionActive {
    type Request = SetRecurringTransactionActiveRequest;
    type Response = RecurringTransactionResponse;

    async fn execute(
        &self,
        request: SetRecurringTransactionActiveRequest,
    ) -> Result<RecurringTransactionResponse> {
        let recurring = self
            .recurring
            .set_recurring_transaction_active(
                RecurringTransactionId::new(request.id),
                UserId::new(request.user_id),
                request.is_active,
            )
            .await?;
        Ok(RecurringTransactionResponse::new(recurring, (self.today)()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRecurringTransactionRequest {
    #[serde(skip)]
    pub user_id: i64,
    pub id: i64,
}

pub struct DeleteRecurringTransaction {
    recurring: Arc<dyn RecurringTransactionServiceTrait>,
}

impl DeleteRecurringTransaction {
    pub fn new(recurring: Arc<dyn RecurringTransactionServiceTrait>) -> Self {
        Self { recurring }
    }
}

#[async_trait]
impl UseCase for DeleteRecurringTransaction {
    type Request = DeleteRecurringTransactionRequest;
    type Response = ();

    async fn execute(&self, request: DeleteRecurringTransactionRequest) -> Result<()> {
        self.recurring
            .delete_recurring_transaction(
                RecurringTransactionId::new(request.id),
                UserId::new(request.user_id),
            )
            .await
    }
}
