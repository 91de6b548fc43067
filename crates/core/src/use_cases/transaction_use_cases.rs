use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::responses::{optional_category, parse_category_ids, TransactionResponse};
use super::UseCase;
use crate::categories::CategoryServiceTrait;
use crate::currencies::CurrencyServiceTrait;
use crate::entry_type::EntryType;
use crate::errors::Result;
use crate::ids::{CategoryId, CurrencyId, TransactionId, UserId};
use crate::money::Money;
use crate::transactions::{TransactionFilter, TransactionServiceTrait, TransactionUpdate};
use crate::utils::pagination::Pagination;
use crate::utils::time_utils::{parse_date, parse_optional_date};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[serde(skip)]
    pub user_id: i64,
    pub category_id: i64,
    /// Falls back to the user's default currency.
    pub currency_id: Option<i64>,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
}

pub struct CreateTransaction {
    transactions: Arc<dyn TransactionServiceTrait>,
    categories: Arc<dyn CategoryServiceTrait>,
    currencies: Arc<dyn CurrencyServiceTrait>,
}

impl CreateTransaction {
    pub fn new(
        transactions: Arc<dyn TransactionServiceTrait>,
        categories: Arc<dyn CategoryServiceTrait>,
        currencies: Arc<dyn CurrencyServiceTrait>,
    ) -> Self {
        Self {
            transactions,
            categories,
            currencies,
        }
    }
}

#[async_trait]
impl UseCase for CreateTransaction {
    type Request = CreateTransactionRequest;
    type Response = TransactionResponse;

    async fn execute(&self, request: CreateTransactionRequest) -> Result<TransactionResponse> {
        let user_id = UserId::new(request.user_id);
        let transaction_type: EntryType = request.transaction_type.parse()?;
        let date = parse_date("date", &request.date)?;
        let currency_id = match request.currency_id {
            Some(id) => CurrencyId::new(id),
            None => self.currencies.get_default_currency(user_id)?.id,
        };
        let money = Money::new(request.amount, currency_id)?;

        let transaction = self
            .transactions
            .create_transaction(
                user_id,
                CategoryId::new(request.category_id),
                currency_id,
                money,
                &request.description,
                date,
                transaction_type,
            )
            .await?;

        let category = optional_category(self.categories.as_ref(), transaction.category_id, user_id)?;
        Ok(TransactionResponse::new(transaction, category))
    }
}

/// Query for a page of transactions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsRequest {
    #[serde(skip)]
    pub user_id: i64,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// Each entry may hold several comma-separated ids.
    #[serde(default)]
    pub category_ids: Vec<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl ListTransactionsRequest {
    fn to_filter(&self) -> Result<TransactionFilter> {
        let transaction_type = match self.transaction_type.as_deref().map(str::trim) {
            Some(kind) if !kind.is_empty() => Some(kind.parse::<EntryType>()?),
            _ => None,
        };
        Ok(TransactionFilter {
            transaction_type,
            category_ids: parse_category_ids(&self.category_ids)?,
            start_date: parse_optional_date("startDate", self.start_date.as_deref())?,
            end_date: parse_optional_date("endDate", self.end_date.as_deref())?,
            pagination: Pagination::new(self.page, self.limit),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsResponse {
    pub transactions: Vec<TransactionResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

pub struct ListTransactions {
    transactions: Arc<dyn TransactionServiceTrait>,
}

impl ListTransactions {
    pub fn new(transactions: Arc<dyn TransactionServiceTrait>) -> Self {
        Self { transactions }
    }
}

#[async_trait]
impl UseCase for ListTransactions {
    type Request = ListTransactionsRequest;
    type Response = ListTransactionsResponse;

    async fn execute(&self, request: ListTransactionsRequest) -> Result<ListTransactionsResponse> {
        let filter = request.to_filter()?;
        let page = self
            .transactions
            .get_transactions_by_user_with_filters(UserId::new(request.user_id), &filter)?;
        let pagination = filter.pagination;

        Ok(ListTransactionsResponse {
            transactions: page
                .transactions
                .into_iter()
                .map(|t| TransactionResponse::new(t, None))
                .collect(),
            total: page.total,
            page: pagination.page(),
            limit: pagination.limit(),
            total_pages: pagination.total_pages(page.total),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    #[serde(skip)]
    pub user_id: i64,
    #[serde(default)]
    pub id: i64,
    pub category_id: i64,
    /// Falls back to the transaction's current currency.
    pub currency_id: Option<i64>,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    pub date: String,
}

pub struct UpdateTransaction {
    transactions: Arc<dyn TransactionServiceTrait>,
    categories: Arc<dyn CategoryServiceTrait>,
}

impl UpdateTransaction {
    pub fn new(
        transactions: Arc<dyn TransactionServiceTrait>,
        categories: Arc<dyn CategoryServiceTrait>,
    ) -> Self {
        Self {
            transactions,
            categories,
        }
    }
}

#[async_trait]
impl UseCase for UpdateTransaction {
    type Request = UpdateTransactionRequest;
    type Response = TransactionResponse;

    async fn execute(&self, request: UpdateTransactionRequest) -> Result<TransactionResponse> {
        let user_id = UserId::new(request.user_id);
        let transaction_id = TransactionId::new(request.id);
        let date = parse_date("date", &request.date)?;
        let currency_id = match request.currency_id {
            Some(id) => CurrencyId::new(id),
            None => self
                .transactions
                .get_transaction(transaction_id, user_id)?
                .currency_id(),
        };

        let update = TransactionUpdate {
            category_id: CategoryId::new(request.category_id),
            currency_id,
            money: Money::new(request.amount, currency_id)?,
            description: request.description,
            date,
        };
        let transaction = self
            .transactions
            .update_transaction(transaction_id, user_id, update)
            .await?;

        let category = optional_category(self.categories.as_ref(), transaction.category_id, user_id)?;
        Ok(TransactionResponse::new(transaction, category))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTransactionRequest {
    #[serde(skip)]
    pub user_id: i64,
    pub id: i64,
}

pub struct DeleteTransaction {
    transactions: Arc<dyn TransactionServiceTrait>,
}

impl DeleteTransaction {
    pub fn new(transactions: Arc<dyn TransactionServiceTrait>) -> Self {
        Self { transactions }
    }
}

#[async_trait]
impl UseCase for DeleteTransaction {
    type Request = DeleteTransactionRequest;
    type Response = ();

    async fn execute(&self, request: DeleteTransactionRequest) -> Result<()> {
        self.transactions
            .delete_transaction(TransactionId::new(request.id), UserId::new(request.user_id))
            .await
    }
}
