//! Application use cases.
//!
//! Each externally triggered operation is one struct implementing
//! [`UseCase`]. Requests carry primitive fields (integer ids, `YYYY-MM-DD`
//! dates, decimal amounts); the acting user is set by the transport layer
//! and never read from the request body.

mod analytics_use_cases;
mod budget_use_cases;
mod category_use_cases;
mod currency_use_cases;
mod recurring_use_cases;
mod responses;
mod transaction_use_cases;


use async_trait::async_trait;

use crate::errors::Result;

pub use analytics_use_cases::{GetAnalyticsSummary, GetAnalyticsSummaryRequest};
pub use budget_use_cases::{
    CreateBudget, CreateBudgetRequest, DeleteBudget, DeleteBudgetRequest, ListBudgets,
    ListBudgetsRequest, ListBudgetsResponse, UpdateBudget, UpdateBudgetRequest,
};
pub use category_use_cases::{
    CreateCategory, CreateCategoryRequest, DeleteCategory, DeleteCategoryRequest, ListCategories,
    ListCategoriesRequest, ListCategoriesResponse, UpdateCategory, UpdateCategoryRequest,
};
pub use currency_use_cases::{
    CreateCurrency, CreateCurrencyRequest, DeleteCurrency, DeleteCurrencyRequest,
    GetDefaultCurrency, GetDefaultCurrencyRequest, ListCurrencies, ListCurrenciesRequest,
    ListCurrenciesResponse, SetDefaultCurrency, SetDefaultCurrencyRequest, UpdateCurrency,
    UpdateCurrencyRequest,
};
pub use recurring_use_cases::{
    CreateRecurringTransaction, CreateRecurringTransactionRequest, DeleteRecurringTransaction,
    DeleteRecurringTransactionRequest, ListRecurringTransactions,
    ListRecurringTransactionsRequest, ListRecurringTransactionsResponse,
    SetRecurringTransactionActive, SetRecurringTransactionActiveRequest,
};
pub use responses::{
    parse_category_ids, BudgetResponse, CategoryResponse, CurrencyResponse,
    RecurringTransactionResponse, TransactionResponse,
};
pub use transaction_use_cases::{
    CreateTransaction, CreateTransactionRequest, DeleteTransaction, DeleteTransactionRequest,
    ListTransactions, ListTransactionsRequest, ListTransactionsResponse, UpdateTransaction,
    UpdateTransactionRequest,
};

/// A single application operation.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Request: Send + 'static;
    type Response: Send + 'static;

    async fn execute(&self, request: Self::Request) -> Result<Self::Response>;
}
