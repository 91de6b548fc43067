use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::responses::{optional_category, BudgetResponse};
use super::UseCase;
use crate::budgets::{BudgetPeriod, BudgetServiceTrait};
use crate::categories::CategoryServiceTrait;
use crate::currencies::CurrencyServiceTrait;
use crate::errors::Result;
use crate::ids::{BudgetId, CategoryId, CurrencyId, UserId};
use crate::money::Money;
use crate::utils::time_utils::{self, parse_date};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetRequest {
    #[serde(skip)]
    pub user_id: i64,
    pub category_id: i64,
    /// Falls back to the user's default currency.
    pub currency_id: Option<i64>,
    pub amount: Decimal,
    pub period: String,
    pub start_date: String,
}

pub struct CreateBudget {
    budgets: Arc<dyn BudgetServiceTrait>,
    categories: Arc<dyn CategoryServiceTrait>,
    currencies: Arc<dyn CurrencyServiceTrait>,
}

impl CreateBudget {
    pub fn new(
        budgets: Arc<dyn BudgetServiceTrait>,
        categories: Arc<dyn CategoryServiceTrait>,
        currencies: Arc<dyn CurrencyServiceTrait>,
    ) -> Self {
        Self {
            budgets,
            categories,
            currencies,
        }
    }
}

#[async_trait]
impl UseCase for CreateBudget {
    type Request = CreateBudgetRequest;
    type Response = BudgetResponse;

    async fn execute(&self, request: CreateBudgetRequest) -> Result<BudgetResponse> {
        let user_id = UserId::new(request.user_id);
        let period: BudgetPeriod = request.period.parse()?;
        let start_date = parse_date("startDate", &request.start_date)?;
        let currency_id = match request.currency_id {
            Some(id) => CurrencyId::new(id),
            None => self.currencies.get_default_currency(user_id)?.id,
        };
        let money = Money::new(request.amount, currency_id)?;

        let budget = self
            .budgets
            .create_budget(
                user_id,
                CategoryId::new(request.category_id),
                money,
                period,
                start_date,
            )
            .await?;

        let category = optional_category(self.categories.as_ref(), budget.category_id, user_id)?;
        Ok(BudgetResponse::new(budget, category, None))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBudgetsRequest {
    #[serde(skip)]
    pub user_id: i64,
    /// Only budgets whose window contains today.
    #[serde(default)]
    pub active_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListBudgetsResponse {
    pub budgets: Vec<BudgetResponse>,
}

/// Lists budgets, each with its category and a freshly computed report.
pub struct ListBudgets {
    budgets: Arc<dyn BudgetServiceTrait>,
    categories: Arc<dyn CategoryServiceTrait>,
    today: fn() -> NaiveDate,
}

impl ListBudgets {
    pub fn new(
        budgets: Arc<dyn BudgetServiceTrait>,
        categories: Arc<dyn CategoryServiceTrait>,
    ) -> Self {
        Self {
            budgets,
            categories,
            today: time_utils::today,
        }
    }

    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }
}

#[async_trait]
impl UseCase for ListBudgets {
    type Request = ListBudgetsRequest;
    type Response = ListBudgetsResponse;

    async fn execute(&self, request: ListBudgetsRequest) -> Result<ListBudgetsResponse> {
        let user_id = UserId::new(request.user_id);
        let budgets = if request.active_only {
            self.budgets
                .get_active_budgets_by_user(user_id, (self.today)())?
        } else {
            self.budgets.get_budgets_by_user(user_id)?
        };

        let mut responses = Vec::with_capacity(budgets.len());
        for budget in budgets {
            let report = self.budgets.get_budget_report(&budget)?;
            let category =
                optional_category(self.categories.as_ref(), budget.category_id, user_id)?;
            responses.push(BudgetResponse::new(budget, category, Some(report)));
        }
        Ok(ListBudgetsResponse { budgets: responses })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBudgetRequest {
    #[serde(skip)]
    pub user_id: i64,
    #[serde(default)]
    pub id: i64,
    /// Falls back to the budget's current currency.
    pub currency_id: Option<i64>,
    pub amount: Decimal,
    pub period: String,
    pub start_date: String,
}

pub struct UpdateBudget {
    budgets: Arc<dyn BudgetServiceTrait>,
    categories: Arc<dyn CategoryServiceTrait>,
}

impl UpdateBudget {
    pub fn new(
        budgets: Arc<dyn BudgetServiceTrait>,
        categories: Arc<dyn CategoryServiceTrait>,
    ) -> Self {
        Self {
            budgets,
            categories,
        }
    }
}

#[async_trait]
impl UseCase for UpdateBudget {
    type Request = UpdateBudgetRequest;
    type Response = BudgetResponse;

    async fn execute(&self, request: UpdateBudgetRequest) -> Result<BudgetResponse> {
        let user_id = UserId::new(request.user_id);
        let budget_id = BudgetId::new(request.id);
        let period: BudgetPeriod = request.period.parse()?;
        let start_date = parse_date("startDate", &request.start_date)?;
        let currency_id = match request.currency_id {
            Some(id) => CurrencyId::new(id),
            None => self
                .budgets
                .get_budget(budget_id, user_id)?
                .money
                .currency_id(),
        };
        let money = Money::new(request.amount, currency_id)?;

        let budget = self
            .budgets
            .update_budget(budget_id, user_id, money, period, start_date)
            .await?;
        let report = self.budgets.get_budget_report(&budget)?;
        let category = optional_category(self.categories.as_ref(), budget.category_id, user_id)?;
        Ok(BudgetResponse::new(budget, category, Some(report)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBudgetRequest {
    #[serde(skip)]
    pub user_id: i64,
    pub id: i64,
}

pub struct DeleteBudget {
    budgets: Arc<dyn BudgetServiceTrait>,
}

impl DeleteBudget {
    pub fn new(budgets: Arc<dyn BudgetServiceTrait>) -> Self {
        Self { budgets }
    }
}

#[async_trait]
impl UseCase for DeleteBudget {
    type Request = DeleteBudgetRequest;
    type Response = ();

    async fn execute(&self, request: DeleteBudgetRequest) -> Result<()> {
        self.budgets
            .delete_budget(BudgetId::new(request.id), UserId::new(request.user_id))
            .await
    }
}
