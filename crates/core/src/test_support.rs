//! In-memory repositories shared by the service and use case tests.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use crate::analytics::AnalyticsService;
use crate::budgets::{Budget, BudgetRepositoryTrait, BudgetService, NewBudget};
use crate::categories::{Category, CategoryRepositoryTrait, CategoryService, NewCategory};
use crate::currencies::{
    normalize_code, Currency, CurrencyRepositoryTrait, CurrencyService, NewCurrency,
};
use crate::entry_type::EntryType;
use crate::errors::{Error, Result};
use crate::ids::*;
use crate::ownership::Ownership;
use crate::recurring::{
    NewRecurringTransaction, RecurringTransaction, RecurringTransactionRepositoryTrait,
    RecurringTransactionService,
};
use crate::transactions::{
    NewTransaction, Transaction, TransactionFilter, TransactionRepositoryTrait, TransactionService,
};

pub const USD: CurrencyId = CurrencyId::new(1);
pub const EUR: CurrencyId = CurrencyId::new(2);
pub const SALARY: CategoryId = CategoryId::new(1);
pub const GROCERIES: CategoryId = CategoryId::new(2);
pub const ALICE: UserId = UserId::new(100);
pub const BOB: UserId = UserId::new(200);

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn timestamp() -> NaiveDateTime {
    date(2024, 1, 1).and_hms_opt(9, 30, 0).unwrap()
}

fn next(counter: &AtomicI64) -> i64 {
    counter.fetch_add(1, Ordering::SeqCst)
}

// --- Categories ---

#[derive(Clone)]
pub struct InMemoryCategoryRepository {
    pub categories: Arc<Mutex<Vec<Category>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryCategoryRepository {
    /// Seeded with the default categories "Salary" (income) and "Groceries" (expense).
    pub fn seeded() -> Self {
        let defaults = vec![
            Category {
                id: SALARY,
                ownership: Ownership::SystemDefault,
                name: "Salary".to_string(),
                color: "#10B981".to_string(),
                category_type: EntryType::Income,
                created_at: timestamp(),
            },
            Category {
                id: GROCERIES,
                ownership: Ownership::SystemDefault,
                name: "Groceries".to_string(),
                color: "#F59E0B".to_string(),
                category_type: EntryType::Expense,
                created_at: timestamp(),
            },
        ];
        Self {
            categories: Arc::new(Mutex::new(defaults)),
            next_id: Arc::new(AtomicI64::new(10)),
        }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for InMemoryCategoryRepository {
    async fn create(&self, new_category: NewCategory) -> Result<Category> {
        let category = Category {
            id: CategoryId::new(next(&self.next_id)),
            ownership: new_category.ownership,
            name: new_category.name,
            color: new_category.color,
            category_type: new_category.category_type,
            created_at: timestamp(),
        };
        self.categories.lock().unwrap().push(category.clone());
        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category> {
        let mut categories = self.categories.lock().unwrap();
        let slot = categories
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| Error::not_found("Category"))?;
        *slot = category.clone();
        Ok(category)
    }

    async fn delete(&self, category_id: CategoryId) -> Result<usize> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.id != category_id);
        Ok(before - categories.len())
    }

    fn find_by_id(&self, category_id: CategoryId) -> Result<Option<Category>> {
        let categories = self.categories.lock().unwrap();
        Ok(categories.iter().find(|c| c.id == category_id).cloned())
    }

    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Category>> {
        let categories = self.categories.lock().unwrap();
        Ok(categories
            .iter()
            .filter(|c| c.ownership == Ownership::Owned(user_id))
            .cloned()
            .collect())
    }

    fn find_default_categories(&self) -> Result<Vec<Category>> {
        let categories = self.categories.lock().unwrap();
        Ok(categories.iter().filter(|c| c.is_default()).cloned().collect())
    }

    fn find_by_user_id_and_type(
        &self,
        user_id: UserId,
        category_type: EntryType,
    ) -> Result<Vec<Category>> {
        let categories = self.categories.lock().unwrap();
        Ok(categories
            .iter()
            .filter(|c| c.ownership.can_access(user_id) && c.category_type == category_type)
            .cloned()
            .collect())
    }
}

// --- Currencies ---

#[derive(Clone)]
pub struct InMemoryCurrencyRepository {
    pub currencies: Arc<Mutex<Vec<Currency>>>,
    pub user_defaults: Arc<Mutex<Vec<(UserId, CurrencyId)>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryCurrencyRepository {
    /// Seeded with the default currencies USD (primary) and EUR.
    pub fn seeded() -> Self {
        let make = |id: CurrencyId, code: &str, name: &str, symbol: &str| Currency {
            id,
            ownership: Ownership::SystemDefault,
            code: code.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            created_at: timestamp(),
        };
        Self {
            currencies: Arc::new(Mutex::new(vec![
                make(USD, "USD", "US Dollar", "$"),
                make(EUR, "EUR", "Euro", "€"),
            ])),
            user_defaults: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(10)),
        }
    }

    pub fn empty() -> Self {
        Self {
            currencies: Arc::new(Mutex::new(Vec::new())),
            user_defaults: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl CurrencyRepositoryTrait for InMemoryCurrencyRepository {
    async fn create(&self, new_currency: NewCurrency) -> Result<Currency> {
        let currency = Currency {
            id: CurrencyId::new(next(&self.next_id)),
            ownership: new_currency.ownership,
            code: new_currency.code,
            name: new_currency.name,
            symbol: new_currency.symbol,
            created_at: timestamp(),
        };
        self.currencies.lock().unwrap().push(currency.clone());
        Ok(currency)
    }

    async fn update(&self, currency: Currency) -> Result<Currency> {
        let mut currencies = self.currencies.lock().unwrap();
        let slot = currencies
            .iter_mut()
            .find(|c| c.id == currency.id)
            .ok_or_else(|| Error::not_found("Currency"))?;
        *slot = currency.clone();
        Ok(currency)
    }

    async fn delete(&self, currency_id: CurrencyId) -> Result<usize> {
        let mut currencies = self.currencies.lock().unwrap();
        let before = currencies.len();
        currencies.retain(|c| c.id != currency_id);
        Ok(before - currencies.len())
    }

    fn find_by_id(&self, currency_id: CurrencyId) -> Result<Option<Currency>> {
        let currencies = self.currencies.lock().unwrap();
        Ok(currencies.iter().find(|c| c.id == currency_id).cloned())
    }

    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Currency>> {
        let currencies = self.currencies.lock().unwrap();
        Ok(currencies
            .iter()
            .filter(|c| c.ownership == Ownership::Owned(user_id))
            .cloned()
            .collect())
    }

    fn find_default_currencies(&self) -> Result<Vec<Currency>> {
        let currencies = self.currencies.lock().unwrap();
        Ok(currencies.iter().filter(|c| c.is_default()).cloned().collect())
    }

    fn exists_by_code_and_user_id(&self, code: &str, user_id: UserId) -> Result<bool> {
        let code = normalize_code(code);
        let currencies = self.currencies.lock().unwrap();
        Ok(currencies
            .iter()
            .any(|c| c.code == code && c.ownership == Ownership::Owned(user_id)))
    }

    async fn set_user_default_currency(
        &self,
        user_id: UserId,
        currency_id: CurrencyId,
    ) -> Result<()> {
        let mut defaults = self.user_defaults.lock().unwrap();
        defaults.retain(|(user, _)| *user != user_id);
        defaults.push((user_id, currency_id));
        Ok(())
    }

    fn get_user_default_currency(&self, user_id: UserId) -> Result<Option<Currency>> {
        let currency_id = {
            let defaults = self.user_defaults.lock().unwrap();
            defaults
                .iter()
                .find(|(user, _)| *user == user_id)
                .map(|(_, currency)| *currency)
        };
        match currency_id {
            Some(id) => self.find_by_id(id),
            None => Ok(None),
        }
    }
}

// --- Transactions ---

#[derive(Clone, Default)]
pub struct InMemoryTransactionRepository {
    pub transactions: Arc<Mutex<Vec<Transaction>>>,
    next_id: Arc<AtomicI64>,
}

#[async_trait]
impl TransactionRepositoryTrait for InMemoryTransactionRepository {
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let transaction = Transaction {
            id: TransactionId::new(next(&self.next_id) + 1),
            user_id: new_transaction.user_id,
            category_id: new_transaction.category_id,
            money: new_transaction.money,
            description: new_transaction.description,
            date: new_transaction.date,
            transaction_type: new_transaction.transaction_type,
            created_at: timestamp(),
        };
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(transaction)
    }

    async fn update(&self, transaction: Transaction) -> Result<Transaction> {
        let mut transactions = self.transactions.lock().unwrap();
        let slot = transactions
            .iter_mut()
            .find(|t| t.id == transaction.id)
            .ok_or_else(|| Error::not_found("Transaction"))?;
        *slot = transaction.clone();
        Ok(transaction)
    }

    async fn delete(&self, transaction_id: TransactionId) -> Result<usize> {
        let mut transactions = self.transactions.lock().unwrap();
        let before = transactions.len();
        transactions.retain(|t| t.id != transaction_id);
        Ok(before - transactions.len())
    }

    fn find_by_id(&self, transaction_id: TransactionId) -> Result<Option<Transaction>> {
        let transactions = self.transactions.lock().unwrap();
        Ok(transactions.iter().find(|t| t.id == transaction_id).cloned())
    }

    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Transaction>> {
        let transactions = self.transactions.lock().unwrap();
        let mut found: Vec<Transaction> = transactions
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(found)
    }

    fn find_by_user_id_and_date_range(
        &self,
        user_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        Ok(self
            .find_by_user_id(user_id)?
            .into_iter()
            .filter(|t| t.date >= start && t.date <= end)
            .collect())
    }

    fn find_by_user_id_with_filters(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> Result<(Vec<Transaction>, i64)> {
        let matching: Vec<Transaction> = self
            .find_by_user_id(user_id)?
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();
        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(filter.pagination.offset() as usize)
            .take(filter.pagination.limit() as usize)
            .collect();
        Ok((page, total))
    }
}

// --- Budgets ---

#[derive(Clone, Default)]
pub struct InMemoryBudgetRepository {
    pub budgets: Arc<Mutex<Vec<Budget>>>,
    next_id: Arc<AtomicI64>,
}

#[async_trait]
impl BudgetRepositoryTrait for InMemoryBudgetRepository {
    async fn create(&self, new_budget: NewBudget) -> Result<Budget> {
        let budget = Budget {
            id: BudgetId::new(next(&self.next_id) + 1),
            user_id: new_budget.user_id,
            category_id: new_budget.category_id,
            money: new_budget.money,
            period: new_budget.period,
            start_date: new_budget.start_date,
            end_date: new_budget.end_date,
            created_at: timestamp(),
        };
        self.budgets.lock().unwrap().push(budget.clone());
        Ok(budget)
    }

    async fn update(&self, budget: Budget) -> Result<Budget> {
        let mut budgets = self.budgets.lock().unwrap();
        let slot = budgets
            .iter_mut()
            .find(|b| b.id == budget.id)
            .ok_or_else(|| Error::not_found("Budget"))?;
        *slot = budget.clone();
        Ok(budget)
    }

    async fn delete(&self, budget_id: BudgetId) -> Result<usize> {
        let mut budgets = self.budgets.lock().unwrap();
        let before = budgets.len();
        budgets.retain(|b| b.id != budget_id);
        Ok(before - budgets.len())
    }

    fn find_by_id(&self, budget_id: BudgetId) -> Result<Option<Budget>> {
        let budgets = self.budgets.lock().unwrap();
        Ok(budgets.iter().find(|b| b.id == budget_id).cloned())
    }

    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Budget>> {
        let budgets = self.budgets.lock().unwrap();
        Ok(budgets.iter().filter(|b| b.user_id == user_id).cloned().collect())
    }

    fn find_active_by_user_id(&self, user_id: UserId, today: NaiveDate) -> Result<Vec<Budget>> {
        Ok(self
            .find_by_user_id(user_id)?
            .into_iter()
            .filter(|b| b.is_active_on(today))
            .collect())
    }
}

// --- Recurring transactions ---

#[derive(Clone, Default)]
pub struct InMemoryRecurringRepository {
    pub templates: Arc<Mutex<Vec<RecurringTransaction>>>,
    next_id: Arc<AtomicI64>,
}

#[async_trait]
impl RecurringTransactionRepositoryTrait for InMemoryRecurringRepository {
    async fn create(
        &self,
        new_recurring: NewRecurringTransaction,
    ) -> Result<RecurringTransaction> {
        let recurring = RecurringTransaction {
            id: RecurringTransactionId::new(next(&self.next_id) + 1),
            user_id: new_recurring.user_id,
            category_id: new_recurring.category_id,
            money: new_recurring.money,
            description: new_recurring.description,
            transaction_type: new_recurring.transaction_type,
            frequency: new_recurring.frequency,
            next_due_date: new_recurring.next_due_date,
            is_active: new_recurring.is_active,
            created_at: timestamp(),
        };
        self.templates.lock().unwrap().push(recurring.clone());
        Ok(recurring)
    }

    async fn update(&self, recurring: RecurringTransaction) -> Result<RecurringTransaction> {
        let mut templates = self.templates.lock().unwrap();
        let slot = templates
            .iter_mut()
            .find(|t| t.id == recurring.id)
            .ok_or_else(|| Error::not_found("Recurring transaction"))?;
        *slot = recurring.clone();
        Ok(recurring)
    }

    async fn delete(&self, recurring_id: RecurringTransactionId) -> Result<usize> {
        let mut templates = self.templates.lock().unwrap();
        let before = templates.len();
        templates.retain(|t| t.id != recurring_id);
        Ok(before - templates.len())
    }

    fn find_by_id(
        &self,
        recurring_id: RecurringTransactionId,
    ) -> Result<Option<RecurringTransaction>> {
        let templates = self.templates.lock().unwrap();
        Ok(templates.iter().find(|t| t.id == recurring_id).cloned())
    }

    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<RecurringTransaction>> {
        let templates = self.templates.lock().unwrap();
        Ok(templates
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    fn find_due_by_user_id(
        &self,
        user_id: UserId,
        today: NaiveDate,
    ) -> Result<Vec<RecurringTransaction>> {
        Ok(self
            .find_by_user_id(user_id)?
            .into_iter()
            .filter(|t| t.is_due(today))
            .collect())
    }
}

/// Every repository and service wired together over shared in-memory state.
pub struct TestContext {
    pub category_repository: InMemoryCategoryRepository,
    pub currency_repository: InMemoryCurrencyRepository,
    pub transaction_repository: InMemoryTransactionRepository,
    pub budget_repository: InMemoryBudgetRepository,
    pub recurring_repository: InMemoryRecurringRepository,
    pub category_service: Arc<CategoryService>,
    pub currency_service: Arc<CurrencyService>,
    pub transaction_service: Arc<TransactionService>,
    pub budget_service: Arc<BudgetService>,
    pub recurring_service: Arc<RecurringTransactionService>,
    pub analytics_service: Arc<AnalyticsService>,
}

impl TestContext {
    pub fn new() -> Self {
        let category_repository = InMemoryCategoryRepository::seeded();
        let currency_repository = InMemoryCurrencyRepository::seeded();
        let transaction_repository = InMemoryTransactionRepository::default();
        let budget_repository = InMemoryBudgetRepository::default();
        let recurring_repository = InMemoryRecurringRepository::default();

        let categories: Arc<dyn CategoryRepositoryTrait> = Arc::new(category_repository.clone());
        let currencies: Arc<dyn CurrencyRepositoryTrait> = Arc::new(currency_repository.clone());
        let transactions: Arc<dyn TransactionRepositoryTrait> =
            Arc::new(transaction_repository.clone());

        Self {
            category_service: Arc::new(CategoryService::new(categories.clone())),
            currency_service: Arc::new(CurrencyService::new(currencies.clone())),
            transaction_service: Arc::new(TransactionService::new(
                transactions.clone(),
                categories.clone(),
                currencies.clone(),
            )),
            budget_service: Arc::new(BudgetService::new(
                Arc::new(budget_repository.clone()),
                categories.clone(),
                transactions.clone(),
            )),
            recurring_service: Arc::new(RecurringTransactionService::new(
                Arc::new(recurring_repository.clone()),
                categories,
                currencies,
            )),
            analytics_service: Arc::new(AnalyticsService::new(transactions)),
            category_repository,
            currency_repository,
            transaction_repository,
            budget_repository,
            recurring_repository,
        }
    }
}
