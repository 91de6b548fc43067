use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{auth::AuthManager, config::Config};
use tally_core::{
    analytics::{AnalyticsService, AnalyticsServiceTrait},
    budgets::{BudgetService, BudgetServiceTrait},
    categories::{CategoryRepositoryTrait, CategoryService, CategoryServiceTrait},
    currencies::{CurrencyRepositoryTrait, CurrencyService, CurrencyServiceTrait},
    recurring::{RecurringTransactionService, RecurringTransactionServiceTrait},
    transactions::{TransactionRepositoryTrait, TransactionService, TransactionServiceTrait},
    users::UserRepositoryTrait,
};
use tally_storage_sqlite::{
    db, BudgetRepository, CategoryRepository, CurrencyRepository,
    RecurringTransactionRepository, TransactionRepository, UserRepository,
};

pub struct AppState {
    pub category_service: Arc<dyn CategoryServiceTrait>,
    pub currency_service: Arc<dyn CurrencyServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub recurring_service: Arc<dyn RecurringTransactionServiceTrait>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait>,
    pub user_repository: Arc<dyn UserRepositoryTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TALLY_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let category_repo: Arc<dyn CategoryRepositoryTrait> =
        Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let currency_repo: Arc<dyn CurrencyRepositoryTrait> =
        Arc::new(CurrencyRepository::new(pool.clone(), writer.clone()));
    let transaction_repo: Arc<dyn TransactionRepositoryTrait> =
        Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let budget_repo = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let recurring_repo = Arc::new(RecurringTransactionRepository::new(
        pool.clone(),
        writer.clone(),
    ));
    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer));

    let category_service = Arc::new(CategoryService::new(category_repo.clone()));
    let currency_service = Arc::new(CurrencyService::new(currency_repo.clone()));
    let transaction_service = Arc::new(TransactionService::new(
        transaction_repo.clone(),
        category_repo.clone(),
        currency_repo.clone(),
    ));
    let budget_service = Arc::new(BudgetService::new(
        budget_repo,
        category_repo.clone(),
        transaction_repo.clone(),
    ));
    let recurring_service = Arc::new(RecurringTransactionService::new(
        recurring_repo,
        category_repo,
        currency_repo,
    ));
    let analytics_service = Arc::new(AnalyticsService::new(transaction_repo));

    let auth = Arc::new(AuthManager::new(&config.jwt_secret, config.token_ttl));

    Ok(Arc::new(AppState {
        category_service,
        currency_service,
        transaction_service,
        budget_service,
        recurring_service,
        analytics_service,
        user_repository,
        auth,
    }))
}
