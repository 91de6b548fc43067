use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::analytics_model::{AnalyticsPeriod, AnalyticsSummary};
use crate::errors::Result;
use crate::ids::UserId;
use crate::transactions::TransactionRepositoryTrait;

pub trait AnalyticsServiceTrait: Send + Sync {
    /// Summary of the `period` window that contains `today`.
    fn get_summary(
        &self,
        user_id: UserId,
        period: AnalyticsPeriod,
        today: NaiveDate,
    ) -> Result<AnalyticsSummary>;
}

pub struct AnalyticsService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl AnalyticsService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
        }
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn get_summary(
        &self,
        user_id: UserId,
        period: AnalyticsPeriod,
        today: NaiveDate,
    ) -> Result<AnalyticsSummary> {
        let (start, end) = period.window(today);
        debug!(
            "Summarizing {} analytics for user {} ({} - {})",
            period.as_str(),
            user_id,
            start,
            end
        );
        let transactions = self
            .transaction_repository
            .find_by_user_id_and_date_range(user_id, start, end)?;
        AnalyticsSummary::from_transactions(period, (start, end), &transactions)
    }
}
