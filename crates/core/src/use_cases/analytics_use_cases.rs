use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use super::UseCase;
use crate::analytics::{AnalyticsPeriod, AnalyticsServiceTrait, AnalyticsSummary};
use crate::errors::Result;
use crate::ids::UserId;
use crate::utils::time_utils;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetAnalyticsSummaryRequest {
    #[serde(skip)]
    pub user_id: i64,
    /// `weekly`, `monthly` or `yearly`; anything else means monthly.
    pub period: Option<String>,
}

/// Income and spending totals for the current week, month or year.
pub struct GetAnalyticsSummary {
    analytics: Arc<dyn AnalyticsServiceTrait>,
    today: fn() -> NaiveDate,
}

impl GetAnalyticsSummary {
    pub fn new(analytics: Arc<dyn AnalyticsServiceTrait>) -> Self {
        Self {
            analytics,
            today: time_utils::today,
        }
    }

    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }
}

#[async_trait]
impl UseCase for GetAnalyticsSummary {
    type Request = GetAnalyticsSummaryRequest;
    type Response = AnalyticsSummary;

    async fn execute(&self, request: GetAnalyticsSummaryRequest) -> Result<AnalyticsSummary> {
        let period = AnalyticsPeriod::from_name(request.period.as_deref());
        self.analytics
            .get_summary(UserId::new(request.user_id), period, (self.today)())
    }
}
