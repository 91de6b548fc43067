//! Analytics module - income and spending summaries per calendar window.

mod analytics_model;
mod analytics_service;

pub use analytics_model::{AnalyticsPeriod, AnalyticsSummary};
pub use analytics_service::{AnalyticsService, AnalyticsServiceTrait};
