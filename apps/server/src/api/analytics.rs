use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use tally_core::analytics::AnalyticsSummary;
use tally_core::use_cases::{GetAnalyticsSummary, GetAnalyticsSummaryRequest, UseCase};
use tally_core::UserId;

use crate::{error::ApiResult, main_lib::AppState};

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Query(mut request): Query<GetAnalyticsSummaryRequest>,
) -> ApiResult<Json<AnalyticsSummary>> {
    request.user_id = user_id.value();
    let summary = GetAnalyticsSummary::new(state.analytics_service.clone())
        .execute(request)
        .await?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/analytics/summary", get(get_summary))
}
