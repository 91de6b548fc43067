use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use tally_core::use_cases::{
    BudgetResponse, CreateBudget, CreateBudgetRequest, DeleteBudget, DeleteBudgetRequest,
    ListBudgets, ListBudgetsRequest, ListBudgetsResponse, UpdateBudget, UpdateBudgetRequest,
    UseCase,
};
use tally_core::UserId;

use crate::{error::ApiResult, main_lib::AppState};

async fn list_budgets(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Query(mut request): Query<ListBudgetsRequest>,
) -> ApiResult<Json<ListBudgetsResponse>> {
    request.user_id = user_id.value();
    let response = ListBudgets::new(
        state.budget_service.clone(),
        state.category_service.clone(),
    )
    .execute(request)
    .await?;
    Ok(Json(response))
}

async fn create_budget(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Json(mut request): Json<CreateBudgetRequest>,
) -> ApiResult<(StatusCode, Json<BudgetResponse>)> {
    request.user_id = user_id.value();
    let budget = CreateBudget::new(
        state.budget_service.clone(),
        state.category_service.clone(),
        state.currency_service.clone(),
    )
    .execute(request)
    .await?;
    Ok((StatusCode::CREATED, Json(budget)))
}

async fn update_budget(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Json(mut request): Json<UpdateBudgetRequest>,
) -> ApiResult<Json<BudgetResponse>> {
    request.user_id = user_id.value();
    request.id = id;
    let budget = UpdateBudget::new(
        state.budget_service.clone(),
        state.category_service.clone(),
    )
    .execute(request)
    .await?;
    Ok(Json(budget))
}

async fn delete_budget(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
) -> ApiResult<StatusCode> {
    DeleteBudget::new(state.budget_service.clone())
        .execute(DeleteBudgetRequest {
            user_id: user_id.value(),
            id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budgets", get(list_budgets).post(create_budget))
        .route("/budgets/{id}", put(update_budget).delete(delete_budget))
}
