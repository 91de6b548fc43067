use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, put},
    Extension, Json, Router,
};
use tally_core::use_cases::{
    CreateRecurringTransaction, CreateRecurringTransactionRequest, DeleteRecurringTransaction,
    DeleteRecurringTransactionRequest, ListRecurringTransactions,
    ListRecurringTransactionsRequest, ListRecurringTransactionsResponse,
    RecurringTransactionResponse, SetRecurringTransactionActive,
    SetRecurringTransactionActiveRequest, UseCase,
};
use tally_core::UserId;

use crate::{error::ApiResult, main_lib::AppState};

async fn list_recurring_transactions(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Query(mut request): Query<ListRecurringTransactionsRequest>,
) -> ApiResult<Json<ListRecurringTransactionsResponse>> {
    request.user_id = user_id.value();
    let response = ListRecurringTransactions::new(state.recurring_service.clone())
        .execute(request)
        .await?;
    Ok(Json(response))
}

async fn create_recurring_transaction(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Json(mut request): Json<CreateRecurringTransactionRequest>,
) -> ApiResult<(StatusCode, Json<RecurringTransactionResponse>)> {
    request.user_id = user_id.value();
    let recurring = CreateRecurringTransaction::new(
        state.recurring_service.clone(),
        state.currency_service.clone(),
    )
    .execute(request)
    .await?;
    Ok((StatusCode::CREATED, Json(recurring)))
}

async fn set_recurring_transaction_active(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Json(mut request): Json<SetRecurringTransactionActiveRequest>,
) -> ApiResult<Json<RecurringTransactionResponse>> {
    request.user_id = user_id.value();
    request.id = id;
    let recurring = SetRecurringTransactionActive::new(state.recurring_service.clone())
        .execute(request)
        .await?;
    Ok(Json(recurring))
}

async fn delete_recurring_transaction(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
) -> ApiResult<StatusCode> {
    DeleteRecurringTransaction::new(state.recurring_service.clone())
        .execute(DeleteRecurringTransactionRequest {
            user_id: user_id.value(),
            id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/recurring-transactions",
            get(list_recurring_transactions).post(create_recurring_transaction),
        )
        .route(
            "/recurring-transactions/{id}",
            delete(delete_recurring_transaction),
        )
        .route(
            "/recurring-transactions/{id}/active",
            put(set_recurring_transaction_active),
        )
}
