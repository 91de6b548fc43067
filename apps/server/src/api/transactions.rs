use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use tally_core::use_cases::{
    CreateTransaction, CreateTransactionRequest, DeleteTransaction, DeleteTransactionRequest,
    ListTransactions, ListTransactionsRequest, ListTransactionsResponse, TransactionResponse,
    UpdateTransaction, UpdateTransactionRequest, UseCase,
};
use tally_core::UserId;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Reads the list filter from the raw query string. `categoryIds` may be
/// repeated, and each occurrence may hold a comma-separated list.
fn parse_list_query(user_id: UserId, query: Option<&str>) -> ApiResult<ListTransactionsRequest> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query.unwrap_or_default())
        .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {e}")))?;

    let mut request = ListTransactionsRequest {
        user_id: user_id.value(),
        ..Default::default()
    };
    for (key, value) in pairs {
        match key.as_str() {
            "type" => request.transaction_type = Some(value),
            "categoryIds" | "categoryIds[]" => request.category_ids.push(value),
            "startDate" => request.start_date = Some(value),
            "endDate" => request.end_date = Some(value),
            "page" => request.page = Some(parse_number("page", &value)?),
            "limit" => request.limit = Some(parse_number("limit", &value)?),
            _ => {}
        }
    }
    Ok(request)
}

fn parse_number(field: &str, value: &str) -> ApiResult<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("{field} must be an integer, got '{value}'")))
}

async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<ListTransactionsResponse>> {
    let request = parse_list_query(user_id, query.as_deref())?;
    let response = ListTransactions::new(state.transaction_service.clone())
        .execute(request)
        .await?;
    Ok(Json(response))
}

async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Json(mut request): Json<CreateTransactionRequest>,
) -> ApiResult<(StatusCode, Json<TransactionResponse>)> {
    request.user_id = user_id.value();
    let transaction = CreateTransaction::new(
        state.transaction_service.clone(),
        state.category_service.clone(),
        state.currency_service.clone(),
    )
    .execute(request)
    .await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

async fn update_transaction(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Json(mut request): Json<UpdateTransactionRequest>,
) -> ApiResult<Json<TransactionResponse>> {
    request.user_id = user_id.value();
    request.id = id;
    let transaction = UpdateTransaction::new(
        state.transaction_service.clone(),
        state.category_service.clone(),
    )
    .execute(request)
    .await?;
    Ok(Json(transaction))
}

async fn delete_transaction(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
) -> ApiResult<StatusCode> {
    DeleteTransaction::new(state.transaction_service.clone())
        .execute(DeleteTransactionRequest {
            user_id: user_id.value(),
            id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/transactions/{id}",
            put(update_transaction).delete(delete_transaction),
        )
}
