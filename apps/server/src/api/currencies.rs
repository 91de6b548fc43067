use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use tally_core::use_cases::{
    CreateCurrency, CreateCurrencyRequest, CurrencyResponse, DeleteCurrency,
    DeleteCurrencyRequest, GetDefaultCurrency, GetDefaultCurrencyRequest, ListCurrencies,
    ListCurrenciesRequest, ListCurrenciesResponse, SetDefaultCurrency, SetDefaultCurrencyRequest,
    UpdateCurrency, UpdateCurrencyRequest, UseCase,
};
use tally_core::UserId;

use crate::{error::ApiResult, main_lib::AppState};

async fn list_currencies(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
) -> ApiResult<Json<ListCurrenciesResponse>> {
    let response = ListCurrencies::new(state.currency_service.clone())
        .execute(ListCurrenciesRequest {
            user_id: user_id.value(),
        })
        .await?;
    Ok(Json(response))
}

async fn create_currency(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Json(mut request): Json<CreateCurrencyRequest>,
) -> ApiResult<(StatusCode, Json<CurrencyResponse>)> {
    request.user_id = user_id.value();
    let currency = CreateCurrency::new(state.currency_service.clone())
        .execute(request)
        .await?;
    Ok((StatusCode::CREATED, Json(currency)))
}

async fn update_currency(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Json(mut request): Json<UpdateCurrencyRequest>,
) -> ApiResult<Json<CurrencyResponse>> {
    request.user_id = user_id.value();
    request.id = id;
    let currency = UpdateCurrency::new(state.currency_service.clone())
        .execute(request)
        .await?;
    Ok(Json(currency))
}

async fn delete_currency(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
) -> ApiResult<StatusCode> {
    DeleteCurrency::new(state.currency_service.clone())
        .execute(DeleteCurrencyRequest {
            user_id: user_id.value(),
            id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_default_currency(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
) -> ApiResult<Json<CurrencyResponse>> {
    let currency = GetDefaultCurrency::new(state.currency_service.clone())
        .execute(GetDefaultCurrencyRequest {
            user_id: user_id.value(),
        })
        .await?;
    Ok(Json(currency))
}

async fn set_default_currency(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Json(mut request): Json<SetDefaultCurrencyRequest>,
) -> ApiResult<Json<CurrencyResponse>> {
    request.user_id = user_id.value();
    let currency = SetDefaultCurrency::new(state.currency_service.clone())
        .execute(request)
        .await?;
    Ok(Json(currency))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/currencies/default",
            get(get_default_currency).put(set_default_currency),
        )
        .route("/currencies", get(list_currencies).post(create_currency))
        .route(
            "/currencies/{id}",
            put(update_currency).delete(delete_currency),
        )
}
