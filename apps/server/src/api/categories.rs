use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use tally_core::use_cases::{
    CategoryResponse, CreateCategory, CreateCategoryRequest, DeleteCategory,
    DeleteCategoryRequest, ListCategories, ListCategoriesRequest, ListCategoriesResponse,
    UpdateCategory, UpdateCategoryRequest, UseCase,
};
use tally_core::UserId;

use crate::{error::ApiResult, main_lib::AppState};

async fn list_categories(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Query(mut request): Query<ListCategoriesRequest>,
) -> ApiResult<Json<ListCategoriesResponse>> {
    request.user_id = user_id.value();
    let response = ListCategories::new(state.category_service.clone())
        .execute(request)
        .await?;
    Ok(Json(response))
}

async fn create_category(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Json(mut request): Json<CreateCategoryRequest>,
) -> ApiResult<(StatusCode, Json<CategoryResponse>)> {
    request.user_id = user_id.value();
    let category = CreateCategory::new(state.category_service.clone())
        .execute(request)
        .await?;
    Ok((StatusCode::CREATED, Json(category)))
}

async fn update_category(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Json(mut request): Json<UpdateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    request.user_id = user_id.value();
    request.id = id;
    let category = UpdateCategory::new(state.category_service.clone())
        .execute(request)
        .await?;
    Ok(Json(category))
}

async fn delete_category(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
) -> ApiResult<StatusCode> {
    DeleteCategory::new(state.category_service.clone())
        .execute(DeleteCategoryRequest {
            user_id: user_id.value(),
            id,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            put(update_category).delete(delete_category),
        )
}
