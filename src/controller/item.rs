use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    controller::PaginationQuery,
    dto::item::{CreateCommentDto, CreateItemDto, UpdateItemDto},
    error::AppError,
    middleware::identity::SharerId,
    model::{
        comment::CreateCommentParams,
        item::{CreateItemParams, Item, ItemDetails, UpdateItemParams},
    },
    service::item::ItemService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub from: u64,
    #[serde(default = "super::default_size")]
    pub size: u64,
}

/// POST /items
/// Create an item owned by the acting user
pub async fn create_item(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Json(body): Json<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemService::new(&state.db)
        .create(
            user_id,
            CreateItemParams {
                name: body.name,
                description: body.description,
                available: body.available,
                request_id: body.request_id,
            },
        )
        .await?;

    Ok(Json(item.into_dto()))
}

/// PATCH /items/{item_id}
/// Partially update an item the acting user owns
pub async fn update_item(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(item_id): Path<i64>,
    Json(body): Json<UpdateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemService::new(&state.db)
        .update(
            user_id,
            item_id,
            UpdateItemParams {
                name: body.name,
                description: body.description,
                available: body.available,
            },
        )
        .await?;

    Ok(Json(item.into_dto()))
}

/// GET /items/{item_id}
/// Fetch an item with comments, and booking slots when the acting user owns it
pub async fn get_item(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(item_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let details = ItemService::new(&state.db).get(user_id, item_id).await?;

    Ok(Json(details.into_dto()))
}

/// GET /items?from=&size=
/// List the acting user's items with booking slots and comments
pub async fn get_items(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let items = ItemService::new(&state.db)
        .get_all(user_id, pagination.page(), pagination.size)
        .await?;

    Ok(Json(
        items
            .into_iter()
            .map(ItemDetails::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// GET /items/search?text=&from=&size=
/// Search available items by name or description
pub async fn search_items(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let items = ItemService::new(&state.db)
        .search(user_id, &query.text, query.from, query.size)
        .await?;

    Ok(Json(
        items.into_iter().map(Item::into_dto).collect::<Vec<_>>(),
    ))
}

/// POST /items/{item_id}/comment
/// Add a comment after a finished approved booking
pub async fn add_comment(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(item_id): Path<i64>,
    Json(body): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let comment = ItemService::new(&state.db)
        .add_comment(user_id, item_id, CreateCommentParams { text: body.text })
        .await?;

    Ok(Json(comment.into_dto()))
}
