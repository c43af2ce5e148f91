use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    controller::PaginationQuery,
    dto::request::CreateRequestDto,
    error::AppError,
    middleware::identity::SharerId,
    model::request::{CreateRequestParams, Request},
    service::request::RequestService,
    state::AppState,
};

/// POST /requests
/// Post a request for an item the acting user would like to borrow
pub async fn create_request(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Json(body): Json<CreateRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let request = RequestService::new(&state.db)
        .create(
            user_id,
            CreateRequestParams {
                description: body.description,
            },
        )
        .await?;

    Ok(Json(request.into_dto()))
}

/// GET /requests
/// List the acting user's own requests, newest first
pub async fn get_own_requests(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
) -> Result<impl IntoResponse, AppError> {
    let requests = RequestService::new(&state.db).get_own(user_id).await?;

    Ok(Json(
        requests
            .into_iter()
            .map(Request::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// GET /requests/all?from=&size=
/// List everyone else's requests, newest first
pub async fn get_all_requests(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let requests = RequestService::new(&state.db)
        .get_all(user_id, pagination.page(), pagination.size)
        .await?;

    Ok(Json(
        requests
            .into_iter()
            .map(Request::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// GET /requests/{request_id}
/// Fetch one request with the items created against it
pub async fn get_request(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(request_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let request = RequestService::new(&state.db)
        .get(user_id, request_id)
        .await?;

    Ok(Json(request.into_dto()))
}
