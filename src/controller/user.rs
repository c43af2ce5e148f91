use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::user::{CreateUserDto, UpdateUserDto},
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
    service::user::UserService,
    state::AppState,
};

/// POST /users
/// Create a user with a unique email
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .create(CreateUserParams {
            name: body.name,
            email: body.email,
        })
        .await?;

    Ok(Json(user.into_dto()))
}

/// PATCH /users/{user_id}
/// Partially update a user; absent fields keep their stored values
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(body): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .update(
            user_id,
            UpdateUserParams {
                name: body.name,
                email: body.email,
            },
        )
        .await?;

    Ok(Json(user.into_dto()))
}

/// GET /users/{user_id}
/// Fetch a single user
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get(user_id).await?;

    Ok(Json(user.into_dto()))
}

/// GET /users
/// List all users
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    Ok(Json(
        users.into_iter().map(User::into_dto).collect::<Vec<_>>(),
    ))
}

/// DELETE /users/{user_id}
/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(user_id).await?;

    Ok(())
}
