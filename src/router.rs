use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{booking, item, request, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(user::create_user).get(user::get_users))
        .route(
            "/users/{user_id}",
            get(user::get_user)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .route("/items", post(item::create_item).get(item::get_items))
        .route("/items/search", get(item::search_items))
        .route(
            "/items/{item_id}",
            get(item::get_item).patch(item::update_item),
        )
        .route("/items/{item_id}/comment", post(item::add_comment))
        .route(
            "/bookings",
            post(booking::create_booking).get(booking::get_bookings),
        )
        .route(
            "/bookings/{booking_id}",
            get(booking::get_booking).patch(booking::approve_booking),
        )
        .route(
            "/requests",
            post(request::create_request).get(request::get_own_requests),
        )
        .route("/requests/all", get(request::get_all_requests))
        .route("/requests/{request_id}", get(request::get_request))
}
