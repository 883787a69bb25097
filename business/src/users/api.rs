//! Users API client helpers.
//!
//! Every call goes through [`server_request`], so each one sends JSON with
//! same-origin credentials and resolves to a typed result instead of invoking
//! a callback. Callers (the controller) decide what a failure means for the
//! table; nothing here touches UI state.

use crate::BusinessConfig;
use crate::http::{HttpResult, Method, server_request};
use crate::users::model::{
    GetUserResponse, ListUsersResponse, Mutation, MutationResponse, NewUser, User, UserId,
};

/// Empty JSON object used as the payload of body-less requests.
#[derive(serde::Serialize)]
struct Empty {}

/// GET `/users`
pub async fn list_users(config: &BusinessConfig) -> HttpResult<Vec<User>> {
    let response: ListUsersResponse =
        server_request(&config.users_url(), &Empty {}, Method::Get).await?;
    Ok(response.users)
}

/// GET `/users/{id}`
///
/// The server answers `{}` for an unknown id, which maps to `None`.
pub async fn get_user(config: &BusinessConfig, id: &UserId) -> HttpResult<Option<User>> {
    let response: GetUserResponse =
        server_request(&config.user_url(id), &Empty {}, Method::Get).await?;
    Ok(response.into_user())
}

/// Submits the add form to its declared `action` with its declared `method`.
/// Body: `{ "first_name": "...", "last_name": "..." }`
pub async fn create_user(url: &str, method: Method, new_user: &NewUser) -> HttpResult<User> {
    server_request(url, new_user, method).await
}

/// PUT `/users/{id}`
/// Body: `{ "id": ..., "first_name": "...", "last_name": "..." }`
pub async fn update_user(config: &BusinessConfig, user: &User) -> HttpResult<Mutation> {
    let response: MutationResponse =
        server_request(&config.user_url(&user.id), user, Method::Put).await?;
    Ok(response.into())
}

/// DELETE `/users/{id}`
pub async fn delete_user(config: &BusinessConfig, id: &UserId) -> HttpResult<Mutation> {
    let response: MutationResponse =
        server_request(&config.user_url(id), &Empty {}, Method::Delete).await?;
    Ok(response.into())
}
