//! User auth and account handlers.
//!
//! ```text
//! POST /userauth/register {"email":"a@x.com","password":"p1"}
//! POST /userauth/login    {"email":"a@x.com","password":"p1"}
//! POST /userauth/logout
//! GET  /account
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::domain::{
    ApiResult, Credentials, CredentialsValidationError, Error, ListingWithSeller, SessionRegistry,
    TransactionRecord, UserId, UserProfile,
};
use crate::inbound::http::port_errors::{
    map_listing_store_error, map_purchase_error, map_user_store_error,
};
use crate::inbound::http::session::SessionUser;
use crate::inbound::http::state::HttpState;

/// Request body for registration and login.
///
/// Example JSON: `{"email":"a@x.com","password":"p1"}`
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

impl TryFrom<CredentialsRequest> for Credentials {
    type Error = CredentialsValidationError;

    fn try_from(value: CredentialsRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password)
    }
}

fn map_credentials_validation_error(err: CredentialsValidationError) -> Error {
    match err {
        CredentialsValidationError::EmptyEmail => Error::invalid_request("email must not be empty")
            .with_details(json!({ "field": "email", "code": "empty_email" })),
        CredentialsValidationError::EmptyPassword => {
            Error::invalid_request("password must not be empty")
                .with_details(json!({ "field": "password", "code": "empty_password" }))
        }
    }
}

/// Response body for a successful registration.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/userauth/register",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["userauth"],
    operation_id = "register"
)]
#[post("/userauth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        Credentials::try_from(payload.into_inner()).map_err(map_credentials_validation_error)?;
    let user_id = state
        .users
        .register(&credentials)
        .await
        .map_err(map_user_store_error)?;
    info!(user = %user_id, "user registered");
    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "User registered successfully.".to_owned(),
    }))
}

/// Response body for a successful login.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Opaque bearer token for the `x-session-id` header.
    pub session_id: String,
    pub user_id: UserId,
}

/// Authenticate and open a session.
#[utoipa::path(
    post,
    path = "/userauth/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["userauth"],
    operation_id = "login"
)]
#[post("/userauth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    sessions: web::Data<SessionRegistry>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        Credentials::try_from(payload.into_inner()).map_err(map_credentials_validation_error)?;
    let user = state
        .users
        .authenticate(&credentials)
        .await
        .map_err(map_user_store_error)?
        .ok_or_else(|| Error::unauthorized("Invalid email or password"))?;

    let session_id = sessions.create(user.id);
    info!(user = %user.id, "session opened");
    Ok(HttpResponse::Ok().json(LoginResponse {
        session_id,
        user_id: user.id,
    }))
}

/// Close the presented session.
#[utoipa::path(
    post,
    path = "/userauth/logout",
    responses(
        (status = 204, description = "Session revoked"),
        (status = 401, description = "Not authenticated", body = Error)
    ),
    tags = ["userauth"],
    operation_id = "logout"
)]
#[post("/userauth/logout")]
pub async fn logout(
    session: SessionUser,
    sessions: web::Data<SessionRegistry>,
) -> ApiResult<HttpResponse> {
    sessions.revoke(session.token());
    Ok(HttpResponse::NoContent().finish())
}

/// Response body for the account view.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub user: UserProfile,
    pub listings: Vec<ListingWithSeller>,
    pub purchases: Vec<TransactionRecord>,
}

/// The caller's profile, own listings, and purchase history.
#[utoipa::path(
    get,
    path = "/account",
    responses(
        (status = 200, description = "Account details", body = AccountResponse),
        (status = 401, description = "Not authenticated", body = Error),
        (status = 404, description = "User no longer exists", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["account"],
    operation_id = "account"
)]
#[get("/account")]
pub async fn account(
    session: SessionUser,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<AccountResponse>> {
    let user = state
        .users
        .find_by_id(session.user_id())
        .await
        .map_err(map_user_store_error)?
        .ok_or_else(|| Error::not_found("User not found"))?;

    let listings = state
        .listings
        .list_by_owner(user.id)
        .await
        .map_err(map_listing_store_error)?;
    let purchases = state
        .purchases
        .purchases_by_buyer(user.id)
        .await
        .map_err(map_purchase_error)?;

    Ok(web::Json(AccountResponse {
        user: user.profile(),
        listings,
        purchases,
    }))
}
