//! Listing upload and browse handlers.
//!
//! ```text
//! POST /upload/item {"title":"Desk","category":"home","price":20,...}
//! GET  /marketplace?categories=home
//! GET  /listing/item?id=3
//! GET  /check-item/3
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::domain::{
    ApiResult, Error, Listing, ListingDraft, ListingId, ListingValidationError, ListingWithSeller,
};
use crate::inbound::http::port_errors::map_listing_store_error;
use crate::inbound::http::session::SessionUser;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /upload/item`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadItemRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Opaque image reference (URL or data URI).
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub contact: String,
    pub category: String,
    pub price: f64,
}

impl TryFrom<UploadItemRequest> for ListingDraft {
    type Error = ListingValidationError;

    fn try_from(value: UploadItemRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            &value.title,
            &value.description,
            &value.image,
            &value.contact,
            &value.category,
            value.price,
        )
    }
}

fn map_listing_validation_error(err: ListingValidationError) -> Error {
    match err {
        ListingValidationError::EmptyTitle => Error::invalid_request("title must not be empty")
            .with_details(json!({ "field": "title", "code": "empty_title" })),
        ListingValidationError::EmptyCategory => {
            Error::invalid_request("category must not be empty")
                .with_details(json!({ "field": "category", "code": "empty_category" }))
        }
        ListingValidationError::InvalidPrice { price } => {
            Error::invalid_request("price must be a non-negative number")
                .with_details(json!({ "field": "price", "code": "invalid_price", "price": price }))
        }
    }
}

/// Response body for a successful upload.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadItemResponse {
    pub message: String,
    pub item_id: ListingId,
}

/// Upload a new listing owned by the authenticated user.
#[utoipa::path(
    post,
    path = "/upload/item",
    request_body = UploadItemRequest,
    responses(
        (status = 201, description = "Item uploaded", body = UploadItemResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not authenticated", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["listings"],
    operation_id = "uploadItem"
)]
#[post("/upload/item")]
pub async fn upload_item(
    session: SessionUser,
    state: web::Data<HttpState>,
    payload: web::Json<UploadItemRequest>,
) -> ApiResult<HttpResponse> {
    let draft =
        ListingDraft::try_from(payload.into_inner()).map_err(map_listing_validation_error)?;
    let item_id = state
        .listings
        .create(session.user_id(), &draft)
        .await
        .map_err(map_listing_store_error)?;
    info!(owner = %session.user_id(), item = %item_id, "listing uploaded");
    Ok(HttpResponse::Created().json(UploadItemResponse {
        message: "Item successfully uploaded.".to_owned(),
        item_id,
    }))
}

/// Query string for `GET /marketplace`.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct MarketplaceQuery {
    /// Restrict results to one category (exact match).
    pub categories: Option<String>,
}

/// Browse all listings, optionally filtered by category.
#[utoipa::path(
    get,
    path = "/marketplace",
    params(MarketplaceQuery),
    responses(
        (status = 200, description = "Listings", body = [Listing]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["listings"],
    operation_id = "marketplace"
)]
#[get("/marketplace")]
pub async fn marketplace(
    state: web::Data<HttpState>,
    query: web::Query<MarketplaceQuery>,
) -> ApiResult<web::Json<Vec<Listing>>> {
    let items = state
        .listings
        .list(query.categories.as_deref())
        .await
        .map_err(map_listing_store_error)?;
    Ok(web::Json(items))
}

/// Query string for `GET /listing/item`.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListingItemQuery {
    pub id: ListingId,
}

/// Detail view for one listing, including the seller's email.
#[utoipa::path(
    get,
    path = "/listing/item",
    params(ListingItemQuery),
    responses(
        (status = 200, description = "Listing detail", body = ListingWithSeller),
        (status = 404, description = "Item not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["listings"],
    operation_id = "listingItem"
)]
#[get("/listing/item")]
pub async fn listing_item(
    state: web::Data<HttpState>,
    query: web::Query<ListingItemQuery>,
) -> ApiResult<web::Json<ListingWithSeller>> {
    let item = state
        .listings
        .find_with_seller(query.id)
        .await
        .map_err(map_listing_store_error)?
        .ok_or_else(|| Error::not_found("Item not found"))?;
    Ok(web::Json(item))
}

/// Response body for the availability probe.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckItemResponse {
    pub available: bool,
}

/// Whether the listing can still be bought.
#[utoipa::path(
    get,
    path = "/check-item/{id}",
    params(("id" = i32, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Availability", body = CheckItemResponse),
        (status = 404, description = "Item not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["listings"],
    operation_id = "checkItem"
)]
#[get("/check-item/{id}")]
pub async fn check_item(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<CheckItemResponse>> {
    let id = ListingId::new(path.into_inner());
    let available = state
        .listings
        .availability(id)
        .await
        .map_err(map_listing_store_error)?
        .ok_or_else(|| Error::not_found("Item not found"))?;
    Ok(web::Json(CheckItemResponse { available }))
}
