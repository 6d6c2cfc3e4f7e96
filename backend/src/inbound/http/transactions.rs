//! Purchase handler.
//!
//! ```text
//! POST /transaction {"itemId":3}
//! ```

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::{ApiResult, Error, ListingId, UserId};
use crate::inbound::http::port_errors::map_purchase_error;
use crate::inbound::http::session::SessionUser;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /transaction`.
///
/// Older clients also send `buyerId`, `sellerId`, and `price`; those fields
/// are accepted but ignored. The buyer is the session identity and the
/// seller and price come from the authoritative listing row, so a tampered
/// body cannot change who gets paid or how much.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub item_id: ListingId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Response body for a successful purchase.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub success: bool,
    /// Unique receipt code for the buyer.
    pub confirmation_number: String,
}

/// Buy an item: atomically mark it sold and record the sale.
#[utoipa::path(
    post,
    path = "/transaction",
    request_body = TransactionRequest,
    responses(
        (status = 201, description = "Purchase recorded", body = TransactionResponse),
        (status = 401, description = "Not authenticated", body = Error),
        (status = 404, description = "Item not found", body = Error),
        (status = 409, description = "Item already sold", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["transactions"],
    operation_id = "purchase"
)]
#[post("/transaction")]
pub async fn purchase(
    session: SessionUser,
    state: web::Data<HttpState>,
    payload: web::Json<TransactionRequest>,
) -> ApiResult<HttpResponse> {
    let receipt = state
        .purchases
        .purchase(session.user_id(), payload.item_id)
        .await
        .map_err(map_purchase_error)?;

    Ok(HttpResponse::Created().json(TransactionResponse {
        success: true,
        confirmation_number: receipt.confirmation_code,
    }))
}
