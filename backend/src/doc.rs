//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated OpenAPI specification served by Swagger
//! UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session header security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionHeader",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "x-session-id",
                "Session token issued by POST /userauth/login.",
            ))),
        );
    }
}

/// OpenAPI document for the marketplace REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Campus marketplace API",
        description = "Registration, listings, and atomic purchase transactions."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionHeader" = [])),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::account,
        crate::inbound::http::listings::upload_item,
        crate::inbound::http::listings::marketplace,
        crate::inbound::http::listings::listing_item,
        crate::inbound::http::listings::check_item,
        crate::inbound::http::transactions::purchase,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::Error,
        crate::domain::ErrorCode,
        crate::domain::UserId,
        crate::domain::ListingId,
        crate::domain::TransactionId,
        crate::domain::Listing,
        crate::domain::ListingWithSeller,
        crate::domain::TransactionRecord,
        crate::domain::UserProfile,
        crate::inbound::http::users::CredentialsRequest,
        crate::inbound::http::users::RegisterResponse,
        crate::inbound::http::users::LoginResponse,
        crate::inbound::http::users::AccountResponse,
        crate::inbound::http::listings::UploadItemRequest,
        crate::inbound::http::listings::UploadItemResponse,
        crate::inbound::http::listings::CheckItemResponse,
        crate::inbound::http::transactions::TransactionRequest,
        crate::inbound::http::transactions::TransactionResponse,
    )),
    tags(
        (name = "userauth", description = "Registration, login, logout"),
        (name = "account", description = "Authenticated account view"),
        (name = "listings", description = "Upload and browse listings"),
        (name = "transactions", description = "Atomic purchases"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;
