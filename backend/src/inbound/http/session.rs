//! Session extraction for HTTP handlers.
//!
//! The client presents its bearer token in the `x-session-id` request
//! header. Extraction resolves it against the in-process
//! [`SessionRegistry`] before the handler body runs, so protected handlers
//! simply take a [`SessionUser`] argument and never see unauthenticated
//! requests.

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::domain::{Error, SessionRegistry, UserId};

/// Request header carrying the session token. No cookies are used.
pub const SESSION_HEADER: &str = "x-session-id";

/// The authenticated caller, resolved from the session header.
#[derive(Debug, Clone)]
pub struct SessionUser {
    user_id: UserId,
    token: String,
}

impl SessionUser {
    /// Identity the session token was issued for.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// The presented bearer token, e.g. for logout.
    pub fn token(&self) -> &str {
        self.token.as_str()
    }
}

fn resolve(req: &HttpRequest) -> Result<SessionUser, Error> {
    let registry = req
        .app_data::<web::Data<SessionRegistry>>()
        .ok_or_else(|| Error::internal("session registry not configured"))?;

    let token = req
        .headers()
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| Error::unauthorized("Not authenticated"))?;

    let user_id = registry
        .resolve(token)
        .ok_or_else(|| Error::unauthorized("Not authenticated"))?;

    Ok(SessionUser {
        user_id,
        token: token.to_owned(),
    })
}

impl FromRequest for SessionUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve(req))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};

    use super::*;
    use crate::domain::ApiResult;

    async fn whoami(session: SessionUser) -> ApiResult<HttpResponse> {
        Ok(HttpResponse::Ok().body(session.user_id().to_string()))
    }

    fn test_app(
        registry: web::Data<SessionRegistry>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(registry)
            .route("/whoami", web::get().to(whoami))
    }

    #[actix_web::test]
    async fn resolves_a_valid_token() {
        let registry = web::Data::new(SessionRegistry::new());
        let token = registry.create(UserId::new(7));
        let app = test::init_service(test_app(registry)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .insert_header((SESSION_HEADER, token))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "7");
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorised() {
        let registry = web::Data::new(SessionRegistry::new());
        let app = test::init_service(test_app(registry)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/whoami").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn unknown_token_is_unauthorised() {
        let registry = web::Data::new(SessionRegistry::new());
        let app = test::init_service(test_app(registry)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .insert_header((SESSION_HEADER, "feedfacefeedface"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
