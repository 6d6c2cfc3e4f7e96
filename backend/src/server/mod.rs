//! Application wiring: adapters into state, state into routes.

pub mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::web;

use crate::domain::SessionRegistry;
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{health, listings, transactions, users};
use crate::outbound::persistence::{
    DbPool, DieselListingStore, DieselPurchaseEngine, DieselUserStore,
};

/// Shared application context cloned into each worker's `App`.
#[derive(Clone)]
pub struct AppContext {
    state: web::Data<HttpState>,
    sessions: web::Data<SessionRegistry>,
    health: web::Data<HealthState>,
}

impl AppContext {
    /// Wire the Diesel adapters over one pool.
    pub fn new(pool: &DbPool) -> Self {
        let state = HttpState::new(
            Arc::new(DieselUserStore::new(pool.clone())),
            Arc::new(DieselListingStore::new(pool.clone())),
            Arc::new(DieselPurchaseEngine::new(pool.clone())),
        );
        Self::with_state(state)
    }

    /// Build a context around preconstructed ports, e.g. test doubles.
    pub fn with_state(state: HttpState) -> Self {
        Self {
            state: web::Data::new(state),
            sessions: web::Data::new(SessionRegistry::new()),
            health: web::Data::new(HealthState::new()),
        }
    }

    /// Health state handle for readiness signalling outside the app.
    pub fn health(&self) -> web::Data<HealthState> {
        self.health.clone()
    }

    /// Session registry handle, e.g. for seeding sessions in tests.
    pub fn sessions(&self) -> web::Data<SessionRegistry> {
        self.sessions.clone()
    }
}

/// Register state and the full route table on an Actix service config.
///
/// # Examples
/// ```no_run
/// use actix_web::App;
/// use backend::outbound::persistence::{DbPool, PoolConfig};
/// use backend::server::{configure_app, AppContext};
///
/// let pool = DbPool::new(PoolConfig::new(":memory:")).unwrap();
/// let ctx = AppContext::new(&pool);
/// let app = App::new().configure(configure_app(ctx));
/// ```
pub fn configure_app(ctx: AppContext) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(ctx.state)
            .app_data(ctx.sessions)
            .app_data(ctx.health)
            .service(users::register)
            .service(users::login)
            .service(users::logout)
            .service(users::account)
            .service(listings::upload_item)
            .service(listings::marketplace)
            .service(listings::listing_item)
            .service(listings::check_item)
            .service(transactions::purchase)
            .service(health::ready)
            .service(health::live);
    }
}
