//! Backend entry-point: wires the pool, migrations, REST endpoints, and
//! OpenAPI docs.

use actix_web::{App, HttpServer};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::outbound::persistence::{run_migrations, DbPool, PoolConfig};
use backend::server::{configure_app, AppContext, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env()?;

    let pool = DbPool::new(PoolConfig::new(config.database_url()))
        .map_err(std::io::Error::other)?;
    run_migrations(&pool).map_err(std::io::Error::other)?;

    let ctx = AppContext::new(&pool);
    let health = ctx.health();

    let server = HttpServer::new(move || {
        let app = App::new().configure(configure_app(ctx.clone()));
        #[cfg(debug_assertions)]
        let app = app
            .service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
        app
    })
    .bind(config.bind_addr())?;

    health.mark_ready();
    server.run().await
}
