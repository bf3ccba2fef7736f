//! Employee API server
//!
//! ```bash
//! DATABASE_URL=sqlite://staffbook.db?mode=rwc cargo run
//! ```
//!
//! Then visit:
//! - **API**: <http://localhost:3000/api/employee>
//! - **Documentation**: <http://localhost:3000/docs>

use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use staffbook::{app, config::Settings, migration::Migrator};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa_scalar::{Scalar, Servable};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&settings.log_filter)?)
        .with_target(false)
        .compact()
        .init();

    let db = Database::connect(&settings.database_url).await?;
    Migrator::up(&db, None).await?;

    let (router, apidocs) = app::router(app::state(db));
    let app = router
        .merge(Scalar::with_url("/docs", apidocs))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(settings.bind_address).await?;
    tracing::info!(
        address = %settings.bind_address,
        "API at /api/employee, docs at /docs"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
