//! Runnable server: ensures the database and student table exist, mounts the
//! student routes under /api/v1.0 plus common health/version routes.

use std::sync::Arc;
use student_api::{
    common_routes, ensure_database_exists, ensure_student_table, student_routes, AppState,
    PgStudentRepository, Translator,
};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("student_api=info".parse()?))
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/students".into());
    ensure_database_exists(&database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    ensure_student_table(&pool).await?;

    let state = AppState::new(Arc::new(PgStudentRepository::new(pool)), Translator::english());

    let app = Router::new()
        .merge(common_routes())
        .nest("/api/v1.0", student_routes(state))
        .layer(TraceLayer::new_for_http());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
