use anyhow::Context;
use axum::Router;
use codeforces::CodeforcesClient;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::students::handlers::create_student,
        features::students::handlers::list_students,
        features::students::handlers::get_student,
        features::students::handlers::update_student,
        features::students::handlers::delete_student,
        features::profile::handlers::get_rating_history,
        features::profile::handlers::get_problem_stats,
    ),
    components(
        schemas(
            storage::dto::student::CreateStudentRequest,
            storage::dto::student::UpdateStudentRequest,
            storage::dto::student::StudentResponse,
            storage::models::Student,
            codeforces::Problem,
            codeforces::ProblemStats,
            codeforces::RatingPoint,
            codeforces::RatingWindow,
            codeforces::stats::RatingBucket,
        )
    ),
    tags(
        (name = "students", description = "Student record CRUD endpoints"),
        (name = "profile", description = "Codeforces-derived statistics endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Student Progress Tracker API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let codeforces = match &config.codeforces_api_url {
        Some(base_url) => CodeforcesClient::with_base_url(base_url),
        None => CodeforcesClient::new(),
    };

    let app_state = AppState { db, codeforces };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api/v1", features::api_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(app_state);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Server listening at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
