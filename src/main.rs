mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, logging, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    logging::init(&config.log_level);

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let app = router::router()
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            config.oauth_userinfo_url.clone(),
            config.oauth_scopes.clone(),
        ))
        .layer(session)
        .layer(startup::cors_layer());

    let listener = TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
