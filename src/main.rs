use studio_cms::config::Config;
use studio_cms::routes::create_routes;
use studio_cms::state::AppState;
use tracing::info;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studio_cms=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config);
    let app = create_routes(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("failed to bind listener");
    info!(
        "Listening on {}",
        listener.local_addr().expect("listener address")
    );
    axum::serve(listener, app).await.expect("server error");
}
