use tickbridge_server::config::Config;
use tickbridge_server::{build_app, init_tracing};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = Config::from_env();
    init_tracing();

    let app = build_app(&config);
    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("tickbridge listening on http://{}", config.listen_addr());
    axum::serve(listener, app).await
}
