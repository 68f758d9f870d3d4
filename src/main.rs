use anyhow::Result;
use openstack_metadata::stub::{StubStore, app};
use std::io::ErrorKind;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod config;

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // --- Parse config ---
    let cfg = config::StubConfig::from_env_and_args()?;

    tracing::info!("Starting openstack-stub with config: {:?}", cfg);

    // --- Seed in-memory state ---
    let store = StubStore::new();
    let image = store.seed(&cfg.account).await;
    tracing::info!(
        "Seeded account {} and image {} ({})",
        cfg.account,
        image.id,
        image.name
    );

    // --- Start server ---
    let addr = cfg.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(cfg.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", cfg.port);
            tracing::warn!(
                "Permission denied binding to {} ({}). Falling back to {}",
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    let local = listener.local_addr()?;
    tracing::info!("Swift storage URL: http://{}/swift/v1/{}", local, cfg.account);
    tracing::info!("Glance endpoint:   http://{}/glance/v1", local);
    axum::serve(listener, app(store)).await?;

    Ok(())
}
