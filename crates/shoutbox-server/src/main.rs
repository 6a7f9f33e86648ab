use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use shoutbox_api::auth::{AppStateInner, CredentialStore};
use shoutbox_api::session::SessionConfig;
use shoutbox_store::MessageStore;

struct Config {
    host: String,
    port: u16,
    store_path: String,
    session_secret: Option<String>,
    session_ttl_secs: u64,
}

impl Config {
    fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("SHOUTBOX_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = std::env::var("SHOUTBOX_PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()?;
        let store_path =
            std::env::var("SHOUTBOX_STORE_PATH").unwrap_or_else(|_| "shoutbox.db".into());
        let session_secret = std::env::var("SHOUTBOX_SESSION_SECRET").ok();
        let session_ttl_secs: u64 = std::env::var("SHOUTBOX_SESSION_TTL_SECS")
            .unwrap_or_else(|_| "86400".into())
            .parse()?;

        Ok(Self {
            host,
            port,
            store_path,
            session_secret,
            session_ttl_secs,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "shoutbox_server=debug,shoutbox_api=debug,shoutbox_store=debug,tower_http=debug"
                    .into()
            }),
        )
        .init();

    // Config
    let config = Config::from_env()?;

    // Message store; an unreachable store degrades instead of aborting startup
    let store = MessageStore::connect(&config.store_path);
    if store.is_degraded() {
        warn!("Message store unavailable; submissions will be dropped until restart");
    }

    // Session signing
    let sessions = match config.session_secret {
        Some(secret) => SessionConfig::new(secret, config.session_ttl_secs),
        None => {
            info!("SHOUTBOX_SESSION_SECRET is unset; sessions will not survive a restart");
            SessionConfig::ephemeral(config.session_ttl_secs)
        }
    };

    // Shared state
    let state = Arc::new(AppStateInner {
        store,
        credentials: CredentialStore::preset(),
        sessions,
    });

    let app = shoutbox_api::router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Shoutbox listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
