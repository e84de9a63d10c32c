use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hrms_edge::{app, config::Config, state::EdgeState};

fn mask_secret(s: Option<&str>) -> String {
    match s {
        None => "<unset>".into(),
        Some(s) => {
            let prefix = s.chars().take(4).collect::<String>();
            format!("{}*** (len={})", prefix, s.len())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hrms_edge=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let state = EdgeState::from_config(&config);
    tracing::info!(
        bind_addr = %config.bind_addr,
        static_dir = %config.static_dir.display(),
        session_cookie = %config.session_cookie_name,
        jwt_secret = %mask_secret(config.jwt_secret.as_deref()),
        verifier = state.verifier.mode(),
        gated_routes = state.policy.rules().len(),
        "Loaded configuration from environment/.env"
    );

    let router = app(state, &config.static_dir);

    tracing::info!("Edge server listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
