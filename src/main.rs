use std::env;

use attendance_report::api::{AppState, create_router};
use attendance_report::config::{ConfigLoader, ReportConfig};
use attendance_report::processing::ReportGenerator;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("ATTENDANCE_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let bind_addr = env::var("ATTENDANCE_BIND").unwrap_or_else(|_| "127.0.0.1:5000".to_string());
    let config = match env::var("ATTENDANCE_CONFIG") {
        Ok(path) => ConfigLoader::load(&path)
            .map_err(|e| e.to_string())?
            .into_config(),
        Err(_) => ReportConfig::default(),
    };

    info!(
        output_dir = %config.output_dir.display(),
        format = ?config.format,
        "Starting attendance report server"
    );
    let router = create_router(AppState::new(ReportGenerator::new(config)));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("failed to bind {bind_addr}: {e}"))?;
    info!(addr = %bind_addr, "Listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| format!("server error: {e}"))
}
