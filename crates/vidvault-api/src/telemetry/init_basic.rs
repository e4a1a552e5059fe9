use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with an `EnvFilter` (overridable through `RUST_LOG`) and the fmt layer.
pub fn init_telemetry() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "vidvault_api=debug,vidvault_storage=debug,tower_http=debug".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}
