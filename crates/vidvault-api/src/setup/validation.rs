//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use vidvault_core::Config;

/// Validate critical configuration values
///
/// # Returns
/// Ok(()) if validation passes, Err with details if validation fails
pub fn validate_config(config: &Config) -> Result<()> {
    if config.uploads_dir().as_os_str().is_empty() {
        return Err(anyhow::anyhow!("UPLOADS_DIR cannot be empty"));
    }

    if config.max_upload_size_bytes() == 0 {
        return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_BYTES cannot be 0"));
    }

    if config.cors_origins().is_empty() {
        return Err(anyhow::anyhow!(
            "CORS_ORIGINS must list at least one origin (use '*' to allow all)"
        ));
    }

    if config.is_production() && config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!(
            "CORS configured to allow all origins in production - set CORS_ORIGINS to restrict it"
        );
    }

    Ok(())
}
