// gateway/src/config.rs

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the clinic backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// Wrapper struct to match the 'gateway:' key in the YAML config.
#[derive(Debug, Deserialize)]
struct GatewayConfigWrapper {
    gateway: GatewayConfig,
}

/// Loads the gateway configuration from `clinic_gateway.yaml`, falling back
/// to defaults when no file is present. `CLINIC_API_BASE_URL` and
/// `CLINIC_API_TIMEOUT_SECS` override whatever the file says.
pub fn load_gateway_config(config_file_path: Option<PathBuf>) -> Result<GatewayConfig> {
    dotenv::dotenv().ok();

    let path_to_use = config_file_path.unwrap_or_else(|| PathBuf::from("clinic_gateway.yaml"));

    let mut config = if path_to_use.is_file() {
        let config_content = fs::read_to_string(&path_to_use).with_context(|| {
            format!("Failed to read gateway config file {}", path_to_use.display())
        })?;
        let wrapper: GatewayConfigWrapper = serde_yaml2::from_str(&config_content)
            .with_context(|| {
                format!("Failed to parse gateway config file {}", path_to_use.display())
            })?;
        wrapper.gateway
    } else {
        GatewayConfig::default()
    };

    if let Ok(base_url) = std::env::var("CLINIC_API_BASE_URL") {
        config.base_url = base_url;
    }
    if let Ok(timeout) = std::env::var("CLINIC_API_TIMEOUT_SECS") {
        config.timeout_secs = timeout
            .parse()
            .with_context(|| format!("Invalid CLINIC_API_TIMEOUT_SECS value: {timeout}"))?;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_defaults_without_file() {
        let config = load_gateway_config(Some(PathBuf::from("/nonexistent/clinic.yaml"))).unwrap();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn should_parse_wrapped_yaml() {
        let raw = "gateway:\n  base_url: http://clinic.internal:8080\n  timeout_secs: 5\n";
        let wrapper: GatewayConfigWrapper = serde_yaml2::from_str(raw).unwrap();
        assert_eq!(wrapper.gateway.base_url, "http://clinic.internal:8080");
        assert_eq!(wrapper.gateway.timeout_secs, 5);
    }
}
