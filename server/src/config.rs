//! Runtime configuration loaded from the environment.

use std::sync::Arc;

use qr_engine::{EncodingOptions, ErrorCorrection};

/// Runtime configuration populated from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub qr_size: u32,
    pub logo_height: u32,
    pub ec_level: ErrorCorrection,
    pub ec_level_logo: ErrorCorrection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 8080,
            qr_size: qr_engine::DEFAULT_SIZE,
            logo_height: qr_engine::DEFAULT_LOGO_HEIGHT,
            ec_level: ErrorCorrection::Medium,
            ec_level_logo: ErrorCorrection::Highest,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, falling back to the
    /// defaults for unset or unparseable values.
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            server_port: parse_env("SERVER_PORT", d.server_port),
            qr_size: parse_env("QR_SIZE", d.qr_size),
            logo_height: parse_env("LOGO_HEIGHT", d.logo_height),
            ec_level: parse_level("QR_EC_LEVEL", d.ec_level),
            ec_level_logo: parse_level("QR_EC_LEVEL_LOGO", d.ec_level_logo),
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_level(key: &str, default: ErrorCorrection) -> ErrorCorrection {
    std::env::var(key)
        .ok()
        .and_then(|v| ErrorCorrection::parse(&v))
        .unwrap_or(default)
}

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn server_port(&self) -> u16 {
        self.config.server_port
    }

    pub fn logo_height(&self) -> u32 {
        self.config.logo_height
    }

    /// Encoding options for one request. Overlayed symbols use the
    /// configured logo-level error correction.
    pub fn encode_options(&self, with_overlay: bool) -> EncodingOptions {
        let level = if with_overlay {
            self.config.ec_level_logo
        } else {
            self.config.ec_level
        };
        EncodingOptions {
            level,
            size: self.config.qr_size,
        }
    }
}
