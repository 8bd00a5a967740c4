//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `URBANSWIFT_HOST` - Bind address (default: 127.0.0.1)
//! - `URBANSWIFT_PORT` - Listen port (default: 3000)
//! - `URBANSWIFT_BASE_URL` - Public URL (default: `http://localhost:3000`).
//!   An `https` URL turns on secure session cookies.
//! - `URBANSWIFT_FREE_DELIVERY_THRESHOLD` - Subtotal above which delivery is
//!   free (default: 500)
//! - `URBANSWIFT_DELIVERY_FEE` - Flat delivery fee (default: 49)
//! - `URBANSWIFT_CURRENCY` - One of INR, USD, EUR, GBP (default: INR)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};

use rust_decimal::Decimal;
use thiserror::Error;
use url::Url;

use urbanswift_core::{CurrencyCode, DeliveryPolicy};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: Url,
    /// Subtotal must be strictly above this for free delivery
    pub free_delivery_threshold: Decimal,
    /// Flat delivery fee charged at or below the threshold
    pub delivery_fee: Decimal,
    /// Currency for every price on the site
    pub currency: CurrencyCode,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// `from_lookup(|_| None)` yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparsable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = parse_var::<IpAddr>("URBANSWIFT_HOST", &var("URBANSWIFT_HOST", "127.0.0.1"))?;
        let port = parse_var::<u16>("URBANSWIFT_PORT", &var("URBANSWIFT_PORT", "3000"))?;
        let base_url = parse_var::<Url>(
            "URBANSWIFT_BASE_URL",
            &var("URBANSWIFT_BASE_URL", "http://localhost:3000"),
        )?;
        let free_delivery_threshold = parse_amount(
            "URBANSWIFT_FREE_DELIVERY_THRESHOLD",
            &var("URBANSWIFT_FREE_DELIVERY_THRESHOLD", "500"),
        )?;
        let delivery_fee =
            parse_amount("URBANSWIFT_DELIVERY_FEE", &var("URBANSWIFT_DELIVERY_FEE", "49"))?;
        let currency =
            parse_var::<CurrencyCode>("URBANSWIFT_CURRENCY", &var("URBANSWIFT_CURRENCY", "INR"))?;

        Ok(Self {
            host,
            port,
            base_url,
            free_delivery_threshold,
            delivery_fee,
            currency,
            sentry_dsn: lookup("SENTRY_DSN").filter(|v| !v.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT").filter(|v| !v.is_empty()),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the site is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.scheme() == "https"
    }

    /// Delivery fee rules for carts.
    #[must_use]
    pub fn delivery_policy(&self) -> DeliveryPolicy {
        DeliveryPolicy::new(self.free_delivery_threshold, self.delivery_fee, self.currency)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a non-negative money amount.
fn parse_amount(key: &str, value: &str) -> Result<Decimal, ConfigError> {
    let amount = parse_var::<Decimal>(key, value)?;
    if amount.is_sign_negative() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be negative".to_string(),
        ));
    }
    Ok(amount)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.currency, CurrencyCode::INR);
        assert_eq!(config.free_delivery_threshold, Decimal::from(500));
        assert_eq!(config.delivery_fee, Decimal::from(49));
        assert!(!config.is_secure());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("URBANSWIFT_HOST", "0.0.0.0"),
            ("URBANSWIFT_PORT", "8080"),
            ("URBANSWIFT_BASE_URL", "https://urbanswift.example"),
            ("URBANSWIFT_FREE_DELIVERY_THRESHOLD", "25"),
            ("URBANSWIFT_DELIVERY_FEE", "3.99"),
            ("URBANSWIFT_CURRENCY", "usd"),
            ("SENTRY_DSN", ""),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert!(config.is_secure());
        assert_eq!(config.currency, CurrencyCode::USD);
        assert_eq!(config.delivery_fee, Decimal::new(399, 2));
        assert!(config.sentry_dsn.is_none());

        let policy = config.delivery_policy();
        assert_eq!(policy.currency(), CurrencyCode::USD);
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("URBANSWIFT_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "URBANSWIFT_PORT"));
    }

    #[test]
    fn test_invalid_currency() {
        assert!(load(&[("URBANSWIFT_CURRENCY", "JPY")]).is_err());
    }

    #[test]
    fn test_negative_fee_rejected() {
        let err = load(&[("URBANSWIFT_DELIVERY_FEE", "-1")]).unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(load(&[("URBANSWIFT_BASE_URL", "not a url")]).is_err());
    }
}
