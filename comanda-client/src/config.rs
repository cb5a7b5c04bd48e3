//! Client configuration
//!
//! All settings can be overridden through environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | COMANDA_DATA_DIR | ./comanda-data | Directory for cart/session blobs |
//! | CUSTOMER_POLL_MS | 5000 | Customer order poll cadence |
//! | STAFF_POLL_MS | 10000 | Staff queue poll cadence |

use std::time::Duration;

/// Device-side configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Directory for the persisted cart and session blobs
    pub data_dir: String,
    /// Customer order poll cadence (milliseconds)
    pub customer_poll_ms: u64,
    /// Staff queue poll cadence (milliseconds)
    pub staff_poll_ms: u64,
}

impl ClientConfig {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("COMANDA_DATA_DIR")
                .unwrap_or_else(|_| "./comanda-data".into()),
            customer_poll_ms: std::env::var("CUSTOMER_POLL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            staff_poll_ms: std::env::var("STAFF_POLL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10000),
        }
    }

    pub fn customer_poll_period(&self) -> Duration {
        Duration::from_millis(self.customer_poll_ms)
    }

    pub fn staff_poll_period(&self) -> Duration {
        Duration::from_millis(self.staff_poll_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: "./comanda-data".into(),
            customer_poll_ms: 5000,
            staff_poll_ms: 10000,
        }
    }
}
