//! Node configuration, overridable from the environment.

use matcher_bus::DEFAULT_CHANNEL_CAPACITY;
use std::time::Duration;
use tracing::{info, warn};

/// Runtime configuration for the matcher node.
#[derive(Clone, Debug)]
pub struct NodeConfig {
    /// Period of the search-and-publish tick.
    pub tick_interval: Duration,
    /// Per-subscriber buffer capacity of the event bus.
    pub channel_capacity: usize,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Load configuration from the environment.
///
/// Recognized variables:
/// - `MATCHER_TICK_MS` - tick period in milliseconds (default 1000)
/// - `MATCHER_BUS_CAPACITY` - bus buffer capacity (default 1000)
pub fn load_config() -> NodeConfig {
    let mut config = NodeConfig::default();

    if let Ok(ms) = std::env::var("MATCHER_TICK_MS") {
        match ms.parse::<u64>() {
            Ok(ms) if ms > 0 => {
                config.tick_interval = Duration::from_millis(ms);
                info!(tick_ms = ms, "Loaded tick period from environment");
            }
            _ => warn!("MATCHER_TICK_MS must be a positive integer, ignoring"),
        }
    }

    if let Ok(cap) = std::env::var("MATCHER_BUS_CAPACITY") {
        match cap.parse::<usize>() {
            Ok(cap) if cap > 0 => config.channel_capacity = cap,
            _ => warn!("MATCHER_BUS_CAPACITY must be a positive integer, ignoring"),
        }
    }

    config
}
