//! Runtime wiring: bus construction, handler spawn, graceful shutdown.

use std::sync::Arc;

use anyhow::Result;
use matcher_bus::{MatcherBus, TopicSet};
use matcher_core::{MatcherConfig, MatcherService};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::config::NodeConfig;

/// The matcher node runtime.
///
/// Owns the event bus and the matcher task. Co-resident collaborators
/// publish inputs and subscribe to solutions through [`bus`](Self::bus).
pub struct MatcherRuntime {
    config: NodeConfig,
    bus: Arc<MatcherBus>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
    handle: Option<JoinHandle<()>>,
}

impl MatcherRuntime {
    /// Create a new runtime with configuration.
    #[must_use]
    pub fn new(config: NodeConfig) -> Self {
        let bus = Arc::new(MatcherBus::with_capacity(config.channel_capacity));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            config,
            bus,
            shutdown_tx,
            shutdown_rx,
            handle: None,
        }
    }

    /// Start the matcher task.
    ///
    /// Subscribes to `/input` and `/target` before returning, so events
    /// published after `start` completes are never missed.
    pub fn start(&mut self) -> Result<()> {
        info!("Starting solution matcher node");

        let service = MatcherService::new(MatcherConfig {
            tick_interval: self.config.tick_interval,
        });

        let subscription = self.bus.subscribe(TopicSet::INBOUND);

        let handler = crate::handler::MatcherHandler::new(
            subscription,
            service,
            Arc::clone(&self.bus),
            self.shutdown_rx.clone(),
        );

        self.handle = Some(tokio::spawn(handler.run()));

        info!("Solution matcher running");
        Ok(())
    }

    /// Get a handle to the event bus.
    #[must_use]
    pub fn bus(&self) -> Arc<MatcherBus> {
        Arc::clone(&self.bus)
    }

    /// Shutdown the node gracefully and wait for the matcher task.
    pub async fn shutdown(mut self) {
        info!("Initiating graceful shutdown...");

        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }

        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                error!("Matcher task ended abnormally: {}", e);
            }
        }

        info!("Shutdown complete");
    }
}
