//! The matcher's event loop.

use std::sync::Arc;

use matcher_bus::{EventPublisher, MatcherBus, MatcherEvent, Subscription, Topic};
use matcher_core::MatcherService;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Drives the matcher: consumes `/input` and `/target` events, fires
/// the periodic search, and publishes any solution to `/solution`.
///
/// Runs as a single task; `select!` arms are mutually exclusive, which
/// is the serialization guarantee the matcher state relies on.
pub struct MatcherHandler {
    /// Subscription filtered to the two inbound channels.
    subscription: Subscription,
    /// The matcher service holding state and search logic.
    service: MatcherService,
    /// Bus handle for publishing solutions.
    bus: Arc<MatcherBus>,
    /// Shutdown signal receiver.
    shutdown: watch::Receiver<bool>,
}

impl MatcherHandler {
    /// Create a new handler.
    ///
    /// The subscription should carry `TopicSet::INBOUND`; solution
    /// events are this handler's own output and are ignored if they
    /// arrive.
    pub fn new(
        subscription: Subscription,
        service: MatcherService,
        bus: Arc<MatcherBus>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            subscription,
            service,
            bus,
            shutdown,
        }
    }

    /// Run the handler loop until the bus closes or shutdown fires.
    pub async fn run(mut self) {
        info!(
            tick = ?self.service.tick_interval(),
            "Solution matcher handler started"
        );

        let mut ticker = tokio::time::interval(self.service.tick_interval());
        // A stalled run catches up with one tick, not a burst of them.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                event = self.subscription.recv() => {
                    match event {
                        Some(MatcherEvent::InputArray(values)) => {
                            self.service.handle_input(values);
                        }
                        Some(MatcherEvent::Target(target)) => {
                            self.service.handle_target(target);
                        }
                        // Our own output channel; nothing to do.
                        Some(MatcherEvent::Solution(_)) => {}
                        None => {
                            info!("Event bus closed, exiting");
                            break;
                        }
                    }
                }
                _ = ticker.tick() => {
                    self.on_tick().await;
                }
                _ = self.shutdown.changed() => {
                    info!("Shutdown signal received");
                    break;
                }
            }
        }
    }

    /// One tick: search the current state and publish a match, if any.
    ///
    /// Skipped silently until both inputs have arrived; a no-match tick
    /// is equally silent. Publishing mutates nothing, so an unchanged
    /// state re-publishes the identical solution next tick.
    async fn on_tick(&self) {
        let Some(solution) = self.service.evaluate() else {
            return;
        };

        let receivers = self
            .bus
            .publish(MatcherEvent::Solution(solution.to_message()))
            .await;

        debug!(
            "EVENT_FLOW_JSON {}",
            serde_json::json!({
                "channel": Topic::Solution.channel(),
                "indices": [solution.first, solution.second],
                "receivers": receivers,
            })
        );
    }
}
