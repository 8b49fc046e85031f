//! The broadcast-backed bus and its subscription handles.

use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{ready, Context, Poll};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::Stream;
use tracing::{debug, warn};

use crate::events::{MatcherEvent, TopicSet};
use crate::DEFAULT_CHANNEL_CAPACITY;

/// The publishing seam between the matcher and its collaborators.
///
/// Anything that can put an event on a channel implements this; the
/// matcher only ever holds the trait, so a transport-backed bus could
/// replace the in-memory one without touching the matcher.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Put an event on its channel. Returns how many subscribers it
    /// reached; zero means the event was dropped, which is legal here.
    async fn publish(&self, event: MatcherEvent) -> usize;

    /// How many publishes have been attempted, delivered or not.
    fn events_published(&self) -> u64;
}

/// The in-process bus.
///
/// One `tokio::sync::broadcast` channel carries all three topics; every
/// subscriber gets every event and discards off-topic ones locally via
/// its [`TopicSet`]. Delivery is best-effort: a subscriber that falls
/// more than `capacity` events behind loses the oldest ones.
pub struct MatcherBus {
    sender: broadcast::Sender<MatcherEvent>,
    published: AtomicU64,
    capacity: usize,
}

impl MatcherBus {
    /// A bus with the default per-subscriber buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// A bus buffering up to `capacity` events per subscriber.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Open a subscription for the given topics.
    #[must_use]
    pub fn subscribe(&self, topics: TopicSet) -> Subscription {
        Subscription {
            rx: self.sender.subscribe(),
            topics,
        }
    }

    /// Open a subscription exposed as a `Stream`, for consumers that
    /// prefer combinators over a receive loop.
    #[must_use]
    pub fn stream(&self, topics: TopicSet) -> EventStream {
        EventStream {
            inner: BroadcastStream::new(self.sender.subscribe()),
            topics,
        }
    }

    /// Number of currently open subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// The per-subscriber buffer capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MatcherBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for MatcherBus {
    async fn publish(&self, event: MatcherEvent) -> usize {
        let channel = event.topic().channel();
        self.published.fetch_add(1, Ordering::Relaxed);

        // send() fails only when every receiver handle is gone; the
        // event is then simply lost, which best-effort delivery allows.
        match self.sender.send(event) {
            Ok(receivers) => {
                debug!(channel, receivers, "Event published");
                receivers
            }
            Err(_) => {
                warn!(channel, "Event dropped, nobody is subscribed");
                0
            }
        }
    }

    fn events_published(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }
}

/// Why a non-blocking receive could not produce an event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The bus has been dropped; nothing will ever arrive again.
    #[error("event bus closed")]
    Closed,
}

/// Receiving end of a subscription.
pub struct Subscription {
    rx: broadcast::Receiver<MatcherEvent>,
    topics: TopicSet,
}

impl Subscription {
    /// Wait for the next event on a subscribed topic.
    ///
    /// Returns `None` once the bus has been dropped. Falling behind the
    /// buffer capacity is not fatal: the oldest events are lost and
    /// receiving resumes from the gap.
    pub async fn recv(&mut self) -> Option<MatcherEvent> {
        use broadcast::error::RecvError;

        loop {
            match self.rx.recv().await {
                Ok(event) if self.topics.accepts(&event) => return Some(event),
                Ok(_) => {}
                Err(RecvError::Lagged(missed)) => {
                    debug!(missed, "Subscription fell behind, resuming past the gap");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Take an already-delivered event, if any, without waiting.
    ///
    /// `Ok(None)` means the buffer holds nothing on a subscribed topic
    /// right now; [`SubscriptionError::Closed`] means it never will.
    pub fn try_recv(&mut self) -> Result<Option<MatcherEvent>, SubscriptionError> {
        use broadcast::error::TryRecvError;

        loop {
            match self.rx.try_recv() {
                Ok(event) if self.topics.accepts(&event) => return Ok(Some(event)),
                Ok(_) | Err(TryRecvError::Lagged(_)) => {}
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Closed) => return Err(SubscriptionError::Closed),
            }
        }
    }

    /// The topics this subscription delivers.
    #[must_use]
    pub fn topics(&self) -> TopicSet {
        self.topics
    }
}

/// `Stream` adapter over a subscription.
///
/// Built on [`BroadcastStream`], which registers the task's waker while
/// pending; off-topic events and lag gaps are skipped transparently.
pub struct EventStream {
    inner: BroadcastStream<MatcherEvent>,
    topics: TopicSet,
}

impl EventStream {
    /// The topics this stream yields.
    #[must_use]
    pub fn topics(&self) -> TopicSet {
        self.topics
    }
}

impl Stream for EventStream {
    type Item = MatcherEvent;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            match ready!(Pin::new(&mut this.inner).poll_next(cx)) {
                Some(Ok(event)) if this.topics.accepts(&event) => {
                    return Poll::Ready(Some(event))
                }
                // Off-topic event or a lag gap; keep draining.
                Some(_) => {}
                None => return Poll::Ready(None),
            }
        }
    }
}
