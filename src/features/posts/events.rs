use tokio::sync::broadcast;

/// Notifications published by the form when shared data changes.
/// Listing views subscribe and refresh instead of reloading the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostEvent {
    /// A new post was accepted by the server
    Created,
}

/// Broadcast bus for [`PostEvent`]s
#[derive(Debug, Clone)]
pub struct PostEvents {
    tx: broadcast::Sender<PostEvent>,
}

impl PostEvents {
    const CHANNEL_CAPACITY: usize = 16;

    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(Self::CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PostEvent> {
        self.tx.subscribe()
    }

    /// Publish an event. Dropped silently when nobody is listening.
    pub fn publish(&self, event: PostEvent) {
        if let Err(e) = self.tx.send(event) {
            tracing::debug!("No subscribers for post event: {:?}", e.0);
        }
    }
}

impl Default for PostEvents {
    fn default() -> Self {
        Self::new()
    }
}
