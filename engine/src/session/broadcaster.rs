use std::future::Future;

use tokio::sync::mpsc;

use crate::game::SessionSnapshot;

/// Receives every snapshot the session produces, including deferred AI moves.
pub trait SnapshotBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_snapshot(&self, snapshot: SessionSnapshot) -> impl Future<Output = ()> + Send;
}

#[derive(Clone)]
pub struct ChannelBroadcaster {
    sender: mpsc::UnboundedSender<SessionSnapshot>,
}

impl ChannelBroadcaster {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SessionSnapshot>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl SnapshotBroadcaster for ChannelBroadcaster {
    async fn broadcast_snapshot(&self, snapshot: SessionSnapshot) {
        // A dropped receiver just means nobody is rendering any more.
        let _ = self.sender.send(snapshot);
    }
}
