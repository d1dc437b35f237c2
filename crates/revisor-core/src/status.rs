//! Request status shared with whoever displays progress

use tokio::sync::watch;

/// Status of the most recent analysis request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestStatus {
    pub loading: bool,
    pub last_error: Option<String>,
}

impl RequestStatus {
    pub fn has_error(&self) -> bool {
        self.last_error.is_some()
    }
}

/// Publishes [`RequestStatus`] updates to any number of subscribers.
///
/// Concurrent requests share one status; whichever finishes last wins.
#[derive(Debug)]
pub struct StatusBroadcaster {
    tx: watch::Sender<RequestStatus>,
}

impl StatusBroadcaster {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(RequestStatus::default());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestStatus> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> RequestStatus {
        self.tx.borrow().clone()
    }

    /// Mark a request as started, clearing the previous error
    pub fn begin(&self) {
        self.tx.send_replace(RequestStatus {
            loading: true,
            last_error: None,
        });
    }

    /// Mark a request as completed; replaces whatever another request left
    pub fn finish(&self) {
        self.tx.send_replace(RequestStatus::default());
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.tx.send_replace(RequestStatus {
            loading: false,
            last_error: Some(message.into()),
        });
    }
}

impl Default for StatusBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
