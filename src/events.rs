// SPDX-License-Identifier: MPL-2.0
//! Shown-notification broadcast.
//!
//! The store owns a broadcast channel announcing each notification id as
//! it becomes visible. Other application components subscribe through
//! [`crate::store::Store::on_show`] and receive every id shown while the
//! channel is alive. Disposing the store drops the sender, which closes
//! all outstanding receivers.

use crate::notification::NotificationId;
use tokio::sync::broadcast;

/// Buffered ids per receiver. Slow receivers skip the oldest ids.
const CHANNEL_CAPACITY: usize = 64;

/// Broadcast channel carrying the ids of newly shown notifications.
#[derive(Debug)]
pub(crate) struct ShowEvents {
    sender: Option<broadcast::Sender<NotificationId>>,
}

impl ShowEvents {
    pub(crate) fn new() -> Self {
        let (sender, _receiver) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            sender: Some(sender),
        }
    }

    /// Returns a receiver for subsequent shows, or `None` once disposed.
    pub(crate) fn subscribe(&self) -> Option<broadcast::Receiver<NotificationId>> {
        self.sender.as_ref().map(broadcast::Sender::subscribe)
    }

    /// Announces a shown id. Silently dropped when nobody listens or the
    /// channel was disposed.
    pub(crate) fn emit(&self, id: &NotificationId) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(id.clone());
        }
    }

    /// Drops the sender, closing every receiver.
    pub(crate) fn dispose(&mut self) {
        self.sender = None;
    }

    pub(crate) fn is_disposed(&self) -> bool {
        self.sender.is_none()
    }
}

impl Default for ShowEvents {
    fn default() -> Self {
        Self::new()
    }
}
