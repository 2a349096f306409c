// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Store` owns every live notification, keyed by caller-supplied id.
//! It handles showing, progress bookkeeping, timeout expiry, and dismissal,
//! and broadcasts the id of each notification as it becomes visible.
//!
//! Timeouts are cooperative: the host runs a periodic tick (see
//! [`Message::Tick`]) and expiry is measured from each entry's most recent
//! show instant, so a notification that is shown again has its timer
//! re-armed rather than carrying the deadline of an earlier show.

use crate::events::ShowEvents;
use crate::handle::ProgressHandle;
use crate::notification::{Kind, Notification, NotificationId, ProgressUpdate};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use tokio::sync::broadcast;
use tracing::{debug, trace};

/// Spinner advance per tick, in radians. One full revolution every two
/// seconds at the 100 ms tick cadence.
const ROTATION_SPEED: f32 = std::f32::consts::PI / 10.0;

/// Messages produced by the toast widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Dismiss a specific notification by id.
    Dismiss(NotificationId),
    /// An action button was pressed (notification id, action index).
    ActionPressed(NotificationId, usize),
    /// Tick for checking auto-dismiss timers and animating spinners.
    Tick,
}

/// Lifecycle events reported back to the host application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The user pressed the dismiss button.
    Dismissed(NotificationId),
    /// An auto-dismiss timeout elapsed.
    TimedOut(NotificationId),
    /// An action button was pressed; the notification has been removed.
    Activated {
        id: NotificationId,
        action: String,
    },
}

/// Immutable snapshot of one visible notification, consumed by the view.
#[derive(Debug, Clone)]
pub struct ToastModel {
    pub id: NotificationId,
    pub kind: Kind,
    pub text: String,
    pub percent: Option<u8>,
    pub actions: Vec<String>,
    pub spinner_rotation: f32,
}

/// One live notification. The entry is the authoritative record: handles
/// and views address it by id, and removing it ends every pending effect
/// (timeout included).
#[derive(Debug)]
struct Entry {
    notification: Notification,
    /// Detail message appended to the text, rewritten on every update.
    message: Option<String>,
    /// Last computed completion percentage.
    percent: Option<u8>,
    /// Most recent show instant. `None` while the entry is pending.
    shown_at: Option<Instant>,
}

impl Entry {
    fn pending(notification: Notification) -> Self {
        Self {
            notification,
            message: None,
            percent: None,
            shown_at: None,
        }
    }

    fn is_visible(&self) -> bool {
        self.shown_at.is_some()
    }

    fn is_expired_at(&self, now: Instant) -> bool {
        match (self.shown_at, self.notification.timeout()) {
            (Some(shown), Some(timeout)) => now.duration_since(shown) >= timeout,
            _ => false,
        }
    }

    fn display_text(&self) -> String {
        match &self.message {
            Some(message) => format!("{}: {}", self.notification.text(), message),
            None => self.notification.text().to_string(),
        }
    }
}

/// Mutable store state, shared with the progress handles it issues.
#[derive(Debug)]
pub(crate) struct Inner {
    entries: Vec<Entry>,
    shown: ShowEvents,
    spinner_rotation: f32,
}

impl Inner {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            shown: ShowEvents::new(),
            spinner_rotation: 0.0,
        }
    }

    fn position(&self, id: &NotificationId) -> Option<usize> {
        self.entries.iter().position(|e| e.notification.id() == id)
    }

    fn show(&mut self, notification: Notification) {
        let id = notification.id().clone();
        let mut entry = Entry::pending(notification);
        entry.shown_at = Some(Instant::now());

        match self.position(&id) {
            // Same id replaces the content and re-arms the timeout. Only an
            // already-visible entry keeps its position.
            Some(index) if self.entries[index].is_visible() => {
                self.entries[index] = entry;
                debug!(label = %id.text_label(), "replaced notification content");
            }
            // A pending entry joins the end of the visible order, like any
            // new notification.
            Some(index) => {
                self.entries.remove(index);
                self.entries.push(entry);
                debug!(label = %id.container_label(), "showing notification");
            }
            None => {
                self.entries.push(entry);
                debug!(label = %id.container_label(), "showing notification");
            }
        }
        self.shown.emit(&id);
    }

    fn create(&mut self, notification: Notification) {
        let id = notification.id().clone();
        match self.position(&id) {
            Some(index) => {
                // Recreating an id resets it to a fresh pending entry.
                self.entries[index] = Entry::pending(notification);
                debug!(label = %id.container_label(), "recreated pending notification");
            }
            None => {
                self.entries.push(Entry::pending(notification));
                debug!(label = %id.container_label(), "created pending notification");
            }
        }
    }

    /// Makes a pending entry visible: arms its timeout, moves it to the
    /// end of the visible order, and broadcasts the id. Returns `false`
    /// without side effects when the entry is already visible or gone.
    pub(crate) fn show_pending(&mut self, id: &NotificationId) -> bool {
        let Some(index) = self.position(id) else {
            debug!(label = %id.container_label(), "show requested for missing notification");
            return false;
        };
        if self.entries[index].is_visible() {
            return false;
        }
        let mut entry = self.entries.remove(index);
        entry.shown_at = Some(Instant::now());
        self.entries.push(entry);
        debug!(label = %id.container_label(), "showing notification");
        self.shown.emit(id);
        true
    }

    pub(crate) fn close(&mut self, id: &NotificationId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                debug!(label = %id.container_label(), "closed notification");
                true
            }
            None => {
                debug!(label = %id.container_label(), "close requested for missing notification");
                false
            }
        }
    }

    pub(crate) fn apply_update(&mut self, id: &NotificationId, update: ProgressUpdate) {
        let Some(index) = self.position(id) else {
            debug!(label = %id.progress_label(), "update for missing notification ignored");
            return;
        };
        let entry = &mut self.entries[index];
        entry.message = update.message;
        if let Some(work) = update.work {
            // A zero total carries no ratio; the previous percentage stands.
            if let Some(percent) = work.percent() {
                entry.percent = Some(percent);
                trace!(label = %id.progress_label(), percent, "progress updated");
            }
        }
    }

    pub(crate) fn is_visible(&self, id: &NotificationId) -> bool {
        self.position(id)
            .is_some_and(|index| self.entries[index].is_visible())
    }

    fn expire_at(&mut self, now: Instant) -> Vec<Event> {
        let mut events = Vec::new();
        self.entries.retain(|entry| {
            if entry.is_expired_at(now) {
                debug!(
                    label = %entry.notification.id().container_label(),
                    "notification timed out"
                );
                events.push(Event::TimedOut(entry.notification.id().clone()));
                false
            } else {
                true
            }
        });
        events
    }

    fn advance_spinner(&mut self) {
        self.spinner_rotation =
            (self.spinner_rotation + ROTATION_SPEED) % (2.0 * std::f32::consts::PI);
    }
}

/// Owns the notification set and the shown-notification broadcast.
#[derive(Debug)]
pub struct Store {
    inner: Arc<Mutex<Inner>>,
    settings: crate::config::Settings,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates an empty store with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(crate::config::Settings::default())
    }

    /// Creates an empty store with the given presentation settings.
    #[must_use]
    pub fn with_settings(settings: crate::config::Settings) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::new())),
            settings,
        }
    }

    /// Returns the presentation settings the overlay renders with.
    #[must_use]
    pub fn settings(&self) -> &crate::config::Settings {
        &self.settings
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Entries are plain data; a poisoned lock still holds a usable table.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Shows a notification immediately and broadcasts its id.
    ///
    /// Showing an id that is already live replaces that notification's
    /// content and re-arms its timeout; a visible entry keeps its spot in
    /// the overlay, a pending one appears at the end.
    pub fn show(&mut self, notification: Notification) {
        self.lock().show(notification);
    }

    /// Registers a notification without showing it and returns a handle
    /// for driving it. Nothing is rendered and no broadcast fires until
    /// the handle's [`ProgressHandle::show`].
    pub fn create(&mut self, notification: Notification) -> ProgressHandle {
        let id = notification.id().clone();
        self.lock().create(notification);
        ProgressHandle::new(Arc::clone(&self.inner), id)
    }

    /// Removes a notification. Returns `true` if it was present.
    pub fn close(&mut self, id: &NotificationId) -> bool {
        self.lock().close(id)
    }

    /// Processes expiry against the real clock and advances the spinner.
    ///
    /// Should be called periodically (e.g., every 100ms) while
    /// [`Store::has_notifications`] is `true`.
    pub fn tick(&mut self) -> Vec<Event> {
        self.tick_at(Instant::now())
    }

    /// Deterministic variant of [`Store::tick`] for hosts and tests that
    /// drive their own clock.
    pub fn tick_at(&mut self, now: Instant) -> Vec<Event> {
        let mut inner = self.lock();
        inner.advance_spinner();
        inner.expire_at(now)
    }

    /// Handles a message produced by the toast widgets.
    pub fn handle_message(&mut self, message: Message) -> Vec<Event> {
        match message {
            Message::Dismiss(id) => {
                if self.lock().close(&id) {
                    vec![Event::Dismissed(id)]
                } else {
                    Vec::new()
                }
            }
            Message::ActionPressed(id, action_index) => {
                let mut inner = self.lock();
                let Some(position) = inner.position(&id) else {
                    return Vec::new();
                };
                let Some(action) = inner.entries[position]
                    .notification
                    .actions()
                    .get(action_index)
                    .map(|action| action.label().to_string())
                else {
                    return Vec::new();
                };
                // Removing the entry also cancels its pending timeout.
                inner.entries.remove(position);
                debug!(label = %id.container_label(), action, "notification action pressed");
                vec![Event::Activated { id, action }]
            }
            Message::Tick => self.tick(),
        }
    }

    /// Subscribes to the shown-notification broadcast.
    ///
    /// Returns `None` once the store has been disposed.
    pub fn on_show(&self) -> Option<broadcast::Receiver<NotificationId>> {
        self.lock().shown.subscribe()
    }

    /// Releases the shown-notification broadcast, closing every receiver.
    ///
    /// Live notifications stay on screen and remain operable; only the
    /// broadcast ends. Idempotent.
    pub fn dispose(&mut self) {
        let mut inner = self.lock();
        if inner.shown.is_disposed() {
            return;
        }
        inner.shown.dispose();
        debug!("notification store disposed");
    }

    /// Returns snapshots of the visible notifications in display order.
    #[must_use]
    pub fn visible(&self) -> Vec<ToastModel> {
        let inner = self.lock();
        inner
            .entries
            .iter()
            .filter(|entry| entry.is_visible())
            .map(|entry| ToastModel {
                id: entry.notification.id().clone(),
                kind: entry.notification.kind(),
                text: entry.display_text(),
                percent: entry.percent,
                actions: entry
                    .notification
                    .actions()
                    .iter()
                    .map(|action| action.label().to_string())
                    .collect(),
                spinner_rotation: inner.spinner_rotation,
            })
            .collect()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.lock()
            .entries
            .iter()
            .filter(|entry| entry.is_visible())
            .count()
    }

    /// Returns the number of created-but-not-shown notifications.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.lock()
            .entries
            .iter()
            .filter(|entry| !entry.is_visible())
            .count()
    }

    /// Returns whether any notifications exist, pending included.
    ///
    /// Gates the host's tick subscription.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.lock().entries.is_empty()
    }

    /// Removes all notifications, pending included.
    pub fn clear(&mut self) {
        self.lock().entries.clear();
    }
}
