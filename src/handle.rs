// SPDX-License-Identifier: MPL-2.0
//! Progress notification handles.
//!
//! A `ProgressHandle` is issued by [`crate::store::Store::create`] and
//! drives one notification through its lifecycle: pending (registered,
//! not visible), visible, and closed. Closed is terminal: once the entry
//! is gone, every method on the handle becomes a silent no-op and only a
//! fresh `create` can bring the id back.
//!
//! Handles share the store's state and are cheap to clone, so a
//! long-running task can report progress from wherever it executes.

use crate::notification::{NotificationId, ProgressUpdate};
use crate::store::Inner;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to one notification inside the store.
#[derive(Debug, Clone)]
pub struct ProgressHandle {
    inner: Arc<Mutex<Inner>>,
    id: NotificationId,
}

impl ProgressHandle {
    pub(crate) fn new(inner: Arc<Mutex<Inner>>, id: NotificationId) -> Self {
        Self { inner, id }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Entries are plain data; a poisoned lock still holds a usable table.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the id of the notification this handle drives.
    #[must_use]
    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    /// Makes the notification visible, arming its timeout and
    /// broadcasting its id.
    ///
    /// Idempotent: calling `show` while the notification is already
    /// visible changes nothing, and calling it after the notification is
    /// gone is a silent no-op.
    pub fn show(&self) {
        self.lock().show_pending(&self.id);
    }

    /// Applies a progress update.
    ///
    /// Works while the notification is pending or visible; updates sent
    /// before `show` are kept and appear once the toast is shown. The
    /// detail message is rewritten on every call, the percentage only
    /// when the update carries a usable work ratio.
    pub fn update(&self, update: ProgressUpdate) {
        self.lock().apply_update(&self.id, update);
    }

    /// Removes the notification. Idempotent.
    pub fn close(&self) {
        self.lock().close(&self.id);
    }

    /// Returns whether the notification is currently visible.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.lock().is_visible(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Notification;
    use crate::store::Store;
    use std::time::{Duration, Instant};
    use tokio::sync::broadcast::error::TryRecvError;

    fn progress_store() -> (Store, ProgressHandle) {
        let mut store = Store::new();
        let handle = store.create(Notification::progress("dl", "Download"));
        (store, handle)
    }

    #[test]
    fn show_makes_pending_entry_visible() {
        let (store, handle) = progress_store();
        let mut shown = store.on_show().expect("store should not be disposed");

        assert!(!handle.is_shown());
        handle.show();

        assert!(handle.is_shown());
        assert_eq!(store.visible_count(), 1);
        assert_eq!(shown.try_recv(), Ok(NotificationId::new("dl")));
    }

    #[test]
    fn show_twice_keeps_single_entry_and_broadcasts_once() {
        let (store, handle) = progress_store();
        let mut shown = store.on_show().expect("store should not be disposed");

        handle.show();
        handle.show();

        assert_eq!(store.visible_count(), 1);
        assert_eq!(shown.try_recv(), Ok(NotificationId::new("dl")));
        assert_eq!(shown.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn show_appends_after_existing_toasts() {
        let (mut store, handle) = progress_store();
        store.show(Notification::info("saved", "Image saved"));

        handle.show();

        let models = store.visible();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].id, NotificationId::new("saved"));
        assert_eq!(models[1].id, NotificationId::new("dl"));
    }

    #[test]
    fn show_after_close_is_a_no_op() {
        let (store, handle) = progress_store();
        let mut shown = store.on_show().expect("store should not be disposed");

        handle.close();
        handle.show();

        assert_eq!(store.visible_count(), 0);
        assert!(!handle.is_shown());
        assert_eq!(shown.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn show_after_timeout_removal_is_a_no_op() {
        let mut store = Store::new();
        let handle = store.create(
            Notification::progress("dl", "Download").with_timeout(Duration::from_secs(1)),
        );
        handle.show();

        store.tick_at(Instant::now() + Duration::from_secs(2));
        assert_eq!(store.visible_count(), 0);

        handle.show();
        assert_eq!(store.visible_count(), 0);
    }

    #[test]
    fn updates_before_show_are_kept() {
        let (store, handle) = progress_store();

        handle.update(
            ProgressUpdate::new()
                .with_message("fetching manifest")
                .with_work(1, 4),
        );
        assert!(store.visible().is_empty());

        handle.show();

        let models = store.visible();
        assert_eq!(models[0].text, "Download: fetching manifest");
        assert_eq!(models[0].percent, Some(25));
    }

    #[test]
    fn update_rewrites_the_detail_message() {
        let (store, handle) = progress_store();
        handle.show();

        handle.update(ProgressUpdate::new().with_message("resolving"));
        assert_eq!(store.visible()[0].text, "Download: resolving");

        handle.update(ProgressUpdate::new().with_work(2, 4));
        assert_eq!(store.visible()[0].text, "Download");
        assert_eq!(store.visible()[0].percent, Some(50));
    }

    #[test]
    fn update_with_zero_total_keeps_previous_percent() {
        let (store, handle) = progress_store();
        handle.show();

        handle.update(ProgressUpdate::new().with_work(1, 4));
        handle.update(ProgressUpdate::new().with_work(9, 0));

        assert_eq!(store.visible()[0].percent, Some(25));
    }

    #[test]
    fn update_reaches_full_completion() {
        let (store, handle) = progress_store();
        handle.show();

        handle.update(ProgressUpdate::new().with_work(3, 3));

        assert_eq!(store.visible()[0].percent, Some(100));
    }

    #[test]
    fn update_after_close_is_ignored() {
        let (store, handle) = progress_store();
        handle.show();
        handle.close();

        handle.update(ProgressUpdate::new().with_message("too late"));

        assert_eq!(store.visible_count(), 0);
    }

    #[test]
    fn close_is_idempotent() {
        let (store, handle) = progress_store();
        handle.show();

        handle.close();
        handle.close();

        assert_eq!(store.visible_count(), 0);
    }

    #[test]
    fn cloned_handles_drive_the_same_entry() {
        let (store, handle) = progress_store();
        let worker_handle = handle.clone();

        worker_handle.show();
        worker_handle.update(ProgressUpdate::new().with_work(1, 2));

        assert!(handle.is_shown());
        assert_eq!(store.visible()[0].percent, Some(50));

        handle.close();
        assert!(!worker_handle.is_shown());
    }
}
