// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum used
//! throughout the toast system, plus the progress-reporting value types
//! consumed by [`crate::handle::ProgressHandle`].

use crate::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::Duration;

/// Caller-supplied identifier for a notification.
///
/// Ids are opaque strings chosen by the application. Showing a second
/// notification with an id that is already on screen replaces the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationId(String);

impl NotificationId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Stable label for correlating a notification's lifecycle in logs.
    #[must_use]
    pub fn container_label(&self) -> String {
        format!("notification-container-{}", self.0)
    }

    /// Stable label for correlating text changes in logs.
    #[must_use]
    pub fn text_label(&self) -> String {
        format!("notification-text-{}", self.0)
    }

    /// Stable label for correlating progress changes in logs.
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("notification-progress-{}", self.0)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NotificationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Kind determines the toast glyph and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Informational message (blue).
    #[default]
    Info,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red).
    Error,
    /// Long-running operation with live updates (blue, spinner glyph).
    Progress,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
            Kind::Progress => palette::PRIMARY_500,
        }
    }

    /// Returns the text glyph for this kind.
    ///
    /// Progress toasts render an animated spinner instead; anything the
    /// view does not special-case falls back to the info glyph.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Kind::Error => "\u{2715}",   // ✕
            Kind::Warning => "\u{25B2}", // ▲
            _ => "\u{2139}",             // ℹ
        }
    }
}

/// An action button attached to a notification.
///
/// Pressing the button removes the notification and reports
/// [`crate::store::Event::Activated`] with this action's label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    label: String,
}

impl Action {
    /// Creates an action with the given button label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the button label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Units of completed work for a progress notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Work {
    pub done: u64,
    pub total: u64,
}

impl Work {
    /// Creates a work ratio.
    #[must_use]
    pub fn new(done: u64, total: u64) -> Self {
        Self { done, total }
    }

    /// Returns the completion percentage, truncated toward zero and
    /// clamped to 100. A zero total yields `None`.
    #[must_use]
    pub fn percent(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let percent = (u128::from(self.done) * 100) / u128::from(self.total);
        #[allow(clippy::cast_possible_truncation)] // min(100) fits in u8
        Some(percent.min(100) as u8)
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Caller-supplied identifier, unique among live notifications.
    id: NotificationId,
    /// Kind (determines glyph and accent color).
    kind: Kind,
    /// Primary message text.
    text: String,
    /// Action buttons, rendered in insertion order.
    actions: Vec<Action>,
    /// Auto-dismiss timeout, measured from the most recent show.
    timeout: Option<Duration>,
}

impl Notification {
    /// Creates a new notification with the given kind and text.
    pub fn new(id: impl Into<NotificationId>, kind: Kind, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            text: text.into(),
            actions: Vec::new(),
            timeout: None,
        }
    }

    /// Creates an info notification.
    pub fn info(id: impl Into<NotificationId>, text: impl Into<String>) -> Self {
        Self::new(id, Kind::Info, text)
    }

    /// Creates a warning notification.
    pub fn warning(id: impl Into<NotificationId>, text: impl Into<String>) -> Self {
        Self::new(id, Kind::Warning, text)
    }

    /// Creates an error notification.
    pub fn error(id: impl Into<NotificationId>, text: impl Into<String>) -> Self {
        Self::new(id, Kind::Error, text)
    }

    /// Creates a progress notification.
    pub fn progress(id: impl Into<NotificationId>, text: impl Into<String>) -> Self {
        Self::new(id, Kind::Progress, text)
    }

    /// Appends an action button.
    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>) -> Self {
        self.actions.push(Action::new(label));
        self
    }

    /// Sets the auto-dismiss timeout. A zero duration means no timer,
    /// same as never calling this.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = if timeout.is_zero() {
            None
        } else {
            Some(timeout)
        };
        self
    }

    /// Returns the notification's id.
    #[must_use]
    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the primary message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the action buttons in insertion order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Returns the auto-dismiss timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// A partial update applied to a progress notification.
///
/// Absent fields leave the corresponding display state untouched, except
/// that the detail message is rewritten on every update: an update without
/// a message restores the bare notification text.
#[derive(Debug, Clone, Default)]
pub struct ProgressUpdate {
    pub message: Option<String>,
    pub work: Option<Work>,
}

impl ProgressUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the detail message appended to the notification text.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the completed work ratio.
    #[must_use]
    pub fn with_work(mut self, done: u64, total: u64) -> Self {
        self.work = Some(Work::new(done, total));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_colors_are_distinct() {
        let info = Kind::Info.color();
        let warning = Kind::Warning.color();
        let error = Kind::Error.color();
        let progress = Kind::Progress.color();

        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
        assert_ne!(progress, error);
        assert_ne!(progress, warning);
    }

    #[test]
    fn default_kind_is_info() {
        assert_eq!(Kind::default(), Kind::Info);
    }

    #[test]
    fn error_and_warning_have_dedicated_glyphs() {
        assert_ne!(Kind::Error.glyph(), Kind::Info.glyph());
        assert_ne!(Kind::Warning.glyph(), Kind::Info.glyph());
        assert_ne!(Kind::Error.glyph(), Kind::Warning.glyph());
    }

    #[test]
    fn progress_glyph_falls_back_to_info() {
        assert_eq!(Kind::Progress.glyph(), Kind::Info.glyph());
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification = Notification::error("save-failed", "Could not save file")
            .with_action("Retry")
            .with_action("Ignore")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(notification.id().as_str(), "save-failed");
        assert_eq!(notification.kind(), Kind::Error);
        assert_eq!(notification.text(), "Could not save file");
        assert_eq!(notification.actions().len(), 2);
        assert_eq!(notification.actions()[0].label(), "Retry");
        assert_eq!(notification.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn notification_constructors_set_correct_kind() {
        assert_eq!(Notification::info("a", "").kind(), Kind::Info);
        assert_eq!(Notification::warning("b", "").kind(), Kind::Warning);
        assert_eq!(Notification::error("c", "").kind(), Kind::Error);
        assert_eq!(Notification::progress("d", "").kind(), Kind::Progress);
    }

    #[test]
    fn zero_timeout_is_normalized_to_none() {
        let notification = Notification::info("n", "t").with_timeout(Duration::ZERO);
        assert_eq!(notification.timeout(), None);
    }

    #[test]
    fn work_percent_truncates() {
        assert_eq!(Work::new(1, 4).percent(), Some(25));
        assert_eq!(Work::new(1, 3).percent(), Some(33));
        assert_eq!(Work::new(3, 3).percent(), Some(100));
    }

    #[test]
    fn work_percent_with_zero_total_is_none() {
        assert_eq!(Work::new(5, 0).percent(), None);
    }

    #[test]
    fn work_percent_clamps_overshoot() {
        assert_eq!(Work::new(7, 4).percent(), Some(100));
        assert_eq!(Work::new(u64::MAX, 1).percent(), Some(100));
    }

    #[test]
    fn id_labels_embed_the_raw_id() {
        let id = NotificationId::new("dl-42");
        assert_eq!(id.container_label(), "notification-container-dl-42");
        assert_eq!(id.text_label(), "notification-text-dl-42");
        assert_eq!(id.progress_label(), "notification-progress-dl-42");
    }
}
