// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` provides transient toast notifications for applications
//! built with the Iced GUI framework.
//!
//! Toasts appear in a configurable window corner without blocking
//! interaction: informational, warning, and error toasts with optional
//! action buttons and auto-dismiss timeouts, plus progress toasts that a
//! long-running task drives through a shared handle.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with kinds and actions
//! - [`store`] - `Store` owning live notifications and their timeouts
//! - [`handle`] - `ProgressHandle` for driving progress notifications
//! - [`toast`] - Toast widget component for rendering notifications
//! - [`config`] - Overlay presentation settings with TOML persistence
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::{Notification, Store, Toast};
//!
//! // Keep a store in your application state
//! let mut toasts = Store::new();
//!
//! // Show a notification
//! toasts.show(Notification::info("saved", "Image saved successfully"));
//!
//! // In your update function, forward widget messages
//! let events = toasts.handle_message(message);
//!
//! // In your view function, stack the overlay over your content
//! let overlay = Toast::view_overlay(&toasts).map(Message::Toasts);
//! ```
//!
//! The host runs a periodic tick subscription while
//! [`Store::has_notifications`] is `true` so timeouts expire and spinners
//! animate; see the `gallery` example for complete wiring.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod config;
pub mod design_tokens;
pub mod error;
mod events;
pub mod handle;
pub mod notification;
pub mod spinner;
pub mod store;
pub mod toast;

pub use handle::ProgressHandle;
pub use notification::{Action, Kind, Notification, NotificationId, ProgressUpdate, Work};
pub use store::{Event, Message, Store, ToastModel};
pub use toast::Toast;
