// SPDX-License-Identifier: MPL-2.0
//! Interactive gallery for the toast widgets.
//!
//! Spawns one toast per kind, runs a simulated download that drives a
//! progress handle, and logs the lifecycle events the store reports.
//!
//! ```text
//! cargo run --example gallery -- --anchor top-right
//! cargo run --example gallery -- --settings ./toasts.toml
//! ```

use iced::widget::{button, container, text, Column, Row, Stack};
use iced::{time, window, Element, Length, Size, Subscription, Task, Theme};
use iced_toasts::config::{self, Anchor, Settings};
use iced_toasts::{Event, Notification, ProgressHandle, ProgressUpdate, Store, Toast};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Ticks a simulated download takes to finish (one tick every 100 ms).
const DOWNLOAD_STEPS: u64 = 20;

fn main() -> iced::Result {
    tracing_subscriber::fmt().init();

    let mut args = pico_args::Arguments::from_env();
    let settings_path: Option<PathBuf> = args.opt_value_from_str("--settings").unwrap();
    let anchor_flag: Option<String> = args.opt_value_from_str("--anchor").unwrap();

    let mut settings = settings_path
        .as_deref()
        .map(|path| config::load_from_path(path).unwrap_or_default())
        .unwrap_or_default();
    if let Some(anchor) = anchor_flag.as_deref() {
        settings.anchor = Some(parse_anchor(anchor));
    }

    let boot = move || Gallery::new(settings.clone());

    iced::application(boot, Gallery::update, Gallery::view)
        .title("iced_toasts gallery")
        .theme(Gallery::theme)
        .window(window::Settings {
            size: Size::new(640.0, 480.0),
            ..window::Settings::default()
        })
        .subscription(Gallery::subscription)
        .run()
}

fn parse_anchor(raw: &str) -> Anchor {
    match raw {
        "top-left" => Anchor::TopLeft,
        "top-right" => Anchor::TopRight,
        "bottom-left" => Anchor::BottomLeft,
        "bottom-right" => Anchor::BottomRight,
        other => {
            warn!(anchor = other, "unknown anchor, using bottom-right");
            Anchor::BottomRight
        }
    }
}

#[derive(Debug, Clone)]
enum Message {
    Toasts(iced_toasts::Message),
    Tick(Instant),
    ShowInfo,
    ShowWarning,
    ShowError,
    StartDownload,
}

struct DownloadState {
    handle: ProgressHandle,
    done: u64,
}

struct Gallery {
    toasts: Store,
    next_id: u64,
    download: Option<DownloadState>,
}

impl Gallery {
    fn new(settings: Settings) -> (Self, Task<Message>) {
        (
            Self {
                toasts: Store::with_settings(settings),
                next_id: 0,
                download: None,
            },
            Task::none(),
        )
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.toasts.has_notifications() {
            time::every(Duration::from_millis(100)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toasts(message) => {
                let events = self.toasts.handle_message(message);
                self.react(events);
            }
            Message::Tick(instant) => {
                let events = self.toasts.tick_at(instant);
                self.react(events);
                self.advance_download();
            }
            Message::ShowInfo => {
                let id = self.fresh_id();
                self.toasts.show(
                    Notification::info(id, "Image saved successfully")
                        .with_timeout(Duration::from_secs(3)),
                );
            }
            Message::ShowWarning => {
                let id = self.fresh_id();
                self.toasts.show(
                    Notification::warning(id, "Metadata was stripped on export")
                        .with_action("Undo")
                        .with_timeout(Duration::from_secs(5)),
                );
            }
            Message::ShowError => {
                let id = self.fresh_id();
                self.toasts.show(
                    Notification::error(id, "Could not write settings file")
                        .with_action("Retry")
                        .with_action("Ignore"),
                );
            }
            Message::StartDownload => self.start_download(),
        }
        Task::none()
    }

    fn react(&mut self, events: Vec<Event>) {
        for event in events {
            match event {
                Event::Dismissed(id) => info!(%id, "toast dismissed"),
                Event::TimedOut(id) => info!(%id, "toast timed out"),
                Event::Activated { id, action } => {
                    info!(%id, action, "toast action pressed");
                    let cancelled = self
                        .download
                        .as_ref()
                        .is_some_and(|download| download.handle.id() == &id);
                    if cancelled {
                        self.download = None;
                    }
                }
            }
        }
    }

    fn fresh_id(&mut self) -> String {
        self.next_id += 1;
        format!("demo-{}", self.next_id)
    }

    fn start_download(&mut self) {
        if self.download.is_some() {
            return;
        }
        let id = self.fresh_id();
        let handle = self
            .toasts
            .create(Notification::progress(id, "Downloading assets").with_action("Cancel"));
        handle.update(ProgressUpdate::new().with_message("connecting"));
        handle.show();
        self.download = Some(DownloadState { handle, done: 0 });
    }

    fn advance_download(&mut self) {
        let Some(download) = &mut self.download else {
            return;
        };
        download.done += 1;
        if download.done >= DOWNLOAD_STEPS {
            download.handle.close();
            self.download = None;
            let id = self.fresh_id();
            self.toasts.show(
                Notification::info(id, "Download complete")
                    .with_timeout(Duration::from_secs(3)),
            );
        } else {
            download.handle.update(
                ProgressUpdate::new()
                    .with_message(format!("{} of {} chunks", download.done, DOWNLOAD_STEPS))
                    .with_work(download.done, DOWNLOAD_STEPS),
            );
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Row::new()
            .spacing(8)
            .push(button(text("Info")).on_press(Message::ShowInfo))
            .push(button(text("Warning")).on_press(Message::ShowWarning))
            .push(button(text("Error")).on_press(Message::ShowError))
            .push(button(text("Download")).on_press(Message::StartDownload));

        let status = text(format!(
            "visible: {}  pending: {}",
            self.toasts.visible_count(),
            self.toasts.pending_count()
        ))
        .size(14);

        let base = container(
            Column::new()
                .spacing(16)
                .push(text("iced_toasts gallery").size(20))
                .push(controls)
                .push(status),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(24);

        Stack::new()
            .push(base)
            .push(Toast::view_overlay(&self.toasts).map(Message::Toasts))
            .into()
    }
}
