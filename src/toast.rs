// SPDX-License-Identifier: MPL-2.0
//! Toast cards and the corner overlay that stacks them.
//!
//! Each notification renders as a small card with a kind-colored accent,
//! optional action buttons, and a dismiss button. Progress toasts
//! additionally carry an animated spinner and a completion bar.

use crate::config::Anchor;
use crate::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::notification::Kind;
use crate::spinner::AnimatedSpinner;
use crate::store::{Message, Store, ToastModel};
use iced::widget::{button, container, progress_bar, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast view builder.
pub struct Toast;

impl Toast {
    /// Renders one notification as a toast card.
    pub fn view(model: ToastModel, width: f32) -> Element<'static, Message> {
        let accent = model.kind.color();
        let ToastModel {
            id,
            kind,
            text: display_text,
            percent,
            actions,
            spinner_rotation,
        } = model;

        // Kind glyph; progress toasts get the animated spinner
        let glyph_widget: Element<'static, Message> = if kind == Kind::Progress {
            AnimatedSpinner::new(accent, spinner_rotation).into_element()
        } else {
            Text::new(kind.glyph())
                .size(sizing::ICON_SM)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent),
                })
                .into()
        };

        let message_widget =
            Text::new(display_text)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                });

        // Dismiss button, always visible
        let dismiss_button = button(Text::new("\u{2715}").size(typography::CAPTION))
            .on_press(Message::Dismiss(id.clone()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Header: [glyph] [message] [dismiss]
        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let mut content = Column::new().spacing(spacing::XXS).push(header);

        // Completion bar with a percent caption, once a ratio is known
        if let Some(percent) = percent {
            content = content.push(progress_bar(0.0..=100.0, f32::from(percent)));
            content = content.push(
                Text::new(format!("{percent}%"))
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(Color {
                            a: opacity::OVERLAY_MEDIUM,
                            ..theme.palette().text
                        }),
                    }),
            );
        }

        // Action buttons in insertion order
        if !actions.is_empty() {
            let mut action_row = Row::new().spacing(spacing::XS);
            for (index, label) in actions.into_iter().enumerate() {
                action_row = action_row.push(
                    button(Text::new(label).size(typography::CAPTION))
                        .on_press(Message::ActionPressed(id.clone(), index))
                        .padding(spacing::XXS)
                        .style(action_button_style),
                );
            }
            content = content.push(action_row);
        }

        // Fixed-width card with the kind accent as border
        Container::new(content)
            .width(Length::Fixed(width))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent))
            .into()
    }

    /// Renders the stacked overlay of every visible toast.
    ///
    /// Positions toasts in the configured corner, stacked vertically.
    pub fn view_overlay(store: &Store) -> Element<'static, Message> {
        let settings = store.settings();
        let width = settings.width.unwrap_or(sizing::TOAST_WIDTH);
        let stack_spacing = settings.spacing.unwrap_or(spacing::XS);
        let anchor = settings.anchor.unwrap_or_default();

        let toasts: Vec<Element<'static, Message>> = store
            .visible()
            .into_iter()
            .map(|model| Self::view(model, width))
            .collect();

        if toasts.is_empty() {
            // Zero-size placeholder so the overlay never blocks the base view
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let (align_x, align_y) = anchor_alignments(anchor);
            let toast_column = Column::with_children(toasts)
                .spacing(stack_spacing)
                .align_x(align_x);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(align_x)
                .align_y(align_y)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Maps an anchor corner to container alignments.
fn anchor_alignments(anchor: Anchor) -> (alignment::Horizontal, alignment::Vertical) {
    match anchor {
        Anchor::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
        Anchor::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
        Anchor::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
        Anchor::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
    }
}

/// Card style shared by every toast: theme background, accent border.
fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        text_color: Some(theme.palette().text),
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Style function for the dismiss button. Flat at rest, with a gray wash
/// on hover and press.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base_text = theme.extended_palette().background.base.text;
    let text_color = match status {
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..base_text
        },
        _ => base_text,
    };

    let wash = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        _ => None,
    };

    button::Style {
        background: wash.map(|alpha| {
            iced::Background::Color(Color {
                a: alpha,
                ..palette::GRAY_400
            })
        }),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for action buttons. Outlined in the theme accent with a
/// translucent fill on hover and press.
fn action_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let accent = theme.extended_palette().primary.base.color;
    // Disabled actions keep the outline but fade it along with the label.
    let accent = match status {
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..accent
        },
        _ => accent,
    };

    let fill = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        _ => None,
    };

    button::Style {
        background: fill.map(|alpha| iced::Background::Color(Color { a: alpha, ..accent })),
        text_color: accent,
        border: iced::Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{Notification, NotificationId};

    fn sample_model(kind: Kind) -> ToastModel {
        ToastModel {
            id: NotificationId::new("sample"),
            kind,
            text: "sample text".to_string(),
            percent: None,
            actions: Vec::new(),
            spinner_rotation: 0.0,
        }
    }

    #[test]
    fn container_border_follows_the_kind_accent() {
        let theme = Theme::Dark;

        let style = toast_container_style(&theme, palette::ERROR_500);

        assert_eq!(style.border.color, palette::ERROR_500);
        assert!(style.background.is_some());
        assert!(style.text_color.is_some());
    }

    #[test]
    fn dismiss_button_is_flat_until_hovered() {
        let theme = Theme::Dark;

        let active = dismiss_button_style(&theme, button::Status::Active);
        assert!(active.background.is_none());

        let hovered = dismiss_button_style(&theme, button::Status::Hovered);
        assert!(hovered.background.is_some());
    }

    #[test]
    fn action_button_is_outlined_in_the_accent() {
        let theme = Theme::Dark;
        let accent = theme.extended_palette().primary.base.color;

        let active = action_button_style(&theme, button::Status::Active);
        assert_eq!(active.border.color, accent);
        assert_eq!(active.text_color, accent);
    }

    #[test]
    fn anchor_alignments_cover_all_corners() {
        assert_eq!(
            anchor_alignments(Anchor::TopLeft),
            (alignment::Horizontal::Left, alignment::Vertical::Top)
        );
        assert_eq!(
            anchor_alignments(Anchor::TopRight),
            (alignment::Horizontal::Right, alignment::Vertical::Top)
        );
        assert_eq!(
            anchor_alignments(Anchor::BottomLeft),
            (alignment::Horizontal::Left, alignment::Vertical::Bottom)
        );
        assert_eq!(
            anchor_alignments(Anchor::BottomRight),
            (alignment::Horizontal::Right, alignment::Vertical::Bottom)
        );
    }

    #[test]
    fn view_builds_for_every_kind() {
        for kind in [Kind::Info, Kind::Warning, Kind::Error, Kind::Progress] {
            let _ = Toast::view(sample_model(kind), sizing::TOAST_WIDTH);
        }
    }

    #[test]
    fn view_builds_with_progress_and_actions() {
        let model = ToastModel {
            id: NotificationId::new("rich"),
            kind: Kind::Progress,
            text: "Download: almost done".to_string(),
            percent: Some(75),
            actions: vec!["Cancel".to_string()],
            spinner_rotation: 1.0,
        };
        let _ = Toast::view(model, sizing::TOAST_WIDTH);
    }

    #[test]
    fn view_overlay_builds_with_and_without_toasts() {
        let mut store = Store::new();
        let _ = Toast::view_overlay(&store);

        store.show(Notification::info("a", "one").with_action("Ok"));
        store.show(Notification::progress("b", "two"));
        let _ = Toast::view_overlay(&store);
    }
}
