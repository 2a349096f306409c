// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner rendered as the glyph of progress toasts.
//!
//! The widget itself is stateless; the store advances the rotation angle
//! on every tick and the view rebuilds the spinner with the current angle.

use crate::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Stroke width of the track ring and the rotating arc.
const STROKE_WIDTH: f32 = 3.0;

/// Spinner drawing a faded track ring and a rotating half-turn arc.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner with the given color and rotation angle, sized
    /// for a toast glyph.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_MD,
        }
    }

    /// Wraps the spinner in a fixed-size Canvas element.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;
                let stroke = Stroke::default().with_width(STROKE_WIDTH);

                // Faded track ring behind the arc
                frame.stroke(
                    &Path::circle(center, radius),
                    stroke.with_color(Color {
                        a: opacity::TRACK,
                        ..self.color
                    }),
                );

                // Half-turn sweep, offset so a zero rotation starts at the
                // top of the ring
                let start = self.rotation - PI / 2.0;
                let mut sweep = canvas::path::Builder::new();
                sweep.arc(canvas::path::Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(start + PI),
                });

                frame.stroke(
                    &sweep.build(),
                    stroke
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
