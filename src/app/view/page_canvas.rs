// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/page_canvas.rs
//
// Page canvas: draws the displayed page at its pan offset and turns
// pointer input into drag and wheel-zoom messages.

use cosmic::{
    Element, Renderer,
    iced::{
        Color, Length, Point, Radians, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            image::{FilterMethod, Renderer as ImageRenderer},
            layout::{Limits, Node},
            renderer::{Quad, Renderer as QuadRenderer},
            widget::Tree,
        },
        event::{Event, Status},
        mouse::{self, Button, Cursor, ScrollDelta},
    },
};

use crate::app::AppMessage;
use crate::app::model::DisplayPage;
use crate::domain::view::WheelDirection;

const BACKGROUND_COLOR: Color = Color::WHITE;

pub struct PageCanvas {
    page: DisplayPage,
    offset_x: f32,
    offset_y: f32,
    dragging: bool,
}

impl PageCanvas {
    pub fn new(page: &DisplayPage, offset_x: f32, offset_y: f32, dragging: bool) -> Self {
        Self {
            page: page.clone(),
            offset_x,
            offset_y,
            dragging,
        }
    }

    /// Where the page lands inside `bounds`: top-left anchored, then panned.
    fn page_bounds(&self, bounds: Rectangle) -> Rectangle {
        Rectangle::new(
            Point::new(bounds.x + self.offset_x, bounds.y + self.offset_y),
            Size::new(self.page.width as f32, self.page.height as f32),
        )
    }
}

impl Widget<AppMessage, cosmic::Theme, Renderer> for PageCanvas {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced::advanced::renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let page_bounds = self.page_bounds(bounds);

        renderer.with_layer(bounds, |renderer| {
            draw_quad(renderer, bounds, BACKGROUND_COLOR);
            renderer.draw_image(
                self.page.handle.clone(),
                FilterMethod::Linear,
                page_bounds,
                Radians(0.0),
                1.0,
                [0.0; 4],
            );
        });
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, AppMessage>,
        _viewport: &Rectangle,
    ) -> Status {
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(Button::Left)) => {
                if let Some(pos) = cursor.position_in(bounds) {
                    self.dragging = true;
                    shell.publish(AppMessage::DragStart { x: pos.x, y: pos.y });
                    return Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                // Keep following the pointer outside the canvas while the
                // button is held.
                if self.dragging {
                    shell.publish(AppMessage::DragMove {
                        x: position.x - bounds.x,
                        y: position.y - bounds.y,
                    });
                    return Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(Button::Left)) => {
                if self.dragging {
                    self.dragging = false;
                    shell.publish(AppMessage::DragEnd);
                    return Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if cursor.is_over(bounds) {
                    if let Some(direction) = wheel_direction(delta) {
                        shell.publish(AppMessage::WheelZoom(direction));
                    }
                    return Status::Captured;
                }
            }
            _ => {}
        }

        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.dragging {
            return mouse::Interaction::Grabbing;
        }
        if cursor.is_over(layout.bounds()) {
            return mouse::Interaction::Grab;
        }
        mouse::Interaction::None
    }
}

impl<'a> From<PageCanvas> for Element<'a, AppMessage> {
    fn from(widget: PageCanvas) -> Self {
        Element::new(widget)
    }
}

/// Upward scrolling zooms in. Purely horizontal scrolling is ignored.
fn wheel_direction(delta: ScrollDelta) -> Option<WheelDirection> {
    let y = match delta {
        ScrollDelta::Lines { y, .. } | ScrollDelta::Pixels { y, .. } => y,
    };

    if y > 0.0 {
        Some(WheelDirection::Up)
    } else if y < 0.0 {
        Some(WheelDirection::Down)
    } else {
        None
    }
}

fn draw_quad(renderer: &mut Renderer, bounds: Rectangle, color: Color) {
    renderer.fill_quad(
        Quad {
            bounds,
            ..Quad::default()
        },
        color,
    );
}

pub fn page_canvas<'a>(
    page: &DisplayPage,
    offset_x: f32,
    offset_y: f32,
    dragging: bool,
) -> Element<'a, AppMessage> {
    PageCanvas::new(page, offset_x, offset_y, dragging).into()
}
