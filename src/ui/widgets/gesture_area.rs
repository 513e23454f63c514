// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that recognizes pinch and pan gestures over its content.
//!
//! Each recognized report is published together with the content's layout
//! bounds, which are in the coordinate space of the enclosing scrollable.
//! The widget keeps its [`GestureTracker`] in the widget tree so fingers are
//! followed across frames.

use crate::ui::gestures::GestureTracker;
use crate::ui::zoomable::GestureEvent;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size, Vector};

type OnGesture<'a, Message> = Box<dyn Fn(Rectangle, GestureEvent) -> Message + 'a>;

pub struct GestureArea<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_gesture: OnGesture<'a, Message>,
    scroll_offset: Vector,
    capture: bool,
}

impl<'a, Message, Theme, Renderer> GestureArea<'a, Message, Theme, Renderer> {
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_gesture: impl Fn(Rectangle, GestureEvent) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            on_gesture: Box::new(on_gesture),
            scroll_offset: Vector::ZERO,
            capture: false,
        }
    }

    /// Scroll offset of the enclosing scrollable. Touch positions arrive in
    /// window coordinates and are hit-tested against the bounds minus this.
    #[must_use]
    pub fn scroll_offset(mut self, offset: Vector) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// Captures the events a gesture consumes so the enclosing scrollable
    /// does not act on them.
    #[must_use]
    pub fn capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for GestureArea<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<GestureTracker>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(GestureTracker::new())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
        if shell.is_event_captured() {
            return;
        }

        let bounds = layout.bounds();
        let window_bounds = bounds - self.scroll_offset;
        let window_cursor = to_window(cursor, self.scroll_offset);

        let tracker = tree.state.downcast_mut::<GestureTracker>();
        let gestures = tracker.handle_event(event, window_bounds, window_cursor);
        if gestures.is_empty() {
            return;
        }

        let capture = self.capture || tracker.is_pinching();
        for gesture in gestures {
            shell.publish((self.on_gesture)(bounds, gesture));
        }
        if capture {
            shell.capture_event();
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if tree.state.downcast_ref::<GestureTracker>().is_active() {
            return mouse::Interaction::Grabbing;
        }
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }
}

impl<'a, Message, Theme, Renderer> From<GestureArea<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(area: GestureArea<'a, Message, Theme, Renderer>) -> Self {
        Self::new(area)
    }
}

/// Helper function to wrap content in a gesture area.
pub fn gesture_area<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_gesture: impl Fn(Rectangle, GestureEvent) -> Message + 'a,
) -> GestureArea<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    GestureArea::new(content, on_gesture)
}

/// Scrollables hand their content a cursor shifted into content space.
fn to_window(cursor: mouse::Cursor, scroll_offset: Vector) -> mouse::Cursor {
    match cursor.position() {
        Some(position) => mouse::Cursor::Available(position - scroll_offset),
        None => mouse::Cursor::Unavailable,
    }
}
