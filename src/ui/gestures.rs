// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition from raw input.
//!
//! [`GestureTracker`] turns iced touch and mouse events into the pinch and pan
//! reports a [`ZoomableImage`](crate::ui::zoomable::ZoomableImage) consumes.
//!
//! - Pan follows the centroid of all fingers on the thumbnail. Fingers landing
//!   or lifting re-anchor the centroid so the reported translation never jumps.
//! - Pinch starts when a second finger lands and reports the ratio between the
//!   current and initial distance of the first two fingers.
//! - With a mouse, a left drag pans and a Shift + left drag pinches: dragging
//!   up by [`MOUSE_PINCH_PIXELS_PER_UNIT`] pixels adds 1.0 to the scale.
//!
//! Both recognizers run simultaneously; every report is forwarded as soon as
//! it is produced.

use crate::config::{MIN_PINCH_SPAN, MOUSE_PINCH_PIXELS_PER_UNIT};
use crate::ui::state::{DragMode, DragState};
use crate::ui::zoomable::{GestureEvent, GesturePhase, PanEvent, PinchEvent};
use iced::{keyboard, mouse, touch, Event, Point, Rectangle, Vector};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
struct PanTrack {
    anchor: Point,
    /// Translation accumulated before the last re-anchor.
    carried: Vector,
    last: Vector,
}

impl PanTrack {
    fn new(anchor: Point) -> Self {
        Self {
            anchor,
            carried: Vector::ZERO,
            last: Vector::ZERO,
        }
    }

    fn reanchor(&mut self, anchor: Point) {
        self.anchor = anchor;
        self.carried = self.last;
    }

    fn follow(&mut self, centroid: Point) -> Vector {
        self.last = self.carried + (centroid - self.anchor);
        self.last
    }
}

#[derive(Debug, Clone, Copy)]
struct PinchTrack {
    fingers: [touch::Finger; 2],
    initial_span: f32,
    last_scale: f32,
}

/// Per-thumbnail recognizer state.
#[derive(Debug, Default)]
pub struct GestureTracker {
    fingers: HashMap<touch::Finger, Point>,
    pan: Option<PanTrack>,
    pinch: Option<PinchTrack>,
    drag: DragState,
    last_drag_translation: Vector,
    last_pinch_scale: f32,
    modifiers: keyboard::Modifiers,
}

impl GestureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a touch or mouse gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.fingers.is_empty() || self.drag.is_dragging
    }

    /// Whether a two-finger or emulated pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some() || (self.drag.is_dragging && self.drag.mode == DragMode::Pinch)
    }

    /// Feeds one window event. Gestures only start inside `bounds`; once
    /// started they follow their fingers or the cursor anywhere.
    pub fn handle_event(
        &mut self,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<GestureEvent> {
        match event {
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if bounds.contains(*position) || self.fingers.contains_key(id) {
                    self.finger_pressed(*id, *position)
                } else {
                    Vec::new()
                }
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                self.finger_moved(*id, *position)
            }
            Event::Touch(touch::Event::FingerLifted { id, .. }) => {
                self.finger_released(*id, GesturePhase::Ended)
            }
            Event::Touch(touch::Event::FingerLost { id, .. }) => {
                self.finger_released(*id, GesturePhase::Cancelled)
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                match cursor.position_over(bounds) {
                    Some(position) => {
                        let mode = if self.modifiers.shift() {
                            DragMode::Pinch
                        } else {
                            DragMode::Pan
                        };
                        self.mouse_pressed(position, mode)
                    }
                    None => Vec::new(),
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => self.mouse_moved(*position),
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.mouse_released(GesturePhase::Ended)
            }
            Event::Mouse(mouse::Event::CursorLeft) => self.mouse_released(GesturePhase::Cancelled),
            Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                self.modifiers = *modifiers;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Cancels whatever is in progress.
    pub fn cancel(&mut self) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        if let Some(pinch) = self.pinch.take() {
            events.push(pinch_event(GesturePhase::Cancelled, pinch.last_scale));
        }
        if let Some(pan) = self.pan.take() {
            events.push(pan_event(GesturePhase::Cancelled, pan.last));
        }
        self.fingers.clear();
        events.extend(self.mouse_released(GesturePhase::Cancelled));
        events
    }

    fn finger_pressed(&mut self, id: touch::Finger, position: Point) -> Vec<GestureEvent> {
        // Touch takes over from an emulated mouse gesture.
        let mut events = if self.drag.is_dragging {
            self.mouse_released(GesturePhase::Cancelled)
        } else {
            Vec::new()
        };

        self.fingers.insert(id, position);
        let centroid = self.centroid();

        match self.pan.as_mut() {
            Some(pan) => pan.reanchor(centroid),
            None => {
                self.pan = Some(PanTrack::new(centroid));
                events.push(pan_event(GesturePhase::Began, Vector::ZERO));
            }
        }

        if self.pinch.is_none() {
            if let Some(([first, second], span)) = self.leading_pair() {
                if span >= MIN_PINCH_SPAN {
                    self.pinch = Some(PinchTrack {
                        fingers: [first, second],
                        initial_span: span,
                        last_scale: 1.0,
                    });
                    events.push(pinch_event(GesturePhase::Began, 1.0));
                }
            }
        }

        events
    }

    fn finger_moved(&mut self, id: touch::Finger, position: Point) -> Vec<GestureEvent> {
        let Some(slot) = self.fingers.get_mut(&id) else {
            return Vec::new();
        };
        *slot = position;

        let mut events = Vec::new();

        if let Some(mut pinch) = self.pinch {
            if pinch.fingers.contains(&id) {
                if let Some(span) = self.span(pinch.fingers) {
                    pinch.last_scale = span / pinch.initial_span;
                    self.pinch = Some(pinch);
                    events.push(pinch_event(GesturePhase::Changed, pinch.last_scale));
                }
            }
        }

        let centroid = self.centroid();
        if let Some(pan) = self.pan.as_mut() {
            let translation = pan.follow(centroid);
            events.push(pan_event(GesturePhase::Changed, translation));
        }

        events
    }

    fn finger_released(&mut self, id: touch::Finger, phase: GesturePhase) -> Vec<GestureEvent> {
        if self.fingers.remove(&id).is_none() {
            return Vec::new();
        }

        let mut events = Vec::new();

        if let Some(pinch) = self.pinch.filter(|p| p.fingers.contains(&id)) {
            self.pinch = None;
            events.push(pinch_event(phase, pinch.last_scale));
        }

        if self.fingers.is_empty() {
            if let Some(pan) = self.pan.take() {
                events.push(pan_event(phase, pan.last));
            }
        } else {
            let centroid = self.centroid();
            if let Some(pan) = self.pan.as_mut() {
                pan.reanchor(centroid);
            }
        }

        events
    }

    fn mouse_pressed(&mut self, position: Point, mode: DragMode) -> Vec<GestureEvent> {
        if !self.fingers.is_empty() || self.drag.is_dragging {
            return Vec::new();
        }

        self.drag.start(position, mode);
        match mode {
            DragMode::Pan => {
                self.last_drag_translation = Vector::ZERO;
                vec![pan_event(GesturePhase::Began, Vector::ZERO)]
            }
            DragMode::Pinch => {
                self.last_pinch_scale = 1.0;
                vec![pinch_event(GesturePhase::Began, 1.0)]
            }
        }
    }

    fn mouse_moved(&mut self, position: Point) -> Vec<GestureEvent> {
        let Some(delta) = self.drag.delta(position) else {
            return Vec::new();
        };

        match self.drag.mode {
            DragMode::Pan => {
                self.last_drag_translation = delta;
                vec![pan_event(GesturePhase::Changed, delta)]
            }
            DragMode::Pinch => {
                self.last_pinch_scale = emulated_pinch_scale(delta);
                vec![pinch_event(GesturePhase::Changed, self.last_pinch_scale)]
            }
        }
    }

    fn mouse_released(&mut self, phase: GesturePhase) -> Vec<GestureEvent> {
        if !self.drag.is_dragging {
            return Vec::new();
        }

        let mode = self.drag.mode;
        self.drag.stop();
        match mode {
            // Release carries no position; end where the last move left off.
            DragMode::Pan => vec![pan_event(phase, self.last_drag_translation)],
            DragMode::Pinch => vec![pinch_event(phase, self.last_pinch_scale)],
        }
    }

    fn centroid(&self) -> Point {
        let count = self.fingers.len().max(1) as f32;
        let (x, y) = self
            .fingers
            .values()
            .fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
        Point::new(x / count, y / count)
    }

    /// The two fingers that landed first, by id, and their distance.
    fn leading_pair(&self) -> Option<([touch::Finger; 2], f32)> {
        let mut ids: Vec<_> = self.fingers.keys().copied().collect();
        ids.sort_by_key(|finger| finger.0);
        let pair = [*ids.first()?, *ids.get(1)?];
        Some((pair, self.span(pair)?))
    }

    fn span(&self, [first, second]: [touch::Finger; 2]) -> Option<f32> {
        let first = self.fingers.get(&first)?;
        let second = self.fingers.get(&second)?;
        Some(first.distance(*second))
    }
}

/// Dragging up zooms in.
fn emulated_pinch_scale(delta: Vector) -> f32 {
    1.0 - delta.y / MOUSE_PINCH_PIXELS_PER_UNIT
}

fn pinch_event(phase: GesturePhase, scale: f32) -> GestureEvent {
    GestureEvent::Pinch(PinchEvent { phase, scale })
}

fn pan_event(phase: GesturePhase, translation: Vector) -> GestureEvent {
    GestureEvent::Pan(PanEvent { phase, translation })
}
