use egui::{Context, Pos2, Rect};

mod tracker;
pub use tracker::{PointerState, PointerTracker};

/// Domain-level pointer events, already scoped to the canvas surface.
///
/// Positions are canvas coordinates; the adapter guarantees they lie inside
/// the canvas rect for every variant except `PointerLeave`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer entered the canvas
    PointerEnter { pos: Pos2 },
    /// Pointer moved over the canvas; `primary_down` reports whether the
    /// primary button is held
    PointerMove { pos: Pos2, primary_down: bool },
    /// Primary button pressed over the canvas
    PointerDown { pos: Pos2 },
    /// Primary button released
    PointerUp { pos: Pos2 },
    /// Pointer left the canvas (or the window)
    PointerLeave,
}

/// Converts raw egui input into canvas-scoped `InputEvent`s.
///
/// Tracks whether the pointer was over the canvas on the previous frame so
/// it can synthesize enter/leave transitions, which egui does not report
/// per-widget.
pub struct InputHandler {
    last_canvas_pos: Option<Pos2>,
    canvas_rect: Option<Rect>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_canvas_pos: None,
            canvas_rect: None,
        }
    }

    /// Update the canvas rectangle (set each frame by the central panel)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    /// Process raw egui input and generate canvas events for this frame
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let Some(canvas_rect) = self.canvas_rect else {
            return events;
        };

        ctx.input(|input| {
            let hover = input.pointer.hover_pos().filter(|pos| canvas_rect.contains(*pos));

            match hover {
                Some(pos) => {
                    if self.last_canvas_pos.is_none() {
                        events.push(InputEvent::PointerEnter { pos });
                    }

                    if input.pointer.primary_pressed() {
                        events.push(InputEvent::PointerDown { pos });
                    }

                    if Some(pos) != self.last_canvas_pos {
                        events.push(InputEvent::PointerMove {
                            pos,
                            primary_down: input.pointer.primary_down(),
                        });
                    }

                    if input.pointer.primary_released() {
                        events.push(InputEvent::PointerUp { pos });
                    }

                    self.last_canvas_pos = Some(pos);
                }
                None => {
                    if self.last_canvas_pos.is_some() {
                        events.push(InputEvent::PointerLeave);
                        self.last_canvas_pos = None;
                    }
                }
            }
        });

        events
    }
}
