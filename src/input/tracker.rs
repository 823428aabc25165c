use egui::Pos2;

use crate::context::SketchContext;
use crate::element::factory;
use crate::event::SketchEvent;
use crate::input::InputEvent;
use crate::tool::Tool;

/// The pointer gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerState {
    /// Pointer is up and off the canvas
    Idle,
    /// Pointer is over the canvas with the button up
    Hover,
    /// Primary button is down; the active entity is being extended or
    /// repositioned
    Drawing,
}

/// Translates canvas pointer events into edit-history and preview calls.
///
/// One instance per canvas; all transitions happen synchronously inside the
/// UI callback that delivered the event.
pub struct PointerTracker {
    state: PointerState,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            state: PointerState::Idle,
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Feed one pointer event through the state machine
    pub fn handle(&mut self, event: InputEvent, ctx: &mut SketchContext) {
        match event {
            InputEvent::PointerEnter { pos } => {
                ctx.preview.on_pointer_enter(pos, &ctx.tools);
                ctx.bus.emit(SketchEvent::PreviewChanged);
                self.state = PointerState::Hover;
            }
            InputEvent::PointerDown { pos } => {
                // Single-button semantics: a down while already drawing
                // implicitly releases the previous active entity.
                if self.state == PointerState::Drawing {
                    ctx.history.release();
                }
                self.begin_entity(pos, ctx);
                self.state = PointerState::Drawing;
            }
            InputEvent::PointerMove { pos, primary_down } => match self.state {
                PointerState::Drawing if primary_down => {
                    // Capability query: entity variants that can't be
                    // dragged are skipped, not failed.
                    if let Some(active) = ctx.history.active_mut() {
                        if let Some(draggable) = active.as_draggable() {
                            draggable.drag(pos);
                        }
                        ctx.bus.emit(SketchEvent::DrawingChanged);
                    }
                }
                _ => {
                    ctx.preview.on_pointer_move(pos, &ctx.tools);
                    ctx.bus.emit(SketchEvent::PreviewChanged);
                    if self.state == PointerState::Idle {
                        self.state = PointerState::Hover;
                    }
                }
            },
            InputEvent::PointerUp { pos } => {
                if self.state == PointerState::Drawing {
                    ctx.history.release();
                    ctx.bus.emit(SketchEvent::DrawingChanged);
                    // The ghost reappears where the gesture ended
                    ctx.preview.on_pointer_move(pos, &ctx.tools);
                    ctx.bus.emit(SketchEvent::PreviewChanged);
                }
                self.state = PointerState::Hover;
            }
            InputEvent::PointerLeave => {
                // Leaving mid-gesture finalizes the active entity: the
                // points drawn so far stay committed and frozen.
                if self.state == PointerState::Drawing {
                    ctx.history.release();
                    ctx.bus.emit(SketchEvent::DrawingChanged);
                }
                ctx.preview.on_pointer_leave();
                ctx.bus.emit(SketchEvent::PreviewChanged);
                self.state = PointerState::Idle;
            }
        }
    }

    fn begin_entity(&self, pos: Pos2, ctx: &mut SketchContext) {
        let entity = match ctx.tools.tool() {
            Tool::Marker => factory::create_stroke(pos, ctx.tools.thickness(), ctx.tools.color()),
            Tool::Stamp(glyph) => factory::create_stamp(pos, glyph.clone()),
        };
        ctx.history.begin(entity);
        ctx.bus.emit(SketchEvent::DrawingChanged);
    }
}
