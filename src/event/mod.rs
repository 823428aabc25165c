mod bus;

pub use bus::EventBus;

/// Change notifications fired after any mutation of committed content, the
/// preview ghost, or the tool configuration.
///
/// Carries no payload: subscribers only need to know that a redraw is
/// worthwhile. The render loop repaints continuously regardless, so these
/// exist for immediate responsiveness, not correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchEvent {
    /// The committed entity stacks changed (commit, drag, undo, redo, clear)
    DrawingChanged,
    /// The preview ghost appeared, moved, or disappeared
    PreviewChanged,
    /// The tool or its configuration changed
    ToolChanged,
}

/// Trait for handling sketch events
pub trait EventHandler {
    fn handle_event(&mut self, event: &SketchEvent);
}

impl<F: FnMut(&SketchEvent)> EventHandler for F {
    fn handle_event(&mut self, event: &SketchEvent) {
        self(event)
    }
}
