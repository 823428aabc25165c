use eframe_sketch::{
    ElementType, InputEvent, PointerState, PointerTracker, Preview, SketchContext,
};
use egui::pos2;

fn enter(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerEnter { pos: pos2(x, y) }
}

fn hover(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        pos: pos2(x, y),
        primary_down: false,
    }
}

fn drag(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        pos: pos2(x, y),
        primary_down: true,
    }
}

fn down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown { pos: pos2(x, y) }
}

fn up(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp { pos: pos2(x, y) }
}

#[test]
fn marker_gesture_end_to_end() {
    let mut sketch = SketchContext::new();
    let mut tracker = PointerTracker::new();

    // Enter at (10,10): circle preview with the default thickness appears
    tracker.handle(enter(10.0, 10.0), &mut sketch);
    assert_eq!(tracker.state(), PointerState::Hover);
    match sketch.preview.current() {
        Some(Preview::Circle { pos, thickness, .. }) => {
            assert_eq!(*pos, pos2(10.0, 10.0));
            assert_eq!(*thickness, 4.0);
        }
        other => panic!("expected circle preview, got {other:?}"),
    }

    // Press: active stroke begins, preview is suppressed while drawing
    tracker.handle(down(10.0, 10.0), &mut sketch);
    assert_eq!(tracker.state(), PointerState::Drawing);
    assert!(sketch.history.is_drawing());

    // Drag to (50,10): the stroke now runs through both points
    tracker.handle(drag(50.0, 10.0), &mut sketch);
    let ElementType::Stroke(stroke) = &sketch.history.committed()[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(stroke.points(), &[pos2(10.0, 10.0), pos2(50.0, 10.0)]);

    // Release: the stroke freezes and the preview reappears at (50,10)
    tracker.handle(up(50.0, 10.0), &mut sketch);
    assert_eq!(tracker.state(), PointerState::Hover);
    assert!(!sketch.history.is_drawing());
    assert_eq!(sketch.preview.current().map(|p| p.pos()), Some(pos2(50.0, 10.0)));

    // Frozen: further moves without the button do not extend the stroke
    tracker.handle(hover(80.0, 10.0), &mut sketch);
    let ElementType::Stroke(stroke) = &sketch.history.committed()[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(stroke.points().len(), 2);
}

#[test]
fn stamp_gesture_places_and_repositions() {
    let mut sketch = SketchContext::new();
    let mut tracker = PointerTracker::new();
    sketch.select_stamp("★");

    tracker.handle(enter(100.0, 100.0), &mut sketch);
    match sketch.preview.current() {
        Some(Preview::Glyph { pos, glyph }) => {
            assert_eq!(*pos, pos2(100.0, 100.0));
            assert_eq!(glyph, "★");
        }
        other => panic!("expected glyph preview, got {other:?}"),
    }

    tracker.handle(down(100.0, 100.0), &mut sketch);
    let ElementType::Stamp(stamp) = &sketch.history.committed()[0] else {
        panic!("expected a stamp");
    };
    assert_eq!(stamp.pos(), pos2(100.0, 100.0));
    assert_eq!(stamp.glyph(), "★");

    // Dragging while held repositions rather than extending
    tracker.handle(drag(140.0, 120.0), &mut sketch);
    let ElementType::Stamp(stamp) = &sketch.history.committed()[0] else {
        panic!("expected a stamp");
    };
    assert_eq!(stamp.pos(), pos2(140.0, 120.0));

    tracker.handle(up(140.0, 120.0), &mut sketch);
    assert!(!sketch.history.is_drawing());
    assert_eq!(sketch.history.committed().len(), 1);
}

#[test]
fn tool_switch_mid_hover_discards_stale_preview() {
    let mut sketch = SketchContext::new();
    let mut tracker = PointerTracker::new();

    tracker.handle(enter(30.0, 30.0), &mut sketch);
    assert!(matches!(sketch.preview.current(), Some(Preview::Circle { .. })));

    // Switching tool without moving the pointer discards the circle
    sketch.select_stamp("🔥");
    assert!(sketch.preview.current().is_none());

    // The next move produces a glyph preview, never a stale circle
    tracker.handle(hover(30.0, 30.0), &mut sketch);
    assert!(matches!(sketch.preview.current(), Some(Preview::Glyph { .. })));
}

#[test]
fn leave_mid_gesture_finalizes_the_entity() {
    let mut sketch = SketchContext::new();
    let mut tracker = PointerTracker::new();

    tracker.handle(enter(10.0, 10.0), &mut sketch);
    tracker.handle(down(10.0, 10.0), &mut sketch);
    tracker.handle(drag(20.0, 20.0), &mut sketch);

    tracker.handle(InputEvent::PointerLeave, &mut sketch);
    assert_eq!(tracker.state(), PointerState::Idle);
    assert!(!sketch.history.is_drawing());
    assert!(sketch.preview.current().is_none());

    // The partial stroke stays committed and frozen
    assert_eq!(sketch.history.committed().len(), 1);
    tracker.handle(enter(40.0, 40.0), &mut sketch);
    tracker.handle(hover(50.0, 50.0), &mut sketch);
    let ElementType::Stroke(stroke) = &sketch.history.committed()[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(stroke.points().len(), 2);
}

#[test]
fn second_down_while_drawing_releases_the_first_entity() {
    let mut sketch = SketchContext::new();
    let mut tracker = PointerTracker::new();

    tracker.handle(enter(10.0, 10.0), &mut sketch);
    tracker.handle(down(10.0, 10.0), &mut sketch);
    tracker.handle(down(60.0, 60.0), &mut sketch);

    assert_eq!(sketch.history.committed().len(), 2);

    // Only the second entity receives subsequent drags
    tracker.handle(drag(70.0, 70.0), &mut sketch);
    let ElementType::Stroke(first) = &sketch.history.committed()[0] else {
        panic!("expected a stroke");
    };
    let ElementType::Stroke(second) = &sketch.history.committed()[1] else {
        panic!("expected a stroke");
    };
    assert_eq!(first.points().len(), 1);
    assert_eq!(second.points(), &[pos2(60.0, 60.0), pos2(70.0, 70.0)]);
}

#[test]
fn click_without_drag_leaves_an_invisible_stroke() {
    let mut sketch = SketchContext::new();
    let mut tracker = PointerTracker::new();

    tracker.handle(enter(10.0, 10.0), &mut sketch);
    tracker.handle(down(10.0, 10.0), &mut sketch);
    tracker.handle(up(10.0, 10.0), &mut sketch);

    use eframe_sketch::Element;
    let stroke = &sketch.history.committed()[0];
    assert_eq!(stroke.rect(), egui::Rect::NOTHING);
}

#[test]
fn new_gesture_after_undo_invalidates_redo() {
    let mut sketch = SketchContext::new();
    let mut tracker = PointerTracker::new();

    tracker.handle(enter(10.0, 10.0), &mut sketch);
    for x in [10.0, 30.0] {
        tracker.handle(down(x, 10.0), &mut sketch);
        tracker.handle(drag(x + 5.0, 10.0), &mut sketch);
        tracker.handle(up(x + 5.0, 10.0), &mut sketch);
    }
    sketch.undo();
    assert!(sketch.history.can_redo());

    // Drawing again discards the undone stroke for good
    tracker.handle(down(50.0, 10.0), &mut sketch);
    tracker.handle(up(50.0, 10.0), &mut sketch);
    assert!(!sketch.history.can_redo());
    assert_eq!(sketch.history.committed().len(), 2);
}

#[test]
fn thickness_is_remembered_across_stamp_and_back() {
    let mut sketch = SketchContext::new();
    sketch.set_thickness(8);
    sketch.select_stamp("🎯");
    sketch.select_marker();
    assert_eq!(sketch.tools.thickness(), 8.0);

    // The restored thickness flows into the next preview and stroke
    let mut tracker = PointerTracker::new();
    tracker.handle(enter(10.0, 10.0), &mut sketch);
    match sketch.preview.current() {
        Some(Preview::Circle { thickness, .. }) => assert_eq!(*thickness, 8.0),
        other => panic!("expected circle preview, got {other:?}"),
    }
}
