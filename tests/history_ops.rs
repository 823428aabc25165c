use std::cell::Cell;
use std::rc::Rc;

use eframe_sketch::element::factory;
use eframe_sketch::{EditHistory, ElementType, SketchContext, SketchEvent};
use egui::{Color32, pos2};

fn stroke_at(x: f32) -> ElementType {
    let mut stroke = factory::create_stroke(pos2(x, 10.0), 4.0, Color32::BLACK);
    stroke.as_draggable().unwrap().drag(pos2(x + 20.0, 10.0));
    stroke
}

#[test]
fn n_commits_k_undos_leaves_n_minus_k_visible() {
    let n = 5;
    let k = 3;

    let mut history = EditHistory::new();
    let originals: Vec<ElementType> = (0..n).map(|i| stroke_at(i as f32 * 10.0)).collect();
    for element in &originals {
        history.commit(element.clone());
    }

    for _ in 0..k {
        assert!(history.undo());
    }
    assert_eq!(history.committed().len(), n - k);

    // K redos restore exactly the original N, in original order
    for _ in 0..k {
        assert!(history.redo());
    }
    assert_eq!(history.committed(), originals.as_slice());
}

#[test]
fn commit_after_undo_discards_redo_history() {
    let mut history = EditHistory::new();
    history.commit(stroke_at(0.0));
    history.commit(stroke_at(10.0));
    history.undo();

    history.commit(stroke_at(20.0));

    // redo is a no-op: the undone entity is gone for good
    assert!(!history.redo());
    assert_eq!(history.committed().len(), 2);
    assert!(!history.can_redo());
}

#[test]
fn undo_redo_on_empty_stacks_are_noops() {
    let mut history = EditHistory::new();

    for _ in 0..100 {
        assert!(!history.undo());
        assert!(!history.redo());
    }
    assert!(history.committed().is_empty());
    assert_eq!(history.undone_len(), 0);
}

#[test]
fn noop_undo_redo_emits_no_notifications() {
    let mut sketch = SketchContext::new();
    let notifications = Rc::new(Cell::new(0usize));

    let seen = Rc::clone(&notifications);
    sketch.bus.subscribe(Box::new(move |_event: &SketchEvent| {
        seen.set(seen.get() + 1);
    }));

    for _ in 0..100 {
        sketch.undo();
        sketch.redo();
    }
    assert_eq!(notifications.get(), 0);

    // A real commit does notify
    sketch.history.commit(stroke_at(0.0));
    sketch.undo();
    assert_eq!(notifications.get(), 1);
}

#[test]
fn clear_all_empties_both_stacks() {
    let mut history = EditHistory::new();
    history.commit(stroke_at(0.0));
    history.commit(stroke_at(10.0));
    history.undo();

    history.clear_all();

    assert!(history.committed().is_empty());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(!history.undo());
    assert!(!history.redo());

    // History works again after a fresh commit
    history.commit(stroke_at(20.0));
    assert!(history.undo());
    assert!(history.redo());
}

#[test]
fn active_entity_is_mutable_until_release() {
    let mut history = EditHistory::new();
    history.begin(factory::create_stroke(pos2(1.0, 1.0), 4.0, Color32::BLACK));
    assert!(history.is_drawing());

    if let Some(active) = history.active_mut() {
        active.as_draggable().unwrap().drag(pos2(2.0, 2.0));
    }
    history.release();

    assert!(!history.is_drawing());
    assert!(history.active_mut().is_none());

    let ElementType::Stroke(stroke) = &history.committed()[0] else {
        panic!("expected a stroke");
    };
    assert_eq!(stroke.points(), &[pos2(1.0, 1.0), pos2(2.0, 2.0)]);
}

#[test]
fn undo_releases_an_active_entity() {
    let mut history = EditHistory::new();
    history.begin(factory::create_stroke(pos2(1.0, 1.0), 4.0, Color32::BLACK));

    assert!(history.undo());
    assert!(!history.is_drawing());
    assert!(history.active_mut().is_none());
}
