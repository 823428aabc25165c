use crate::element::ElementType;

/// Linear undo/redo history over committed entities.
///
/// Entities are owned by exactly one of the two stacks at any time; undo and
/// redo move the tail entity between them. The committed tail may be marked
/// "active" for the duration of a drawing gesture, which is the only window
/// in which an entity is ever mutated.
#[derive(Debug)]
pub struct EditHistory {
    /// Committed entities in chronological order, newest at the tail
    committed: Vec<ElementType>,
    /// Undone entities, newest at the tail
    undone: Vec<ElementType>,
    /// Whether the committed tail is still receiving pointer-driven mutation
    active: bool,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self {
            committed: Vec::new(),
            undone: Vec::new(),
            active: false,
        }
    }

    /// Commit an entity. New work invalidates the redo history.
    pub fn commit(&mut self, element: ElementType) {
        self.committed.push(element);
        self.undone.clear();
    }

    /// Commit a brand-new entity and mark it as the active entity of the
    /// current gesture, so pointer moves can keep mutating it until release.
    pub fn begin(&mut self, element: ElementType) {
        self.commit(element);
        self.active = true;
    }

    /// Mutable access to the active entity, if a gesture is in progress
    pub fn active_mut(&mut self) -> Option<&mut ElementType> {
        if self.active {
            self.committed.last_mut()
        } else {
            None
        }
    }

    /// Freeze the active entity; it becomes ordinary history
    pub fn release(&mut self) {
        self.active = false;
    }

    /// Returns true while a gesture is mutating the committed tail
    pub fn is_drawing(&self) -> bool {
        self.active
    }

    /// Undo the most recent committed entity.
    ///
    /// Returns true if anything moved; undoing with an empty history is a
    /// no-op. An active entity is released first, since nothing may mutate
    /// an entity that has left the committed stack.
    pub fn undo(&mut self) -> bool {
        if let Some(element) = self.committed.pop() {
            self.active = false;
            self.undone.push(element);
            true
        } else {
            false
        }
    }

    /// Redo the most recently undone entity. No-op when nothing was undone.
    pub fn redo(&mut self) -> bool {
        if let Some(element) = self.undone.pop() {
            self.committed.push(element);
            true
        } else {
            false
        }
    }

    /// Drop all entities from both stacks
    pub fn clear_all(&mut self) {
        self.committed.clear();
        self.undone.clear();
        self.active = false;
    }

    /// Committed entities in chronological order (oldest first)
    pub fn committed(&self) -> &[ElementType] {
        &self.committed
    }

    /// Returns true if there are entities that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are entities that can be redone
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn undone_len(&self) -> usize {
        self.undone.len()
    }
}
