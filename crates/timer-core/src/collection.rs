//! Display order of the team timers and the drag gesture that edits it.

use std::fmt;

/// Stable identity of a timer within one session. Never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u32);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct TimerOrder {
    ids: Vec<TimerId>,
    next_id: u32,
}

impl TimerOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh id. The first id handed out is 1.
    pub fn add(&mut self) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.ids.push(id);
        id
    }

    /// Returns false when the id was not present.
    pub fn remove(&mut self, id: TimerId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&x| x != id);
        self.ids.len() != before
    }

    /// Move `source` into the slot `target` occupies. Dragging forward lands
    /// after the target, dragging backward lands before it.
    pub fn reorder(&mut self, source: TimerId, target: TimerId) -> bool {
        if source == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(source), self.position(target)) else {
            return false;
        };
        let moved = self.ids.remove(from);
        self.ids.insert(to, moved);
        true
    }

    pub fn ids(&self) -> &[TimerId] {
        &self.ids
    }

    pub fn position(&self, id: TimerId) -> Option<usize> {
        self.ids.iter().position(|&x| x == id)
    }

    pub fn contains(&self, id: TimerId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// State of an in-progress drag. Every hover commits a reorder immediately,
/// so the list shuffles live while the pointer moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragSession {
    dragged: Option<TimerId>,
    over_delete_zone: bool,
}

impl DragSession {
    pub fn start(&mut self, id: TimerId) {
        self.dragged = Some(id);
        self.over_delete_zone = false;
    }

    pub fn dragged(&self) -> Option<TimerId> {
        self.dragged
    }

    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn is_over_delete_zone(&self) -> bool {
        self.over_delete_zone
    }

    pub fn over(&mut self, target: TimerId, order: &mut TimerOrder) -> bool {
        match self.dragged {
            Some(source) if source != target => order.reorder(source, target),
            _ => false,
        }
    }

    pub fn enter_delete_zone(&mut self) {
        if self.dragged.is_some() {
            self.over_delete_zone = true;
        }
    }

    pub fn leave_delete_zone(&mut self) {
        self.over_delete_zone = false;
    }

    /// Ends the drag and hands back the id that should be deleted.
    pub fn drop_on_delete_zone(&mut self) -> Option<TimerId> {
        let dragged = self.dragged;
        self.end();
        dragged
    }

    pub fn end(&mut self) {
        self.dragged = None;
        self.over_delete_zone = false;
    }
}
