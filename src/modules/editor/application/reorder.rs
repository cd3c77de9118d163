//! Manual list reordering via press-drag-release gestures.
//!
//! The controller only tracks gesture state (which item is being dragged,
//! which item it hovers over); the actual splice is applied to whichever
//! working list the section is rearranging. The behavior is identical for
//! every reorderable list in the admin: experience items, certificates,
//! projects, tech items, testimonials and memberships differ only in the
//! list being spliced.

/// Gesture state: `idle -> dragging(source) -> hovering(source, target)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReorderController {
    source: Option<String>,
    hover: Option<String>,
}

/// A completed drop: move `source` to the position `target` occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderMove {
    pub source: String,
    pub target: String,
}

impl ReorderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Current hover target, kept purely for a visual drop indicator.
    pub fn hover_target(&self) -> Option<&str> {
        self.hover.as_deref()
    }

    pub fn drag_start(&mut self, id: &str) {
        self.source = Some(id.to_string());
        self.hover = None;
    }

    /// Record a hover candidate; hovering over the dragged item itself is
    /// not a target.
    pub fn drag_over(&mut self, id: &str) {
        if self.source.as_deref() == Some(id) {
            return;
        }
        if self.source.is_some() {
            self.hover = Some(id.to_string());
        }
    }

    pub fn drag_leave(&mut self) {
        self.hover = None;
    }

    /// Finish the gesture over `target`. Yields the move to apply, or
    /// `None` for a no-op drop (nothing dragged, or dropped on itself).
    /// Transient state is cleared either way.
    pub fn drop_on(&mut self, target: &str) -> Option<ReorderMove> {
        let source = self.source.take();
        self.hover = None;

        match source {
            Some(source) if source != target => Some(ReorderMove {
                source,
                target: target.to_string(),
            }),
            _ => None,
        }
    }

    /// Gesture aborted (released outside any target, escape, ...).
    pub fn drag_end(&mut self) {
        self.source = None;
        self.hover = None;
    }
}

/// Apply a drop to a list: remove the source element and reinsert it at
/// the index the target occupied at drop time, shifting later elements by
/// one. Returns false (list untouched) when either id is missing.
pub fn apply_move<T>(items: &mut Vec<T>, mv: &ReorderMove, id_of: impl Fn(&T) -> &str) -> bool {
    let source_index = items.iter().position(|i| id_of(i) == mv.source);
    let target_index = items.iter().position(|i| id_of(i) == mv.target);

    let (Some(source_index), Some(target_index)) = (source_index, target_index) else {
        return false;
    };
    if source_index == target_index {
        return false;
    }

    let moved = items.remove(source_index);
    let insert_at = target_index.min(items.len());
    items.insert(insert_at, moved);
    true
}
