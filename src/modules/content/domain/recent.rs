//! Position-derived "recent vs archive" classification for certifications
//! and projects.
//!
//! The rule is never stored: it is recomputed from current list order, so
//! reordering an item across the boundary reclassifies it immediately.

/// How many leading list entries count as "recent".
pub const RECENT_COUNT: usize = 2;

pub fn is_recent(index: usize) -> bool {
    index < RECENT_COUNT
}

/// Split an ordered list into its recent head and archive tail.
pub fn split_recent<T>(items: &[T]) -> (&[T], &[T]) {
    let cut = RECENT_COUNT.min(items.len());
    items.split_at(cut)
}
