use crate::models::{BlockId, BlockList};

/// Vertical extent of one rendered block, in the caller's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockRect {
    pub top: f64,
    pub bottom: f64,
}

impl BlockRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Distance from `y` to the nearer edge; zero when `y` is inside.
    pub fn distance(&self, y: f64) -> f64 {
        if y < self.top {
            self.top - y
        } else if y > self.bottom {
            y - self.bottom
        } else {
            0.0
        }
    }

    pub fn midpoint(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

/// Insertion slot (`0..=rects.len()`) nearest to `pointer_y`.
///
/// The closest rect wins (first one on ties); the pointer in its upper half
/// means "before it", lower half "after it". Above every rect is slot 0,
/// below every rect is `rects.len()`.
pub fn nearest_slot(pointer_y: f64, rects: &[BlockRect]) -> usize {
    if rects.is_empty() {
        return 0;
    }
    let top = rects.iter().map(|r| r.top).fold(f64::INFINITY, f64::min);
    let bottom = rects.iter().map(|r| r.bottom).fold(f64::NEG_INFINITY, f64::max);
    if pointer_y < top {
        return 0;
    }
    if pointer_y > bottom {
        return rects.len();
    }

    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, rect) in rects.iter().enumerate() {
        let distance = rect.distance(pointer_y);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }

    if pointer_y < rects[best].midpoint() {
        best
    } else {
        best + 1
    }
}

impl BlockList {
    /// Resolve a drop position to the index `move_block` expects.
    ///
    /// `rects` are the extents of every rendered block except the dragged
    /// one, in list order. Above them all resolves to 0, below them all to
    /// the list length.
    pub fn resolve_drop_index(&self, pointer_y: f64, rects: &[BlockRect], dragged: BlockId) -> usize {
        let slot = nearest_slot(pointer_y, rects);
        match self.index_of(dragged) {
            Some(_) if slot >= rects.len() && !rects.is_empty() => self.len(),
            // slots past the dragged block skip over its own position
            Some(from) if slot > from => slot + 1,
            Some(_) => slot,
            None => {
                log::debug!("drop: dragged block {dragged} is not in the list");
                slot.min(self.len())
            }
        }
    }
}
