use crate::domain::host::Cursor;

/// Picks the container cursor from pointer state and remembers what was
/// last written, so the host is only touched on change.
#[derive(Clone, Copy, Debug, Default)]
pub struct CursorTracker {
    pointer: Option<(f64, f64)>,
    shown: Cursor,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    pub fn shown(&self) -> Cursor {
        self.shown
    }

    pub fn choose(dragging: bool, over_body: bool) -> Cursor {
        if dragging {
            Cursor::Grabbing
        } else if over_body {
            Cursor::Grab
        } else {
            Cursor::Default
        }
    }

    /// Returns the cursor to write, if it differs from the one shown.
    pub fn update(&mut self, dragging: bool, over_body: bool) -> Option<Cursor> {
        let next = Self::choose(dragging, over_body);
        if next == self.shown {
            return None;
        }
        self.shown = next;
        Some(next)
    }

    /// Forget everything; the next `update` re-evaluates from scratch.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_only_on_change() {
        let mut tracker = CursorTracker::new();
        assert_eq!(tracker.update(false, false), None);
        assert_eq!(tracker.update(false, true), Some(Cursor::Grab));
        assert_eq!(tracker.update(false, true), None);
        assert_eq!(tracker.update(true, true), Some(Cursor::Grabbing));
        assert_eq!(tracker.update(false, false), Some(Cursor::Default));
    }

    #[test]
    fn dragging_wins_over_hover() {
        assert_eq!(CursorTracker::choose(true, false), Cursor::Grabbing);
    }
}
