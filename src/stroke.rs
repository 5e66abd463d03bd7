use egui::{Color32, Pos2};

/// One line segment laid down by a pointer motion event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Pos2,
    pub to: Pos2,
    pub color: Color32,
    pub width: f32,
}

/// Last pointer position of the stroke in progress.
///
/// Consecutive motion events are chained into segments. The first event after
/// a reset only records the position.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StrokeCursor {
    last: Option<Pos2>,
}

impl StrokeCursor {
    pub fn last(&self) -> Option<Pos2> {
        self.last
    }

    /// Move the cursor to `pos`, returning the start of the segment to draw
    pub fn advance(&mut self, pos: Pos2) -> Option<Pos2> {
        self.last.replace(pos)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_chains_positions() {
        let mut cursor = StrokeCursor::default();
        assert_eq!(cursor.advance(Pos2::new(1.0, 1.0)), None);
        assert_eq!(cursor.advance(Pos2::new(2.0, 3.0)), Some(Pos2::new(1.0, 1.0)));
        assert_eq!(cursor.last(), Some(Pos2::new(2.0, 3.0)));

        cursor.reset();
        assert!(!cursor.is_active());
        assert_eq!(cursor.advance(Pos2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_cursor_at_origin_still_chains() {
        let mut cursor = StrokeCursor::default();
        cursor.advance(Pos2::ZERO);
        assert_eq!(cursor.advance(Pos2::new(0.0, 4.0)), Some(Pos2::ZERO));
    }
}
