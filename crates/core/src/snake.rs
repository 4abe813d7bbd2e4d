//! Snake body - segment-compressed movement, growth and collision
//!
//! The body is stored as a short list of straight segments instead of one
//! entry per occupied cell, so moving and growing touch only the two ends.
//!
//! ```text
//!   tail                       head
//!   start ──▶ end=start ──▶ ... end
//! ```
//!
//! Each [`Segment`] runs from its trailing endpoint (`start`) to its leading
//! endpoint (`end`). Consecutive segments share a junction cell: a segment's
//! `end` is the next segment's `start`.
//!
//! Game-over policy (walls, self-collision) is decided by the owning game,
//! not here.

use std::collections::VecDeque;

use crate::types::{Direction, Position};

/// A straight, axis-aligned run of body cells, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Trailing endpoint (towards the tail)
    pub start: Position,
    /// Leading endpoint (towards the head)
    pub end: Position,
}

impl Segment {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Travel direction `start → end`; `None` for a degenerate segment.
    pub fn direction(&self) -> Option<Direction> {
        if self.end.y > self.start.y {
            Some(Direction::Up)
        } else if self.end.y < self.start.y {
            Some(Direction::Down)
        } else if self.end.x > self.start.x {
            Some(Direction::Right)
        } else if self.end.x < self.start.x {
            Some(Direction::Left)
        } else {
            None
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// True iff `p` lies on the segment (inclusive range, either orientation).
    pub fn contains(&self, p: Position) -> bool {
        if self.start.y == self.end.y {
            let (lo, hi) = min_max(self.start.x, self.end.x);
            p.y == self.start.y && lo <= p.x && p.x <= hi
        } else {
            let (lo, hi) = min_max(self.start.y, self.end.y);
            p.x == self.start.x && lo <= p.y && p.y <= hi
        }
    }
}

#[inline]
fn min_max(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The snake: a commanded direction, a length counter and a segment body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Last commanded direction
    direction: Direction,
    /// Number of cells the body occupies
    length: usize,
    /// Tail at the front, head at the back
    body: VecDeque<Segment>,
}

impl Snake {
    /// Spawn a snake whose head is at `head`, trailing `length - 1` cells
    /// behind it (opposite to `direction`).
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        assert!(length > 0, "a snake needs at least one cell");

        let mut snake = Self {
            direction,
            length: 1,
            body: VecDeque::from([Segment::new(head, head)]),
        };
        for _ in 1..length {
            snake.grow_tail();
        }
        snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Segments from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter()
    }

    pub fn segment_count(&self) -> usize {
        self.body.len()
    }

    /// The head cell: the head segment's leading endpoint.
    pub fn head(&self) -> Position {
        self.head_segment().end
    }

    fn head_segment(&self) -> &Segment {
        // The body is never empty: `new` seeds one segment and `advance` keeps the last one.
        &self.body[self.body.len() - 1]
    }

    /// Direction of a segment, falling back to the commanded direction when
    /// the segment is degenerate.
    fn heading(&self, segment: &Segment) -> Direction {
        segment.direction().unwrap_or(self.direction)
    }

    /// Move one cell in the commanded direction.
    pub fn advance(&mut self) {
        let direction = self.direction;
        let last = self.body.len() - 1;
        let head = self.body[last];

        if self.heading(&head) == direction {
            self.body[last].end = head.end.step(direction);
        } else {
            self.body
                .push_back(Segment::new(head.end, head.end.step(direction)));
        }

        let tail = self.body[0];
        let tail_heading = self.heading(&tail);
        self.body[0].start = tail.start.step(tail_heading);
        if self.body[0].is_degenerate() && self.body.len() > 1 {
            self.body.pop_front();
        }
    }

    /// Lengthen the body by one cell at the tail.
    pub fn grow_tail(&mut self) {
        self.length += 1;
        let tail = self.body[0];
        let backwards = self.heading(&tail).opposite();
        self.body[0].start = tail.start.step(backwards);
    }

    /// Where the head will be after the next [`advance`](Self::advance).
    pub fn position_after_advancing(&self) -> Position {
        self.head().step(self.direction)
    }

    /// True iff `p` is on the body, not counting the head segment's leading cell.
    ///
    /// Testing the head position against this is the self-collision check;
    /// the excluded cell is the head itself.
    pub fn body_intersects(&self, p: Position) -> bool {
        let last = self.body.len() - 1;
        if self.body.iter().take(last).any(|s| s.contains(p)) {
            return true;
        }

        let head = self.body[last];
        if head.is_degenerate() {
            return false;
        }
        let behind = self.heading(&head).opposite();
        Segment::new(head.start, head.end.step(behind)).contains(p)
    }

    /// True iff `p` is any body cell, head included.
    pub fn occupies(&self, p: Position) -> bool {
        self.body.iter().any(|s| s.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn segment_direction_from_endpoints() {
        assert_eq!(Segment::new(p(0, 0), p(0, 3)).direction(), Some(Direction::Up));
        assert_eq!(Segment::new(p(0, 3), p(0, 0)).direction(), Some(Direction::Down));
        assert_eq!(Segment::new(p(0, 0), p(2, 0)).direction(), Some(Direction::Right));
        assert_eq!(Segment::new(p(2, 0), p(0, 0)).direction(), Some(Direction::Left));
        assert_eq!(Segment::new(p(1, 1), p(1, 1)).direction(), None);
    }

    #[test]
    fn segment_contains_is_inclusive_in_both_orientations() {
        let s = Segment::new(p(5, 2), p(2, 2));
        assert!(s.contains(p(2, 2)));
        assert!(s.contains(p(5, 2)));
        assert!(s.contains(p(3, 2)));
        assert!(!s.contains(p(6, 2)));
        assert!(!s.contains(p(3, 3)));

        let v = Segment::new(p(1, 1), p(1, 4));
        assert!(v.contains(p(1, 1)));
        assert!(v.contains(p(1, 4)));
        assert!(!v.contains(p(1, 5)));
        assert!(!v.contains(p(0, 2)));
    }

    #[test]
    fn new_snake_trails_behind_head() {
        let snake = Snake::new(p(25, 15), Direction::Up, 3);
        assert_eq!(snake.length(), 3);
        assert_eq!(snake.head(), p(25, 15));
        assert_eq!(snake.segment_count(), 1);
        let seg = *snake.segments().next().unwrap();
        assert_eq!(seg, Segment::new(p(25, 13), p(25, 15)));
    }

    #[test]
    fn straight_advance_merges_into_head_segment() {
        let mut snake = Snake::new(p(25, 15), Direction::Up, 3);
        snake.advance();
        assert_eq!(snake.head(), p(25, 16));
        assert_eq!(snake.segment_count(), 1);
        assert_eq!(snake.length(), 3);
    }

    #[test]
    fn turning_appends_unit_segment_and_tail_collapses() {
        let mut snake = Snake::new(p(0, 2), Direction::Up, 3);
        snake.set_direction(Direction::Right);
        snake.advance();
        assert_eq!(snake.head(), p(1, 2));
        let segs: Vec<_> = snake.segments().copied().collect();
        assert_eq!(
            segs,
            vec![Segment::new(p(0, 1), p(0, 2)), Segment::new(p(0, 2), p(1, 2))]
        );

        snake.advance();
        snake.advance();
        // The vertical tail segment has been consumed entirely.
        let segs: Vec<_> = snake.segments().copied().collect();
        assert_eq!(segs, vec![Segment::new(p(1, 2), p(3, 2))]);
    }

    #[test]
    fn grow_tail_extends_backwards() {
        let mut snake = Snake::new(p(5, 5), Direction::Right, 2);
        snake.grow_tail();
        assert_eq!(snake.length(), 3);
        assert!(snake.occupies(p(3, 5)));
    }

    #[test]
    fn one_cell_snake_keeps_its_segment() {
        let mut snake = Snake::new(p(0, 0), Direction::Right, 1);
        snake.advance();
        assert_eq!(snake.head(), p(1, 0));
        assert_eq!(snake.segment_count(), 1);
        assert!(!snake.body_intersects(snake.head()));
    }

    #[test]
    fn prediction_does_not_mutate() {
        let snake = Snake::new(p(3, 3), Direction::Left, 3);
        let before = snake.clone();
        assert_eq!(snake.position_after_advancing(), p(2, 3));
        assert_eq!(snake, before);
    }

    // The head segment's leading cell is deliberately left out of the
    // intersection test; this pins that behavior down.
    #[test]
    fn body_intersects_excludes_only_the_head_cell() {
        let snake = Snake::new(p(4, 4), Direction::Up, 4);
        assert!(!snake.body_intersects(p(4, 4)));
        assert!(snake.occupies(p(4, 4)));
        assert!(snake.body_intersects(p(4, 3)));
        assert!(snake.body_intersects(p(4, 1)));
        assert!(!snake.body_intersects(p(4, 0)));
        assert!(!snake.body_intersects(p(4, 5)));
    }

    #[test]
    #[should_panic]
    fn zero_length_is_rejected() {
        let _ = Snake::new(p(0, 0), Direction::Up, 0);
    }
}
