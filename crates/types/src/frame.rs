//! Frame: a rectangular grid of colored glyphs, one per render call.

use crate::{ColorPair, Point};

/// 2D row-major grid of [`Point`]s.
///
/// Storage is flat, so every row has exactly `width` points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    points: Vec<Point>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self::filled(width, height, Point::default())
    }

    pub fn filled(width: u16, height: u16, point: Point) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            points: vec![point; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Point]> {
        // `max(1)` keeps `chunks` happy for zero-width frames (which have no points anyway).
        self.points.chunks(self.width.max(1) as usize)
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Point> {
        self.idx(x, y).map(|i| self.points[i])
    }

    /// Out-of-range writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, point: Point) {
        if let Some(i) = self.idx(x, y) {
            self.points[i] = point;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, glyph: char, pair: ColorPair) {
        self.set(x, y, Point::new(glyph, pair));
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, pair: ColorPair) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, pair);
            cx += 1;
        }
    }

    /// Write `s` horizontally centered on row `y`.
    pub fn put_centered_str(&mut self, y: u16, s: &str, pair: ColorPair) {
        let len = s.chars().count() as u16;
        let x = self.width.saturating_sub(len) / 2;
        self.put_str(x, y, s, pair);
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, point: Point) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x.saturating_add(dx), y.saturating_add(dy), point);
            }
        }
    }

    /// Draw a one-cell border around the whole frame.
    pub fn draw_border(&mut self, horizontal: Point, vertical: Point, corner: Point) {
        if self.width < 2 || self.height < 2 {
            return;
        }
        let right = self.width - 1;
        let bottom = self.height - 1;
        for x in 1..right {
            self.set(x, 0, horizontal);
            self.set(x, bottom, horizontal);
        }
        for y in 1..bottom {
            self.set(0, y, vertical);
            self.set(right, y, vertical);
        }
        self.set(0, 0, corner);
        self.set(right, 0, corner);
        self.set(0, bottom, corner);
        self.set(right, bottom, corner);
    }
}
