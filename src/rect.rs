//! Inclusive integer rectangles and the boolean operations the clipper is
//! built from.
//!
//! Every edge is inclusive: a `Rect` with `left == right` is one pixel wide.
//! Constructors reject inverted edges, so any `Rect` value in the crate
//! satisfies `left <= right && top <= bottom`.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("degenerate rectangle: top {top}, left {left}, bottom {bottom}, right {right}")]
    Degenerate {
        top: i32,
        left: i32,
        bottom: i32,
        right: i32,
    },
    #[error("rectangle size must be non-zero (got {width}x{height})")]
    EmptySize { width: u32, height: u32 },
    #[error("position ({x}, {y}) is outside the +/-{limit} coordinate range")]
    OutOfRange { x: i32, y: i32, limit: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    top: i32,
    left: i32,
    bottom: i32,
    right: i32,
}

impl Rect {
    /// Build a rectangle from inclusive edges.
    pub fn new(top: i32, left: i32, bottom: i32, right: i32) -> Result<Self, GeometryError> {
        if left > right || top > bottom {
            return Err(GeometryError::Degenerate {
                top,
                left,
                bottom,
                right,
            });
        }
        Ok(Self::from_edges(top, left, bottom, right))
    }

    /// Build a rectangle from an origin and a non-zero size.
    pub fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::EmptySize { width, height });
        }
        let right = x.saturating_add(width.min(i32::MAX as u32) as i32 - 1);
        let bottom = y.saturating_add(height.min(i32::MAX as u32) as i32 - 1);
        Ok(Self::from_edges(y, x, bottom, right))
    }

    /// Crate-internal constructor for edges already known to be ordered.
    pub(crate) const fn from_edges(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        debug_assert!(left <= right && top <= bottom);
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub const fn top(&self) -> i32 {
        self.top
    }

    pub const fn left(&self) -> i32 {
        self.left
    }

    pub const fn bottom(&self) -> i32 {
        self.bottom
    }

    pub const fn right(&self) -> i32 {
        self.right
    }

    pub const fn width(&self) -> u32 {
        (self.right - self.left) as u32 + 1
    }

    pub const fn height(&self) -> u32 {
        (self.bottom - self.top) as u32 + 1
    }

    pub const fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.left <= other.right
            && self.right >= other.left
            && self.top <= other.bottom
            && self.bottom >= other.top
    }

    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Whether `other` lies entirely inside `self`.
    pub const fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    /// Shift by `(dx, dy)`, saturating at the `i32` range.
    pub const fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            top: self.top.saturating_add(dy),
            left: self.left.saturating_add(dx),
            bottom: self.bottom.saturating_add(dy),
            right: self.right.saturating_add(dx),
        }
    }

    /// The overlapping area of two rectangles, if any.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Rect::from_edges(
            self.top.max(other.top),
            self.left.max(other.left),
            self.bottom.min(other.bottom),
            self.right.min(other.right),
        ))
    }

    /// Smallest rectangle covering both inputs.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_edges(
            self.top.min(other.top),
            self.left.min(other.left),
            self.bottom.max(other.bottom),
            self.right.max(other.right),
        )
    }

    /// Subtract `cutting` from `self`, returning the uncovered remainder as
    /// disjoint rectangles.
    ///
    /// Edges are cut in the order left, top, right, bottom. After each cut the
    /// working copy shrinks to the part not yet emitted, so the pieces never
    /// overlap one another or `cutting`. Callers only split rectangles that
    /// overlap; a disjoint `cutting` rect yields `self` unchanged.
    ///
    /// ```text
    ///  ________                ____ ___
    /// |s    ___|____          |o   |o__|
    /// |____|___|   c|   --->  |____|
    ///      |________|
    /// ```
    pub fn split(&self, cutting: &Rect) -> Vec<Rect> {
        if !self.overlaps(cutting) {
            return vec![*self];
        }

        let mut out = Vec::with_capacity(4);
        let mut subject = *self;

        if cutting.left > subject.left && cutting.left <= subject.right {
            out.push(Rect::from_edges(
                subject.top,
                subject.left,
                subject.bottom,
                cutting.left - 1,
            ));
            subject.left = cutting.left;
        }

        if cutting.top > subject.top && cutting.top <= subject.bottom {
            out.push(Rect::from_edges(
                subject.top,
                subject.left,
                cutting.top - 1,
                subject.right,
            ));
            subject.top = cutting.top;
        }

        if cutting.right >= subject.left && cutting.right < subject.right {
            out.push(Rect::from_edges(
                subject.top,
                cutting.right + 1,
                subject.bottom,
                subject.right,
            ));
            subject.right = cutting.right;
        }

        if cutting.bottom >= subject.top && cutting.bottom < subject.bottom {
            out.push(Rect::from_edges(
                cutting.bottom + 1,
                subject.left,
                subject.bottom,
                subject.right,
            ));
            subject.bottom = cutting.bottom;
        }

        out
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}]..=[{}, {}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}
