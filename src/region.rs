//! Clip regions: sets of pairwise-disjoint rectangles.
//!
//! A `Region` is what the canvas clips against while a window paints. Its
//! members never overlap, so drawing a shape once per member touches every
//! covered pixel exactly once.
//!
//! The `active` flag separates "no clipping" from "clip to nothing": an
//! inactive region lets drawing reach the whole buffer, while an active but
//! empty region suppresses drawing entirely.

use crate::rect::Rect;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    rects: Vec<Rect>,
    active: bool,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    /// An active region covering exactly `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            rects: vec![rect],
            active: true,
        }
    }

    /// An active region covering the union of `rects`. Later rects take
    /// priority where they overlap earlier ones.
    pub fn from_rects<I: IntoIterator<Item = Rect>>(rects: I) -> Self {
        let mut region = Self {
            rects: Vec::new(),
            active: true,
        };
        for rect in rects {
            region.add(rect);
        }
        region
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rect> {
        self.rects.iter()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Turn clipping on without changing the member rects.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Union `rect` into the region. `rect` wins over anything it covers.
    pub fn add(&mut self, rect: Rect) {
        self.subtract(&rect);
        self.rects.push(rect);
    }

    /// Carve `rect` out of every member it overlaps.
    ///
    /// Replacement pieces produced by [`Rect::split`] never overlap `rect`, so
    /// one pass over the members is enough.
    pub fn subtract(&mut self, rect: &Rect) {
        self.active = true;
        if !self.rects.iter().any(|member| member.overlaps(rect)) {
            return;
        }
        let mut out = Vec::with_capacity(self.rects.len() + 3);
        for member in self.rects.drain(..) {
            if member.overlaps(rect) {
                out.extend(member.split(rect));
            } else {
                out.push(member);
            }
        }
        self.rects = out;
    }

    /// Shrink every member to its overlap with `rect`, dropping members that
    /// miss it.
    pub fn intersect(&mut self, rect: &Rect) {
        self.active = true;
        self.rects = self
            .rects
            .drain(..)
            .filter_map(|member| member.intersect(rect))
            .collect();
    }

    /// Remove every member and turn clipping off.
    pub fn clear(&mut self) {
        self.rects.clear();
        self.active = false;
    }

    /// Move the member rects out, leaving the region cleared.
    pub fn take_rects(&mut self) -> Vec<Rect> {
        self.active = false;
        std::mem::take(&mut self.rects)
    }

    /// Total number of covered pixels.
    pub fn area(&self) -> u64 {
        self.rects.iter().map(Rect::area).sum()
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        self.rects.iter().any(|rect| rect.contains_point(x, y))
    }

    pub fn overlaps(&self, rect: &Rect) -> bool {
        self.rects.iter().any(|member| member.overlaps(rect))
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Rect;
    type IntoIter = std::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}
