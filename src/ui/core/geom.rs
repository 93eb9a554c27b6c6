//! Cell-space geometry. Coordinates are terminal cells, origin at the top left.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Center of this cell in half-cell units.
    pub fn center2(self) -> (i32, i32) {
        (2 * i32::from(self.x) + 1, 2 * i32::from(self.y) + 1)
    }

    /// Cells travelled to reach `other` moving only along rows and columns.
    pub fn manhattan(self, other: Pos) -> u32 {
        u32::from(self.x.abs_diff(other.x)) + u32::from(self.y.abs_diff(other.y))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// First column past the rect.
    pub fn right(self) -> u16 {
        self.x.saturating_add(self.w)
    }

    /// First row past the rect.
    pub fn bottom(self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(self, p: Pos) -> bool {
        (self.x..self.right()).contains(&p.x) && (self.y..self.bottom()).contains(&p.y)
    }

    /// The overlap of both rects; zero-sized when they are disjoint.
    pub fn intersect(self, other: Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let w = self.right().min(other.right()).saturating_sub(x);
        let h = self.bottom().min(other.bottom()).saturating_sub(y);
        Rect::new(x, y, w, h)
    }

    /// Moves the rect by a signed offset. Coordinates saturate at both ends of `u16`.
    pub fn translate(self, dx: i32, dy: i32) -> Rect {
        let shift = |v: u16, d: i32| {
            u16::try_from((i32::from(v) + d).max(0)).unwrap_or(u16::MAX)
        };
        Rect::new(shift(self.x, dx), shift(self.y, dy), self.w, self.h)
    }

    /// Center in half-cell units (`2x + w`, `2y + h`), exact for odd sizes.
    pub fn center2(self) -> (i32, i32) {
        (
            2 * i32::from(self.x) + i32::from(self.w),
            2 * i32::from(self.y) + i32::from(self.h),
        )
    }

    /// The rect minus a one-cell frame.
    pub fn inner(self) -> Rect {
        Rect::new(
            self.x.saturating_add(1),
            self.y.saturating_add(1),
            self.w.saturating_sub(2),
            self.h.saturating_sub(2),
        )
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;
