//! Nearest-center collision detection for drag sessions.
//!
//! The dragged rect (source rect shifted by the pointer delta) is compared against every
//! candidate drop target. Ordering key, lowest wins:
//! 1. squared distance between the dragged rect's center and the candidate's center;
//! 2. squared distance between the pointer and the candidate's center;
//! 3. candidate order (first registered wins).
//!
//! Distances are computed in half-cell units so odd-sized rects compare exactly.

use super::geom::{Pos, Rect};
use super::tree::Node;

pub fn closest_center<'a, I>(dragged: Rect, pointer: Pos, candidates: I) -> Option<&'a Node>
where
    I: IntoIterator<Item = &'a Node>,
{
    let dragged_center = dragged.center2();
    let pointer_center = pointer.center2();

    candidates
        .into_iter()
        .enumerate()
        .min_by_key(|(order, node)| {
            let center = node.rect.center2();
            (
                dist_sq(dragged_center, center),
                dist_sq(pointer_center, center),
                *order,
            )
        })
        .map(|(_, node)| node)
}

fn dist_sq(a: (i32, i32), b: (i32, i32)) -> i64 {
    let dx = i64::from(a.0 - b.0);
    let dy = i64::from(a.1 - b.1);
    dx * dx + dy * dy
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/collision.rs"]
mod tests;
