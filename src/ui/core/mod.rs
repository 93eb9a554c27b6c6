//! Backend-independent UI primitives: geometry, ids, the hit-test tree, the pointer runtime
//! with drag/drop, and paint commands.

pub mod collision;
pub mod geom;
pub mod id;
pub mod input;
pub mod painter;
pub mod runtime;
pub mod style;
pub mod tree;
