mod entity;
mod field;
mod graph;

pub use entity::*;
pub use field::*;
pub use graph::*;
