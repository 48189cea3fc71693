mod airspace;
mod bounding_box;
mod color;
mod coordinate;
mod descriptor;
mod map_point;

pub use airspace::*;
pub use bounding_box::BoundingBox;
pub(crate) use bounding_box::union_with_point;
pub use color::*;
pub use coordinate::*;
pub use descriptor::*;
pub use map_point::*;
