#![doc = include_str!("../README.md")]

pub use crate::boundary::{Boundary, BoundaryBuilder};
pub use crate::error::{Error, Result};
pub use crate::projection::{DEFAULT_MAX_ITERATIONS, PointProjector};
pub use crate::reader::AirspaceReader;
pub use crate::types::*;
pub use crate::writer::{AirspaceWriter, Layout};

mod boundary;
pub mod codec;
mod error;
mod projection;
mod reader;
mod types;
mod writer;
