use std::io;

/// Errors raised while loading, building or saving airspaces
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid airspace data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid airspace document (expected an object or an array, found {found})")]
    InvalidDocument { found: &'static str },

    #[error("Invalid projection distance: {0} NM")]
    InvalidDistance(f64),

    #[error("Point projection did not converge after {iterations} iterations")]
    NotConverged { iterations: u32 },

    #[error("Failed to build boundary of airspace {id}: {source}")]
    Airspace {
        id: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Failed to expand path descriptor #{index}: {source}")]
    Descriptor {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
