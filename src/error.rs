//! Error types for the multiplication pipeline.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot access {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed matrix header in {0}: expected two positive integers `rows cols`")]
    MalformedHeader(PathBuf),

    #[error("invalid matrix value {value:?} in {path}")]
    InvalidValue { path: PathBuf, value: String },

    #[error("matrix dimensions incompatible for multiplication: A is {0}x{1}, B is {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),
}
