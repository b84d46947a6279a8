pub mod common;
pub mod config;
pub mod error;
pub mod matrix;
pub mod multi;
pub mod single;

pub use error::Error;
pub use matrix::Matrix;

use std::time;

pub fn measure_time<T>(f: impl FnOnce() -> T) -> (T, time::Duration) {
    let start = time::Instant::now();
    let res = f();
    let duration = start.elapsed();
    (res, duration)
}
