//! Row-partitioned parallel multiplication.
//!
//! The N rows of the result are divided into `workers` contiguous
//! partitions via [`common::uneven_divide`], one thread per partition.
//! Every thread reads the shared operands and writes only the slice of the
//! result covering its own rows, so the workers need no locks or atomics;
//! the pool's scope is the single join point.

use std::mem;

use scoped_pool::Pool;

use crate::{
    common::{self, Float},
    matrix::Matrix,
};

/// Computes `C = A * B` with `workers` threads.
///
/// Produces exactly the same bits as [`crate::single::multiply`] for the
/// same operands. Expects `1 <= workers <= a.nrows()`; the caller clamps
/// oversized worker counts beforehand.
pub fn multiply(a: &Matrix, b: &Matrix, workers: usize) -> Matrix {
    let (n, m) = a.shape();
    let (m_check, p) = b.shape();
    assert_eq!(m, m_check);
    assert!(workers >= 1 && workers <= n);

    let mut c = Matrix::zeros(n, p);

    // one thread per partition
    let pool = Pool::new(workers);

    pool.scoped(|s| {
        let mut rest = c.as_mut_slice();
        for i in 0..workers {
            let (start_row, nrows) = common::uneven_divide(i, n, workers);

            // Row-major storage, so a partition's rows are one contiguous
            // slice; each worker gets exclusive access to its own slice.
            let (rows, tail) = mem::take(&mut rest).split_at_mut(nrows * p);
            rest = tail;

            s.execute(move || worker_task(a, b, rows, start_row));
        }
    });

    pool.shutdown();

    c
}

fn worker_task(a: &Matrix, b: &Matrix, rows: &mut [Float], start_row: usize) {
    let m = a.ncols();
    let p = b.ncols();

    for (r, out_row) in rows.chunks_exact_mut(p).enumerate() {
        let i = start_row + r;
        for (j, cell) in out_row.iter_mut().enumerate() {
            let mut sum = 0.0;
            for k in 0..m {
                sum += a[(i, k)] * b[(k, j)];
            }
            *cell = sum;
        }
    }
}
